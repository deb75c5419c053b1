//! Benchmarks for cursor traversal and text extraction.
//!
//! Run with: cargo bench
//!
//! These benchmarks walk synthetic layouts of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdfcursor::{
    Block, BoundingBox, Document, IterateLimit, Line, Page, Region, SearchOptions, TextIter,
    TextOptions, Word,
};

/// Creates a layout with two columns of paragraphs on every page.
fn create_test_document(page_count: u32) -> Document {
    let pages = (1..=page_count)
        .map(|number| {
            let mut page = Page::letter(number);
            for column in 0..2 {
                let x = 72.0 + column as f64 * 240.0;
                let blocks = (0..4)
                    .map(|b| {
                        let lines = (0..8)
                            .map(|l| {
                                let y = 72.0 + (b * 8 + l) as f64 * 14.0;
                                let words = ["Benchmark", "text", "for", "cursor", "traversal."]
                                    .iter()
                                    .enumerate()
                                    .map(|(i, w)| {
                                        let x = x + i as f64 * 44.0;
                                        Word::from_text(w, BoundingBox::new(x, y, x + 40.0, y + 12.0))
                                    })
                                    .collect();
                                Line::with_words(words)
                            })
                            .collect();
                        Block::with_lines(lines)
                    })
                    .collect();
                page.add_region(Region::with_blocks(blocks));
            }
            page
        })
        .collect();
    Document::with_pages(pages)
}

/// Benchmark walking every character with a single cursor.
fn bench_character_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("character_walk");

    for page_count in [1, 10, 50].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let mut cursor = doc.cursor(1);
                let mut count = 0usize;
                while cursor.next_character(IterateLimit::WithinDocument).is_some() {
                    count += 1;
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

/// Benchmark backward word traversal from the document end.
fn bench_word_walk_backwards(c: &mut Criterion) {
    let doc = create_test_document(10);
    let end = doc.page_count() + 1;

    c.bench_function("word_walk_backwards", |b| {
        b.iter(|| {
            let mut cursor = doc.cursor(end);
            let mut count = 0usize;
            while cursor.previous_word(IterateLimit::WithinDocument).is_some() {
                count += 1;
            }
            black_box(count)
        });
    });
}

/// Benchmark text extraction, sequential against parallel.
fn bench_text_extraction(c: &mut Criterion) {
    let doc = create_test_document(50);

    c.bench_function("text_iter", |b| {
        b.iter(|| TextIter::new(black_box(&doc)).count());
    });

    c.bench_function("to_text_sequential", |b| {
        let options = TextOptions::new().sequential();
        b.iter(|| pdfcursor::to_text(black_box(&doc), &options).unwrap());
    });

    c.bench_function("to_text_parallel", |b| {
        let options = TextOptions::new();
        b.iter(|| pdfcursor::to_text(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark search.
fn bench_search(c: &mut Criterion) {
    let doc = create_test_document(10);
    let options = SearchOptions::new().ignore_case().whole_words();

    c.bench_function("search_whole_words", |b| {
        b.iter(|| pdfcursor::search(black_box(&doc), "cursor", &options).unwrap().len());
    });
}

criterion_group!(
    benches,
    bench_character_walk,
    bench_word_walk_backwards,
    bench_text_extraction,
    bench_search,
);
criterion_main!(benches);

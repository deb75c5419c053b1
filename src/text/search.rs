//! Regular-expression and literal search over document text.

use super::extent::TextExtent;
use super::iter::TextIter;
use super::options::SearchOptions;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::model::Document;
use regex::RegexBuilder;

/// Find every occurrence of `term` in the document's text.
///
/// The text searched is what [`TextIter`] produces under `options.text`, so
/// a match may span words, lines and pages. Matches are returned in reading
/// order and never overlap.
pub fn search<'a>(
    document: &'a Document,
    term: &str,
    options: &SearchOptions,
) -> Result<Vec<TextExtent<'a>>> {
    search_from(Cursor::at_page(document, 1), term, options)
}

/// Like [`search`], but only over the text from `start` onwards.
///
/// An unbound `start` finds nothing.
pub fn search_from<'a>(
    start: Cursor<'a>,
    term: &str,
    options: &SearchOptions,
) -> Result<Vec<TextExtent<'a>>> {
    let Some(document) = start.document() else {
        return Ok(Vec::new());
    };
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = if options.regex {
        term.to_string()
    } else {
        regex::escape(term)
    };
    let pattern = if options.whole_words {
        format!(r"\b(?:{})\b", pattern)
    } else {
        pattern
    };
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(options.ignore_case)
        .build()?;

    let items: Vec<(Cursor<'a>, char)> =
        TextIter::from_cursor(start, options.text.clone()).collect();
    let mut text = String::with_capacity(items.len());
    let mut offsets = Vec::with_capacity(items.len());
    for (_, c) in &items {
        offsets.push(text.len());
        text.push(*c);
    }

    let document_end = Cursor::at_page(document, document.page_count() + 1);
    let index_of = |byte: usize| offsets.partition_point(|&offset| offset < byte);

    let mut extents = Vec::new();
    for m in regex.find_iter(&text) {
        if m.start() == m.end() {
            continue;
        }
        let first = index_of(m.start());
        let last = index_of(m.end());
        // letters expanded from one ligature share a cursor; a match that
        // stops inside one ends after the whole glyph
        let mut end_index = last;
        if last > first {
            let (tail, _) = items[last - 1];
            while items.get(end_index).is_some_and(|(cursor, _)| *cursor == tail) {
                end_index += 1;
            }
        }
        let end = items
            .get(end_index)
            .map(|(cursor, _)| *cursor)
            .unwrap_or(document_end);
        if let Some(extent) = TextExtent::from_items(&items[first..last], end) {
            extents.push(extent);
        }
    }

    log::debug!(
        "search {:?}: {} matches in {} chars",
        pattern,
        extents.len(),
        items.len()
    );
    Ok(extents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Block, BoundingBox, Line, Page, Region, Word};
    use crate::text::TextOptions;

    fn doc() -> Document {
        let word = |text: &str, x: f64| Word::from_text(text, BoundingBox::new(x, 0.0, x + 10.0, 10.0));
        let lines = vec![
            Line::with_words(vec![word("The", 0.0), word("cat", 20.0)]),
            Line::with_words(vec![word("concatenate", 0.0), word("Cat", 20.0)]),
        ];
        Document::with_pages(vec![
            Page::letter(1).with_region(Region::with_blocks(vec![Block::with_lines(lines)]))
        ])
    }

    #[test]
    fn test_literal_search() {
        let doc = doc();
        let found = search(&doc, "cat", &SearchOptions::new()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.text == "cat"));
        assert!(found[0].start < found[1].start);
    }

    #[test]
    fn test_case_and_word_options() {
        let doc = doc();
        let found = search(&doc, "cat", &SearchOptions::new().ignore_case()).unwrap();
        assert_eq!(found.len(), 3);
        let found = search(&doc, "cat", &SearchOptions::new().ignore_case().whole_words()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].text, "Cat");
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let doc = doc();
        assert!(search(&doc, "c.t", &SearchOptions::new()).unwrap().is_empty());
        assert_eq!(search(&doc, "c.t", &SearchOptions::new().regex()).unwrap().len(), 2);
    }

    #[test]
    fn test_match_spanning_lines_has_an_area_per_line() {
        let doc = doc();
        let found = search(&doc, "cat con", &SearchOptions::new()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].areas.len(), 2);
        assert_eq!(found[0].end.character().unwrap().text, "c");
    }

    #[test]
    fn test_empty_and_invalid_terms() {
        let doc = doc();
        assert!(search(&doc, "", &SearchOptions::new()).unwrap().is_empty());
        assert!(search(&doc, "x*", &SearchOptions::new().regex()).unwrap().is_empty());
        let err = search(&doc, "(", &SearchOptions::new().regex()).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }

    #[test]
    fn test_match_inside_ligature_ends_after_glyph() {
        let word = Word::from_text("\u{FB01}ne", BoundingBox::new(0.0, 0.0, 30.0, 10.0));
        let doc = Document::with_pages(vec![Page::letter(1).with_region(Region::with_blocks(vec![
            Block::with_lines(vec![Line::with_words(vec![word])]),
        ]))]);

        let found = search(&doc, "f", &SearchOptions::new()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].start < found[0].end);
        assert_eq!(found[0].end.character().unwrap().text, "n");

        let found = search(&doc, "fin", &SearchOptions::new()).unwrap();
        assert_eq!(found[0].end.character().unwrap().text, "e");
    }

    #[test]
    fn test_search_from_skips_earlier_text() {
        let doc = doc();
        let mut start = doc.cursor(1);
        start.seek(crate::cursor::Level::Word, crate::cursor::IterateLimit::WithinDocument);
        start.next_word(crate::cursor::IterateLimit::WithinDocument);
        start.next_word(crate::cursor::IterateLimit::WithinDocument);
        assert_eq!(start.word().unwrap().text(), "concatenate");

        let found = search_from(start, "cat", &SearchOptions::new()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start.word().unwrap().text(), "concatenate");

        let found = search_from(Cursor::new(), "cat", &SearchOptions::new()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_search_respects_text_options() {
        let doc = doc();
        let options = SearchOptions::new().with_text_options(TextOptions::new().with_line_breaks(true));
        assert!(search(&doc, "cat con", &options).unwrap().is_empty());
        assert_eq!(search(&doc, "cat\ncon", &options.clone().regex()).unwrap().len(), 1);
    }
}

//! Integration tests for loading document layouts from JSON.

use std::io::Write;

use chrono::{TimeZone, Utc};
use pdfcursor::{
    extract_text, load_file, to_json, Block, BoundingBox, Document, Image, JsonFormat, Line,
    Metadata, Page, Region, Word,
};
use tempfile::NamedTempFile;

fn sample() -> Document {
    let bbox = BoundingBox::new(72.0, 700.0, 140.0, 712.0);
    let line = Line::with_words(vec![
        Word::from_text("Loaded", bbox).with_font("Times-Roman", 12.0),
        Word::from_text("layout", bbox),
    ]);
    let mut doc = Document::with_pages(vec![Page::a4(1)
        .with_image(Image::new(bbox).with_resource("Im0"))
        .with_region(Region::with_blocks(vec![Block::with_lines(vec![line])]))]);
    doc.metadata = Metadata::with_title("Sample");
    doc.metadata.created = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    doc
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_file_preserves_layout() {
    let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
    let file = write_temp(&json);

    let doc = load_file(file.path()).unwrap();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.metadata.title.as_deref(), Some("Sample"));
    assert_eq!(doc.metadata.created, sample().metadata.created);

    let cursor = doc.cursor(1);
    assert_eq!(cursor.image().unwrap().resource_id.as_deref(), Some("Im0"));
    let word = cursor.word().unwrap();
    assert_eq!(word.font_name.as_deref(), Some("Times-Roman"));
    assert_eq!(word.characters.len(), 6);
    assert_eq!(cursor.repr(), "Cursor(p0 i0 r0 b0 l0 w0 c0)");
}

#[test]
fn test_extract_text_from_file() {
    let json = to_json(&sample(), JsonFormat::Compact).unwrap();
    let file = write_temp(&json);
    assert_eq!(extract_text(file.path()).unwrap(), "Loaded layout");
}

#[test]
fn test_load_file_reports_bad_json() {
    let file = write_temp("{\"pages\": [{\"number\": \"one\"}]}");
    let err = load_file(file.path()).unwrap_err();
    assert!(matches!(err, pdfcursor::Error::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}

//! Document-level types.

use super::Page;
use crate::cursor::{Cursor, IterateLimit, Level};
use crate::error::{Error, Result};
use crate::text::{TextExtent, TextIter, TextOptions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed PDF document layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from pages.
    pub fn with_pages(pages: Vec<Page>) -> Self {
        Self {
            metadata: Metadata::default(),
            pages,
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Create a cursor positioned at the front of the given page (1-indexed).
    ///
    /// A page number past the end leaves the cursor at the document end;
    /// check [`Cursor::page`] to detect that.
    pub fn cursor(&self, page: u32) -> Cursor<'_> {
        Cursor::at_page(self, page)
    }

    /// Like [`Document::cursor`], but fails when the page does not exist.
    pub fn checked_cursor(&self, page: u32) -> Result<Cursor<'_>> {
        let cursor = self.cursor(page);
        if page == 0 || cursor.page().is_none() {
            return Err(Error::PageOutOfRange(page, self.page_count()));
        }
        Ok(cursor)
    }

    /// Find the position under a point on a page.
    ///
    /// Images are tested first, in page order; a hit returns a cursor on
    /// that image. Otherwise the result is a cursor at the character
    /// containing `(x, y)`, or at the front of the word containing it when no
    /// single glyph does. `None` when nothing on the page contains the point.
    pub fn cursor_at(&self, page: u32, x: f64, y: f64) -> Option<Cursor<'_>> {
        let start = self.checked_cursor(page).ok()?;

        let mut image = start;
        while let Some(placed) = image.image() {
            if placed.bbox.contains(x, y) {
                return Some(image);
            }
            image.next_image(IterateLimit::WithinPage);
        }

        let mut cursor = start;
        cursor.seek(Level::Word, IterateLimit::WithinPage)?;
        loop {
            let word = cursor.word()?;
            if word.bbox.contains(x, y) {
                let mut glyph = cursor;
                while let Some(character) = glyph.character() {
                    if character.bbox.contains(x, y) {
                        return Some(glyph);
                    }
                    glyph.next_character(IterateLimit::WithinWord);
                }
                return Some(cursor);
            }
            cursor.next_word(IterateLimit::WithinPage)?;
        }
    }

    /// The text between two points, possibly on different pages.
    ///
    /// Both points must fall on a character; the extent runs from the earlier
    /// one through the later one inclusive, whichever order they are given in.
    pub fn resolve_extent(
        &self,
        page1: u32,
        x1: f64,
        y1: f64,
        page2: u32,
        x2: f64,
        y2: f64,
    ) -> Option<TextExtent<'_>> {
        let first = self.cursor_at(page1, x1, y1)?;
        let second = self.cursor_at(page2, x2, y2)?;
        first.character()?;
        second.character()?;

        let (from, to) = if second.precedes(&first) {
            (second, first)
        } else {
            (first, second)
        };

        let mut iter = TextIter::from_cursor(from, TextOptions::default()).peekable();
        let mut items = Vec::new();
        while let Some(item) = iter.next_if(|(cursor, _)| !to.precedes(cursor)) {
            items.push(item);
        }
        let end = iter
            .peek()
            .map(|(cursor, _)| *cursor)
            .unwrap_or_else(|| self.cursor(self.page_count() + 1));
        TextExtent::from_items(&items, end)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        TextIter::new(self)
            .map(|(_, c)| c)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Count the elements at every level of the layout.
    pub fn stats(&self) -> LayoutStats {
        let mut stats = LayoutStats {
            pages: self.pages.len(),
            ..Default::default()
        };
        for page in &self.pages {
            stats.images += page.images.len();
            stats.regions += page.regions.len();
            for region in &page.regions {
                stats.blocks += region.blocks.len();
                for block in &region.blocks {
                    stats.lines += block.lines.len();
                    for line in &block.lines {
                        stats.words += line.words.len();
                        stats.characters += line
                            .words
                            .iter()
                            .map(|w| w.characters.len())
                            .sum::<usize>();
                    }
                }
            }
        }
        stats
    }
}

/// Element counts per layout level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub pages: usize,
    pub images: usize,
    pub regions: usize,
    pub blocks: usize,
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BoundingBox, Image, Line, Region, Word};

    fn word_page(number: u32, words: &[&str]) -> Page {
        let mut line = Line::new(BoundingBox::default());
        for (i, w) in words.iter().enumerate() {
            let x = i as f64 * 50.0;
            line.add_word(Word::from_text(w, BoundingBox::new(x, 100.0, x + 40.0, 110.0)));
        }
        Page::letter(number).with_region(Region::with_blocks(vec![Block::with_lines(vec![line])]))
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(0).is_none());
        assert!(doc.get_page(1).is_none());
    }

    #[test]
    fn test_checked_cursor_out_of_range() {
        let doc = Document::with_pages(vec![word_page(1, &["a"])]);
        assert!(doc.checked_cursor(1).is_ok());
        let err = doc.checked_cursor(3).unwrap_err();
        assert!(matches!(err, Error::PageOutOfRange(3, 1)));
        assert!(doc.checked_cursor(0).is_err());
    }

    #[test]
    fn test_cursor_at_hits_character() {
        let doc = Document::with_pages(vec![word_page(1, &["hello", "world"])]);
        // "world" spans x 50..90, 8 points per glyph
        let cursor = doc.cursor_at(1, 67.0, 105.0).unwrap();
        assert_eq!(cursor.word().unwrap().text(), "world");
        assert_eq!(cursor.character().unwrap().text, "r");

        assert!(doc.cursor_at(1, 45.0, 105.0).is_none());
        assert!(doc.cursor_at(2, 10.0, 105.0).is_none());
    }

    #[test]
    fn test_cursor_at_prefers_images() {
        let image = Image::new(BoundingBox::new(100.0, 100.0, 200.0, 200.0)).with_resource("Im0");
        let doc = Document::with_pages(vec![word_page(1, &["word"]).with_image(image)]);

        let cursor = doc.cursor_at(1, 150.0, 150.0).unwrap();
        assert_eq!(cursor.image().unwrap().resource_id.as_deref(), Some("Im0"));
        assert_eq!(cursor.offset(Level::Image), Some(0));

        let cursor = doc.cursor_at(1, 5.0, 105.0).unwrap();
        assert_eq!(cursor.character().unwrap().text, "w");
        assert!(doc.cursor_at(1, 300.0, 300.0).is_none());
    }

    #[test]
    fn test_resolve_extent_between_points() {
        let doc = Document::with_pages(vec![word_page(1, &["hello", "world"]), word_page(2, &["three"])]);

        // points given back to front still read forwards
        let extent = doc.resolve_extent(1, 67.0, 105.0, 1, 20.0, 105.0).unwrap();
        assert_eq!(extent.text, "llo wor");
        assert_eq!(extent.areas.len(), 1);
        assert_eq!(extent.end.character().unwrap().text, "l");

        let extent = doc.resolve_extent(1, 20.0, 105.0, 2, 10.0, 105.0).unwrap();
        assert_eq!(extent.text, "llo world th");
        assert_eq!(extent.areas.len(), 2);
        assert_eq!(extent.areas[1].page, 2);

        assert!(doc.resolve_extent(1, 45.0, 105.0, 1, 20.0, 105.0).is_none());
    }

    #[test]
    fn test_stats_and_plain_text() {
        let doc = Document::with_pages(vec![word_page(1, &["one", "two"]), word_page(2, &["three"])]);
        let stats = doc.stats();
        assert_eq!(stats.pages, 2);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 11);
        assert_eq!(doc.plain_text(), "one two three");
    }
}

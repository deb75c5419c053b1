//! Hierarchical document cursor.
//!
//! A [`Cursor`] tracks one position per structural level of a
//! [`Document`](crate::model::Document): page, image, region, block, line,
//! word and character. It moves forwards and backwards at any of those
//! granularities, bounded by an [`IterateLimit`] that says how far up the
//! hierarchy a move may cascade when the current container runs out.
//!
//! Invalid positions are data, not errors: accessors return `None` and
//! moves that cannot happen return `None` without panicking.
//!
//! # Example
//!
//! ```
//! use pdfcursor::cursor::{IterateLimit, Level};
//! use pdfcursor::model::{Block, BoundingBox, Document, Line, Page, Region, Word};
//!
//! let bbox = BoundingBox::new(0.0, 0.0, 40.0, 10.0);
//! let line = Line::with_words(vec![Word::from_text("hello", bbox), Word::from_text("world", bbox)]);
//! let page = Page::letter(1).with_region(Region::with_blocks(vec![Block::with_lines(vec![line])]));
//! let doc = Document::with_pages(vec![page]);
//!
//! let mut cursor = doc.cursor(1);
//! assert_eq!(cursor.word().unwrap().text(), "hello");
//! cursor.next_word(IterateLimit::WithinLine);
//! assert_eq!(cursor.word().unwrap().text(), "world");
//! assert!(!cursor.has_next(Level::Word, IterateLimit::WithinDocument));
//! assert_eq!(cursor.to_string(), "Cursor(p0 i0 r0 b0 l0 w1 c0)");
//! ```

mod compare;
mod level;
mod position;
mod traverse;

pub use compare::order;
pub use level::{IterateLimit, Level};
pub use position::{Cursor, FullState, Node};

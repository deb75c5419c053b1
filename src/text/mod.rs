//! Text layer over the cursor: reading-order iteration, search and extents.
//!
//! ```
//! use pdfcursor::model::{Block, BoundingBox, Document, Line, Page, Region, Word};
//! use pdfcursor::text::{search, SearchOptions};
//!
//! let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
//! let line = Line::with_words(vec![Word::from_text("Hello", bbox), Word::from_text("world", bbox)]);
//! let doc = Document::with_pages(vec![
//!     Page::letter(1).with_region(Region::with_blocks(vec![Block::with_lines(vec![line])])),
//! ]);
//!
//! let found = search(&doc, "WORLD", &SearchOptions::new().ignore_case()).unwrap();
//! assert_eq!(found[0].text, "world");
//! assert_eq!(found[0].start.to_string(), "Cursor(p0 i0 r0 b0 l0 w1 c0)");
//! ```

mod extent;
mod iter;
mod options;
mod search;

pub use extent::{Area, TextExtent};
pub use iter::TextIter;
pub use options::{PageSelection, SearchOptions, TextOptions};
pub use search::{search, search_from};

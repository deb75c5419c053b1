//! # pdfcursor
//!
//! Hierarchical cursors over the text layout of PDF documents.
//!
//! A [`Document`] is an owned tree of pages, images, regions, blocks, lines,
//! words and characters. A [`Cursor`] borrows the tree and addresses one
//! position at every level; it can be stepped forwards and backwards at any
//! level with an [`IterateLimit`] bounding how far it may roam.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfcursor::{load_file, IterateLimit};
//!
//! fn main() -> pdfcursor::Result<()> {
//!     // Load a layout exported as JSON
//!     let doc = load_file("layout.json")?;
//!
//!     // Walk every word in reading order
//!     let mut cursor = doc.cursor(1);
//!     while let Some(word) = cursor.word() {
//!         println!("{} {}", cursor, word.text());
//!         cursor.next_word(IterateLimit::WithinDocument);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Seven-level cursor**: page, image, region, block, line, word, character
//! - **Bounded traversal**: stay within a word, line, block... or roam the document
//! - **Reading order**: cursors compare by document position
//! - **Text iteration and search**: ligatures, hyphenation and word spacing handled
//! - **Parallel processing**: Uses Rayon for multi-page text extraction

pub mod cursor;
pub mod error;
pub mod model;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use cursor::{order, Cursor, FullState, IterateLimit, Level, Node};
pub use error::{Error, Result};
pub use model::{
    Block, BoundingBox, Character, Document, Image, LayoutStats, Line, Metadata, Page, Region,
    Word,
};
pub use render::{from_json, to_json, to_text, JsonFormat};
pub use text::{
    search, search_from, Area, PageSelection, SearchOptions, TextExtent, TextIter, TextOptions,
};

use std::io::Read;
use std::path::Path;

/// Load a document layout from a JSON file.
///
/// # Example
///
/// ```no_run
/// use pdfcursor::load_file;
///
/// let doc = load_file("layout.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("Loading {}", path.display());
    let data = std::fs::read(path)?;
    load_bytes(&data)
}

/// Load a document layout from JSON bytes.
pub fn load_bytes(data: &[u8]) -> Result<Document> {
    let doc: Document = serde_json::from_slice(data)?;
    log::debug!("Loaded document with {} pages", doc.page_count());
    Ok(doc)
}

/// Load a document layout from a reader.
///
/// # Example
///
/// ```no_run
/// use pdfcursor::load_reader;
/// use std::fs::File;
///
/// let file = File::open("layout.json").unwrap();
/// let doc = load_reader(file).unwrap();
/// ```
pub fn load_reader<R: Read>(reader: R) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;
    log::debug!("Loaded document with {} pages", doc.page_count());
    Ok(doc)
}

/// Extract plain text from a document layout file.
///
/// # Example
///
/// ```no_run
/// use pdfcursor::extract_text;
///
/// let text = extract_text("layout.json").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    to_text(&doc, &TextOptions::default())
}

//! Document model types for parsed PDF page layouts.
//!
//! The model is an owned tree: a [`Document`] holds pages, a [`Page`] holds
//! images and text regions, and text regions nest down through blocks, lines
//! and words to single characters. Every collection is kept in reading order.
//! [`crate::cursor::Cursor`] borrows this tree and never mutates it.

mod document;
mod geometry;
mod layout;
mod page;

pub use document::{Document, LayoutStats, Metadata};
pub use geometry::BoundingBox;
pub use layout::{Block, Character, Line, Region, Word};
pub use page::{Image, Page};

//! Rendering module for converting documents to output formats.

mod json;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use text::{page_text, to_text};

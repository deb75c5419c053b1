//! Plain text rendering for documents.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::text::{PageSelection, TextIter, TextOptions};
use rayon::prelude::*;

/// Text of page `page` (1-indexed), without trailing whitespace.
pub fn page_text(doc: &Document, page: u32, options: &TextOptions) -> String {
    let text: String = TextIter::page(doc, page, options.clone())
        .map(|(_, c)| c)
        .collect();
    text.trim_end().to_string()
}

/// Convert a document to plain text.
///
/// Each selected page is extracted with its own cursor, in parallel when
/// `options.parallel` is set. Pages without text are left out; the rest are
/// joined with `options.page_separator`.
pub fn to_text(doc: &Document, options: &TextOptions) -> Result<String> {
    let selected: Vec<u32> = (1..=doc.page_count())
        .filter(|n| options.pages.includes(*n))
        .collect();

    if selected.is_empty() && options.pages != PageSelection::All {
        return Err(Error::InvalidPageRange(format!(
            "{:?} selects none of {} pages",
            options.pages,
            doc.page_count()
        )));
    }

    let pages: Vec<String> = if options.parallel {
        selected
            .par_iter()
            .map(|n| page_text(doc, *n, options))
            .collect()
    } else {
        selected
            .iter()
            .map(|n| page_text(doc, *n, options))
            .collect()
    };

    log::debug!(
        "Rendered {} of {} pages as text",
        selected.len(),
        doc.page_count()
    );

    let output = pages
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(options.page_separator.as_str());

    Ok(output)
}

//! Text extents: a run of document text between two cursors.

use crate::cursor::{Cursor, Level};
use crate::model::BoundingBox;
use serde::Serialize;
use std::fmt;

/// A rectangle of text on one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Area {
    /// Page number (1-indexed)
    pub page: u32,
    pub bbox: BoundingBox,
}

/// A half-open run of text: `start` is the first character, `end` the
/// position just past the last one.
#[derive(Debug, Clone)]
pub struct TextExtent<'a> {
    pub start: Cursor<'a>,
    pub end: Cursor<'a>,
    pub text: String,
    /// One area per line the extent touches, in reading order
    pub areas: Vec<Area>,
}

impl<'a> TextExtent<'a> {
    /// Build an extent from the iterator items it covers. Separator items
    /// contribute text but no area.
    pub(crate) fn from_items(items: &[(Cursor<'a>, char)], end: Cursor<'a>) -> Option<Self> {
        let (start, _) = *items.first()?;
        let text = items.iter().map(|(_, c)| *c).collect();

        let mut areas: Vec<Area> = Vec::new();
        let mut current_line: Option<[usize; 4]> = None;
        for (cursor, _) in items {
            let Some(character) = cursor.character() else {
                continue;
            };
            let key = line_key(cursor);
            let page = cursor.offset(Level::Page).map(|p| p as u32 + 1).unwrap_or(0);
            if current_line == Some(key) {
                if let Some(area) = areas.last_mut() {
                    area.bbox |= character.bbox;
                    continue;
                }
            }
            areas.push(Area {
                page,
                bbox: character.bbox,
            });
            current_line = Some(key);
        }

        Some(Self {
            start,
            end,
            text,
            areas,
        })
    }

    /// Union of all areas on `page`.
    pub fn bounds_on_page(&self, page: u32) -> Option<BoundingBox> {
        self.areas
            .iter()
            .filter(|a| a.page == page)
            .map(|a| a.bbox)
            .reduce(|a, b| a | b)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn line_key(cursor: &Cursor<'_>) -> [usize; 4] {
    [Level::Page, Level::Region, Level::Block, Level::Line]
        .map(|level| cursor.offset(level).unwrap_or(usize::MAX))
}

impl fmt::Display for TextExtent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.start, self.text)
    }
}

//! Equality, reading-order comparison and the textual representation.
//!
//! Equality walks the levels from Page downwards and stops as soon as the
//! left-hand cursor is at-end somewhere; it includes the Image position.
//! Ordering is lexicographic over (Page, Region, Block, Line, Word,
//! Character) and leaves Image out, since images are not part of the
//! reading order. Two cursors that differ only in Image are therefore
//! unequal yet unordered, and `partial_cmp` returns `None` for them.

use super::level::IterateLimit::{WithinBlock, WithinLine, WithinPage, WithinRegion};
use super::{Cursor, Level};
use std::cmp::Ordering;
use std::fmt;
use std::ptr;

impl<'a> Cursor<'a> {
    /// True when both cursors are bound to the same document instance.
    pub fn same_document(&self, other: &Cursor<'_>) -> bool {
        match (self.document, other.document) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        }
    }

    /// Strict reading-order comparison: `self` comes before `other`.
    ///
    /// Always `false` for cursors over different documents.
    pub fn precedes(&self, other: &Cursor<'_>) -> bool {
        if !self.same_document(other) {
            return false;
        }

        if self.page != other.page {
            return self.page < other.page;
        }
        if !self.is_valid_page() {
            return false;
        }
        if self.region != other.region {
            return self.region < other.region;
        }
        if !self.is_valid_region(WithinPage) {
            return false;
        }
        if self.block != other.block {
            return self.block < other.block;
        }
        if !self.is_valid_block(WithinRegion) {
            return false;
        }
        if self.line != other.line {
            return self.line < other.line;
        }
        if !self.is_valid_line(WithinBlock) {
            return false;
        }
        if self.word != other.word {
            return self.word < other.word;
        }
        if !self.is_valid_word(WithinLine) {
            return false;
        }
        self.character < other.character
    }

    /// Render the representation, e.g. `Cursor(p0 i- r1 b0 l2 w- c-)`.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        if !self.same_document(other) {
            return false;
        }

        if self.page != other.page {
            return false;
        }
        if !self.is_valid_page() {
            return true;
        }
        if self.image != other.image || self.region != other.region {
            return false;
        }
        if !self.is_valid_region(WithinPage) {
            return true;
        }
        if self.block != other.block {
            return false;
        }
        if !self.is_valid_block(WithinRegion) {
            return true;
        }
        if self.line != other.line {
            return false;
        }
        if !self.is_valid_line(WithinBlock) {
            return true;
        }
        if self.word != other.word {
            return false;
        }
        if !self.is_valid_word(WithinLine) {
            return true;
        }
        self.character == other.character
    }
}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_document(other) {
            return None;
        }
        if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

/// Put two cursors into reading order, swapping them when `second` precedes
/// `first`. Returns whether a swap happened.
pub fn order<'a>(first: &mut Cursor<'a>, second: &mut Cursor<'a>) -> bool {
    if second.precedes(first) {
        std::mem::swap(first, second);
        true
    } else {
        false
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cursor(")?;
        for (i, level) in Level::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match self.offset(*level) {
                Some(offset) => write!(f, "{}{}", level.tag(), offset)?,
                None => write!(f, "{}-", level.tag())?,
            }
        }
        f.write_str(")")
    }
}

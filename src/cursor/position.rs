//! Cursor position state, validity checks and element accessors.

use super::level::IterateLimit::{self, WithinBlock, WithinDocument, WithinLine, WithinPage, WithinRegion, WithinWord};
use super::Level;
use crate::model::{Block, Character, Document, Image, Line, Page, Region, Word};
use std::fmt;

/// A position inside a [`Document`], one index per structural level.
///
/// The cursor borrows the document and never mutates it. Each index is either
/// valid (points at an element of the current container) or at-end (equal to
/// the container's length). An index below an at-end or invalid ancestor is
/// meaningless until the ancestor becomes valid again; it may hold a stale
/// value but is never dereferenced.
///
/// Cursors are cheap `Copy` values; clone one per thread to traverse the same
/// document concurrently.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    pub(super) document: Option<&'a Document>,
    pub(super) page: usize,
    pub(super) image: usize,
    pub(super) region: usize,
    pub(super) block: usize,
    pub(super) line: usize,
    pub(super) word: usize,
    pub(super) character: usize,
}

/// A borrowed element at one level of the document.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Page(&'a Page),
    Image(&'a Image),
    Region(&'a Region),
    Block(&'a Block),
    Line(&'a Line),
    Word(&'a Word),
    Character(&'a Character),
}

impl<'a> Node<'a> {
    pub fn level(&self) -> Level {
        match self {
            Node::Page(_) => Level::Page,
            Node::Image(_) => Level::Image,
            Node::Region(_) => Level::Region,
            Node::Block(_) => Level::Block,
            Node::Line(_) => Level::Line,
            Node::Word(_) => Level::Word,
            Node::Character(_) => Level::Character,
        }
    }

    /// Text covered by the element; empty for pages, images and regions.
    pub fn text(&self) -> String {
        match self {
            Node::Page(_) | Node::Image(_) | Node::Region(_) => String::new(),
            Node::Block(block) => block.text(),
            Node::Line(line) => line.text(),
            Node::Word(word) => word.text(),
            Node::Character(character) => character.text.clone(),
        }
    }
}

/// Every level's current element at once. Image and Region are resolved
/// independently under the page; the rest follow the text chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullState<'a> {
    pub document: Option<&'a Document>,
    pub page: Option<&'a Page>,
    pub image: Option<&'a Image>,
    pub region: Option<&'a Region>,
    pub block: Option<&'a Block>,
    pub line: Option<&'a Line>,
    pub word: Option<&'a Word>,
    pub character: Option<&'a Character>,
}

impl<'a> Cursor<'a> {
    /// Create an unbound cursor. Every validity check on it fails.
    pub fn new() -> Self {
        Self {
            document: None,
            page: 0,
            image: 0,
            region: 0,
            block: 0,
            line: 0,
            word: 0,
            character: 0,
        }
    }

    /// Create a cursor at the front of page `page` (1-indexed).
    ///
    /// Requests past the last page leave the cursor at the document end.
    pub fn at_page(document: &'a Document, page: u32) -> Self {
        let mut cursor = Self {
            document: Some(document),
            ..Self::new()
        };
        cursor.goto_page(page);
        cursor
    }

    /// Move to the front of page `page` (1-indexed).
    ///
    /// Returns `false` and leaves the cursor at the document end when the page
    /// does not exist, or does nothing when the cursor is unbound.
    pub fn goto_page(&mut self, page: u32) -> bool {
        if !self.is_valid_document() {
            return false;
        }

        self.page = 0;
        let mut remaining = page;
        while remaining > 1 && self.is_valid_page() {
            self.page += 1;
            remaining -= 1;
        }

        if self.is_valid_page() {
            self.to_front(Level::Image);
            true
        } else {
            log::trace!(
                "goto_page({}) past the last of {} pages",
                page,
                self.pages().len()
            );
            false
        }
    }

    /// The document this cursor is bound to.
    pub fn document(&self) -> Option<&'a Document> {
        self.document
    }

    // Containers of the current position. Each falls back to an empty slice
    // when an ancestor index is out of range, so they are always safe to index.

    pub(super) fn pages(&self) -> &'a [Page] {
        self.document.map(|d| d.pages.as_slice()).unwrap_or_default()
    }

    pub(super) fn images(&self) -> &'a [Image] {
        self.pages()
            .get(self.page)
            .map(|p| p.images.as_slice())
            .unwrap_or_default()
    }

    pub(super) fn regions(&self) -> &'a [Region] {
        self.pages()
            .get(self.page)
            .map(|p| p.regions.as_slice())
            .unwrap_or_default()
    }

    pub(super) fn blocks(&self) -> &'a [Block] {
        self.regions()
            .get(self.region)
            .map(|r| r.blocks.as_slice())
            .unwrap_or_default()
    }

    pub(super) fn lines(&self) -> &'a [Line] {
        self.blocks()
            .get(self.block)
            .map(|b| b.lines.as_slice())
            .unwrap_or_default()
    }

    pub(super) fn words(&self) -> &'a [Word] {
        self.lines()
            .get(self.line)
            .map(|l| l.words.as_slice())
            .unwrap_or_default()
    }

    pub(super) fn characters(&self) -> &'a [Character] {
        self.words()
            .get(self.word)
            .map(|w| w.characters.as_slice())
            .unwrap_or_default()
    }

    // Validity. `scope` tells a check which ancestor is already known to be
    // valid: passing the parent's scope (e.g. `WithinRegion` for a block)
    // skips the ancestor checks, any coarser scope re-derives them top-down.

    /// True when the cursor is bound to a document.
    pub fn is_valid(&self) -> bool {
        self.is_valid_document()
    }

    pub fn is_valid_document(&self) -> bool {
        self.document.is_some()
    }

    pub fn is_valid_page(&self) -> bool {
        self.is_valid_document() && self.page < self.pages().len()
    }

    pub fn is_valid_image(&self, scope: IterateLimit) -> bool {
        (scope == WithinPage || self.is_valid_page()) && self.image < self.images().len()
    }

    pub fn is_valid_region(&self, scope: IterateLimit) -> bool {
        (scope == WithinPage || self.is_valid_page()) && self.region < self.regions().len()
    }

    pub fn is_valid_block(&self, scope: IterateLimit) -> bool {
        (scope == WithinRegion || self.is_valid_region(scope)) && self.block < self.blocks().len()
    }

    pub fn is_valid_line(&self, scope: IterateLimit) -> bool {
        (scope == WithinBlock || self.is_valid_block(scope)) && self.line < self.lines().len()
    }

    pub fn is_valid_word(&self, scope: IterateLimit) -> bool {
        (scope == WithinLine || self.is_valid_line(scope)) && self.word < self.words().len()
    }

    pub fn is_valid_character(&self, scope: IterateLimit) -> bool {
        (scope == WithinWord || self.is_valid_word(scope))
            && self.character < self.characters().len()
    }

    /// Level-dispatching form of the `is_valid_*` checks.
    pub fn is_valid_at(&self, level: Level, scope: IterateLimit) -> bool {
        match level {
            Level::Page => self.is_valid_page(),
            Level::Image => self.is_valid_image(scope),
            Level::Region => self.is_valid_region(scope),
            Level::Block => self.is_valid_block(scope),
            Level::Line => self.is_valid_line(scope),
            Level::Word => self.is_valid_word(scope),
            Level::Character => self.is_valid_character(scope),
        }
    }

    // Accessors return the element under the cursor, or None when the
    // position (or any ancestor) is invalid.

    pub fn page(&self) -> Option<&'a Page> {
        if self.is_valid_page() {
            self.pages().get(self.page)
        } else {
            None
        }
    }

    pub fn image(&self) -> Option<&'a Image> {
        if self.is_valid_image(WithinDocument) {
            self.images().get(self.image)
        } else {
            None
        }
    }

    pub fn region(&self) -> Option<&'a Region> {
        if self.is_valid_region(WithinDocument) {
            self.regions().get(self.region)
        } else {
            None
        }
    }

    pub fn block(&self) -> Option<&'a Block> {
        if self.is_valid_block(WithinDocument) {
            self.blocks().get(self.block)
        } else {
            None
        }
    }

    pub fn line(&self) -> Option<&'a Line> {
        if self.is_valid_line(WithinDocument) {
            self.lines().get(self.line)
        } else {
            None
        }
    }

    pub fn word(&self) -> Option<&'a Word> {
        if self.is_valid_word(WithinDocument) {
            self.words().get(self.word)
        } else {
            None
        }
    }

    pub fn character(&self) -> Option<&'a Character> {
        if self.is_valid_character(WithinDocument) {
            self.characters().get(self.character)
        } else {
            None
        }
    }

    /// The element at `level`, if the position there is valid.
    pub fn node(&self, level: Level) -> Option<Node<'a>> {
        match level {
            Level::Page => self.page().map(Node::Page),
            Level::Image => self.image().map(Node::Image),
            Level::Region => self.region().map(Node::Region),
            Level::Block => self.block().map(Node::Block),
            Level::Line => self.line().map(Node::Line),
            Level::Word => self.word().map(Node::Word),
            Level::Character => self.character().map(Node::Character),
        }
    }

    pub fn full_state(&self) -> FullState<'a> {
        FullState {
            document: self.document,
            page: self.page(),
            image: self.image(),
            region: self.region(),
            block: self.block(),
            line: self.line(),
            word: self.word(),
            character: self.character(),
        }
    }

    /// Zero-based offset of `level` within its container.
    ///
    /// `Some` whenever the cursor is bound and every ancestor of `level` is
    /// valid; the level itself may be at-end, in which case the offset equals
    /// the container length.
    pub fn offset(&self, level: Level) -> Option<usize> {
        self.document?;
        if let Some(parent) = level.parent() {
            if !self.is_valid_at(parent, WithinDocument) {
                return None;
            }
        }
        Some(self.index(level))
    }

    pub(super) fn index(&self, level: Level) -> usize {
        match level {
            Level::Page => self.page,
            Level::Image => self.image,
            Level::Region => self.region,
            Level::Block => self.block,
            Level::Line => self.line,
            Level::Word => self.word,
            Level::Character => self.character,
        }
    }
}

impl Default for Cursor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("document", &self.document.map(|d| d as *const Document))
            .field("page", &self.page)
            .field("image", &self.image)
            .field("region", &self.region)
            .field("block", &self.block)
            .field("line", &self.line)
            .field("word", &self.word)
            .field("character", &self.character)
            .finish()
    }
}

//! Forward and backward traversal.
//!
//! Every `next_*` / `previous_*` takes an [`IterateLimit`]. When the level's
//! container is exhausted and the limit is wider than the level's own scope,
//! the traversal climbs into the parent, skipping empty containers, until it
//! finds an element or the limit's bound is exhausted. A limit narrower than
//! the level's scope refuses to move at all.

use super::level::IterateLimit::{
    self, WithinBlock, WithinDocument, WithinLine, WithinPage, WithinRegion, WithinWord,
};
use super::{Cursor, Level, Node};
use crate::model::{Block, Character, Image, Line, Page, Region, Word};

impl<'a> Cursor<'a> {
    // Front and back. `to_front` resets `level` and cascades down through
    // every descendant, stopping below the first level left at-end.
    // `to_back` moves `level` one past its container's last element.
    // With `validate` off the caller guarantees every ancestor of `level`
    // is valid.

    pub fn to_front(&mut self, level: Level) {
        self.to_front_with(level, true);
    }

    pub fn to_front_with(&mut self, level: Level, validate: bool) {
        if validate && !self.parent_is_valid(level) {
            return;
        }

        for step in &Level::ALL[level.ordinal()..] {
            match step {
                Level::Page => self.page = 0,
                Level::Image => self.image = 0,
                Level::Region => {
                    if !self.is_valid_page() {
                        break;
                    }
                    self.region = 0;
                }
                Level::Block => {
                    if !self.is_valid_region(WithinPage) {
                        break;
                    }
                    self.block = 0;
                }
                Level::Line => {
                    if !self.is_valid_block(WithinRegion) {
                        break;
                    }
                    self.line = 0;
                }
                Level::Word => {
                    if !self.is_valid_line(WithinBlock) {
                        break;
                    }
                    self.word = 0;
                }
                Level::Character => {
                    if !self.is_valid_word(WithinLine) {
                        break;
                    }
                    self.character = 0;
                }
            }
        }
    }

    pub fn to_back(&mut self, level: Level) {
        self.to_back_with(level, true);
    }

    pub fn to_back_with(&mut self, level: Level, validate: bool) {
        if validate && !self.parent_is_valid(level) {
            return;
        }

        match level {
            Level::Page => self.page = self.pages().len(),
            Level::Image => self.image = self.images().len(),
            Level::Region => self.region = self.regions().len(),
            Level::Block => self.block = self.blocks().len(),
            Level::Line => self.line = self.lines().len(),
            Level::Word => self.word = self.words().len(),
            Level::Character => self.character = self.characters().len(),
        }
    }

    fn parent_is_valid(&self, level: Level) -> bool {
        match level.parent() {
            None => self.is_valid_document(),
            Some(parent) => self.is_valid_at(parent, WithinDocument),
        }
    }

    // Forward traversal.

    pub fn next_page(&mut self, limit: IterateLimit) -> Option<&'a Page> {
        if limit < WithinDocument {
            return None;
        }
        if self.is_valid_page() {
            self.page += 1;
            self.to_front(Level::Image);
        }
        self.page()
    }

    pub fn next_image(&mut self, limit: IterateLimit) -> Option<&'a Image> {
        if limit < WithinPage {
            return None;
        }
        if self.is_valid_image(WithinDocument) {
            self.image += 1;
        }
        if limit > WithinPage {
            while self.is_valid_page() && !self.is_valid_image(WithinPage) {
                self.next_page(limit);
            }
        }
        self.image()
    }

    pub fn next_region(&mut self, limit: IterateLimit) -> Option<&'a Region> {
        if limit < WithinPage {
            return None;
        }
        if self.is_valid_region(WithinDocument) {
            self.region += 1;
            if self.is_valid_region(WithinPage) {
                self.to_front_with(Level::Block, false);
            }
        }
        if limit > WithinPage {
            while self.is_valid_page() && !self.is_valid_region(WithinPage) {
                self.next_page(limit);
            }
        }
        self.region()
    }

    pub fn next_block(&mut self, limit: IterateLimit) -> Option<&'a Block> {
        if limit < WithinRegion {
            return None;
        }
        if self.is_valid_block(WithinDocument) {
            self.block += 1;
            if self.is_valid_block(WithinRegion) {
                self.to_front_with(Level::Line, false);
            }
        }
        if limit > WithinRegion {
            while self.is_valid_region(limit) && !self.is_valid_block(WithinRegion) {
                self.next_region(limit);
            }
        }
        self.block()
    }

    pub fn next_line(&mut self, limit: IterateLimit) -> Option<&'a Line> {
        if limit < WithinBlock {
            return None;
        }
        if self.is_valid_line(WithinDocument) {
            self.line += 1;
            if self.is_valid_line(WithinBlock) {
                self.to_front_with(Level::Word, false);
            }
        }
        if limit > WithinBlock {
            while self.is_valid_block(limit) && !self.is_valid_line(WithinBlock) {
                self.next_block(limit);
            }
        }
        self.line()
    }

    pub fn next_word(&mut self, limit: IterateLimit) -> Option<&'a Word> {
        if limit < WithinLine {
            return None;
        }
        if self.is_valid_word(WithinDocument) {
            self.word += 1;
            if self.is_valid_word(WithinLine) {
                self.to_front_with(Level::Character, false);
            }
        }
        if limit > WithinLine {
            while self.is_valid_line(limit) && !self.is_valid_word(WithinLine) {
                self.next_line(limit);
            }
        }
        self.word()
    }

    pub fn next_character(&mut self, limit: IterateLimit) -> Option<&'a Character> {
        if limit < WithinWord {
            return None;
        }
        if self.is_valid_character(WithinDocument) {
            self.character += 1;
        }
        if limit > WithinWord {
            while self.is_valid_word(limit) && !self.is_valid_character(WithinWord) {
                self.next_word(limit);
            }
        }
        self.character()
    }

    // Backward traversal. Stepping back into a previous container lands on
    // its last element; containers with nothing in them are skipped.

    pub fn previous_page(&mut self, limit: IterateLimit) -> Option<&'a Page> {
        if limit < WithinDocument {
            return None;
        }
        if self.is_valid_document() && self.page > 0 {
            self.page -= 1;
            self.to_front_with(Level::Image, false);
            return self.page();
        }
        None
    }

    pub fn previous_image(&mut self, limit: IterateLimit) -> Option<&'a Image> {
        if limit < WithinPage {
            return None;
        }
        if self.is_valid_page() && self.image > 0 {
            self.image -= 1;
            return self.image();
        }
        if limit > WithinPage {
            let mut end;
            loop {
                end = self.previous_page(limit).is_none();
                if end || !self.is_valid_document() || self.is_valid_image(WithinPage) {
                    break;
                }
            }
            if !end && self.is_valid_image(WithinDocument) {
                self.to_back_with(Level::Image, false);
                self.image -= 1;
                return self.image();
            }
        }
        None
    }

    pub fn previous_region(&mut self, limit: IterateLimit) -> Option<&'a Region> {
        if limit < WithinPage {
            return None;
        }
        if self.is_valid_page() && self.region > 0 {
            self.region -= 1;
            self.to_front_with(Level::Block, false);
            return self.region();
        }
        if limit > WithinPage {
            let mut end;
            loop {
                end = self.previous_page(limit).is_none();
                if end || !self.is_valid_document() || self.is_valid_region(WithinPage) {
                    break;
                }
            }
            if !end && self.is_valid_region(WithinDocument) {
                self.to_back_with(Level::Region, false);
                self.region -= 1;
                self.to_front_with(Level::Block, false);
                return self.region();
            }
        }
        None
    }

    pub fn previous_block(&mut self, limit: IterateLimit) -> Option<&'a Block> {
        if limit < WithinRegion {
            return None;
        }
        if self.is_valid_region(WithinDocument) && self.block > 0 {
            self.block -= 1;
            self.to_front_with(Level::Line, false);
            return self.block();
        }
        if limit > WithinRegion {
            let mut end;
            loop {
                end = self.previous_region(limit).is_none();
                if end || !self.is_valid_page() || self.is_valid_block(WithinRegion) {
                    break;
                }
            }
            if !end && self.is_valid_block(WithinDocument) {
                self.to_back_with(Level::Block, false);
                self.block -= 1;
                self.to_front_with(Level::Line, false);
                return self.block();
            }
        }
        None
    }

    pub fn previous_line(&mut self, limit: IterateLimit) -> Option<&'a Line> {
        if limit < WithinBlock {
            return None;
        }
        if self.is_valid_block(WithinDocument) && self.line > 0 {
            self.line -= 1;
            self.to_front_with(Level::Word, false);
            return self.line();
        }
        if limit > WithinBlock {
            let mut end;
            loop {
                end = self.previous_block(limit).is_none();
                if end
                    || !self.is_valid_region(WithinDocument)
                    || self.is_valid_line(WithinBlock)
                {
                    break;
                }
            }
            if !end && self.is_valid_line(WithinDocument) {
                self.to_back_with(Level::Line, false);
                self.line -= 1;
                self.to_front_with(Level::Word, false);
                return self.line();
            }
        }
        None
    }

    pub fn previous_word(&mut self, limit: IterateLimit) -> Option<&'a Word> {
        if limit < WithinLine {
            return None;
        }
        if self.is_valid_line(WithinDocument) && self.word > 0 {
            self.word -= 1;
            self.to_front_with(Level::Character, false);
            return self.word();
        }
        if limit > WithinLine {
            let mut end;
            loop {
                end = self.previous_line(limit).is_none();
                if end || !self.is_valid_block(WithinDocument) || self.is_valid_word(WithinLine) {
                    break;
                }
            }
            if !end && self.is_valid_word(WithinDocument) {
                self.to_back_with(Level::Word, false);
                self.word -= 1;
                self.to_front_with(Level::Character, false);
                return self.word();
            }
        }
        None
    }

    pub fn previous_character(&mut self, limit: IterateLimit) -> Option<&'a Character> {
        if limit < WithinWord {
            return None;
        }
        if self.is_valid_word(WithinDocument) && self.character > 0 {
            self.character -= 1;
            return self.character();
        }
        if limit > WithinWord {
            let mut end;
            loop {
                end = self.previous_word(limit).is_none();
                if end
                    || !self.is_valid_line(WithinDocument)
                    || self.is_valid_character(WithinWord)
                {
                    break;
                }
            }
            if !end && self.is_valid_character(WithinDocument) {
                self.to_back_with(Level::Character, false);
                self.character -= 1;
                return self.character();
            }
        }
        None
    }

    // Level-dispatching forms.

    /// Advance at `level`, returning the new element.
    pub fn next(&mut self, level: Level, limit: IterateLimit) -> Option<Node<'a>> {
        match level {
            Level::Page => self.next_page(limit).map(Node::Page),
            Level::Image => self.next_image(limit).map(Node::Image),
            Level::Region => self.next_region(limit).map(Node::Region),
            Level::Block => self.next_block(limit).map(Node::Block),
            Level::Line => self.next_line(limit).map(Node::Line),
            Level::Word => self.next_word(limit).map(Node::Word),
            Level::Character => self.next_character(limit).map(Node::Character),
        }
    }

    /// Step back at `level`, returning the new element.
    pub fn previous(&mut self, level: Level, limit: IterateLimit) -> Option<Node<'a>> {
        match level {
            Level::Page => self.previous_page(limit).map(Node::Page),
            Level::Image => self.previous_image(limit).map(Node::Image),
            Level::Region => self.previous_region(limit).map(Node::Region),
            Level::Block => self.previous_block(limit).map(Node::Block),
            Level::Line => self.previous_line(limit).map(Node::Line),
            Level::Word => self.previous_word(limit).map(Node::Word),
            Level::Character => self.previous_character(limit).map(Node::Character),
        }
    }

    /// The element `next` would return, without moving this cursor.
    pub fn peek_next(&self, level: Level, limit: IterateLimit) -> Option<Node<'a>> {
        let mut ahead = *self;
        ahead.next(level, limit)
    }

    /// The element `previous` would return, without moving this cursor.
    pub fn peek_previous(&self, level: Level, limit: IterateLimit) -> Option<Node<'a>> {
        let mut ahead = *self;
        ahead.previous(level, limit)
    }

    pub fn has_next(&self, level: Level, limit: IterateLimit) -> bool {
        self.peek_next(level, limit).is_some()
    }

    pub fn has_previous(&self, level: Level, limit: IterateLimit) -> bool {
        self.peek_previous(level, limit).is_some()
    }

    /// Settle on the first valid element at `level` at or after the current
    /// position.
    ///
    /// `next_*` only skips empty containers below a valid parent. After a
    /// front reset the chain can be broken higher up (a page whose first
    /// region has no blocks, say); `seek` repairs the shallowest broken level
    /// first and works downwards, never crossing `limit`.
    pub fn seek(&mut self, level: Level, limit: IterateLimit) -> Option<Node<'a>> {
        loop {
            if let Some(node) = self.node(level) {
                return Some(node);
            }
            let broken = level
                .path()
                .into_iter()
                .find(|l| !self.is_valid_at(*l, WithinDocument))?;
            if broken == Level::Page {
                return None;
            }
            self.next(broken, limit)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Document};

    fn bbox() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 10.0, 10.0)
    }

    fn line(words: &[&str]) -> Line {
        Line::with_words(words.iter().map(|w| Word::from_text(w, bbox())).collect())
    }

    fn page(number: u32, blocks: Vec<Block>) -> Page {
        Page::letter(number).with_region(Region::with_blocks(blocks))
    }

    #[test]
    fn test_next_word_stays_within_line() {
        let doc = Document::with_pages(vec![page(
            1,
            vec![Block::with_lines(vec![line(&["a", "b"]), line(&["c"])])],
        )]);
        let mut cursor = doc.cursor(1);
        assert_eq!(cursor.next_word(WithinLine).unwrap().text(), "b");
        assert!(cursor.next_word(WithinLine).is_none());
        // at-end inside the line, the line itself is untouched
        assert_eq!(cursor.line().unwrap().text(), "a b");
        assert_eq!(cursor.next_word(WithinBlock).unwrap().text(), "c");
    }

    #[test]
    fn test_narrow_limit_refuses_to_move() {
        let doc = Document::with_pages(vec![page(1, vec![Block::with_lines(vec![line(&["a", "b"])])])]);
        let mut cursor = doc.cursor(1);
        assert!(cursor.next_word(WithinWord).is_none());
        assert!(cursor.next_character(IterateLimit::DoNotIterate).is_none());
        assert!(cursor.previous_page(WithinPage).is_none());
        assert_eq!(cursor.word().unwrap().text(), "a");
        assert_eq!(cursor.character().unwrap().text, "a");
    }

    #[test]
    fn test_next_page_reaches_document_end() {
        let doc = Document::with_pages(vec![page(1, vec![]), page(2, vec![])]);
        let mut cursor = doc.cursor(1);
        assert_eq!(cursor.next_page(WithinDocument).unwrap().number, 2);
        assert!(cursor.next_page(WithinDocument).is_none());
        assert!(!cursor.is_valid_page());
        // stays at the end
        assert!(cursor.next_page(WithinDocument).is_none());
        assert_eq!(cursor.previous_page(WithinDocument).unwrap().number, 2);
    }

    #[test]
    fn test_next_image_skips_pages_without_images() {
        let doc = Document::with_pages(vec![
            Page::letter(1).with_image(Image::new(bbox()).with_resource("a")),
            Page::letter(2),
            Page::letter(3).with_image(Image::new(bbox()).with_resource("b")),
        ]);
        let mut cursor = doc.cursor(1);
        assert!(cursor.next_image(WithinPage).is_none());
        let image = cursor.next_image(WithinDocument).unwrap();
        assert_eq!(image.resource_id.as_deref(), Some("b"));
        assert_eq!(cursor.page().unwrap().number, 3);

        let image = cursor.previous_image(WithinDocument).unwrap();
        assert_eq!(image.resource_id.as_deref(), Some("a"));
        assert_eq!(cursor.page().unwrap().number, 1);
    }

    #[test]
    fn test_previous_lands_on_last_element() {
        let doc = Document::with_pages(vec![page(
            1,
            vec![Block::with_lines(vec![line(&["ab", "cd"])]), Block::with_lines(vec![line(&["ef"])])],
        )]);
        let mut cursor = doc.cursor(1);
        cursor.next_block(WithinRegion);
        assert_eq!(cursor.word().unwrap().text(), "ef");
        assert_eq!(cursor.previous_character(WithinDocument).unwrap().text, "d");
        assert_eq!(cursor.word().unwrap().text(), "cd");
        assert_eq!(cursor.previous_word(WithinLine).unwrap().text(), "ab");
        // previous word resets to the front of the word
        assert_eq!(cursor.character().unwrap().text, "a");
        assert!(cursor.previous_character(WithinDocument).is_none());
    }

    #[test]
    fn test_to_front_and_to_back() {
        let doc = Document::with_pages(vec![page(1, vec![Block::with_lines(vec![line(&["abc"])])])]);
        let mut cursor = doc.cursor(1);
        cursor.to_back(Level::Character);
        assert!(cursor.character().is_none());
        assert!(cursor.word().is_some());
        assert_eq!(cursor.previous_character(WithinWord).unwrap().text, "c");
        cursor.to_front(Level::Character);
        assert_eq!(cursor.character().unwrap().text, "a");
    }

    #[test]
    fn test_to_front_validate_aborts_on_invalid_parent() {
        let doc = Document::with_pages(vec![page(1, vec![Block::with_lines(vec![line(&["abc"])])])]);
        let mut cursor = doc.cursor(1);
        cursor.next_character(WithinWord);
        cursor.to_back(Level::Word);
        cursor.to_front(Level::Character);
        assert_eq!(cursor.offset(Level::Word), Some(1));
        assert_eq!(cursor.index(Level::Character), 1);
    }

    #[test]
    fn test_peek_does_not_move() {
        let doc = Document::with_pages(vec![page(1, vec![Block::with_lines(vec![line(&["a", "b"])])])]);
        let cursor = doc.cursor(1);
        assert!(cursor.has_next(Level::Word, WithinLine));
        assert!(!cursor.has_previous(Level::Word, WithinLine));
        let peeked = cursor.peek_next(Level::Word, WithinLine).unwrap();
        assert_eq!(peeked.text(), "b");
        assert_eq!(cursor.word().unwrap().text(), "a");
    }

    #[test]
    fn test_seek_repairs_broken_chain() {
        let doc = Document::with_pages(vec![
            Page::letter(1).with_region(Region::default()),
            page(2, vec![Block::default(), Block::with_lines(vec![line(&["x"])])]),
        ]);
        let mut cursor = doc.cursor(1);
        assert!(cursor.next_character(WithinDocument).is_none());

        let mut cursor = doc.cursor(1);
        assert!(cursor.seek(Level::Character, WithinPage).is_none());

        let mut cursor = doc.cursor(1);
        let node = cursor.seek(Level::Character, WithinDocument).unwrap();
        assert_eq!(node.text(), "x");
        assert_eq!(cursor.page().unwrap().number, 2);
    }
}

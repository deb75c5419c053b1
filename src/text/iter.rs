//! Reading-order text iteration.

use super::options::TextOptions;
use crate::cursor::{Cursor, IterateLimit, Level};
use crate::model::Document;
use std::collections::VecDeque;
use unicode_normalization::UnicodeNormalization;

/// Latin presentation-form ligatures (ﬀ ﬁ ﬂ ﬃ ﬄ ﬅ ﬆ).
const LIGATURES: std::ops::RangeInclusive<char> = '\u{FB00}'..='\u{FB06}';

/// Iterator over a document's text in reading order.
///
/// Yields each code point together with the cursor of the character it came
/// from. Word separators are synthesised: a word followed by a space, or the
/// last word of a line, yields `' '` (or `'\n'` at line ends when line breaks
/// are preserved) at the word's at-end character position.
///
/// The iterator is double-ended. Both ends walk the same positions and stop
/// where they meet, so `rev()` yields exactly the forward items reversed.
pub struct TextIter<'a> {
    cursor: Cursor<'a>,
    limit: IterateLimit,
    options: TextOptions,
    pending: VecDeque<(Cursor<'a>, char)>,
    done: bool,
    // Last position taken from the back; nothing at or after it is yielded
    // from the front.
    back: Cursor<'a>,
    back_pending: VecDeque<(Cursor<'a>, char)>,
    back_done: bool,
}

impl<'a> TextIter<'a> {
    /// Iterate the whole document with default options.
    pub fn new(document: &'a Document) -> Self {
        Self::with_options(document, TextOptions::default())
    }

    /// Iterate the pages selected by `options`.
    pub fn with_options(document: &'a Document, options: TextOptions) -> Self {
        Self::from_cursor(Cursor::at_page(document, 1), options)
    }

    /// Iterate from `start` to the end of the document. Pages not selected
    /// by `options` are skipped.
    pub fn from_cursor(start: Cursor<'a>, options: TextOptions) -> Self {
        let back = match start.document() {
            Some(document) => Cursor::at_page(document, document.page_count() + 1),
            None => start,
        };
        Self::start(start, back, IterateLimit::WithinDocument, options)
    }

    /// Iterate page `page` (1-indexed) only. The page selection in `options`
    /// is ignored.
    pub fn page(document: &'a Document, page: u32, options: TextOptions) -> Self {
        let mut cursor = Cursor::at_page(document, page);
        if page == 0 || !cursor.is_valid_page() {
            cursor.to_back(Level::Page);
        }
        let mut back = cursor;
        back.to_back(Level::Region);
        Self::start(cursor, back, IterateLimit::WithinPage, options)
    }

    fn start(
        mut cursor: Cursor<'a>,
        back: Cursor<'a>,
        limit: IterateLimit,
        options: TextOptions,
    ) -> Self {
        let done = cursor.seek(Level::Character, limit).is_none();
        let mut iter = Self {
            cursor,
            limit,
            options,
            pending: VecDeque::new(),
            done,
            back,
            back_pending: VecDeque::new(),
            back_done: done,
        };
        iter.skip_unselected_pages();
        iter
    }

    /// Current position of the underlying cursor.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    fn page_selected(&self, cursor: &Cursor<'a>) -> bool {
        if self.limit < IterateLimit::WithinDocument {
            return true;
        }
        match cursor.offset(Level::Page) {
            Some(index) if cursor.is_valid_page() => self.options.pages.includes(index as u32 + 1),
            _ => false,
        }
    }

    fn skip_unselected_pages(&mut self) {
        if self.limit < IterateLimit::WithinDocument {
            return;
        }
        while !self.done {
            if !self.cursor.is_valid_page() {
                self.done = true;
                return;
            }
            if self.page_selected(&self.cursor) {
                return;
            }
            self.cursor.next_page(self.limit);
            if self.cursor.seek(Level::Character, self.limit).is_none() {
                self.done = true;
            }
        }
    }

    /// True when `at` sits on the final character of a hyphenated line and
    /// that character should be dropped.
    fn is_joined_hyphen(&self, at: &Cursor<'a>) -> bool {
        if !self.options.join_hyphenated {
            return false;
        }
        match at.line() {
            Some(line) if line.hyphenated => !at.has_next(Level::Character, IterateLimit::WithinLine),
            _ => false,
        }
    }

    /// The separator yielded at a word's at-end position, if any.
    fn separator(&self, at: &Cursor<'a>) -> Option<char> {
        let word = at.word()?;
        if !at.has_next(Level::Word, IterateLimit::WithinLine) {
            let hyphenated = at.line().map(|l| l.hyphenated).unwrap_or(false);
            if hyphenated && self.options.join_hyphenated {
                None
            } else if self.options.preserve_line_breaks {
                Some('\n')
            } else {
                Some(' ')
            }
        } else if word.space_after {
            Some(' ')
        } else {
            None
        }
    }

    fn expand(&self, at: Cursor<'a>, text: &str, out: &mut VecDeque<(Cursor<'a>, char)>) {
        let mut chars = text.chars().peekable();
        if chars.peek().is_none() {
            out.push_back((at, char::REPLACEMENT_CHARACTER));
            return;
        }
        for c in chars {
            if self.options.decompose_ligatures && LIGATURES.contains(&c) {
                for d in std::iter::once(c).nfkc() {
                    out.push_back((at, d));
                }
            } else {
                out.push_back((at, c));
            }
        }
    }

    /// Step past the current word and settle on the next character.
    fn advance_word(&mut self) {
        self.cursor.next_word(self.limit);
        if self.cursor.seek(Level::Character, self.limit).is_none() {
            self.done = true;
            return;
        }
        self.skip_unselected_pages();
    }

    /// Move the back cursor to the previous position that yields text.
    /// Returns `false` once it runs into the front or off the start.
    fn retreat(&mut self) -> bool {
        let mut at = self.back;
        loop {
            match at.offset(Level::Character) {
                Some(offset) if offset > 0 => {
                    at.previous_character(IterateLimit::WithinWord);
                }
                _ => {
                    if at.previous_word(self.limit).is_none() {
                        return false;
                    }
                    at.to_back(Level::Character);
                }
            }

            if self.done || at.precedes(&self.cursor) {
                return false;
            }
            if !self.page_selected(&at) {
                continue;
            }

            let mut items = VecDeque::new();
            if let Some(character) = at.character() {
                if self.is_joined_hyphen(&at) {
                    continue;
                }
                self.expand(at, &character.text, &mut items);
            } else if at.word().map(|w| !w.is_empty()).unwrap_or(false) {
                match self.separator(&at) {
                    Some(separator) => items.push_back((at, separator)),
                    None => continue,
                }
            } else {
                continue;
            }

            self.back = at;
            self.back_pending = items;
            return true;
        }
    }
}

impl<'a> Iterator for TextIter<'a> {
    type Item = (Cursor<'a>, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            if !self.done && !self.cursor.precedes(&self.back) {
                self.done = true;
            }
            if self.done {
                return self.back_pending.pop_front();
            }

            if let Some(character) = self.cursor.character() {
                if !self.is_joined_hyphen(&self.cursor) {
                    let mut items = VecDeque::new();
                    self.expand(self.cursor, &character.text, &mut items);
                    self.pending = items;
                }
                self.cursor.next_character(IterateLimit::WithinWord);
                continue;
            }

            if self.cursor.word().is_none() {
                self.done = true;
                continue;
            }

            let position = self.cursor;
            let separator = self.separator(&position);
            self.advance_word();
            if let Some(separator) = separator {
                return Some((position, separator));
            }
        }
    }
}

impl<'a> DoubleEndedIterator for TextIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.back_pending.pop_back() {
            return Some(item);
        }
        if !self.back_done && !self.retreat() {
            self.back_done = true;
        }
        if self.back_done {
            return self.pending.pop_back();
        }
        self.back_pending.pop_back()
    }
}

//! Text layout types: regions, blocks, lines, words and characters.

use super::BoundingBox;
use serde::{Deserialize, Serialize};

/// A text region on a page (typically a column or a float).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Region {
    /// Region bounds
    #[serde(default)]
    pub bbox: BoundingBox,

    /// Text blocks in reading order
    pub blocks: Vec<Block>,
}

impl Region {
    /// Create an empty region.
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            blocks: Vec::new(),
        }
    }

    /// Create a region from blocks, deriving its bounds from them.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        let bbox = blocks
            .iter()
            .fold(BoundingBox::default(), |acc, b| acc | b.bbox);
        Self { bbox, blocks }
    }

    /// Add a block to the region.
    pub fn add_block(&mut self, block: Block) {
        self.bbox |= block.bbox;
        self.blocks.push(block);
    }

    /// Check if the region has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A block of text lines (a paragraph, caption, heading...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    /// Block bounds
    #[serde(default)]
    pub bbox: BoundingBox,

    /// Lines in reading order
    pub lines: Vec<Line>,
}

impl Block {
    /// Create an empty block.
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            lines: Vec::new(),
        }
    }

    /// Create a block from lines, deriving its bounds from them.
    pub fn with_lines(lines: Vec<Line>) -> Self {
        let bbox = lines
            .iter()
            .fold(BoundingBox::default(), |acc, l| acc | l.bbox);
        Self { bbox, lines }
    }

    /// Add a line to the block.
    pub fn add_line(&mut self, line: Line) {
        self.bbox |= line.bbox;
        self.lines.push(line);
    }

    /// Check if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the block, one line per row.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single line of words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Line bounds
    #[serde(default)]
    pub bbox: BoundingBox,

    /// Words in reading order
    pub words: Vec<Word>,

    /// Whether the line ends with a hyphen that splits a word across lines
    #[serde(default)]
    pub hyphenated: bool,
}

impl Line {
    /// Create an empty line.
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            words: Vec::new(),
            hyphenated: false,
        }
    }

    /// Create a line from words, deriving its bounds from them.
    pub fn with_words(words: Vec<Word>) -> Self {
        let bbox = words
            .iter()
            .fold(BoundingBox::default(), |acc, w| acc | w.bbox);
        Self {
            bbox,
            words,
            hyphenated: false,
        }
    }

    /// Mark the line as hyphenated.
    pub fn hyphenated(mut self, hyphenated: bool) -> Self {
        self.hyphenated = hyphenated;
        self
    }

    /// Add a word to the line.
    pub fn add_word(&mut self, word: Word) {
        self.bbox |= word.bbox;
        self.words.push(word);
    }

    /// Check if the line has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Text of the line with words separated by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A word made of characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Word bounds
    #[serde(default)]
    pub bbox: BoundingBox,

    /// Characters in reading order
    pub characters: Vec<Character>,

    /// Whether whitespace follows this word in the source
    #[serde(default = "default_space_after")]
    pub space_after: bool,

    /// Font name
    #[serde(default)]
    pub font_name: Option<String>,

    /// Font size in points
    #[serde(default)]
    pub font_size: Option<f32>,
}

fn default_space_after() -> bool {
    true
}

impl Word {
    /// Create an empty word.
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            characters: Vec::new(),
            space_after: true,
            font_name: None,
            font_size: None,
        }
    }

    /// Create a word from text, splitting `bbox` evenly across its characters.
    pub fn from_text(text: &str, bbox: BoundingBox) -> Self {
        let bbox = bbox.normalized();
        let count = text.chars().count();
        let step = if count == 0 {
            0.0
        } else {
            bbox.width() / count as f64
        };
        let characters = text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let x = bbox.x1 + step * i as f64;
                Character::new(c.to_string(), BoundingBox::new(x, bbox.y1, x + step, bbox.y2))
            })
            .collect();

        Self {
            characters,
            ..Self::new(bbox)
        }
    }

    /// Set whether whitespace follows the word.
    pub fn with_space_after(mut self, space_after: bool) -> Self {
        self.space_after = space_after;
        self
    }

    /// Set the font used by the word.
    pub fn with_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = Some(name.into());
        self.font_size = Some(size);
        self
    }

    /// Add a character to the word.
    pub fn add_character(&mut self, character: Character) {
        self.bbox |= character.bbox;
        self.characters.push(character);
    }

    /// Check if the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Concatenated text of the word's characters.
    pub fn text(&self) -> String {
        self.characters.iter().map(|c| c.text.as_str()).collect()
    }
}

/// A single glyph. The text may hold more than one code point for ligatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// UTF-8 text of the glyph
    pub text: String,

    /// Glyph bounds
    #[serde(default)]
    pub bbox: BoundingBox,
}

impl Character {
    pub fn new(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_from_text_splits_bbox() {
        let word = Word::from_text("abcd", BoundingBox::new(0.0, 0.0, 40.0, 10.0));
        assert_eq!(word.characters.len(), 4);
        assert_eq!(word.text(), "abcd");
        assert_eq!(word.characters[1].bbox, BoundingBox::new(10.0, 0.0, 20.0, 10.0));
        assert!(word.space_after);
    }

    #[test]
    fn test_line_bbox_grows_with_words() {
        let mut line = Line::new(BoundingBox::default());
        line.add_word(Word::from_text("a", BoundingBox::new(0.0, 0.0, 5.0, 10.0)));
        line.add_word(Word::from_text("b", BoundingBox::new(10.0, 0.0, 15.0, 12.0)));
        assert_eq!(line.bbox, BoundingBox::new(0.0, 0.0, 15.0, 12.0));
        assert_eq!(line.text(), "a b");
    }

    #[test]
    fn test_empty_containers() {
        assert!(Region::default().is_empty());
        assert!(Block::default().is_empty());
        assert!(Line::default().is_empty());
        assert!(Word::new(BoundingBox::default()).is_empty());
    }

    #[test]
    fn test_word_deserialize_defaults() {
        let word: Word = serde_json::from_str(
            r#"{"bbox":{"x1":0,"y1":0,"x2":1,"y2":1},"characters":[]}"#,
        )
        .unwrap();
        assert!(word.space_after);
        assert!(word.font_name.is_none());
    }
}

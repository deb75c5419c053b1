//! Structural levels and traversal limits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far a traversal may cascade into ancestor levels.
///
/// The ordering is load-bearing: every cascade decision compares a limit
/// against the level being crossed, so the discriminants must stay ascending
/// from the innermost scope outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IterateLimit {
    /// Never move.
    DoNotIterate = 0,
    /// Stay inside the current word.
    WithinWord = 1,
    /// Stay inside the current line.
    WithinLine = 2,
    /// Stay inside the current block.
    WithinBlock = 3,
    /// Stay inside the current region.
    WithinRegion = 4,
    /// Stay inside the current page.
    WithinPage = 5,
    /// Cross any boundary inside the document.
    WithinDocument = 6,
    /// No bound at all.
    UntilEnd = 99999,
}

impl IterateLimit {
    pub const ALL: [IterateLimit; 8] = [
        IterateLimit::DoNotIterate,
        IterateLimit::WithinWord,
        IterateLimit::WithinLine,
        IterateLimit::WithinBlock,
        IterateLimit::WithinRegion,
        IterateLimit::WithinPage,
        IterateLimit::WithinDocument,
        IterateLimit::UntilEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IterateLimit::DoNotIterate => "do-not-iterate",
            IterateLimit::WithinWord => "within-word",
            IterateLimit::WithinLine => "within-line",
            IterateLimit::WithinBlock => "within-block",
            IterateLimit::WithinRegion => "within-region",
            IterateLimit::WithinPage => "within-page",
            IterateLimit::WithinDocument => "within-document",
            IterateLimit::UntilEnd => "until-end",
        }
    }
}

impl fmt::Display for IterateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IterateLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IterateLimit::ALL
            .iter()
            .copied()
            .find(|limit| limit.as_str() == s.trim())
            .ok_or_else(|| format!("unknown iterate limit: {}", s))
    }
}

/// A structural level of a document below the document itself.
///
/// Image and Region are both children of Page; Image is not part of the
/// text reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Page,
    Image,
    Region,
    Block,
    Line,
    Word,
    Character,
}

impl Level {
    /// All levels in the order the representation lists them.
    pub const ALL: [Level; 7] = [
        Level::Page,
        Level::Image,
        Level::Region,
        Level::Block,
        Level::Line,
        Level::Word,
        Level::Character,
    ];

    /// The limit that keeps a traversal at this level inside its parent.
    pub fn default_limit(&self) -> IterateLimit {
        match self {
            Level::Page => IterateLimit::WithinDocument,
            Level::Image | Level::Region => IterateLimit::WithinPage,
            Level::Block => IterateLimit::WithinRegion,
            Level::Line => IterateLimit::WithinBlock,
            Level::Word => IterateLimit::WithinLine,
            Level::Character => IterateLimit::WithinWord,
        }
    }

    /// The parent level, `None` for pages (whose parent is the document).
    pub fn parent(&self) -> Option<Level> {
        match self {
            Level::Page => None,
            Level::Image | Level::Region => Some(Level::Page),
            Level::Block => Some(Level::Region),
            Level::Line => Some(Level::Block),
            Level::Word => Some(Level::Line),
            Level::Character => Some(Level::Word),
        }
    }

    /// Levels from Page down to (and including) this one.
    pub fn path(&self) -> Vec<Level> {
        let mut path = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Position in [`Level::ALL`], which is also the order a front reset
    /// cascades through.
    pub(crate) fn ordinal(&self) -> usize {
        match self {
            Level::Page => 0,
            Level::Image => 1,
            Level::Region => 2,
            Level::Block => 3,
            Level::Line => 4,
            Level::Word => 5,
            Level::Character => 6,
        }
    }

    /// Single-letter tag used by the cursor representation.
    pub fn tag(&self) -> char {
        match self {
            Level::Page => 'p',
            Level::Image => 'i',
            Level::Region => 'r',
            Level::Block => 'b',
            Level::Line => 'l',
            Level::Word => 'w',
            Level::Character => 'c',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Page => "page",
            Level::Image => "image",
            Level::Region => "region",
            Level::Block => "block",
            Level::Line => "line",
            Level::Word => "word",
            Level::Character => "character",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s || (s.len() == 1 && s.starts_with(level.tag())))
            .ok_or_else(|| format!("unknown level: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_ordering() {
        assert!(IterateLimit::DoNotIterate < IterateLimit::WithinWord);
        assert!(IterateLimit::WithinWord < IterateLimit::WithinLine);
        assert!(IterateLimit::WithinRegion < IterateLimit::WithinPage);
        assert!(IterateLimit::WithinDocument < IterateLimit::UntilEnd);
        assert!(IterateLimit::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_limits() {
        assert_eq!(Level::Page.default_limit(), IterateLimit::WithinDocument);
        assert_eq!(Level::Image.default_limit(), IterateLimit::WithinPage);
        assert_eq!(Level::Region.default_limit(), IterateLimit::WithinPage);
        assert_eq!(Level::Character.default_limit(), IterateLimit::WithinWord);
    }

    #[test]
    fn test_path() {
        assert_eq!(Level::Page.path(), vec![Level::Page]);
        assert_eq!(Level::Image.path(), vec![Level::Page, Level::Image]);
        assert_eq!(
            Level::Line.path(),
            vec![Level::Page, Level::Region, Level::Block, Level::Line]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("word".parse::<Level>().unwrap(), Level::Word);
        assert_eq!("C".parse::<Level>().unwrap(), Level::Character);
        assert!("glyph".parse::<Level>().is_err());
        assert_eq!(
            "within-page".parse::<IterateLimit>().unwrap(),
            IterateLimit::WithinPage
        );
        assert!("within-chapter".parse::<IterateLimit>().is_err());
    }
}

//! Text extraction and search options.

use std::ops::RangeInclusive;

/// Options controlling how a document's layout is turned into text.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Expand Latin ligature glyphs (ﬁ, ﬂ, ﬀ...) into their letters
    pub decompose_ligatures: bool,

    /// Drop the trailing hyphen of hyphenated lines and join the word halves
    pub join_hyphenated: bool,

    /// Emit `'\n'` at line ends instead of a space
    pub preserve_line_breaks: bool,

    /// Page selection
    pub pages: PageSelection,

    /// Render pages in parallel
    pub parallel: bool,

    /// Separator placed between pages when rendering several
    pub page_separator: String,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ligature decomposition.
    pub fn with_ligatures_decomposed(mut self, decompose: bool) -> Self {
        self.decompose_ligatures = decompose;
        self
    }

    /// Enable or disable joining of hyphenated lines.
    pub fn with_hyphen_joining(mut self, join: bool) -> Self {
        self.join_hyphenated = join;
        self
    }

    /// Enable or disable line-break preservation.
    pub fn with_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the separator placed between pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            decompose_ligatures: true,
            join_hyphenated: true,
            preserve_line_breaks: false,
            pages: PageSelection::All,
            parallel: true,
            page_separator: "\n\n".to_string(),
        }
    }
}

/// Options for searching document text.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Match regardless of letter case
    pub ignore_case: bool,

    /// Only match whole words
    pub whole_words: bool,

    /// Treat the term as a regular expression instead of a literal
    pub regex: bool,

    /// How the searched text is produced
    pub text: TextOptions,
}

impl SearchOptions {
    /// Create new search options with defaults (case-sensitive literal search).
    pub fn new() -> Self {
        Self::default()
    }

    /// Match regardless of letter case.
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Only match whole words.
    pub fn whole_words(mut self) -> Self {
        self.whole_words = true;
        self
    }

    /// Interpret the term as a regular expression.
    pub fn regex(mut self) -> Self {
        self.regex = true;
        self
    }

    /// Set the text options used to build the searched text.
    pub fn with_text_options(mut self, text: TextOptions) -> Self {
        self.text = text;
        self
    }
}

/// Page selection for text extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Select all pages
    #[default]
    All,
    /// Select a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Select specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        // Simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start.trim().parse().map_err(|_| "Invalid start page")?;
                let end: u32 = end.trim().parse().map_err(|_| "Invalid end page")?;
                if start > end {
                    return Err(format!("Range start {} is after end {}", start, end));
                }
                return Ok(PageSelection::Range(start..=end));
            }
        }

        // Comma-separated list with possible ranges
        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start: u32 = start.trim().parse().map_err(|_| "Invalid page number")?;
                let end: u32 = end.trim().parse().map_err(|_| "Invalid page number")?;
                for p in start..=end {
                    if !pages.contains(&p) {
                        pages.push(p);
                    }
                }
            } else {
                let p: u32 = part.parse().map_err(|_| "Invalid page number")?;
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort();
        Ok(PageSelection::Pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_options_defaults() {
        let options = TextOptions::default();
        assert!(options.decompose_ligatures);
        assert!(options.join_hyphenated);
        assert!(!options.preserve_line_breaks);
        assert!(options.parallel);
        assert_eq!(options.page_separator, "\n\n");
    }

    #[test]
    fn test_text_options_builder() {
        let options = TextOptions::new()
            .with_line_breaks(true)
            .with_hyphen_joining(false)
            .with_pages(PageSelection::Range(2..=3))
            .sequential();
        assert!(options.preserve_line_breaks);
        assert!(!options.join_hyphenated);
        assert!(!options.parallel);
        assert!(options.pages.includes(3));
        assert!(!options.pages.includes(1));
    }

    #[test]
    fn test_search_options_builder() {
        let options = SearchOptions::new().ignore_case().whole_words();
        assert!(options.ignore_case);
        assert!(options.whole_words);
        assert!(!options.regex);
    }

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
    }

    #[test]
    fn test_page_selection_parse() {
        let all = PageSelection::parse("all").unwrap();
        assert!(matches!(all, PageSelection::All));

        let range = PageSelection::parse("1-10").unwrap();
        assert_eq!(range, PageSelection::Range(1..=10));

        let mixed = PageSelection::parse("1,3,5-7,10").unwrap();
        assert_eq!(mixed, PageSelection::Pages(vec![1, 3, 5, 6, 7, 10]));

        assert!(PageSelection::parse("x-3").is_err());
        assert!(PageSelection::parse("5-2").is_err());
    }
}

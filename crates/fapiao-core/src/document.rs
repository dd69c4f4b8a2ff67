//! Plain-text page input for the extraction engine.
//!
//! Producing this text from a binary document is a collaborator's
//! job; the engine only sees already-extracted, newline-delimited
//! text, one unit per page.

use std::fs;
use std::path::Path;

use crate::error::{FapiaoError, Result};

/// Form feed, the page separator `pdftotext` and friends emit.
const PAGE_SEPARATOR: char = '\u{0c}';

/// The trimmed, non-empty lines of one page, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    lines: Vec<String>,
}

impl PageText {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Build a page from raw text, trimming lines and dropping empty
    /// ones. Line order is preserved.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One source document as an ordered page sequence. Page order is
/// significant: continuation merging depends on cross-page adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    pages: Vec<PageText>,
}

impl DocumentText {
    pub fn new(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    /// Split raw text into pages on form feeds. A page whose text is
    /// all whitespace contributes no lines but keeps its slot so page
    /// counts stay honest.
    pub fn from_text(text: &str) -> Self {
        let pages = text.split(PAGE_SEPARATOR).map(PageText::from_text).collect();
        Self { pages }
    }

    /// Load a document from a plain-text file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                FapiaoError::UnreadableDocument {
                    path: path.to_path_buf(),
                    reason: "not valid UTF-8 text".to_string(),
                }
            } else {
                FapiaoError::Io(e)
            }
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_are_trimmed_and_empties_dropped() {
        let page = PageText::from_text("  第一行  \n\n第二行\n   \n");
        assert_eq!(page.lines(), ["第一行", "第二行"].as_slice());
    }

    #[test]
    fn form_feed_separates_pages() {
        let document = DocumentText::from_text("第一页\u{0c}第二页第一行\n第二行");
        assert_eq!(document.page_count(), 2);
        assert_eq!(document.pages()[1].lines().len(), 2);
    }

    #[test]
    fn blank_page_keeps_its_slot() {
        let document = DocumentText::from_text("第一页\u{0c}   \u{0c}第三页");
        assert_eq!(document.page_count(), 3);
        assert!(document.pages()[1].is_empty());
    }
}

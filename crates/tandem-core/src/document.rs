//! Document input for a comparison

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named, line-oriented text document.
///
/// Immutable once handed to the engine; each comparison works on its
/// own pair of documents and owns no cross-comparison state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name (file name, tab title, ...)
    pub name: String,
    /// The document content, split into lines without terminators
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Build a document from whole-file content, splitting on line breaks.
    /// Handles both `\n` and `\r\n`; an empty string yields zero lines.
    pub fn from_content(name: impl Into<String>, content: &str) -> Self {
        let lines = content
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self::new(name, lines)
    }

    /// Read a document from disk, named after the file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_content(name, &content))
    }

    /// Number of lines in the document
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_splits_lines() {
        let doc = Document::from_content("a.txt", "foo\nbar\nbaz");
        assert_eq!(doc.lines, vec!["foo", "bar", "baz"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_from_content_trailing_newline() {
        let doc = Document::from_content("a.txt", "foo\nbar\n");
        assert_eq!(doc.lines, vec!["foo", "bar"]);
    }

    #[test]
    fn test_from_content_crlf() {
        let doc = Document::from_content("a.txt", "foo\r\nbar\r\n");
        assert_eq!(doc.lines, vec!["foo", "bar"]);
    }

    #[test]
    fn test_from_content_empty() {
        let doc = Document::from_content("empty.txt", "");
        assert!(doc.is_empty());
    }
}

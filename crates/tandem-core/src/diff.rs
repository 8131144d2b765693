//! Diff computation engine

use crate::document::Document;
use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use std::path::Path;
use thiserror::Error;

/// Default cap on the combined line count of one comparison
pub const DEFAULT_MAX_LINES: usize = 500_000;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Input too large: {lines} lines exceeds the {limit} line limit")]
    InputTooLarge { lines: usize, limit: usize },
}

/// The kind of a diff operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    /// Lines present in both documents
    Equal,
    /// Lines present only in the left document
    Delete,
    /// Lines present only in the right document
    Insert,
}

/// One operation of the edit script, covering a run of consecutive lines.
///
/// Operations appear in document order: concatenating the lines of all
/// Equal and Delete ops reconstructs the left document, Equal and Insert
/// the right one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffOp {
    Equal(Vec<String>),
    Delete(Vec<String>),
    Insert(Vec<String>),
}

impl DiffOp {
    pub fn kind(&self) -> OpKind {
        match self {
            DiffOp::Equal(_) => OpKind::Equal,
            DiffOp::Delete(_) => OpKind::Delete,
            DiffOp::Insert(_) => OpKind::Insert,
        }
    }

    /// The lines this operation covers
    pub fn lines(&self) -> &[String] {
        match self {
            DiffOp::Equal(lines) | DiffOp::Delete(lines) | DiffOp::Insert(lines) => lines,
        }
    }

    /// Number of lines covered by this operation
    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    fn from_kind(kind: OpKind, lines: Vec<String>) -> Self {
        match kind {
            OpKind::Equal => DiffOp::Equal(lines),
            OpKind::Delete => DiffOp::Delete(lines),
            OpKind::Insert => DiffOp::Insert(lines),
        }
    }
}

/// Aggregate change counts for a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Total lines inserted on the right side
    pub additions: usize,
    /// Total lines deleted from the left side
    pub deletions: usize,
}

impl DiffStats {
    /// Check if the two documents compared identical
    pub fn is_clean(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// The edit script in document order
    pub ops: Vec<DiffOp>,
    /// Line counts per operation kind
    pub stats: DiffStats,
}

impl DiffResult {
    /// Expand the edit script into scroll-aligned dual-pane rows
    pub fn rows(&self) -> Vec<crate::render::RenderRow> {
        crate::render::render(&self.ops)
    }
}

/// A diff between two documents read from disk
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub left: Document,
    pub right: Document,
    pub result: DiffResult,
}

/// The main diff engine
pub struct DiffEngine {
    /// Cap on the combined line count of both inputs
    max_lines: usize,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_lines(mut self, limit: usize) -> Self {
        self.max_lines = limit;
        self
    }

    /// Compute the line-level edit script between two documents.
    ///
    /// The script is minimal (a line is never reported as a paired
    /// Delete/Insert when it could have been Equal) and deterministic:
    /// within a changed region every Delete precedes every Insert, and
    /// consecutive lines with the same tag coalesce into a single op.
    pub fn compare(&self, left: &[String], right: &[String]) -> Result<DiffResult, DiffError> {
        let total = left.len() + right.len();
        if total > self.max_lines {
            return Err(DiffError::InputTooLarge {
                lines: total,
                limit: self.max_lines,
            });
        }

        let left_refs: Vec<&str> = left.iter().map(|s| s.as_str()).collect();
        let right_refs: Vec<&str> = right.iter().map(|s| s.as_str()).collect();
        let text_diff = TextDiff::from_slices(&left_refs, &right_refs);

        let mut ops: Vec<DiffOp> = Vec::new();
        let mut stats = DiffStats::default();
        let mut run_kind: Option<OpKind> = None;
        let mut run: Vec<String> = Vec::new();

        for change in text_diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => OpKind::Equal,
                ChangeTag::Delete => OpKind::Delete,
                ChangeTag::Insert => OpKind::Insert,
            };
            match kind {
                OpKind::Delete => stats.deletions += 1,
                OpKind::Insert => stats.additions += 1,
                OpKind::Equal => {}
            }
            if run_kind != Some(kind) {
                if let Some(prev) = run_kind.take() {
                    ops.push(DiffOp::from_kind(prev, std::mem::take(&mut run)));
                }
                run_kind = Some(kind);
            }
            run.push(change.value().to_string());
        }
        if let Some(prev) = run_kind {
            ops.push(DiffOp::from_kind(prev, run));
        }

        Ok(DiffResult { ops, stats })
    }

    /// Compare two already-loaded documents
    pub fn compare_documents(
        &self,
        left: &Document,
        right: &Document,
    ) -> Result<DiffResult, DiffError> {
        self.compare(&left.lines, &right.lines)
    }

    /// Read and compare two files
    pub fn compare_files(
        &self,
        left_path: &Path,
        right_path: &Path,
    ) -> Result<FileDiff, DiffError> {
        let left = Document::from_file(left_path)?;
        let right = Document::from_file(right_path)?;
        let result = self.compare_documents(&left, &right)?;

        Ok(FileDiff {
            left,
            right,
            result,
        })
    }
}

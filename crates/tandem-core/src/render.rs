//! Dual-pane render rows
//!
//! Expands an edit script into a flat row list where row *i* on the
//! left pane is always vertically aligned with row *i* on the right
//! pane. Unpaired Delete/Insert lines get a Blank cell on the opposite
//! side so scroll positions stay in 1:1 correspondence.

use crate::diff::DiffOp;
use serde::{Deserialize, Serialize};

/// One display cell of a render row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// A line of document text
    Text(String),
    /// Placeholder opposite an unpaired Delete/Insert
    Blank,
}

impl Cell {
    /// The line content, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Classification of a render row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// Present on both sides
    Unchanged,
    /// Present only on the left side
    Removed,
    /// Present only on the right side
    Added,
}

/// One vertically-aligned pair of cells across the two panes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRow {
    pub left: Cell,
    pub right: Cell,
}

impl RenderRow {
    pub fn unchanged(line: &str) -> Self {
        Self {
            left: Cell::Text(line.to_string()),
            right: Cell::Text(line.to_string()),
        }
    }

    pub fn removed(line: &str) -> Self {
        Self {
            left: Cell::Text(line.to_string()),
            right: Cell::Blank,
        }
    }

    pub fn added(line: &str) -> Self {
        Self {
            left: Cell::Blank,
            right: Cell::Text(line.to_string()),
        }
    }

    pub fn kind(&self) -> RowKind {
        match (&self.left, &self.right) {
            (Cell::Text(_), Cell::Text(_)) => RowKind::Unchanged,
            (Cell::Text(_), Cell::Blank) => RowKind::Removed,
            // render never emits an all-blank row
            (Cell::Blank, _) => RowKind::Added,
        }
    }
}

/// Expand an edit script into scroll-aligned dual-pane rows.
///
/// Concatenating the left Text cells in row order reconstructs the left
/// document exactly; likewise for the right cells and the right document.
pub fn render(ops: &[DiffOp]) -> Vec<RenderRow> {
    let mut rows = Vec::with_capacity(ops.iter().map(DiffOp::len).sum());

    for op in ops {
        match op {
            DiffOp::Equal(lines) => {
                rows.extend(lines.iter().map(|line| RenderRow::unchanged(line)));
            }
            DiffOp::Delete(lines) => {
                rows.extend(lines.iter().map(|line| RenderRow::removed(line)));
            }
            DiffOp::Insert(lines) => {
                rows.extend(lines.iter().map(|line| RenderRow::added(line)));
            }
        }
    }

    rows
}

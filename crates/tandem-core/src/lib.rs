//! Tandem Core - Line diff engine with dual-pane rendering
//!
//! This library computes a line-level alignment between two documents
//! and turns it into render rows suitable for two scroll-synchronized
//! panes, plus aggregate statistics.

pub mod diff;
pub mod document;
pub mod render;

pub use diff::{DiffEngine, DiffError, DiffOp, DiffResult, DiffStats, FileDiff, OpKind};
pub use document::Document;
pub use render::{render, Cell, RenderRow, RowKind};

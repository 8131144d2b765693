//! View rendering modules

mod side_by_side;

pub use side_by_side::render_side_by_side;

use unicode_width::UnicodeWidthChar;

/// Replace tabs with spaces so column math stays consistent
pub(crate) fn expand_tabs(text: &str, tab_width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut col = 0usize;
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - (col % tab_width.max(1));
            for _ in 0..pad {
                out.push(' ');
            }
            col += pad;
        } else {
            out.push(ch);
            col += ch.width().unwrap_or(0);
        }
    }
    out
}

/// Cut a horizontal window out of a line by display columns.
/// A wide character straddling either edge is replaced with a space.
pub(crate) fn clip_columns(text: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        let start = col;
        col += ch_width;
        if col <= skip {
            continue;
        }
        if start >= skip + width {
            break;
        }
        if start < skip || col > skip + width {
            // partially visible wide char
            let visible = col.min(skip + width) - start.max(skip);
            for _ in 0..visible {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

//! Application state for the side-by-side viewer

use crate::config::{Config, Palette};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tandem_core::{DiffResult, DiffStats, Document, RenderRow, RowKind};

/// A render row annotated with per-side line numbers for the gutters
#[derive(Debug, Clone)]
pub struct PaneRow {
    pub row: RenderRow,
    pub left_line: Option<usize>,
    pub right_line: Option<usize>,
}

pub struct App {
    pub left_name: String,
    pub right_name: String,
    pub rows: Vec<PaneRow>,
    pub stats: DiffStats,
    /// Vertical offset shared by both panes; this is the scroll sync
    pub scroll_offset: usize,
    pub horizontal_scroll: usize,
    pub palette: Palette,
    pub scrollbar_visible: bool,
    pub tab_width: usize,
    /// Digits needed for the largest line number on either side
    pub number_width: usize,
    /// Content height of the last drawn frame, for paging and clamping
    pub viewport_height: usize,
}

impl App {
    pub fn new(left: &Document, right: &Document, result: DiffResult, config: &Config) -> Self {
        let mut left_line = 0usize;
        let mut right_line = 0usize;
        let rows = result
            .rows()
            .into_iter()
            .map(|row| {
                let left_num = row.left.text().map(|_| {
                    left_line += 1;
                    left_line
                });
                let right_num = row.right.text().map(|_| {
                    right_line += 1;
                    right_line
                });
                PaneRow {
                    row,
                    left_line: left_num,
                    right_line: right_num,
                }
            })
            .collect();

        let number_width = digit_count(left_line.max(right_line)).max(4);

        Self {
            left_name: left.name.clone(),
            right_name: right.name.clone(),
            rows,
            stats: result.stats,
            scroll_offset: 0,
            horizontal_scroll: 0,
            palette: config.theme.palette(),
            scrollbar_visible: config.view.scrollbar,
            tab_width: config.view.tab_width,
            number_width,
            viewport_height: 0,
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    pub fn scroll_right(&mut self, cols: usize) {
        self.horizontal_scroll = self.horizontal_scroll.saturating_add(cols);
    }

    pub fn scroll_left(&mut self, cols: usize) {
        self.horizontal_scroll = self.horizontal_scroll.saturating_sub(cols);
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.viewport_height.max(1))
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Jump to the first changed row after the current scroll position
    pub fn next_change(&mut self) {
        if let Some(idx) = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset + 1)
            .find(|(_, pane_row)| pane_row.row.kind() != RowKind::Unchanged)
            .map(|(idx, _)| idx)
        {
            self.scroll_offset = idx;
        }
    }

    /// Jump to the last changed row before the current scroll position
    pub fn prev_change(&mut self) {
        if let Some(idx) = self
            .rows
            .iter()
            .enumerate()
            .take(self.scroll_offset)
            .rev()
            .find(|(_, pane_row)| pane_row.row.kind() != RowKind::Unchanged)
            .map(|(idx, _)| idx)
        {
            self.scroll_offset = idx;
        }
    }

    /// Handle a key press; returns true when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let half_page = (self.viewport_height / 2).max(1);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_down(half_page);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_up(half_page);
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::Char('h') | KeyCode::Left => self.scroll_left(4),
            KeyCode::Char('l') | KeyCode::Right => self.scroll_right(4),
            KeyCode::PageDown => self.scroll_down(self.viewport_height.max(1)),
            KeyCode::PageUp => self.scroll_up(self.viewport_height.max(1)),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Char('n') => self.next_change(),
            KeyCode::Char('N') => self.prev_change(),
            _ => {}
        }
        false
    }
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_core::DiffEngine;

    fn app_for(left: &[&str], right: &[&str]) -> App {
        let left = Document::new("left", left.iter().map(|s| s.to_string()).collect());
        let right = Document::new("right", right.iter().map(|s| s.to_string()).collect());
        let result = DiffEngine::new()
            .compare_documents(&left, &right)
            .unwrap();
        App::new(&left, &right, result, &Config::default())
    }

    #[test]
    fn test_line_numbers_skip_blanks() {
        let app = app_for(&["a", "b", "c"], &["a", "x", "c"]);

        // rows: equal(a), removed(b), added(x), equal(c)
        assert_eq!(app.rows.len(), 4);
        assert_eq!(app.rows[0].left_line, Some(1));
        assert_eq!(app.rows[0].right_line, Some(1));
        assert_eq!(app.rows[1].left_line, Some(2));
        assert_eq!(app.rows[1].right_line, None);
        assert_eq!(app.rows[2].left_line, None);
        assert_eq!(app.rows[2].right_line, Some(2));
        assert_eq!(app.rows[3].left_line, Some(3));
        assert_eq!(app.rows[3].right_line, Some(3));
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut app = app_for(&["a", "b", "c", "d"], &["a", "b", "c", "d"]);
        app.viewport_height = 2;

        app.scroll_down(100);
        assert_eq!(app.scroll_offset, 2);

        app.scroll_up(100);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_change_navigation() {
        let mut app = app_for(&["a", "b", "c", "d", "e"], &["a", "x", "c", "d", "y"]);
        app.viewport_height = 100;

        // rows: equal, removed(b), added(x), equal, equal, removed(e), added(y)
        app.next_change();
        assert_eq!(app.scroll_offset, 1);
        app.next_change();
        assert_eq!(app.scroll_offset, 2);
        app.next_change();
        assert_eq!(app.scroll_offset, 5);

        app.prev_change();
        assert_eq!(app.scroll_offset, 2);
    }

    #[test]
    fn test_number_width_tracks_line_count() {
        let app = app_for(&["a", "b"], &["a", "b"]);
        assert_eq!(app.number_width, 4);

        let many: Vec<String> = (0..10_000).map(|i| format!("line {i}")).collect();
        let doc = Document::new("big", many);
        let result = DiffEngine::new().compare_documents(&doc, &doc).unwrap();
        let app = App::new(&doc, &doc, result, &Config::default());
        assert_eq!(app.number_width, 5);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_for(&["a"], &["a"]);
        assert!(app.handle_key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::from(KeyCode::Esc)));
        assert!(!app.handle_key(KeyEvent::from(KeyCode::Char('j'))));
    }
}

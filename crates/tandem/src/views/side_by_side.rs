//! Side-by-side view - two scroll-synchronized panes

use super::{clip_columns, expand_tabs};
use crate::app::{App, PaneRow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use tandem_core::{Cell, RowKind};

/// Columns the gutter needs beyond the line number ("1234 + ")
const GUTTER_PADDING: usize = 3;

fn gutter_width(app: &App) -> usize {
    app.number_width + GUTTER_PADDING
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Render the dual-pane view: header, two panes, footer.
///
/// Both panes are drawn from the same `scroll_offset`, which is what
/// keeps row *i* on the left vertically aligned with row *i* on the
/// right.
pub fn render_side_by_side(frame: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header_area = outer[0];
    let content_area = outer[1];
    let footer_area = outer[2];

    app.viewport_height = content_area.height as usize;
    app.clamp_scroll();

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content_area);

    render_header(frame, header_area, app, &panes);
    render_pane(frame, panes[0], app, Side::Left);
    render_pane(frame, panes[1], app, Side::Right);
    render_footer(frame, footer_area, app);

    if app.scrollbar_visible && app.rows.len() > content_area.height as usize {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(app.rows.len()).position(app.scroll_offset);
        frame.render_stateful_widget(scrollbar, content_area, &mut scrollbar_state);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, panes: &[Rect]) {
    let title_style = Style::default()
        .fg(app.palette.header)
        .add_modifier(Modifier::BOLD);

    let left_title = clip_columns(
        &format!(" Original: {}", app.left_name),
        0,
        panes[0].width as usize,
    );
    let right_title = clip_columns(
        &format!(" Modified: {}", app.right_name),
        0,
        panes[1].width as usize,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(left_title, title_style))),
        Rect {
            x: panes[0].x,
            y: area.y,
            width: panes[0].width,
            height: area.height,
        },
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(right_title, title_style))),
        Rect {
            x: panes[1].x,
            y: area.y,
            width: panes[1].width,
            height: area.height,
        },
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let stats = vec![
        Span::styled(
            format!(" +{}", app.stats.additions),
            Style::default().fg(app.palette.added),
        ),
        Span::styled(
            format!(" -{}", app.stats.deletions),
            Style::default().fg(app.palette.removed),
        ),
        Span::styled(
            "  j/k scroll  n/N change  g/G top/bottom  q quit",
            Style::default().fg(app.palette.line_number),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(stats)), area);
}

fn render_pane(frame: &mut Frame, area: Rect, app: &App, side: Side) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(gutter_width(app) as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let gutter_area = chunks[0];
    let content_area = chunks[1];
    let content_width = content_area.width as usize;
    let visible_height = area.height as usize;

    let mut gutter_lines: Vec<Line> = Vec::new();
    let mut content_lines: Vec<Line> = Vec::new();

    for pane_row in app
        .rows
        .iter()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let (gutter, content) = build_row(pane_row, app, side, content_width);
        gutter_lines.push(gutter);
        content_lines.push(content);
    }

    frame.render_widget(Paragraph::new(gutter_lines), gutter_area);
    frame.render_widget(Paragraph::new(content_lines), content_area);
}

fn build_row(
    pane_row: &PaneRow,
    app: &App,
    side: Side,
    content_width: usize,
) -> (Line<'static>, Line<'static>) {
    let (cell, line_num) = match side {
        Side::Left => (&pane_row.row.left, pane_row.left_line),
        Side::Right => (&pane_row.row.right, pane_row.right_line),
    };

    let Cell::Text(text) = cell else {
        // placeholder opposite an unpaired line
        let blank_style = Style::default().bg(app.palette.blank_bg);
        let gutter = Line::from(Span::styled(" ".repeat(gutter_width(app)), blank_style));
        let content = Line::from(Span::styled(" ".repeat(content_width), blank_style));
        return (gutter, content);
    };

    let kind = pane_row.row.kind();
    let (sign, content_style) = match kind {
        RowKind::Unchanged => (' ', Style::default().fg(app.palette.context)),
        RowKind::Removed => ('-', Style::default().fg(app.palette.removed)),
        RowKind::Added => ('+', Style::default().fg(app.palette.added)),
    };

    let num_style = match kind {
        RowKind::Unchanged => Style::default().fg(app.palette.line_number),
        _ => content_style,
    };
    let gutter = Line::from(vec![
        Span::styled(
            format!("{:>width$}", line_num.unwrap_or(0), width = app.number_width),
            num_style,
        ),
        Span::raw(" "),
        Span::styled(sign.to_string(), content_style),
        Span::raw(" "),
    ]);

    let expanded = expand_tabs(text, app.tab_width);
    let clipped = clip_columns(&expanded, app.horizontal_scroll, content_width);
    let content = Line::from(Span::styled(clipped, content_style));

    (gutter, content)
}

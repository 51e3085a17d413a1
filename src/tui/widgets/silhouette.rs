//! # Widget: Filling Silhouettes
//!
//! ## Responsibility
//! Draws one child figure per group whose body fills from the feet up in
//! proportion to the group's fill level, with the conclusion sentence below.
//!
//! ## Guarantees
//! - Fill rows are computed from the clamped fill percentage
//! - Never panics on areas smaller than the figure

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::{group_color, panel, render_empty};
use crate::charts::{Artifact, Silhouette, Silhouettes};
use crate::dataset::format_with_unit;
use crate::tui::app::App;

/// Figure rows, head first.
const FIGURE: [&str; 5] = [" \u{25ef} ", "/\u{2588}\\", " \u{2588} ", "/ \\", "\u{2594} \u{2594}"];

/// Number of figure rows (from the bottom) drawn in the fill colour.
pub fn filled_rows(fill_percent: f64, rows: usize) -> usize {
    if !fill_percent.is_finite() {
        return 0;
    }
    ((fill_percent.clamp(0.0, 100.0) / 100.0) * rows as f64).round() as usize
}

/// Renders the silhouette panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("silhouette") {
        Some(Artifact::Silhouette(s)) => draw(f, area, s),
        _ => render_empty(f, area, "Engagement Comparé"),
    }
}

fn figure_lines(fig: &Silhouette) -> Vec<Line<'static>> {
    let color = group_color(fig.group);
    let filled = filled_rows(fig.fill_percent, FIGURE.len());
    let first_filled = FIGURE.len() - filled;

    let mut lines: Vec<Line> = FIGURE
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i >= first_filled {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("  {row}"), style))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("{} {:.0}%", fig.group.label(), fig.fill_percent),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format_with_unit(fig.raw_value, fig.unit),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn draw(f: &mut Frame, area: Rect, s: &Silhouettes) {
    let block = panel(&s.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(10),
        ])
        .split(inner);

    for (fig, col) in s.figures.iter().zip(cols.iter()) {
        f.render_widget(Paragraph::new(figure_lines(fig)), *col);
    }

    let mut text = Vec::new();
    if s.significant {
        text.push(Line::from(Span::styled(
            "Différence significative !",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }
    text.push(Line::from(Span::styled(
        s.conclusion,
        Style::default().fg(Color::White),
    )));
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), cols[2]);
}

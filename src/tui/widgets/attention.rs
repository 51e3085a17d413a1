//! # Widget: Attention per Zone
//!
//! ## Responsibility
//! Paired horizontal bars (DT above TSA) of time spent per zone on the active
//! face. Rows with a significant difference carry a `*`.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{fill_bar, group_color, panel, render_empty};
use crate::charts::{AttentionBars, Artifact};
use crate::dataset::Group;
use crate::tui::app::App;

/// Renders the attention panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("attention") {
        Some(Artifact::Attention(a)) => draw(f, area, a),
        _ => render_empty(f, area, "Temps d'Attention par Zone"),
    }
}

fn draw(f: &mut Frame, area: Rect, a: &AttentionBars) {
    let block = panel(&a.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = (inner.width as usize).saturating_sub(22).max(4);
    let mut lines = Vec::with_capacity(a.rows.len() * 2);
    for row in &a.rows {
        for (group, percent) in [(Group::Dt, row.dt_percent), (Group::Tsa, row.tsa_percent)] {
            let head = if group == Group::Dt {
                format!("{:<7}", row.zone.label())
            } else {
                " ".repeat(7)
            };
            let star = if row.significant && group == Group::Dt { " *" } else { "" };
            lines.push(Line::from(vec![
                Span::styled(head, Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:<4}", group.label()),
                    Style::default().fg(group_color(group)),
                ),
                Span::styled(
                    fill_bar(percent / 100.0, bar_width),
                    Style::default().fg(group_color(group)),
                ),
                Span::styled(
                    format!(" {percent:>5.1}%{star}"),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
    }
    f.render_widget(Paragraph::new(lines), inner);
}

//! # Widget: Reaction Speed
//!
//! Latency gauges: a fuller gauge means a faster first look.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge as RatatuiGauge, Paragraph};
use ratatui::Frame;

use super::{group_color, panel, render_empty};
use crate::charts::{Artifact, Speedometer};
use crate::dataset::{format_display, Unit};
use crate::tui::app::App;

/// Renders the speedometer panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("speedometer") {
        Some(Artifact::Speedometer(s)) => draw(f, area, s),
        _ => render_empty(f, area, "Rapidité de Réaction"),
    }
}

fn draw(f: &mut Frame, area: Rect, s: &Speedometer) {
    let block = panel(&s.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = s.gauges.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (gauge, row) in s.gauges.iter().zip(rows.iter()) {
        let label = format!(
            "{} {}",
            gauge.group.label(),
            format_display(gauge.seconds, Unit::Seconds)
        );
        let widget = RatatuiGauge::default()
            .gauge_style(Style::default().fg(group_color(gauge.group)).bg(Color::Black))
            .ratio(gauge.ratio.clamp(0.0, 1.0))
            .label(label);
        f.render_widget(widget, *row);
    }

    if let Some(last) = rows.last() {
        let verdict = Paragraph::new(Line::from(Span::styled(
            s.verdict,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(verdict, *last);
    }
}

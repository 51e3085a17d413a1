//! # Widget: DT vs TSA Bars
//!
//! ## Responsibility
//! Draws the [`BarChart`](crate::charts::BarChart) artifact with ratatui's
//! `BarChart`: one bar per group, value labels in the artifact's unit, and the
//! significance line under the title when present.
//!
//! ## Guarantees
//! - Missing artifact renders the empty placeholder
//! - Bar heights are scaled so both bars are always visible when non-zero

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart as RatatuiBarChart, BarGroup, Paragraph};
use ratatui::Frame;

use super::{group_color, group_legend, panel, render_empty};
use crate::charts::{Artifact, BarChart};
use crate::dataset::format_display;
use crate::tui::app::App;

/// Scale applied to display values before they become `u64` bar heights.
const HEIGHT_SCALE: f64 = 100.0;

/// Converts a display value to a bar height.
pub fn bar_height(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * HEIGHT_SCALE).round() as u64
    } else {
        0
    }
}

/// Renders the bar panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("bar") {
        Some(Artifact::Bar(chart)) => draw(f, area, chart),
        _ => render_empty(f, area, "Comparaison DT / TSA"),
    }
}

fn draw(f: &mut Frame, area: Rect, chart: &BarChart) {
    let block = panel(&chart.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    let header = vec![
        match &chart.subtitle {
            Some(sub) => Line::from(Span::styled(
                sub.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                chart.y_axis.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        },
        group_legend(),
    ];
    f.render_widget(Paragraph::new(header), rows[0]);

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|b| {
            let color = group_color(b.group);
            Bar::default()
                .value(bar_height(b.value))
                .label(Line::from(b.group.label()))
                .text_value(format_display(b.value, chart.unit))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let bar_width = (rows[1].width / 3).clamp(3, 20);
    let widget = RatatuiBarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);
    f.render_widget(widget, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_display_values() {
        assert_eq!(bar_height(27.0), 2700);
        assert_eq!(bar_height(3.6), 360);
    }

    #[test]
    fn test_bar_height_rejects_non_positive() {
        assert_eq!(bar_height(0.0), 0);
        assert_eq!(bar_height(-1.0), 0);
        assert_eq!(bar_height(f64::NAN), 0);
    }
}

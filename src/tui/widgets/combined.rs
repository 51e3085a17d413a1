//! # Widget: Combined Analysis
//!
//! ## Responsibility
//! Draws the [`CombinedChart`](crate::charts::CombinedChart): for every face a
//! group of three bars (DT, TSA, average).

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart as RatatuiBarChart, BarGroup};
use ratatui::Frame;

use super::bar::bar_height;
use super::{average_color, group_color, panel, render_empty};
use crate::charts::{Artifact, CombinedChart};
use crate::dataset::{format_display, Group};
use crate::tui::app::App;

/// Renders the combined panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("combined") {
        Some(Artifact::Combined(chart)) => draw(f, area, chart),
        _ => render_empty(f, area, "Analyse Combinée"),
    }
}

fn bar(value: f64, chart: &CombinedChart, color: Color) -> Bar<'static> {
    Bar::default()
        .value(bar_height(value))
        .text_value(format_display(value, chart.unit))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

fn draw(f: &mut Frame, area: Rect, chart: &CombinedChart) {
    let inner_width = area.width.saturating_sub(2);
    let groups_n = chart.labels.len().max(1) as u16;
    // three bars plus gaps per face
    let bar_width = (inner_width / groups_n).saturating_sub(4) / 3;

    let mut widget = RatatuiBarChart::default()
        .block(panel(&chart.title))
        .bar_width(bar_width.max(1))
        .bar_gap(0)
        .group_gap(2);

    for (i, label) in chart.labels.iter().enumerate() {
        let value = |values: &[f64]| values.get(i).copied().unwrap_or(0.0);
        let bars = [
            bar(value(&chart.dt), chart, group_color(Group::Dt)),
            bar(value(&chart.tsa), chart, group_color(Group::Tsa)),
            bar(value(&chart.average), chart, average_color()),
        ];
        widget = widget.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }
    f.render_widget(widget, area);
}

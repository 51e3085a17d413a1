//! # Widget: Zone Distribution
//!
//! Terminal stand-in for the pie: one share bar per zone in the zone's colour.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{fill_bar, panel, render_empty, zone_color};
use crate::charts::{Artifact, PieChart};
use crate::dataset::format_display;
use crate::tui::app::App;

/// Renders the distribution panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("pie") {
        Some(Artifact::Pie(chart)) => draw(f, area, chart, app),
        _ => render_empty(f, area, "Répartition DT"),
    }
}

fn draw(f: &mut Frame, area: Rect, chart: &PieChart, app: &App) {
    let block = panel(&chart.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // label + value + percent take ~30 columns
    let bar_width = (inner.width as usize).saturating_sub(30).max(4);
    let active = app.filter().zone;

    let lines: Vec<Line> = chart
        .slices
        .iter()
        .map(|slice| {
            let color = zone_color(slice.zone);
            let marker = if slice.zone == active { "\u{25b6} " } else { "  " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:<7}", slice.zone.label()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    fill_bar(slice.share / 100.0, bar_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>5.1}%", slice.share),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  {}", format_display(slice.value, chart.unit)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

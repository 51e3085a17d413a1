//! # Widget: Evolution Across Faces
//!
//! ## Responsibility
//! Draws the [`LineChart`](crate::charts::LineChart) artifact with ratatui's
//! `Chart`, one dataset per group, faces on the x-axis.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};
use ratatui::Frame;

use super::{group_color, panel, render_empty};
use crate::charts::{Artifact, LineChart};
use crate::dataset::format_display;
use crate::tui::app::App;

/// `(x, y)` points of one series, x being the face index.
pub fn points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

/// Upper y bound with 10% headroom; never zero.
pub fn y_upper_bound(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Renders the line panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.artifact("line") {
        Some(Artifact::Line(chart)) => draw(f, area, chart),
        _ => render_empty(f, area, "Évolution"),
    }
}

fn draw(f: &mut Frame, area: Rect, chart: &LineChart) {
    let series_points: Vec<Vec<(f64, f64)>> =
        chart.series.iter().map(|s| points(&s.values)).collect();

    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .zip(&series_points)
        .map(|(series, pts)| {
            Dataset::default()
                .name(series.group.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(group_color(series.group)))
                .data(pts)
        })
        .collect();

    let x_max = chart.labels.len().saturating_sub(1).max(1) as f64;
    let y_max = y_upper_bound(chart.max_value());
    let x_labels: Vec<Span> = chart
        .labels
        .iter()
        .map(|l| Span::styled(l.clone(), Style::default().fg(Color::DarkGray)))
        .collect();
    let y_labels = vec![
        Span::raw(format_display(0.0, chart.unit)),
        Span::raw(format_display(y_max / 2.0, chart.unit)),
        Span::raw(format_display(y_max, chart.unit)),
    ];

    let widget = Chart::new(datasets)
        .block(panel(&chart.title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_axis.clone())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    f.render_widget(widget, area);
}

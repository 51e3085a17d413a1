//! Per-face bars for both cohorts overlaid with their average.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::dataset::{format_value, y_axis_label, Unit};
use crate::sync::{RenderContext, Renderer};

/// Combined bar + line chart model.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedChart {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "Analyse Combinée - <zone>".
    pub title: String,
    /// Y-axis label.
    pub y_axis: String,
    /// Unit of the values.
    pub unit: Unit,
    /// "Visage n" for every face with data.
    pub labels: Vec<String>,
    /// DT display values, one per label.
    pub dt: Vec<f64>,
    /// TSA display values, one per label.
    pub tsa: Vec<f64>,
    /// `(dt + tsa) / 2` display values, one per label.
    pub average: Vec<f64>,
}

/// Renders [`CombinedChart`]s.
#[derive(Debug, Default)]
pub struct CombinedRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for CombinedRenderer {
    fn name(&self) -> &'static str {
        "combined"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let f = ctx.filter;
        let rows = ctx.dataset.lookup_across_faces(f.zone, f.parameter);
        let unit = rows.first()?.1.unit;

        let mut chart = CombinedChart {
            id: self.lifecycle.issue(),
            title: format!("Analyse Combinée - {}", f.zone.label()),
            y_axis: y_axis_label(f.parameter, unit),
            unit,
            labels: Vec::with_capacity(rows.len()),
            dt: Vec::with_capacity(rows.len()),
            tsa: Vec::with_capacity(rows.len()),
            average: Vec::with_capacity(rows.len()),
        };
        for (face, record) in &rows {
            chart.labels.push(face.label());
            chart.dt.push(format_value(record.dt, unit));
            chart.tsa.push(format_value(record.tsa, unit));
            chart.average.push(format_value(record.average(), unit));
        }

        Some(Artifact::Combined(chart))
    }

    fn dispose(&mut self, artifact: Artifact) {
        self.lifecycle.release(self.name(), artifact.id());
    }
}

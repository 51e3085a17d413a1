//! How the DT cohort's measurement splits across zones for the active face.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::dataset::{format_value, Unit};
use crate::filter::Zone;
use crate::sync::{RenderContext, Renderer};

/// One slice of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Zone the slice represents.
    pub zone: Zone,
    /// Display value of the DT cohort.
    pub value: f64,
    /// Share of the total, in percent.
    pub share: f64,
}

/// Pie chart model.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "Répartition DT - Visage n".
    pub title: String,
    /// Unit of the values.
    pub unit: Unit,
    /// One slice per zone with data, in zone order.
    pub slices: Vec<PieSlice>,
}

/// Share of `value` in `total` as a percentage; 0 when the total is 0.
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    value / total * 100.0
}

/// Renders [`PieChart`]s.
#[derive(Debug, Default)]
pub struct PieRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for PieRenderer {
    fn name(&self) -> &'static str {
        "pie"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let f = ctx.filter;
        let rows = ctx.dataset.lookup_zone_distribution(f.face, f.parameter);
        let unit = rows.first()?.1.unit;

        let values: Vec<(Zone, f64)> = rows
            .iter()
            .map(|(zone, r)| (*zone, format_value(r.dt, unit)))
            .collect();
        let total: f64 = values.iter().map(|(_, v)| v).sum();

        let slices = values
            .into_iter()
            .map(|(zone, value)| PieSlice {
                zone,
                value,
                share: share_percent(value, total),
            })
            .collect();

        Some(Artifact::Pie(PieChart {
            id: self.lifecycle.issue(),
            title: format!("Répartition DT - {}", f.face.label()),
            unit,
            slices,
        }))
    }

    fn dispose(&mut self, artifact: Artifact) {
        self.lifecycle.release(self.name(), artifact.id());
    }
}

//! Share of time spent on each zone of the active face.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::filter::{Parameter, Zone};
use crate::sync::{RenderContext, Renderer};

/// One zone's pair of bars.
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionRow {
    /// Zone.
    pub zone: Zone,
    /// DT share, percent, capped at 100.
    pub dt_percent: f64,
    /// TSA share, percent, capped at 100.
    pub tsa_percent: f64,
    /// Whether the difference is significant.
    pub significant: bool,
}

/// Attention-bar view model.
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionBars {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "Temps d'Attention par Zone - Visage n".
    pub title: String,
    /// One row per zone with a time-spent measurement.
    pub rows: Vec<AttentionRow>,
}

fn capped_percent(fraction: f64) -> f64 {
    (fraction * 100.0).min(100.0)
}

/// Renders [`AttentionBars`].
#[derive(Debug, Default)]
pub struct AttentionRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for AttentionRenderer {
    fn name(&self) -> &'static str {
        "attention"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let face = ctx.filter.face;
        let rows: Vec<AttentionRow> = ctx
            .dataset
            .lookup_zone_distribution(face, Parameter::Tp)
            .into_iter()
            .map(|(zone, r)| AttentionRow {
                zone,
                dt_percent: capped_percent(r.dt),
                tsa_percent: capped_percent(r.tsa),
                significant: ctx.significance.is_significant(r.p_value),
            })
            .collect();
        if rows.is_empty() {
            return None;
        }

        Some(Artifact::Attention(AttentionBars {
            id: self.lifecycle.issue(),
            title: format!("Temps d'Attention par Zone - {}", face.label()),
            rows,
        }))
    }

    fn dispose(&mut self, artifact: Artifact) {
        self.lifecycle.release(self.name(), artifact.id());
    }
}

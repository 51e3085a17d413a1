//! # Module: Presentation Renderers
//!
//! ## Responsibility
//! One renderer per view (bar, line, pie, combined, silhouettes, speedometer,
//! attention bars, zone highlight). Each reads the filter and dataset from a
//! [`RenderContext`](crate::sync::RenderContext) and produces a small, declarative
//! chart model wrapped in the tagged [`Artifact`] handle. Models are drawn by the
//! `tui` widgets and summarised by `report`.
//!
//! ## Guarantees
//! - Renderers are independent of each other and of registration order
//! - A missing measurement yields `None`, never an error or a panic
//! - Each renderer owns at most one live artifact and reports stray disposals

pub mod attention;
pub mod bar;
pub mod combined;
pub mod highlight;
pub mod line;
pub mod pie;
pub mod silhouette;
pub mod speedometer;

pub use attention::{AttentionBars, AttentionRenderer, AttentionRow};
pub use bar::{Bar, BarChart, BarRenderer};
pub use combined::{CombinedChart, CombinedRenderer};
pub use highlight::{HighlightRenderer, ZoneHighlight};
pub use line::{LineChart, LineRenderer, Series};
pub use pie::{PieChart, PieRenderer, PieSlice};
pub use silhouette::{Silhouette, SilhouetteRenderer, Silhouettes};
pub use speedometer::{Gauge, Speedometer, SpeedometerRenderer};

use crate::sync::Renderer;

/// Identifier of one rendered artifact, unique per renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId(pub u64);

/// Tagged handle to a rendered view.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// DT vs TSA bars for the active triple.
    Bar(BarChart),
    /// Both groups across faces.
    Line(LineChart),
    /// DT distribution across zones.
    Pie(PieChart),
    /// Bars per face plus the cross-group average.
    Combined(CombinedChart),
    /// Filling silhouettes.
    Silhouette(Silhouettes),
    /// Latency gauges.
    Speedometer(Speedometer),
    /// Time spent per zone.
    Attention(AttentionBars),
    /// Active zone on the active face card.
    ZoneHighlight(ZoneHighlight),
}

impl Artifact {
    /// The artifact's identifier.
    pub fn id(&self) -> ArtifactId {
        match self {
            Self::Bar(a) => a.id,
            Self::Line(a) => a.id,
            Self::Pie(a) => a.id,
            Self::Combined(a) => a.id,
            Self::Silhouette(a) => a.id,
            Self::Speedometer(a) => a.id,
            Self::Attention(a) => a.id,
            Self::ZoneHighlight(a) => a.id,
        }
    }

    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Line(_) => "line",
            Self::Pie(_) => "pie",
            Self::Combined(_) => "combined",
            Self::Silhouette(_) => "silhouette",
            Self::Speedometer(_) => "speedometer",
            Self::Attention(_) => "attention",
            Self::ZoneHighlight(_) => "highlight",
        }
    }
}

/// Issues artifact ids and tracks the one that is currently live.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    next: u64,
    live: Option<ArtifactId>,
}

impl Lifecycle {
    /// Allocates a fresh id and marks it live.
    pub(crate) fn issue(&mut self) -> ArtifactId {
        self.next += 1;
        let id = ArtifactId(self.next);
        if let Some(stale) = self.live.replace(id) {
            tracing::warn!(stale = stale.0, "issued new artifact while one is still live");
        }
        id
    }

    /// Marks `id` as released.
    pub(crate) fn release(&mut self, renderer: &'static str, id: ArtifactId) {
        if self.live == Some(id) {
            self.live = None;
            tracing::trace!(renderer, id = id.0, "artifact disposed");
        } else {
            tracing::warn!(renderer, id = id.0, "dispose of an artifact this renderer does not own");
        }
    }

    /// The live artifact id, if any.
    pub(crate) fn live(&self) -> Option<ArtifactId> {
        self.live
    }
}

/// Every renderer the dashboard shows, in layout order.
pub fn default_renderers() -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(BarRenderer::default()),
        Box::new(LineRenderer::default()),
        Box::new(PieRenderer::default()),
        Box::new(CombinedRenderer::default()),
        Box::new(SilhouetteRenderer::default()),
        Box::new(SpeedometerRenderer::default()),
        Box::new(AttentionRenderer::default()),
        Box::new(HighlightRenderer::default()),
    ]
}

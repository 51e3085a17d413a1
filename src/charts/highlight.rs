//! Marks the active zone on the active face card.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::filter::{FaceId, Zone};
use crate::sync::{RenderContext, Renderer};

/// Highlighted zone on a face card.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneHighlight {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// Face card carrying the highlight.
    pub face: FaceId,
    /// Zone drawn on top of it.
    pub zone: Zone,
}

/// Renders [`ZoneHighlight`]s. Needs no measurement.
#[derive(Debug, Default)]
pub struct HighlightRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for HighlightRenderer {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        Some(Artifact::ZoneHighlight(ZoneHighlight {
            id: self.lifecycle.issue(),
            face: ctx.filter.face,
            zone: ctx.filter.zone,
        }))
    }

    fn dispose(&mut self, artifact: Artifact) {
        self.lifecycle.release(self.name(), artifact.id());
    }
}

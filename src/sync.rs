//! # Module: View Synchronizer
//!
//! ## Responsibility
//! Owns the single [`FilterState`] and every registered [`Renderer`], and keeps the
//! rendered artifacts consistent with the filter. Every accepted filter change tears
//! down every artifact and rebuilds it from the dataset; there is no diffing.
//!
//! ## Guarantees
//! - At most one live artifact per renderer at any time
//! - Dispose-before-render ordering on every cycle
//! - Invalid control values never mutate state and never trigger a render
//! - A renderer with no data leaves an empty slot; empty slots dispose nothing
//! - Remaining artifacts are disposed when the synchronizer is dropped
//!
//! ## NOT Responsible For
//! - Producing artifacts (that belongs to `charts`)
//! - Drawing artifacts on a terminal (that belongs to `tui`)

use std::sync::Arc;

use crate::charts::Artifact;
use crate::dataset::{DatasetAccessor, Significance};
use crate::filter::{FilterField, FilterState, FilterUpdate};

/// Everything a renderer may read during one render call.
pub struct RenderContext<'a> {
    /// The active filter.
    pub filter: &'a FilterState,
    /// The comparative dataset.
    pub dataset: &'a dyn DatasetAccessor,
    /// The significance predicate.
    pub significance: Significance,
}

/// A view that turns the current filter into one artifact.
pub trait Renderer {
    /// Stable name used for lookup and logging.
    fn name(&self) -> &'static str;

    /// Builds the artifact for the current filter, or `None` if there is nothing
    /// to show (e.g. the measurement is missing).
    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact>;

    /// Releases an artifact previously returned by [`render`](Self::render).
    fn dispose(&mut self, artifact: Artifact);
}

/// Lifecycle of the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Artifacts match the filter.
    Idle,
    /// A render pass is in progress.
    Rendering,
}

struct Slot {
    renderer: Box<dyn Renderer>,
    artifact: Option<Artifact>,
}

/// Filter-state-to-view synchronizer.
pub struct Synchronizer {
    filter: FilterState,
    dataset: Arc<dyn DatasetAccessor>,
    significance: Significance,
    slots: Vec<Slot>,
    state: SyncState,
    render_passes: u64,
}

impl std::fmt::Debug for Synchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synchronizer")
            .field("filter", &self.filter)
            .field("renderers", &self.slots.len())
            .field("live_artifacts", &self.live_artifacts())
            .field("state", &self.state)
            .field("render_passes", &self.render_passes)
            .finish()
    }
}

impl Synchronizer {
    /// Creates a synchronizer over `dataset` starting at `filter`.
    ///
    /// If the initial face is not in the dataset, the dataset's first face is used.
    pub fn new(
        dataset: Arc<dyn DatasetAccessor>,
        filter: FilterState,
        significance: Significance,
    ) -> Self {
        let mut filter = filter;
        if !dataset.has_face(filter.face) {
            if let Some(&first) = dataset.faces().first() {
                tracing::warn!(
                    requested = %filter.face,
                    fallback = %first,
                    "initial face not in dataset"
                );
                filter.face = first;
            }
        }
        Self {
            filter,
            dataset,
            significance,
            slots: Vec::new(),
            state: SyncState::Idle,
            render_passes: 0,
        }
    }

    /// Adds a renderer. It produces its first artifact on the next render pass.
    pub fn register_renderer(&mut self, renderer: Box<dyn Renderer>) {
        tracing::debug!(renderer = renderer.name(), "renderer registered");
        self.slots.push(Slot {
            renderer,
            artifact: None,
        });
    }

    /// Sets one filter field from a raw control-surface value.
    ///
    /// Returns `true` if the value was accepted (and a render pass ran), `false` if
    /// it was outside the field's domain (state unchanged, nothing rendered).
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> bool {
        match FilterUpdate::parse(field, value) {
            Ok(update) => self.apply(update),
            Err(e) => {
                tracing::debug!(error = %e, "filter value ignored");
                false
            }
        }
    }

    /// Applies a typed filter update; faces are checked against the dataset.
    ///
    /// Returns `true` if accepted (and a render pass ran).
    pub fn apply(&mut self, update: FilterUpdate) -> bool {
        if let FilterUpdate::Face(face) = update {
            if !self.dataset.has_face(face) {
                tracing::debug!(face = %face, "face not in dataset, ignored");
                return false;
            }
        }
        self.filter.apply(update);
        tracing::info!(filter = %self.filter, "filter updated");
        self.render();
        true
    }

    /// Replaces the whole filter at once and re-renders. Faces outside the dataset
    /// are rejected like in [`apply`](Self::apply).
    pub fn reset(&mut self, filter: FilterState) -> bool {
        if !self.dataset.has_face(filter.face) {
            return false;
        }
        self.filter = filter;
        self.render();
        true
    }

    /// Full re-render: for each renderer, dispose its previous artifact then render
    /// a fresh one against the current filter.
    pub fn render(&mut self) {
        self.state = SyncState::Rendering;
        let ctx = RenderContext {
            filter: &self.filter,
            dataset: self.dataset.as_ref(),
            significance: self.significance,
        };
        for slot in &mut self.slots {
            if let Some(previous) = slot.artifact.take() {
                slot.renderer.dispose(previous);
            }
            slot.artifact = slot.renderer.render(&ctx);
            if slot.artifact.is_none() {
                tracing::trace!(renderer = slot.renderer.name(), "no artifact");
            }
        }
        self.render_passes += 1;
        self.state = SyncState::Idle;
    }

    /// The current filter.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The dataset the renderers read from.
    pub fn dataset(&self) -> &dyn DatasetAccessor {
        self.dataset.as_ref()
    }

    /// The significance predicate handed to renderers.
    pub fn significance(&self) -> Significance {
        self.significance
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Number of completed render passes.
    pub fn render_passes(&self) -> u64 {
        self.render_passes
    }

    /// Number of registered renderers.
    pub fn renderer_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-empty artifact slots.
    pub fn live_artifacts(&self) -> usize {
        self.slots.iter().filter(|s| s.artifact.is_some()).count()
    }

    /// The live artifact of the renderer called `name`, if any.
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.slots
            .iter()
            .find(|s| s.renderer.name() == name)
            .and_then(|s| s.artifact.as_ref())
    }

    /// Every renderer name paired with its slot, in registration order.
    pub fn artifacts(&self) -> impl Iterator<Item = (&'static str, Option<&Artifact>)> + '_ {
        self.slots
            .iter()
            .map(|s| (s.renderer.name(), s.artifact.as_ref()))
    }
}

impl Drop for Synchronizer {
    fn drop(&mut self) {
        for slot in &mut self.slots {
            if let Some(artifact) = slot.artifact.take() {
                slot.renderer.dispose(artifact);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{Artifact, ArtifactId, ZoneHighlight};
    use crate::dataset::StaticDataset;
    use crate::filter::{FaceId, Parameter, Zone};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        events: Vec<String>,
    }

    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Log>>,
        next: u64,
    }

    impl Renderer for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
            ctx.dataset
                .lookup(ctx.filter.face, ctx.filter.zone, ctx.filter.parameter)
                .ok()?;
            self.next += 1;
            self.log
                .borrow_mut()
                .events
                .push(format!("render {} {}", self.name, self.next));
            Some(Artifact::ZoneHighlight(ZoneHighlight {
                id: ArtifactId(self.next),
                face: ctx.filter.face,
                zone: ctx.filter.zone,
            }))
        }

        fn dispose(&mut self, artifact: Artifact) {
            self.log
                .borrow_mut()
                .events
                .push(format!("dispose {} {}", self.name, artifact.id().0));
        }
    }

    fn sync_with_probe() -> (Synchronizer, Rc<RefCell<Log>>) {
        let ds = Arc::new(StaticDataset::builtin().expect("test: builtin"));
        let mut sync = Synchronizer::new(ds, FilterState::default(), Significance::default());
        let log = Rc::new(RefCell::new(Log::default()));
        sync.register_renderer(Box::new(Probe {
            name: "probe",
            log: Rc::clone(&log),
            next: 0,
        }));
        (sync, log)
    }

    #[test]
    fn test_new_sync_is_idle_with_no_artifacts() {
        let (sync, _) = sync_with_probe();
        assert_eq!(sync.state(), SyncState::Idle);
        assert_eq!(sync.live_artifacts(), 0);
        assert_eq!(sync.render_passes(), 0);
    }

    #[test]
    fn test_dispose_runs_before_render() {
        let (mut sync, log) = sync_with_probe();
        sync.render();
        sync.render();
        let events = log.borrow().events.clone();
        assert_eq!(events, vec!["render probe 1", "dispose probe 1", "render probe 2"]);
    }

    #[test]
    fn test_invalid_zone_ignored_without_render() {
        let (mut sync, _) = sync_with_probe();
        assert!(!sync.set_filter(FilterField::Zone, "invalid-zone"));
        assert_eq!(sync.filter().zone, Zone::Ecran);
        assert_eq!(sync.render_passes(), 0);
    }

    #[test]
    fn test_unknown_face_ignored() {
        let (mut sync, _) = sync_with_probe();
        assert!(!sync.set_filter(FilterField::Face, "9"));
        assert_eq!(sync.filter().face, FaceId(1));
        assert_eq!(sync.render_passes(), 0);
    }

    #[test]
    fn test_missing_measurement_leaves_slot_empty() {
        let (mut sync, _) = sync_with_probe();
        // TTT is only measured on the whole screen
        assert!(sync.set_filter(FilterField::Zone, "tete"));
        assert!(sync.set_filter(FilterField::Parameter, "ttt"));
        assert_eq!(sync.live_artifacts(), 0);
        assert!(sync.artifact("probe").is_none());
    }

    #[test]
    fn test_empty_slot_disposes_nothing_next_cycle() {
        let (mut sync, log) = sync_with_probe();
        sync.set_filter(FilterField::Zone, "tete");
        sync.set_filter(FilterField::Parameter, "ttt");
        log.borrow_mut().events.clear();
        sync.set_filter(FilterField::Zone, "ecran");
        let events = log.borrow().events.clone();
        assert_eq!(events.len(), 1);
        assert!(events[0].starts_with("render"));
    }

    #[test]
    fn test_state_idle_after_render() {
        let (mut sync, _) = sync_with_probe();
        sync.set_filter(FilterField::Parameter, "nbf");
        assert_eq!(sync.state(), SyncState::Idle);
        assert_eq!(sync.filter().parameter, Parameter::Nbf);
    }

    #[test]
    fn test_reset_rejects_unknown_face() {
        let (mut sync, _) = sync_with_probe();
        let bad = FilterState {
            face: FaceId(42),
            ..FilterState::default()
        };
        assert!(!sync.reset(bad));
        assert_eq!(sync.render_passes(), 0);
    }

    #[test]
    fn test_initial_face_outside_dataset_falls_back() {
        let ds = Arc::new(StaticDataset::builtin().expect("test: builtin"));
        let start = FilterState {
            face: FaceId(7),
            ..FilterState::default()
        };
        let sync = Synchronizer::new(ds, start, Significance::default());
        assert_eq!(sync.filter().face, FaceId(1));
    }

    #[test]
    fn test_drop_disposes_live_artifacts() {
        let (mut sync, log) = sync_with_probe();
        sync.render();
        drop(sync);
        let events = log.borrow().events.clone();
        assert_eq!(events.last().map(String::as_str), Some("dispose probe 1"));
    }
}

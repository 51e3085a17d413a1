//! Reaction-speed gauges built from the latency of the active zone.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::dataset::Group;
use crate::filter::Parameter;
use crate::sync::{RenderContext, Renderer};

/// Latency, in seconds, at which a gauge reads empty.
pub const GAUGE_FULL_SCALE_SECS: f64 = 4.0;

/// One gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    /// Cohort.
    pub group: Group,
    /// Latency in seconds.
    pub seconds: f64,
    /// Fill ratio in `[0, 1]`; faster reactions fill more.
    pub ratio: f64,
}

/// Speedometer view model.
#[derive(Debug, Clone, PartialEq)]
pub struct Speedometer {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "Rapidité de Réaction - <zone>".
    pub title: String,
    /// DT then TSA.
    pub gauges: Vec<Gauge>,
    /// Which cohort reacts faster.
    pub verdict: &'static str,
}

/// Gauge fill for a latency.
pub fn gauge_ratio(seconds: f64) -> f64 {
    (1.0 - seconds / GAUGE_FULL_SCALE_SECS).clamp(0.0, 1.0)
}

/// Renders [`Speedometer`]s. Always reads the latency parameter.
#[derive(Debug, Default)]
pub struct SpeedometerRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for SpeedometerRenderer {
    fn name(&self) -> &'static str {
        "speedometer"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let f = ctx.filter;
        let record = ctx.dataset.lookup(f.face, f.zone, Parameter::Latence).ok()?;

        let gauges = Group::ALL
            .into_iter()
            .map(|group| {
                let seconds = record.value(group);
                Gauge {
                    group,
                    seconds,
                    ratio: gauge_ratio(seconds),
                }
            })
            .collect();

        let verdict = if record.dt < record.tsa {
            "DT réagit plus vite!"
        } else {
            "TSA réagit plus vite!"
        };

        Some(Artifact::Speedometer(Speedometer {
            id: self.lifecycle.issue(),
            title: format!("Rapidité de Réaction - {}", f.zone.label()),
            gauges,
            verdict,
        }))
    }

    fn dispose(&mut self, artifact: Artifact) {
        self.lifecycle.release(self.name(), artifact.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::{ctx, dataset, filter};
    use crate::filter::Zone;

    #[test]
    fn test_gauge_ratio_bounds() {
        assert_eq!(gauge_ratio(0.0), 1.0);
        assert_eq!(gauge_ratio(4.0), 0.0);
        assert_eq!(gauge_ratio(9.0), 0.0);
        assert!((gauge_ratio(1.0) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_speedometer_uses_latency_regardless_of_parameter() {
        let ds = dataset();
        let f = filter(1, Zone::Yeux, Parameter::Nbf);
        let Some(Artifact::Speedometer(s)) = SpeedometerRenderer::default().render(&ctx(&f, &ds)) else {
            panic!("expected speedometer");
        };
        assert_eq!(s.title, "Rapidité de Réaction - Yeux");
        assert_eq!(s.gauges[0].seconds, 0.58);
        assert_eq!(s.gauges[1].seconds, 1.32);
        assert_eq!(s.verdict, "DT réagit plus vite!");
    }

    #[test]
    fn test_speedometer_tsa_faster_on_mouth() {
        let ds = dataset();
        let f = filter(1, Zone::Bouche, Parameter::Tf);
        let Some(Artifact::Speedometer(s)) = SpeedometerRenderer::default().render(&ctx(&f, &ds)) else {
            panic!("expected speedometer");
        };
        assert_eq!(s.verdict, "TSA réagit plus vite!");
        assert!(s.gauges[1].ratio > s.gauges[0].ratio);
    }
}

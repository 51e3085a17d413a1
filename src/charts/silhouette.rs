//! Two child silhouettes filled in proportion to each cohort's value.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::dataset::{Group, MeasurementRecord, Unit};
use crate::sync::{RenderContext, Renderer};

/// Caption shown under the silhouettes.
pub const FILL_EXPLANATION: &str = "Le remplissage des silhouettes illustre l'intensité du regard.";

/// One filled figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    /// Cohort.
    pub group: Group,
    /// Fill level in `[0, 100]`.
    pub fill_percent: f64,
    /// Value as stored in the dataset.
    pub raw_value: f64,
    /// Unit of `raw_value`.
    pub unit: Unit,
}

/// Silhouette view model.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouettes {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "Engagement Comparé - <parameter>".
    pub title: String,
    /// DT then TSA.
    pub figures: Vec<Silhouette>,
    /// Whether the difference is significant.
    pub significant: bool,
    /// Which cohort paid more attention.
    pub conclusion: &'static str,
}

/// Fill levels for DT and TSA.
///
/// Percentages map directly; other units are scaled against the larger of
/// the two values (never below 1).
pub fn fill_levels(record: &MeasurementRecord) -> (f64, f64) {
    if record.unit == Unit::Percent {
        return (
            (record.dt * 100.0).clamp(0.0, 100.0),
            (record.tsa * 100.0).clamp(0.0, 100.0),
        );
    }
    let max = record.dt.max(record.tsa).max(1.0);
    (record.dt / max * 100.0, record.tsa / max * 100.0)
}

/// Sentence naming the cohort with the higher value.
pub fn conclusion(record: &MeasurementRecord) -> &'static str {
    if record.dt > record.tsa {
        "On constate ici que les enfants au développement typique (DT) accordent plus d'attention à cette zone que les enfants avec TSA."
    } else if record.tsa > record.dt {
        "On constate ici que les enfants avec TSA accordent plus d'attention à cette zone que les enfants au développement typique (DT)."
    } else {
        "On constate ici un niveau d'attention similaire entre les deux groupes."
    }
}

/// Renders [`Silhouettes`].
#[derive(Debug, Default)]
pub struct SilhouetteRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for SilhouetteRenderer {
    fn name(&self) -> &'static str {
        "silhouette"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let f = ctx.filter;
        let record = ctx.dataset.lookup(f.face, f.zone, f.parameter).ok()?;
        let (dt_fill, tsa_fill) = fill_levels(&record);

        let figures = vec![
            Silhouette {
                group: Group::Dt,
                fill_percent: dt_fill,
                raw_value: record.dt,
                unit: record.unit,
            },
            Silhouette {
                group: Group::Tsa,
                fill_percent: tsa_fill,
                raw_value: record.tsa,
                unit: record.unit,
            },
        ];

        Some(Artifact::Silhouette(Silhouettes {
            id: self.lifecycle.issue(),
            title: format!("Engagement Comparé - {}", f.parameter.label()),
            figures,
            significant: ctx.significance.is_significant(record.p_value),
            conclusion: conclusion(&record),
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
    use crate::filter::{Parameter, Zone};

    fn record(dt: f64, tsa: f64, unit: Unit) -> MeasurementRecord {
        MeasurementRecord {
            dt,
            tsa,
            unit,
            p_value: 0.5,
        }
    }

    #[test]
    fn test_fill_levels_percent_maps_directly() {
        let (dt, tsa) = fill_levels(&record(0.27, 0.13, Unit::Percent));
        assert!((dt - 27.0).abs() < 1e-9);
        assert!((tsa - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_fill_levels_scales_to_larger_value() {
        let (dt, tsa) = fill_levels(&record(3.6, 1.8, Unit::Seconds));
        assert!((dt - 100.0).abs() < 1e-9);
        assert!((tsa - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_fill_levels_small_values_scale_against_one() {
        let (dt, tsa) = fill_levels(&record(0.5, 0.25, Unit::Seconds));
        assert!((dt - 50.0).abs() < 1e-9);
        assert!((tsa - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_conclusion_names_higher_group() {
        assert!(conclusion(&record(2.0, 1.0, Unit::Seconds)).contains("développement typique (DT) accordent"));
        assert!(conclusion(&record(1.0, 2.0, Unit::Seconds)).contains("enfants avec TSA accordent"));
        assert!(conclusion(&record(1.0, 1.0, Unit::Seconds)).contains("similaire"));
    }

    #[test]
    fn test_silhouette_renderer_builds_two_figures() {
        let ds = dataset();
        let f = filter(1, Zone::Yeux, Parameter::Tf);
        let Some(Artifact::Silhouette(s)) = SilhouetteRenderer::default().render(&ctx(&f, &ds)) else {
            panic!("expected silhouettes");
        };
        assert_eq!(s.title, "Engagement Comparé - Temps de Fixation");
        assert_eq!(s.figures.len(), 2);
        assert!(s.significant);
        assert!((s.figures[0].fill_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_silhouette_missing_renders_nothing() {
        let ds = dataset();
        let f = filter(2, Zone::Yeux, Parameter::Ttt);
        assert!(SilhouetteRenderer::default().render(&ctx(&f, &ds)).is_none());
    }
}

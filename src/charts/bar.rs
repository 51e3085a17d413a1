//! DT vs TSA bar chart for the active `(face, zone, parameter)` triple.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::dataset::{y_axis_label, Group, Unit};
use crate::sync::{RenderContext, Renderer};

/// One bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Cohort the bar belongs to.
    pub group: Group,
    /// Axis label.
    pub label: &'static str,
    /// Display value (percentages already scaled).
    pub value: f64,
}

/// Bar chart model.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "<parameter> - <zone>".
    pub title: String,
    /// Significance note, present only when the difference is significant.
    pub subtitle: Option<String>,
    /// Y-axis label with unit description.
    pub y_axis: String,
    /// Unit of the values.
    pub unit: Unit,
    /// DT then TSA.
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Whether the significance path is active.
    pub fn is_significant(&self) -> bool {
        self.subtitle.is_some()
    }
}

/// Renders [`BarChart`]s.
#[derive(Debug, Default)]
pub struct BarRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for BarRenderer {
    fn name(&self) -> &'static str {
        "bar"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let f = ctx.filter;
        let record = ctx.dataset.lookup(f.face, f.zone, f.parameter).ok()?;

        let subtitle = ctx
            .significance
            .is_significant(record.p_value)
            .then(|| format!("Différence significative (p = {:.3})", record.p_value));

        let bars = Group::ALL
            .into_iter()
            .map(|group| Bar {
                group,
                label: group.long_label(),
                value: record.display_value(group),
            })
            .collect();

        Some(Artifact::Bar(BarChart {
            id: self.lifecycle.issue(),
            title: format!("{} - {}", f.parameter.label(), f.zone.label()),
            subtitle,
            y_axis: y_axis_label(f.parameter, record.unit),
            unit: record.unit,
            bars,
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
    use crate::dataset::{
        DatasetAccessor, LookupError, MeasurementRecord, Significance, StaticDataset,
    };
    use crate::filter::{FaceId, FilterState, Parameter, Zone};

    fn render(f: &FilterState, ds: &StaticDataset) -> Option<BarChart> {
        match BarRenderer::default().render(&ctx(f, ds)) {
            Some(Artifact::Bar(chart)) => Some(chart),
            _ => None,
        }
    }

    #[test]
    fn test_bar_chart_for_eyes_fixation_time() {
        let ds = dataset();
        let f = filter(1, Zone::Yeux, Parameter::Tf);
        let chart = render(&f, &ds).expect("test: chart");
        assert_eq!(chart.title, "Temps de Fixation - Yeux");
        assert_eq!(chart.y_axis, "Temps de Fixation (secondes)");
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].group, Group::Dt);
        assert_eq!(chart.bars[0].value, 3.6);
        assert_eq!(chart.bars[1].value, 1.7);
    }

    #[test]
    fn test_bar_chart_scales_percentages() {
        let ds = dataset();
        let f = filter(1, Zone::Yeux, Parameter::Tp);
        let chart = render(&f, &ds).expect("test: chart");
        assert!((chart.bars[0].value - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_significant_p_value_sets_subtitle() {
        let ds = dataset();
        // p = 0.01 in the builtin dataset
        let f = filter(1, Zone::Yeux, Parameter::Tf);
        let chart = render(&f, &ds).expect("test: chart");
        assert!(chart.is_significant());
        assert_eq!(
            chart.subtitle.as_deref(),
            Some("Différence significative (p = 0.010)")
        );
    }

    #[test]
    fn test_non_significant_p_value_has_no_subtitle() {
        let ds = dataset();
        // p = 0.8 in the builtin dataset
        let f = filter(1, Zone::Tete, Parameter::Tf);
        let chart = render(&f, &ds).expect("test: chart");
        assert!(!chart.is_significant());
    }

    #[test]
    fn test_missing_measurement_renders_nothing() {
        let ds = dataset();
        let f = filter(1, Zone::Bouche, Parameter::Ttt);
        assert!(render(&f, &ds).is_none());
    }

    #[test]
    fn test_custom_threshold_changes_significance() {
        struct Fixed;
        impl DatasetAccessor for Fixed {
            fn faces(&self) -> &[FaceId] {
                &[FaceId(1)]
            }
            fn lookup(
                &self,
                _: FaceId,
                _: Zone,
                _: Parameter,
            ) -> Result<MeasurementRecord, LookupError> {
                Ok(MeasurementRecord {
                    dt: 1.0,
                    tsa: 2.0,
                    unit: Unit::Seconds,
                    p_value: 0.03,
                })
            }
        }
        let f = FilterState::default();
        let strict = RenderContext {
            filter: &f,
            dataset: &Fixed,
            significance: Significance::new(0.01),
        };
        match BarRenderer::default().render(&strict) {
            Some(Artifact::Bar(chart)) => assert!(!chart.is_significant()),
            other => panic!("expected bar chart, got {other:?}"),
        }
    }
}

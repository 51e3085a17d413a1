//! Both cohorts plotted across every face for the active zone and parameter.

use super::{Artifact, ArtifactId, Lifecycle};
use crate::dataset::{format_value, y_axis_label, Group, Unit};
use crate::sync::{RenderContext, Renderer};

/// One plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Cohort plotted.
    pub group: Group,
    /// One display value per face label.
    pub values: Vec<f64>,
}

/// Line chart model.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// Artifact identifier.
    pub id: ArtifactId,
    /// "<parameter> - <zone>".
    pub title: String,
    /// Y-axis label.
    pub y_axis: String,
    /// Unit of the values.
    pub unit: Unit,
    /// "Visage n" for every face with data.
    pub labels: Vec<String>,
    /// DT then TSA.
    pub series: Vec<Series>,
}

impl LineChart {
    /// Largest value over every series, or 0 when empty.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Renders [`LineChart`]s.
#[derive(Debug, Default)]
pub struct LineRenderer {
    lifecycle: Lifecycle,
}

impl Renderer for LineRenderer {
    fn name(&self) -> &'static str {
        "line"
    }

    fn render(&mut self, ctx: &RenderContext<'_>) -> Option<Artifact> {
        let f = ctx.filter;
        let rows = ctx.dataset.lookup_across_faces(f.zone, f.parameter);
        let unit = rows.first()?.1.unit;

        let labels = rows.iter().map(|(face, _)| face.label()).collect();
        let series = Group::ALL
            .into_iter()
            .map(|group| Series {
                group,
                values: rows
                    .iter()
                    .map(|(_, r)| format_value(r.value(group), unit))
                    .collect(),
            })
            .collect();

        Some(Artifact::Line(LineChart {
            id: self.lifecycle.issue(),
            title: format!("{} - {}", f.parameter.label(), f.zone.label()),
            y_axis: y_axis_label(f.parameter, unit),
            unit,
            labels,
            series,
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

    #[test]
    fn test_line_chart_has_one_point_per_face() {
        let ds = dataset();
        let f = filter(2, Zone::Yeux, Parameter::Nbf);
        let Some(Artifact::Line(chart)) = LineRenderer::default().render(&ctx(&f, &ds)) else {
            panic!("expected line chart");
        };
        assert_eq!(chart.labels, vec!["Visage 1", "Visage 2", "Visage 3"]);
        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.values.len() == 3));
        assert_eq!(chart.y_axis, "Nombre de Fixations (nombre)");
    }

    #[test]
    fn test_line_chart_is_independent_of_face_filter() {
        let ds = dataset();
        let a = filter(1, Zone::Tete, Parameter::Tf);
        let b = filter(3, Zone::Tete, Parameter::Tf);
        let Some(Artifact::Line(ca)) = LineRenderer::default().render(&ctx(&a, &ds)) else {
            panic!("expected line chart");
        };
        let Some(Artifact::Line(cb)) = LineRenderer::default().render(&ctx(&b, &ds)) else {
            panic!("expected line chart");
        };
        assert_eq!(ca.series, cb.series);
    }

    #[test]
    fn test_line_chart_empty_aggregate_renders_nothing() {
        let ds = dataset();
        let f = filter(1, Zone::Yeux, Parameter::Ttt);
        assert!(LineRenderer::default().render(&ctx(&f, &ds)).is_none());
    }

    #[test]
    fn test_max_value() {
        let ds = dataset();
        let f = filter(1, Zone::Ecran, Parameter::Tp);
        let Some(Artifact::Line(chart)) = LineRenderer::default().render(&ctx(&f, &ds)) else {
            panic!("expected line chart");
        };
        assert!(chart.max_value() > 80.0 && chart.max_value() <= 100.0);
    }
}

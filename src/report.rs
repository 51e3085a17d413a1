//! # Module: Text Report
//!
//! ## Responsibility
//! Plain-text rendering of every live artifact of a [`Synchronizer`], used by
//! `gaze-dashboard --report` and handy in tests.
//!
//! ## NOT Responsible For
//! - Triggering renders (the caller does)

use std::fmt;

use crate::charts::Artifact;
use crate::dataset::{format_display, format_with_unit, Unit};
use crate::sync::Synchronizer;

/// A printable snapshot of the synchronizer's artifacts.
pub struct Report<'a> {
    title: &'a str,
    sync: &'a Synchronizer,
}

impl<'a> Report<'a> {
    /// Snapshot of `sync` headed by `title`.
    pub fn new(title: &'a str, sync: &'a Synchronizer) -> Self {
        Self { title, sync }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f, "Filtre : {}", self.sync.filter())?;
        writeln!(
            f,
            "Seuil de significativité : p < {}",
            self.sync.significance().threshold()
        )?;

        for (name, artifact) in self.sync.artifacts() {
            writeln!(f)?;
            match artifact {
                Some(a) => write_artifact(f, a)?,
                None => writeln!(f, "[{name}] aucune donnée")?,
            }
        }
        Ok(())
    }
}

fn write_artifact(f: &mut fmt::Formatter<'_>, artifact: &Artifact) -> fmt::Result {
    match artifact {
        Artifact::Bar(c) => {
            writeln!(f, "[bar] {}", c.title)?;
            if let Some(sub) = &c.subtitle {
                writeln!(f, "  {sub}")?;
            }
            for bar in &c.bars {
                writeln!(f, "  {:<40} {}", bar.label, format_display(bar.value, c.unit))?;
            }
        }
        Artifact::Line(c) => {
            writeln!(f, "[line] {}", c.title)?;
            for series in &c.series {
                writeln!(
                    f,
                    "  {:<4} {}",
                    series.group.label(),
                    join_values(&c.labels, &series.values, c.unit)
                )?;
            }
        }
        Artifact::Pie(c) => {
            writeln!(f, "[pie] {}", c.title)?;
            for slice in &c.slices {
                writeln!(
                    f,
                    "  {:<8} {:>12} {:>5.1}%",
                    slice.zone.label(),
                    format_display(slice.value, c.unit),
                    slice.share
                )?;
            }
        }
        Artifact::Combined(c) => {
            writeln!(f, "[combined] {}", c.title)?;
            for (i, label) in c.labels.iter().enumerate() {
                let cell = |values: &[f64]| {
                    values
                        .get(i)
                        .map(|v| format_display(*v, c.unit))
                        .unwrap_or_default()
                };
                writeln!(
                    f,
                    "  {label}: DT {} | TSA {} | Moyenne {}",
                    cell(&c.dt),
                    cell(&c.tsa),
                    cell(&c.average)
                )?;
            }
        }
        Artifact::Silhouette(s) => {
            writeln!(f, "[silhouette] {}", s.title)?;
            for fig in &s.figures {
                writeln!(
                    f,
                    "  {:<4} remplissage {:>5.1}% ({})",
                    fig.group.label(),
                    fig.fill_percent,
                    format_with_unit(fig.raw_value, fig.unit)
                )?;
            }
            if s.significant {
                writeln!(f, "  Différence significative entre les deux groupes !")?;
            }
            writeln!(f, "  {}", s.conclusion)?;
        }
        Artifact::Speedometer(s) => {
            writeln!(f, "[speedometer] {}", s.title)?;
            for g in &s.gauges {
                writeln!(
                    f,
                    "  {:<4} {}",
                    g.group.label(),
                    format_display(g.seconds, Unit::Seconds)
                )?;
            }
            writeln!(f, "  {}", s.verdict)?;
        }
        Artifact::Attention(a) => {
            writeln!(f, "[attention] {}", a.title)?;
            for row in &a.rows {
                writeln!(
                    f,
                    "  {:<8} DT {:>5.1}% | TSA {:>5.1}%{}",
                    row.zone.label(),
                    row.dt_percent,
                    row.tsa_percent,
                    if row.significant { "  *" } else { "" }
                )?;
            }
        }
        Artifact::ZoneHighlight(h) => {
            writeln!(f, "[highlight] {} : {}", h.face.label(), h.zone.label())?;
        }
    }
    Ok(())
}

fn join_values(labels: &[String], values: &[f64], unit: Unit) -> String {
    labels
        .iter()
        .zip(values)
        .map(|(l, v)| format!("{l} = {}", format_display(*v, unit)))
        .collect::<Vec<_>>()
        .join(", ")
}

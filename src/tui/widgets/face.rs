//! # Widget: Face Card
//!
//! ## Responsibility
//! Draws a small face for the active stimulus and overlays the active zone in
//! its colour, driven by the [`ZoneHighlight`](crate::charts::ZoneHighlight)
//! artifact.
//!
//! ## Guarantees
//! - Exactly one zone is highlighted at a time
//! - The screen zone highlights the card border, not a face row

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{render_empty, zone_color};
use crate::charts::Artifact;
use crate::filter::Zone;
use crate::tui::app::App;

/// Face rows, top to bottom.
const FACE: [&str; 4] = [
    " .-------. ",
    "(  o   o  )",
    "(    \u{203f}    )",
    " '-------' ",
];

/// Zone each face row belongs to.
pub fn row_zone(row: usize) -> Zone {
    match row {
        1 => Zone::Yeux,
        2 => Zone::Bouche,
        _ => Zone::Tete,
    }
}

/// Renders the face card.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(Artifact::ZoneHighlight(h)) = app.artifact("highlight") else {
        render_empty(f, area, "Visage");
        return;
    };

    let active = zone_color(h.zone);
    let border = if h.zone == Zone::Ecran {
        Style::default().fg(active).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} \u{00b7} {} ", h.face.label(), h.zone.label()),
            Style::default().fg(active).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border);

    let lines: Vec<Line> = FACE
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if row_zone(i) == h.zone {
                Style::default().fg(active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(*row, style))
        })
        .collect();

    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_zone_mapping() {
        assert_eq!(row_zone(0), Zone::Tete);
        assert_eq!(row_zone(1), Zone::Yeux);
        assert_eq!(row_zone(2), Zone::Bouche);
        assert_eq!(row_zone(3), Zone::Tete);
    }

    #[test]
    fn test_screen_zone_has_no_row() {
        assert!((0..FACE.len()).all(|r| row_zone(r) != Zone::Ecran));
    }
}

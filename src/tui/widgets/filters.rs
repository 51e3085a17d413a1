//! # Widget: Filter Controls
//!
//! ## Responsibility
//! Shows the three selectors (face, zone, parameter) with the active value
//! highlighted and the key that changes each one.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{panel, zone_color};
use crate::filter::{Parameter, Zone};
use crate::tui::app::App;

fn option(text: String, active: bool, color: Color) -> Span<'static> {
    if active {
        Span::styled(
            format!("[{text}]"),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {text} "), Style::default().fg(Color::Gray))
    }
}

fn key_hint(hint: &'static str) -> Span<'static> {
    Span::styled(hint, Style::default().fg(Color::DarkGray))
}

/// Renders the filter panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel("Filtres");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let filter = app.filter();

    let mut faces = vec![Span::styled("Visage    ", Style::default().fg(Color::White))];
    for face in app.sync.dataset().faces() {
        faces.push(option(face.to_string(), *face == filter.face, Color::Cyan));
    }
    faces.push(key_hint("  [1-9] [f/F]"));

    let mut zones = vec![Span::styled("Zone      ", Style::default().fg(Color::White))];
    for zone in Zone::ALL {
        zones.push(option(zone.label().to_string(), zone == filter.zone, zone_color(zone)));
    }
    zones.push(key_hint("  [e t y b] [z/Z]"));

    let mut params = vec![Span::styled("Paramètre ", Style::default().fg(Color::White))];
    for parameter in Parameter::ALL {
        params.push(option(
            parameter.abbr().to_string(),
            parameter == filter.parameter,
            Color::Cyan,
        ));
    }
    params.push(key_hint("  [p/P]"));

    let lines = vec![
        Line::from(faces),
        Line::from(zones),
        Line::from(params),
        Line::from(Span::styled(
            filter.parameter.label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

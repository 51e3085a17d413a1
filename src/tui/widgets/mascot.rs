//! # Widget: Mascot
//!
//! ## Responsibility
//! Draws the guide character with its animated mouth and speech bubble, plus
//! the script position it is following.
//!
//! ## Guarantees
//! - A disabled mascot renders a muted placeholder, never an error
//! - The mouth frame follows [`Mouth`] exactly

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel;
use crate::mascot::{script, Cue, Mascot, Mouth};
use crate::tui::app::App;

/// The character's three rows for a mouth frame.
pub fn portrait(mouth: Mouth) -> [&'static str; 3] {
    let mouth_row = match mouth {
        Mouth::Closed => " \\ \u{2500} / ",
        Mouth::Open => " \\ O / ",
    };
    [" (\u{2022}_\u{2022}) ", mouth_row, "  /|\\  "]
}

/// "section 2/5 · contexte" style position label.
pub fn position_label(mascot: &Mascot) -> String {
    let lines = script(mascot.page());
    let cue = match mascot.current_line().map(|l| l.cue) {
        Some(Cue::Section(id)) => id.to_string(),
        Some(Cue::Slide(n)) => format!("slide {n}"),
        None => String::from("-"),
    };
    format!(
        "{} {}/{} \u{00b7} {cue}",
        mascot.page(),
        mascot.cursor() + 1,
        lines.len()
    )
}

/// Renders the mascot panel.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel("Professeur Bluestein");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(mascot) = app.mascot.as_ref() else {
        let para = Paragraph::new(Span::styled(
            "(mascotte désactivée)",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(para, inner);
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(10)])
        .split(inner);

    let face_color = if mascot.is_talking() {
        Color::Yellow
    } else {
        Color::White
    };
    let mut figure: Vec<Line> = portrait(mascot.mouth())
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(face_color))))
        .collect();
    figure.push(Line::from(Span::styled(
        format!("#{}", mascot.spoken()),
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(Paragraph::new(figure), cols[0]);

    let bubble = match mascot.bubble() {
        Some(text) => Line::from(Span::styled(
            format!("\u{00ab} {text} \u{00bb}"),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        )),
        None => Line::from(Span::styled("\u{2026}", Style::default().fg(Color::DarkGray))),
    };
    let text = vec![
        bubble,
        Line::from(Span::styled(
            format!("{}  [n/N]", position_label(mascot)),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), cols[1]);
}

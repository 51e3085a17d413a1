//! # Module: TUI Widgets
//!
//! ## Responsibility
//! One rendering widget per dashboard panel. Each widget is a pure function
//! that takes app state and a layout rect and renders into a frame.
//!
//! ## Guarantees
//! - Every chart widget draws a placeholder when its renderer produced nothing
//! - No widget panics on any input range
//! - Group colours are identical across every panel

use std::str::FromStr;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::dataset::{Group, AVERAGE_RGB};
use crate::filter::Zone;

pub mod attention;
pub mod bar;
pub mod combined;
pub mod face;
pub mod filters;
pub mod line;
pub mod log;
pub mod mascot;
pub mod pie;
pub mod silhouette;
pub mod speedometer;

/// Returns the colour for a fill ratio.
///
/// Green if <0.60, Yellow if 0.60-0.85, Red if >0.85.
pub fn fill_color(ratio: f64) -> Color {
    if ratio > 0.85 {
        Color::Red
    } else if ratio > 0.60 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Builds a fill bar string using Unicode block characters.
///
/// # Returns
/// String with `\u{2588}` (filled) and `\u{2591}` (empty) characters.
pub fn fill_bar(ratio: f64, width: usize) -> String {
    let clamped = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(empty))
}

/// Series colour of a group.
pub fn group_color(group: Group) -> Color {
    let (r, g, b) = group.rgb();
    Color::Rgb(r, g, b)
}

/// Colour of the cross-group average.
pub fn average_color() -> Color {
    let (r, g, b) = AVERAGE_RGB;
    Color::Rgb(r, g, b)
}

/// Highlight colour of a zone.
pub fn zone_color(zone: Zone) -> Color {
    Color::from_str(zone.color_hex()).unwrap_or(Color::White)
}

/// Bordered panel with a cyan bold title.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Draws the placeholder of a view whose renderer produced nothing.
pub fn render_empty(f: &mut Frame, area: Rect, title: &str) {
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Aucune donnée pour cette combinaison",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(panel(title))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

/// Legend line "■ DT  ■ TSA".
pub fn group_legend() -> Line<'static> {
    let mut spans = Vec::new();
    for group in Group::ALL {
        spans.push(Span::styled("\u{25a0} ", Style::default().fg(group_color(group))));
        spans.push(Span::styled(
            format!("{}  ", group.label()),
            Style::default().fg(Color::White),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bar_empty() {
        assert_eq!(fill_bar(0.0, 4), "\u{2591}".repeat(4));
    }

    #[test]
    fn test_fill_bar_full() {
        assert_eq!(fill_bar(1.0, 4), "\u{2588}".repeat(4));
    }

    #[test]
    fn test_fill_bar_half() {
        assert_eq!(fill_bar(0.5, 4), "\u{2588}\u{2588}\u{2591}\u{2591}");
    }

    #[test]
    fn test_fill_bar_clamps_out_of_range() {
        assert_eq!(fill_bar(2.0, 3), "\u{2588}".repeat(3));
        assert_eq!(fill_bar(-1.0, 3), "\u{2591}".repeat(3));
        assert_eq!(fill_bar(f64::NAN, 3), "\u{2591}".repeat(3));
    }

    #[test]
    fn test_fill_color_thresholds() {
        assert_eq!(fill_color(0.5), Color::Green);
        assert_eq!(fill_color(0.7), Color::Yellow);
        assert_eq!(fill_color(0.9), Color::Red);
    }

    #[test]
    fn test_group_colors_differ() {
        assert_ne!(group_color(Group::Dt), group_color(Group::Tsa));
        assert_eq!(group_color(Group::Dt), Color::Rgb(0x00, 0x9D, 0xC1));
    }

    #[test]
    fn test_zone_colors_parse() {
        for zone in Zone::ALL {
            assert!(matches!(zone_color(zone), Color::Rgb(..)), "{zone:?}");
        }
    }
}

//! # Widget: Log Tail
//!
//! ## Responsibility
//! Renders the dashboard's event log with color-coded severity levels.
//! INFO=white, WARN=yellow, ERROR=red, DEBUG=gray.
//!
//! ## Guarantees
//! - Fixed-width timestamp column for alignment
//! - Long lines truncated with `…` on character boundaries
//! - Handles empty log list gracefully
//! - Newest entries appear at the bottom unless scrolled

use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, LogLevel};

/// Returns the display color for a log level.
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::White,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Debug => Color::DarkGray,
    }
}

/// Truncates a string to at most `max_width` characters, adding `…` if
/// truncated.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_width - 1).collect();
    out.push('\u{2026}');
    out
}

/// Entries shown in a window of `height` rows scrolled `offset` entries back
/// from the newest.
pub fn visible_range(len: usize, height: usize, offset: usize) -> Range<usize> {
    let end = len.saturating_sub(offset);
    end.saturating_sub(height)..end
}

/// Renders the log tail widget.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.log_scroll_offset > 0 {
        format!(" JOURNAL (\u{2191}{}) ", app.log_scroll_offset)
    } else {
        String::from(" JOURNAL ")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let max_line_width = inner.width as usize;

    let range = visible_range(app.log_entries.len(), height, app.log_scroll_offset);

    let lines: Vec<Line> = app
        .log_entries
        .range(range)
        .map(|entry| {
            let color = level_color(entry.level);
            let prefix = format!("[{}] {}  ", entry.timestamp, entry.level.label());

            let remaining_width = max_line_width.saturating_sub(prefix.chars().count());
            let body = if entry.fields.is_empty() {
                entry.message.clone()
            } else {
                format!("{:<16} {}", entry.message, entry.fields)
            };

            Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}  ", entry.level.label()),
                    Style::default().fg(color),
                ),
                Span::styled(
                    truncate_with_ellipsis(&body, remaining_width),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_color_mapping() {
        assert_eq!(level_color(LogLevel::Info), Color::White);
        assert_eq!(level_color(LogLevel::Warn), Color::Yellow);
        assert_eq!(level_color(LogLevel::Error), Color::Red);
        assert_eq!(level_color(LogLevel::Debug), Color::DarkGray);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello\u{2026}");
    }

    #[test]
    fn test_truncate_accented_text_on_char_boundary() {
        assert_eq!(truncate_with_ellipsis("écran tête", 4), "écr\u{2026}");
        assert_eq!(truncate_with_ellipsis("Tête", 4), "Tête");
    }

    #[test]
    fn test_truncate_width_one_and_zero() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "\u{2026}");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_visible_range_tail() {
        assert_eq!(visible_range(10, 4, 0), 6..10);
        assert_eq!(visible_range(10, 4, 3), 3..7);
        assert_eq!(visible_range(10, 20, 0), 0..10);
    }

    #[test]
    fn test_visible_range_offset_past_start_is_empty() {
        assert!(visible_range(3, 4, 9).is_empty());
    }
}

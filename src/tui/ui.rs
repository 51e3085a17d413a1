//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Lays out the dashboard by dividing the terminal into regions
//! and delegating to individual widget renderers. Handles the minimum size
//! guard and the help and explanation overlays.
//!
//! ## Guarantees
//! - Layout adapts to terminal sizes from 100x40 upward
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Overlay, MIN_COLS, MIN_ROWS};
use super::widgets;
use crate::dataset::explanations;

/// Renders the complete dashboard UI into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    let title = format!(
        " {} {:>width$} ",
        app.title,
        chrono::Local::now().format("%H:%M:%S"),
        width = (size.width as usize).saturating_sub(app.title.chars().count() + 6),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " [q]uitter  [r]éinitialiser  [i]nfo paramètre  [h]aide ",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // filters + face + mascot
            Constraint::Min(16),   // 2x2 chart grid
            Constraint::Length(9), // silhouettes + speedometer + attention
            Constraint::Length(6), // log tail
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(24),
            Constraint::Min(30),
        ])
        .split(rows[0]);
    widgets::filters::render(f, top[0], app);
    widgets::face::render(f, top[1], app);
    widgets::mascot::render(f, top[2], app);

    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let upper = halves(grid_rows[0]);
    let lower = halves(grid_rows[1]);
    widgets::bar::render(f, upper[0], app);
    widgets::line::render(f, upper[1], app);
    widgets::pie::render(f, lower[0], app);
    widgets::combined::render(f, lower[1], app);

    let views = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(36),
            Constraint::Percentage(28),
            Constraint::Percentage(36),
        ])
        .split(rows[2]);
    widgets::silhouette::render(f, views[0], app);
    widgets::speedometer::render(f, views[1], app);
    widgets::attention::render(f, views[2], app);

    widgets::log::render(f, rows[3], app);

    match app.overlay {
        Some(Overlay::Help) => draw_help_overlay(f, size),
        Some(Overlay::Explanation) => draw_explanation_overlay(f, size, app),
        None => {}
    }
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

/// Centered popup of at most `width` x `height` inside `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal trop petit : agrandir à au moins {}x{}",
        MIN_COLS, MIN_ROWS
    );
    let current_size = format!("Taille actuelle : {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup = popup_area(area, 56, 20);
    f.render_widget(Clear, popup);

    let key = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
    };
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Regards d'enfants : DT vs TSA",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  Filtres :", Style::default().fg(Color::White))),
        key("    [1-9]      Visage n        [f/F] visage suivant/préc."),
        key("    [e t y b]  Écran Tête Yeux Bouche   [z/Z] zone"),
        key("    [p/P]      Paramètre suivant/précédent"),
        key("    [r]        Réinitialiser les filtres"),
        Line::from(""),
        Line::from(Span::styled("  Affichage :", Style::default().fg(Color::White))),
        key("    [i]        Explication du paramètre"),
        key("    [n/N]      Mascotte : section suivante/préc."),
        key("    [\u{2191}\u{2193}]       Défiler le journal"),
        key("    [h]        Afficher/masquer l'aide"),
        key("    [q] [Ctrl+C]  Quitter"),
        Line::from(""),
        Line::from(Span::styled(
            "  [Esc] pour fermer",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Aide ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup);
}

/// Renders the explanation card of the active parameter.
fn draw_explanation_overlay(f: &mut Frame, area: Rect, app: &App) {
    let popup = popup_area(area, 72, 22);
    f.render_widget(Clear, popup);

    let card = explanations::definition(app.filter().parameter);
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    };
    let body = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::White)));

    let lines = vec![
        heading("Définition"),
        body(card.description),
        Line::from(""),
        heading("Interprétation"),
        body(card.explanation),
        Line::from(""),
        heading("Exemple"),
        body(card.example),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] pour fermer",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ({}) ", card.name, card.abbr))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

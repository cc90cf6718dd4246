//! Stateless UI rendering.
//!
//! Every frame is fully re-derived from engine state, so the display
//! can never drift from the game: win highlights, scores, and undo
//! availability all come straight from the engine's accessors.

mod board;

use crate::app::App;
use noughts::RoundStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the whole screen from the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(1),  // Scores
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Key help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    board::render_board(frame, chunks[1], app.engine());

    frame.render_widget(score_line(app), chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    frame.render_widget(help_line(app), chunks[4]);

    if let Some(modal) = app.modal() {
        draw_modal(frame, area, &modal.title, &modal.message);
    }
}

fn score_line(app: &App) -> Paragraph<'_> {
    let scores = app.engine().scores();
    let mover = app.engine().to_move();
    let line = Line::from(vec![
        Span::styled(
            format!(" X: {} ", scores.x_wins()),
            Style::default().fg(Color::Blue),
        ),
        Span::styled(
            format!(" O: {} ", scores.o_wins()),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!(" Draws: {} ", scores.draws()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(
            match app.engine().status() {
                RoundStatus::InProgress => format!("Turn: {}", mover),
                RoundStatus::Won { winner, .. } => format!("Winner: {}", winner),
                RoundStatus::Draw => "Round drawn".to_string(),
            },
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    Paragraph::new(line).alignment(Alignment::Center)
}

fn help_line(app: &App) -> Paragraph<'_> {
    // Undo availability comes from the engine, never tracked locally.
    let undo = if app.engine().can_undo() {
        "u undo"
    } else {
        "u undo (unavailable)"
    };
    let help = format!("1-9 play | {} | h hint | n new round | r restart match | q quit", undo);
    Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

fn draw_modal(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup = center_rect(area, 44, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .style(Style::default().fg(Color::Cyan));

    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::raw(message.to_string())),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter: play again   Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(body, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}

//! Frame layout: title, board, status.

mod board;

pub use board::board_canvas;

use crate::app::App;
use crate::geometry::BoardExtent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

/// Draws one frame and records the board area on `app` for mouse mapping.
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = square_rect(chunks[1]);
    app.set_board_extent(BoardExtent::new(
        board_area.x,
        board_area.y,
        board_area.width,
        board_area.height,
    ));
    frame.render_widget(board_canvas(app, now), board_area);

    let status_style = if app.accepts_input() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let status = Paragraph::new(app.status_line(now))
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Largest centered rect that looks square, given terminal cells are about
/// twice as tall as they are wide.
pub fn square_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

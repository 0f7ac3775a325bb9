//! Keyboard and mouse mapping to board cells.

use crate::geometry::BoardExtent;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_round::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the highlight cursor.
    MoveCursor(Position),
    /// Tap a cell.
    Tap(Position),
    /// Leave the game.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key to an action given the current cursor.
///
/// Arrows move the cursor, Enter/Space tap it, digits 1-9 tap cells in
/// reading order, `q`/Esc quit.
pub fn key_action(cursor: Position, key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Tap(cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(KeyAction::None, KeyAction::Tap),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::MoveCursor(move_cursor(cursor, key))
        }
        _ => KeyAction::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::new(row, col).unwrap_or(cursor)
}

/// Cell under a left-button press inside the board, if any.
///
/// Only the press counts, so one click is one tap.
pub fn mouse_tap(extent: BoardExtent, event: MouseEvent) -> Option<Position> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (row, col) = extent.cell_at(event.column, event.row)?;
            Position::new(row, col)
        }
        _ => None,
    }
}

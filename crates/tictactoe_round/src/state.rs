//! Immutable board snapshot.

use crate::error::MoveError;
use crate::rules;
use crate::{Mark, Player, Position, RoundResult};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A 3x3 grid of marks plus the player whose turn it is.
///
/// Every transition consumes the state and returns a new one. Turn
/// bookkeeping belongs to the caller: [`GameState::place`] never changes
/// the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
    /// Player to move next.
    active: Player,
}

impl GameState {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            marks: [Mark::Empty; 9],
            active: Player::X,
        }
    }

    /// Places `player`'s mark at `(row, col)`, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinates are off the
    /// board and [`MoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn place(self, row: usize, col: usize, player: Player) -> Result<Self, MoveError> {
        let pos = Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place_at(pos, player)
    }

    /// Places `player`'s mark at `pos`, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark.
    pub fn place_at(mut self, pos: Position, player: Player) -> Result<Self, MoveError> {
        if !self.marks[pos.index()].is_empty() {
            return Err(MoveError::Occupied(pos));
        }
        self.marks[pos.index()] = Mark::Occupied(player);
        Ok(self)
    }

    /// Returns a copy of this state with `player` to move.
    pub fn with_active_player(mut self, player: Player) -> Self {
        self.active = player;
        self
    }

    /// Mark at `(row, col)`.
    ///
    /// Off-board coordinates read as [`Mark::Empty`]; callers bounds-check first.
    pub fn cell(&self, row: usize, col: usize) -> Mark {
        match Position::new(row, col) {
            Some(pos) => self.cell_at(pos),
            None => {
                warn!(row, col, "Read of off-board cell");
                Mark::Empty
            }
        }
    }

    /// Mark at `pos`.
    pub fn cell_at(&self, pos: Position) -> Mark {
        self.marks[pos.index()]
    }

    /// All marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Player to move next.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Number of non-empty cells.
    pub fn move_count(&self) -> usize {
        self.marks.iter().filter(|mark| !mark.is_empty()).count()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.marks)
    }

    /// The player owning a complete line, if any.
    ///
    /// Lines are scanned rows first, then columns, then diagonals.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.marks)
    }

    /// Win before Draw before InProgress.
    pub fn result(&self) -> RoundResult {
        if let Some(player) = self.winner() {
            RoundResult::Win(player)
        } else if self.is_full() {
            RoundResult::Draw
        } else {
            RoundResult::InProgress
        }
    }

    /// Checks that X has played exactly as often as O, or once more.
    ///
    /// Holds for every state reached by alternating turns from X.
    pub fn is_consistent(&self) -> bool {
        let count = |player| {
            self.marks
                .iter()
                .filter(|mark| mark.player() == Some(player))
                .count()
        };
        let (x_count, o_count) = (count(Player::X), count(Player::O));
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cell(row, col) {
                    Mark::Empty => '.',
                    Mark::Occupied(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

//! Core value types for a tic-tac-toe round.

use serde::{Deserialize, Serialize};

/// One of the two human players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (always starts a round).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the other player.
    pub fn toggle(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The value occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has played in this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// No line completed and at least one empty cell remains.
    InProgress,
    /// A player owns all three cells of a line.
    Win(Player),
    /// Board is full with no completed line.
    Draw,
}

impl RoundResult {
    /// Returns true for Win or Draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundResult::Win(player) => Some(*player),
            RoundResult::InProgress | RoundResult::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::InProgress => write!(f, "In progress"),
            RoundResult::Win(player) => write!(f, "Player {} wins", player),
            RoundResult::Draw => write!(f, "Draw"),
        }
    }
}

//! Win detection logic for tic-tac-toe.

use crate::{Mark, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight triples that win a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All eight lines in scan order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells of this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }
}

/// Returns the first fully-owned line and its owner.
#[instrument(skip(marks))]
pub fn winning_line(marks: &[Mark; 9]) -> Option<(Line, Player)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions().map(|pos| marks[pos.index()]);
        match a {
            Mark::Occupied(player) if a == b && b == c => Some((line, player)),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns all three cells of a line,
/// `None` otherwise.
#[instrument(skip(marks))]
pub fn check_winner(marks: &[Mark; 9]) -> Option<Player> {
    winning_line(marks).map(|(_, player)| player)
}

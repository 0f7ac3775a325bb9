//! Draw detection logic for tic-tac-toe.

use crate::Mark;
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(skip(marks))]
pub fn is_full(marks: &[Mark; 9]) -> bool {
    marks.iter().all(|mark| !mark.is_empty())
}

//! Error types for the round engine.

use crate::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// A placement the board refuses.
///
/// Collaborators are expected to pre-filter taps with a bounds check and
/// `cell(row, col) == Mark::Empty`, so seeing one of these means a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column outside 0-2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Settings could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Round lifecycle: apply taps, detect the end, reset.
//!
//! The controller is a plain synchronous state machine. It never sleeps;
//! the pause between a resolved round and the reset is driven by
//! [`RoundSession`](crate::RoundSession), which calls [`RoundController::reset`]
//! once the delay has elapsed.

use crate::observer::RoundObserver;
use crate::{GameState, Position, RoundResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Whether the controller is taking moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Input enabled.
    Accepting,
    /// Round over, input disabled until reset.
    Resolved(RoundResult),
}

/// Why a tap had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The round is over and waiting for its reset.
    RoundResolved,
    /// The coordinates are off the board.
    OutOfBounds,
    /// The cell already holds a mark.
    Occupied,
}

/// What a tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// A mark was placed and the round continues.
    Placed,
    /// A mark was placed and ended the round.
    Resolved(RoundResult),
}

/// Owns the current [`GameState`] and mediates taps into it.
#[derive(Debug)]
pub struct RoundController<O> {
    state: GameState,
    lifecycle: Lifecycle,
    observer: O,
    rounds_completed: u64,
}

impl<O: RoundObserver> RoundController<O> {
    /// Creates a controller with an empty board, X to move.
    #[instrument(skip(observer))]
    pub fn new(observer: O) -> Self {
        info!("Creating RoundController");
        Self {
            state: GameState::new(),
            lifecycle: Lifecycle::Accepting,
            observer,
            rounds_completed: 0,
        }
    }

    /// Handles a tap on `(row, col)`.
    ///
    /// Ignored while resolved, off the board, or on an occupied cell. Otherwise
    /// places the active player's mark, passes the turn, and resolves the round
    /// if the move completed a line or filled the board.
    #[instrument(skip(self), fields(active = %self.state.active_player()))]
    pub fn on_cell_tapped(&mut self, row: usize, col: usize) -> TapOutcome {
        if let Lifecycle::Resolved(result) = self.lifecycle {
            debug!(%result, "Tap ignored, round already resolved");
            return TapOutcome::Ignored(IgnoreReason::RoundResolved);
        }

        let Some(pos) = Position::new(row, col) else {
            warn!("Tap outside the board");
            return TapOutcome::Ignored(IgnoreReason::OutOfBounds);
        };

        if !self.state.cell_at(pos).is_empty() {
            debug!(position = %pos, "Tap on occupied cell ignored");
            return TapOutcome::Ignored(IgnoreReason::Occupied);
        }

        let player = self.state.active_player();
        let next = match self.state.place_at(pos, player) {
            Ok(next) => next.with_active_player(player.toggle()),
            Err(e) => {
                error!(error = %e, "Board rejected a pre-checked move");
                debug_assert!(false, "board rejected a pre-checked move: {e}");
                return TapOutcome::Ignored(IgnoreReason::Occupied);
            }
        };
        debug_assert!(next.is_consistent(), "turn alternation broken");
        self.state = next;

        debug!(position = %pos, %player, "Mark placed");
        self.observer.on_mark_placed(pos, player);
        self.observer.on_state_changed(&self.state);

        let result = self.state.result();
        if !result.is_terminal() {
            return TapOutcome::Placed;
        }

        info!(%result, moves = self.state.move_count(), "Round resolved");
        self.lifecycle = Lifecycle::Resolved(result);
        match result {
            RoundResult::Win(winner) => self.observer.on_player_win(winner),
            RoundResult::Draw => self.observer.on_draw(),
            RoundResult::InProgress => {}
        }
        TapOutcome::Resolved(result)
    }

    /// Clears the board for a new round with X to move.
    ///
    /// Only a resolved round can be reset; returns `false` and notifies
    /// nobody if the controller is still accepting input.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Accepting {
            warn!("Reset requested while round still in progress");
            return false;
        }

        self.state = GameState::new();
        self.lifecycle = Lifecycle::Accepting;
        self.rounds_completed += 1;
        info!(rounds_completed = self.rounds_completed, "New round");

        self.observer.on_state_changed(&self.state);
        self.observer.on_new_round();
        true
    }
}

impl<O> RoundController<O> {
    /// Current board.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current lifecycle.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True while taps are applied.
    pub fn is_accepting(&self) -> bool {
        self.lifecycle == Lifecycle::Accepting
    }

    /// Result of the current board.
    pub fn result(&self) -> RoundResult {
        self.state.result()
    }

    /// Number of resets performed.
    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    /// The observer receiving notifications.
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

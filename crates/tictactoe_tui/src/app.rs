//! Front-end state mirrored from round events.

use crate::geometry::BoardExtent;
use crate::reveal::RevealTracker;
use std::time::{Duration, Instant};
use tictactoe_round::{GameState, Position, RoundEvent, RoundResult, RoundSettings};
use tracing::{debug, instrument};

/// What the renderer needs between frames.
///
/// The round itself lives on the session task; `App` only mirrors what the
/// session reports and keeps presentation state (cursor, animations, the
/// area last drawn into).
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    outcome: Option<(RoundResult, Instant)>,
    reveals: RevealTracker,
    cursor: Position,
    extent: BoardExtent,
    reset_delay: Duration,
}

impl App {
    /// Creates the application state for a fresh session.
    #[instrument]
    pub fn new(settings: RoundSettings) -> Self {
        Self {
            state: GameState::new(),
            outcome: None,
            reveals: RevealTracker::new(*settings.reveal_duration()),
            cursor: Position::Center,
            extent: BoardExtent::default(),
            reset_delay: *settings.reset_delay(),
        }
    }

    /// Applies a notification from the session.
    #[instrument(skip(self, now))]
    pub fn handle_event(&mut self, event: RoundEvent, now: Instant) {
        debug!(?event, "Handling round event");
        match event {
            RoundEvent::MarkPlaced { position, .. } => self.reveals.start(position, now),
            RoundEvent::StateChanged(state) => self.state = state,
            RoundEvent::PlayerWon(player) => {
                self.outcome = Some((RoundResult::Win(player), now));
            }
            RoundEvent::Draw => self.outcome = Some((RoundResult::Draw, now)),
            RoundEvent::NewRound => {
                self.outcome = None;
                self.reveals.clear();
            }
        }
    }

    /// False between the end of a round and the next one.
    pub fn accepts_input(&self) -> bool {
        self.outcome.is_none()
    }

    /// Mirrored board.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// How the last round ended, while its reset is pending.
    pub fn outcome(&self) -> Option<RoundResult> {
        self.outcome.map(|(result, _)| result)
    }

    /// Reveal progress of `pos` at `now`.
    pub fn progress(&self, pos: Position, now: Instant) -> f64 {
        self.reveals.progress(pos, now)
    }

    /// True while something on screen changes with time alone: a mark is
    /// still drawing in, or the new-round countdown is showing.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.outcome.is_some() || self.reveals.is_animating(now)
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Area the board was last drawn into.
    pub fn board_extent(&self) -> BoardExtent {
        self.extent
    }

    /// Records where the board was drawn, for mouse mapping.
    pub fn set_board_extent(&mut self, extent: BoardExtent) {
        self.extent = extent;
    }

    /// One-line status for the footer.
    pub fn status_line(&self, now: Instant) -> String {
        match self.outcome {
            None => format!("Player {}'s turn", self.state.active_player()),
            Some((result, since)) => {
                let left = self.reset_delay.saturating_sub(now.saturating_duration_since(since));
                let secs = left.as_secs_f64().ceil() as u64;
                match result {
                    RoundResult::Win(player) => {
                        format!("Player {} wins! New round in {}s", player, secs)
                    }
                    RoundResult::Draw | RoundResult::InProgress => {
                        format!("Draw! New round in {}s", secs)
                    }
                }
            }
        }
    }
}

//! Notifications emitted by a round.

use crate::{GameState, Player, Position};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// Receives round notifications.
///
/// All methods default to no-ops so observers implement only what they use.
/// Calls arrive synchronously, on whichever task drives the controller.
pub trait RoundObserver {
    /// A mark was just placed; renderers start that cell's reveal animation.
    fn on_mark_placed(&mut self, _position: Position, _player: Player) {}

    /// The board changed (a move or a reset).
    fn on_state_changed(&mut self, _state: &GameState) {}

    /// A round ended in a win. Never fired for a draw.
    fn on_player_win(&mut self, _player: Player) {}

    /// A round ended with a full board and no line.
    fn on_draw(&mut self) {}

    /// The board was cleared after the reset delay.
    fn on_new_round(&mut self) {}
}

impl RoundObserver for () {}

/// Round notification as a message, for observers living on another task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A mark was placed.
    MarkPlaced {
        /// Cell that was played.
        position: Position,
        /// Who played it.
        player: Player,
    },
    /// New board snapshot.
    StateChanged(GameState),
    /// A player completed a line.
    PlayerWon(Player),
    /// The board filled with no line.
    Draw,
    /// The board was reset for a new round.
    NewRound,
}

impl RoundObserver for mpsc::UnboundedSender<RoundEvent> {
    fn on_mark_placed(&mut self, position: Position, player: Player) {
        forward(self, RoundEvent::MarkPlaced { position, player });
    }

    fn on_state_changed(&mut self, state: &GameState) {
        forward(self, RoundEvent::StateChanged(*state));
    }

    fn on_player_win(&mut self, player: Player) {
        forward(self, RoundEvent::PlayerWon(player));
    }

    fn on_draw(&mut self) {
        forward(self, RoundEvent::Draw);
    }

    fn on_new_round(&mut self) {
        forward(self, RoundEvent::NewRound);
    }
}

fn forward(tx: &mpsc::UnboundedSender<RoundEvent>, event: RoundEvent) {
    if tx.send(event).is_err() {
        warn!(?event, "Round event receiver closed, dropping event");
    }
}

/// Observer that records every notification, in order.
///
/// Useful for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Number of `PlayerWon` events.
    pub fn wins(&self) -> usize {
        self.count(|event| matches!(event, RoundEvent::PlayerWon(_)))
    }

    /// Number of `NewRound` events.
    pub fn new_rounds(&self) -> usize {
        self.count(|event| matches!(event, RoundEvent::NewRound))
    }

    fn count(&self, pred: impl Fn(&RoundEvent) -> bool) -> usize {
        self.events.iter().filter(|event| pred(event)).count()
    }
}

impl RoundObserver for EventLog {
    fn on_mark_placed(&mut self, position: Position, player: Player) {
        self.events.push(RoundEvent::MarkPlaced { position, player });
    }

    fn on_state_changed(&mut self, state: &GameState) {
        self.events.push(RoundEvent::StateChanged(*state));
    }

    fn on_player_win(&mut self, player: Player) {
        self.events.push(RoundEvent::PlayerWon(player));
    }

    fn on_draw(&mut self) {
        self.events.push(RoundEvent::Draw);
    }

    fn on_new_round(&mut self) {
        self.events.push(RoundEvent::NewRound);
    }
}

//! Tic-tac-toe round engine.
//!
//! Two humans alternate on a 3x3 board. A round ends when a player owns a
//! row, column or diagonal, or when the board fills; input then freezes, and
//! after a fixed pause the board clears and X starts again.
//!
//! # Architecture
//!
//! - **GameState**: immutable board snapshot with pure win/draw evaluation
//! - **RoundController**: synchronous state machine applying taps and resets
//! - **RoundSession**: tokio task driving a controller and its reset timer
//! - **RoundObserver**: notifications for renderers (mark placed, win, new round)
//!
//! Rendering, pointer mapping and animation live with the front end; this
//! crate only tells it what changed.
//!
//! # Example
//!
//! ```
//! use tictactoe_round::{EventLog, Player, RoundController, RoundResult};
//!
//! let mut round = RoundController::new(EventLog::new());
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     round.on_cell_tapped(row, col);
//! }
//! assert_eq!(round.result(), RoundResult::Win(Player::X));
//! assert_eq!(round.observer().wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod observer;
mod position;
pub mod rules;
mod session;
mod settings;
mod state;
mod types;

pub use controller::{IgnoreReason, Lifecycle, RoundController, TapOutcome};
pub use error::{MoveError, SettingsError};
pub use observer::{EventLog, RoundEvent, RoundObserver};
pub use position::Position;
pub use rules::Line;
pub use session::{RoundSession, SessionHandle, Snapshot};
pub use settings::{DEFAULT_RESET_DELAY, DEFAULT_REVEAL_DURATION, RoundSettings};
pub use state::GameState;
pub use types::{Mark, Player, RoundResult};

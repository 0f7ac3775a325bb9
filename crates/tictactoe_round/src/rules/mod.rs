//! Game rules for tic-tac-toe.
//!
//! Pure functions over the nine cell marks. Rules are kept apart from
//! [`GameState`](crate::GameState) so renderers and tests can evaluate a
//! grid without going through a round.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check_winner, winning_line};

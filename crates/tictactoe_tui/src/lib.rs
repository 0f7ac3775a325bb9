//! Terminal front end for the tic-tac-toe round engine.
//!
//! This crate is the presentation side of a round: it maps mouse clicks and
//! keys to cells, animates marks as they are placed, and draws the grid.
//! Game rules and the reset lifecycle come from [`tictactoe_round`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod geometry;
pub mod input;
pub mod reveal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use geometry::BoardExtent;
pub use input::KeyAction;
pub use reveal::RevealTracker;

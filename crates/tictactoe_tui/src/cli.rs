//! Command-line interface for the terminal board.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_round::{RoundSettings, SettingsError};
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe with mouse and keyboard input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with reset_delay_ms / reveal_duration_ms
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pause after a win or draw before the board clears, in milliseconds
    #[arg(long)]
    pub reset_delay_ms: Option<u64>,

    /// Duration of the mark drawing animation, in milliseconds
    #[arg(long)]
    pub reveal_ms: Option<u64>,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Settings from the config file (or defaults) with flag overrides applied.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<RoundSettings, SettingsError> {
        let mut settings = match &self.config {
            Some(path) => RoundSettings::from_file(path)?,
            None => RoundSettings::default(),
        };
        if let Some(ms) = self.reset_delay_ms {
            settings = settings.with_reset_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.reveal_ms {
            settings = settings.with_reveal_duration(Duration::from_millis(ms));
        }
        Ok(settings)
    }
}

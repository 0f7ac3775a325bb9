//! Timing settings for a round session.

use crate::error::SettingsError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Pause between a resolved round and the board clearing.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(5000);

/// Time a mark takes to draw itself in.
pub const DEFAULT_REVEAL_DURATION: Duration = Duration::from_millis(500);

/// Timing knobs for a round session.
///
/// Loaded from TOML with millisecond fields; anything omitted keeps its default:
///
/// ```toml
/// reset_delay_ms = 5000
/// reveal_duration_ms = 500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettings {
    /// Pause after a win or draw before the board resets.
    #[serde(rename = "reset_delay_ms", with = "millis")]
    reset_delay: Duration,

    /// Duration of a mark's reveal animation.
    #[serde(rename = "reveal_duration_ms", with = "millis")]
    reveal_duration: Duration,
}

impl RoundSettings {
    /// Creates settings with the default timings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with a different reset delay.
    pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    /// Returns a copy with a different reveal duration.
    pub fn with_reveal_duration(mut self, reveal_duration: Duration) -> Self {
        self.reveal_duration = reveal_duration;
        self
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            reset_delay_ms = settings.reset_delay.as_millis() as u64,
            reveal_duration_ms = settings.reveal_duration.as_millis() as u64,
            "Settings loaded"
        );
        Ok(settings)
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            reveal_duration: DEFAULT_REVEAL_DURATION,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

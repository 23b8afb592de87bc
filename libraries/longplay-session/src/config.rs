//! Session configuration

use crate::error::{Result, SessionError};
use longplay_track::{TrackLayout, DEFAULT_SNAP_DISTANCE};
use serde::{Deserialize, Serialize};

/// Media source of the bundled file played before the user picks one
pub const DEFAULT_SOURCE: &str = "/assets/audio.mp3";

/// Configuration for a player session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Track the progress indicator runs along (default: 5-row serpentine)
    #[serde(default)]
    pub layout: TrackLayout,

    /// Maximum pointer distance from the track for click/hover (default: 50)
    #[serde(default = "default_snap_distance")]
    pub snap_distance: f64,

    /// Media source of the bundled default file
    #[serde(default = "default_source")]
    pub default_source: String,
}

impl SessionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.snap_distance.is_finite() || self.snap_distance <= 0.0 {
            return Err(SessionError::InvalidInput(format!(
                "snap distance must be a positive number, got {}",
                self.snap_distance
            )));
        }

        if self.layout.is_degenerate() {
            return Err(SessionError::InvalidInput(
                "track layout needs at least two distinct, finite waypoints".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout: TrackLayout::default(),
            snap_distance: default_snap_distance(),
            default_source: default_source(),
        }
    }
}

fn default_snap_distance() -> f64 {
    DEFAULT_SNAP_DISTANCE
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

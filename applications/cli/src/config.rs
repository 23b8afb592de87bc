/// CLI configuration
use anyhow::{bail, Context, Result};
use longplay_session::SessionConfig;
use longplay_track::{TrackLayout, DEFAULT_ROWS, DEFAULT_SNAP_DISTANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "longplay.toml";

/// Prefix of environment overrides (`LONGPLAY_TRACK__SNAP_DISTANCE=20`)
pub const ENV_PREFIX: &str = "LONGPLAY";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    #[serde(default)]
    pub track: TrackSettings,

    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrackSettings {
    #[serde(default)]
    pub layout: LayoutKind,

    #[serde(default = "default_snap_distance")]
    pub snap_distance: f64,

    /// Rows of the serpentine layout
    #[serde(default = "default_rows")]
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RenderSettings {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Serpentine,
    Straight,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `longplay.toml` is used when
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (LONGPLAY_STORE_PATH, LONGPLAY_TRACK__ROWS)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let snap = self.track.snap_distance;
        if !snap.is_finite() || snap <= 0.0 {
            bail!("track.snap_distance must be a positive number, got {}", snap);
        }

        if self.track.rows == 0 {
            bail!("track.rows must be at least 1");
        }

        if self.render.width == 0 || self.render.height == 0 {
            bail!(
                "render size must be non-zero, got {}x{}",
                self.render.width,
                self.render.height
            );
        }

        Ok(())
    }

    /// Track described by the `track` settings
    pub fn layout(&self) -> TrackLayout {
        match self.track.layout {
            LayoutKind::Serpentine => TrackLayout::serpentine(self.track.rows),
            LayoutKind::Straight => TrackLayout::straight(),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            layout: self.layout(),
            snap_distance: self.track.snap_distance,
            ..Default::default()
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            track: TrackSettings::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            snap_distance: default_snap_distance(),
            rows: default_rows(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

// Default values
fn default_store_path() -> PathBuf {
    PathBuf::from("./longplay-store.json")
}

fn default_snap_distance() -> f64 {
    DEFAULT_SNAP_DISTANCE
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

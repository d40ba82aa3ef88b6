//! Runtime settings, loaded from an optional TOML file.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! [game]
//! computer_delay_ms = 250
//!
//! [celebration]
//! rain_count = 200
//! ```
//!
//! The `[celebration.burst]` and `[celebration.rain]` tables replace the
//! whole profile, so they must list every field.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Turn handling.
    game: GameConfig,
    /// Frame loop and logging.
    display: DisplayConfig,
    /// Particle tuning.
    celebration: CelebrationConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.celebration.validate()?;
        Ok(config)
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.game.seed = seed;
        }
        self
    }

    /// Overrides the log file location.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.display.log_file = path;
        }
        self
    }
}

/// Turn handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the computer answers, in milliseconds.
    computer_delay_ms: u64,
    /// Fixed RNG seed; entropy when absent.
    seed: Option<u64>,
}

impl GameConfig {
    /// Pause before the computer answers.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
            seed: None,
        }
    }
}

/// Frame loop and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frames per second for the celebration.
    fps: u32,
    /// Where tracing output goes while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl DisplayConfig {
    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            log_file: PathBuf::from("strictly_confetti.log"),
        }
    }
}

/// Celebration launch settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Number of firework origins.
    bursts: usize,
    /// Particles per firework origin.
    particles_per_burst: usize,
    /// Number of confetti particles.
    rain_count: usize,
    /// Starting height of confetti, above the visible top.
    rain_start_y: f64,
    /// Confetti is dropped once it falls this far below the bottom edge.
    rain_margin: f64,
    /// Firework particle ranges.
    burst: ParticleProfile,
    /// Confetti particle ranges.
    rain: ParticleProfile,
}

impl CelebrationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.burst.validate("burst")?;
        self.rain.validate("rain")
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            bursts: 3,
            particles_per_burst: 60,
            rain_count: 120,
            rain_start_y: -20.0,
            rain_margin: 20.0,
            burst: ParticleProfile {
                size_min: 2.0,
                size_max: 5.0,
                speed_min: 2.0,
                speed_max: 8.0,
                heading: PI,
                spread: PI,
                gravity: 0.05,
                fade: 0.015,
            },
            rain: ParticleProfile {
                size_min: 2.0,
                size_max: 6.0,
                speed_min: 0.5,
                speed_max: 2.0,
                heading: FRAC_PI_2,
                spread: 0.25,
                gravity: 0.05,
                fade: 0.004,
            },
        }
    }
}

/// Ranges a particle kind is sampled from.
///
/// Size and speed are drawn from `[min, max)`. The angle is drawn from
/// `[heading - spread, heading + spread)`.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct ParticleProfile {
    /// Smallest radius.
    size_min: f64,
    /// Radius upper bound (exclusive).
    size_max: f64,
    /// Slowest speed.
    speed_min: f64,
    /// Speed upper bound (exclusive).
    speed_max: f64,
    /// Centre of the launch angle range, radians.
    heading: f64,
    /// Half-width of the launch angle range, radians.
    spread: f64,
    /// Downward drift per frame.
    gravity: f64,
    /// Alpha lost per frame.
    fade: f64,
}

impl ParticleProfile {
    fn validate(&self, kind: &str) -> Result<(), ConfigError> {
        if !(self.size_min > 0.0 && self.size_min < self.size_max) {
            return Err(ConfigError::new(format!(
                "{kind}: size range must be positive and non-empty"
            )));
        }
        if self.speed_min >= self.speed_max {
            return Err(ConfigError::new(format!("{kind}: speed range is empty")));
        }
        if self.spread <= 0.0 {
            return Err(ConfigError::new(format!("{kind}: spread must be positive")));
        }
        if self.fade <= 0.0 {
            return Err(ConfigError::new(format!("{kind}: fade must be positive")));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

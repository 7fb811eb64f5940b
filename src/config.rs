//! Game configuration.

use crate::constants::{MAX_FRAME_MS, REALTIME_FRAME_MS};
use crate::error::ConfigError;
use crate::game::Viewport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a play session.
///
/// Every field is optional in the JSON file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play field size in world units
    pub viewport: Viewport,

    /// Target frame interval for the terminal loop
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            frame_ms: REALTIME_FRAME_MS,
        }
    }
}

impl GameConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this config, then validate.
    pub fn with_overrides(
        mut self,
        width: Option<f64>,
        height: Option<f64>,
        frame_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(width) = width {
            self.viewport.width = width;
        }
        if let Some(height) = height {
            self.viewport.height = height;
        }
        if let Some(frame_ms) = frame_ms {
            self.frame_ms = frame_ms;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(width) || !usable(height) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        if self.frame_ms == 0 || self.frame_ms > MAX_FRAME_MS {
            return Err(ConfigError::InvalidFrameInterval {
                frame_ms: self.frame_ms,
                max: MAX_FRAME_MS,
            });
        }
        Ok(())
    }
}

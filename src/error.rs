//! Error types for the terminal front end.
//!
//! The game core never fails; these cover loading configuration and driving
//! the terminal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a configuration file or with command-line overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("frame interval must be between 1 and {max} ms, got {frame_ms}")]
    InvalidFrameInterval { frame_ms: u64, max: u64 },
}

/// Top-level error for the `flapper` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

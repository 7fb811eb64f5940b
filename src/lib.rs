//! Flapper - terminal Flappy Bird.
//!
//! The `game` module is the frame-driven physics and collision core. The rest
//! is the terminal front end: configuration, input mapping, rendering and
//! logging.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use config::GameConfig;
pub use error::{AppError, ConfigError};
pub use game::{FlappyGame, FrameEvent, Viewport};

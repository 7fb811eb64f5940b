//! Flappy Bird physics and collision core.
//!
//! A single bird falls under gravity while one pair of pipes scrolls past it.
//! Each frame integrates the bird, advances the scroll, then checks for a crash
//! and for the pipes passing the bird. A tap flaps, or restarts after a crash.

pub mod collision;
pub mod logic;
pub mod physics;
pub mod scroll;
pub mod types;

pub use collision::{bird_center, check_collision, pipe_rects, Rect};
pub use logic::{on_tap, process_frame, reset_game, FrameEvent};
pub use physics::{advance, bird_tilt};
pub use scroll::{ScoreTrigger, ScrollAnimation};
pub use types::{BirdState, FlappyGame, GameState, ScrollState, Viewport};

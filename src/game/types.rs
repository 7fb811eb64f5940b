//! Flappy Bird data structures.

use super::scroll::{ScoreTrigger, ScrollAnimation};
use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, INITIAL_VELOCITY};
use serde::{Deserialize, Serialize};

/// Size of the play field in world units. Supplied at startup or on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Fixed horizontal position of the bird's left edge.
    pub fn bird_anchor_x(&self) -> f64 {
        self.width / 4.0
    }

    /// Vertical position the bird starts from after a reset.
    pub fn bird_start_y(&self) -> f64 {
        self.height / 3.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

/// Vertical kinematics of the bird. Positive is downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdState {
    /// Top edge of the bird sprite.
    pub vertical_position: f64,
    /// Units per second.
    pub vertical_velocity: f64,
}

impl BirdState {
    pub fn new(vertical_position: f64, vertical_velocity: f64) -> Self {
        Self {
            vertical_position,
            vertical_velocity,
        }
    }
}

/// Horizontal position of the pipe pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub horizontal_offset: f64,
}

/// Score and the terminal game-over flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    pub score: u32,
    pub is_over: bool,
}

/// Main game state. Everything the renderer reads lives here.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub viewport: Viewport,
    pub bird: BirdState,
    pub scroll: ScrollState,
    pub state: GameState,
    /// Drives `scroll.horizontal_offset` from the frame clock.
    pub animation: ScrollAnimation,
    pub score_trigger: ScoreTrigger,
}

impl FlappyGame {
    /// Create a fresh game. The bird starts with a gentle downward drift.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bird: BirdState::new(viewport.bird_start_y(), INITIAL_VELOCITY),
            scroll: ScrollState {
                horizontal_offset: viewport.width,
            },
            state: GameState::default(),
            animation: ScrollAnimation::new(viewport.width),
            score_trigger: ScoreTrigger::primed(viewport.width),
        }
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    pub fn bird_anchor_x(&self) -> f64 {
        self.viewport.bird_anchor_x()
    }

    /// Replace the viewport. Bird and pipes keep their current positions; the
    /// scroll loop restarts from the new width on its next wrap.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.animation.set_start(viewport.width);
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

//! Ground, ceiling and pipe collision tests.
//!
//! Pipes are tested against the bird's center point only, not its full box.
//! The bird can clip a pipe corner with its sprite without crashing.

use super::types::{BirdState, Viewport};
use crate::constants::{
    BIRD_CENTER_OFFSET_X, BIRD_CENTER_OFFSET_Y, GROUND_MARGIN, PIPE_HEIGHT, PIPE_OFFSET,
    PIPE_VERTICAL_SHIFT, PIPE_WIDTH,
};

/// Axis-aligned rectangle in world units, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict containment on both axes; points on an edge are outside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }
}

/// Top and bottom pipe rectangles for a scroll offset, in that order.
pub fn pipe_rects(scroll_offset: f64, viewport: &Viewport) -> [Rect; 2] {
    let top = Rect {
        x: scroll_offset,
        y: PIPE_OFFSET - PIPE_VERTICAL_SHIFT,
        width: PIPE_WIDTH,
        height: PIPE_HEIGHT,
    };
    let bottom = Rect {
        x: scroll_offset,
        y: viewport.height - PIPE_VERTICAL_SHIFT + PIPE_OFFSET,
        width: PIPE_WIDTH,
        height: PIPE_HEIGHT,
    };
    [top, bottom]
}

/// Center of the bird sprite.
pub fn bird_center(bird: &BirdState, viewport: &Viewport) -> (f64, f64) {
    (
        viewport.bird_anchor_x() + BIRD_CENTER_OFFSET_X,
        bird.vertical_position + BIRD_CENTER_OFFSET_Y,
    )
}

/// Bird is below the ground line or above the top of the screen.
pub fn out_of_bounds(bird: &BirdState, viewport: &Viewport) -> bool {
    bird.vertical_position > viewport.height - GROUND_MARGIN || bird.vertical_position < 0.0
}

/// Whether a point lies inside either pipe.
pub fn hits_pipe(px: f64, py: f64, scroll_offset: f64, viewport: &Viewport) -> bool {
    pipe_rects(scroll_offset, viewport)
        .iter()
        .any(|pipe| pipe.contains(px, py))
}

/// Whether the bird has crashed into the ground, ceiling or a pipe.
pub fn check_collision(bird: &BirdState, scroll_offset: f64, viewport: &Viewport) -> bool {
    if out_of_bounds(bird, viewport) {
        return true;
    }
    let (cx, cy) = bird_center(bird, viewport);
    hits_pipe(cx, cy, scroll_offset, viewport)
}

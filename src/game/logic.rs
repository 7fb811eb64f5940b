//! Game logic for Flappy Bird: the per-frame update, taps and reset.

use super::collision::check_collision;
use super::physics::{advance, is_usable_delta};
use super::scroll::ScoreTrigger;
use super::types::{BirdState, FlappyGame, GameState};
use crate::constants::JUMP_FORCE;
use log::debug;

/// Something the front end may want to react to after a frame or a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// A tap set the upward impulse.
    Flapped,
    /// The pipes passed the bird.
    Scored { score: u32 },
    /// The bird hit the ground, the ceiling or a pipe.
    Crashed { score: u32 },
    /// A tap after a crash started a new round.
    Restarted,
}

/// Process one display frame of `dt_millis`.
///
/// Does nothing once the game is over or when the delta is zero or unusable.
/// Otherwise integrates the bird, advances the scroll, then checks for a crash
/// (only if the bird moved) and for a score (only if the pipes moved).
pub fn process_frame(game: &mut FlappyGame, dt_millis: f64) -> Vec<FrameEvent> {
    let mut events = Vec::new();
    if game.state.is_over || !is_usable_delta(dt_millis) {
        return events;
    }

    let previous_position = game.bird.vertical_position;
    game.bird = advance(game.bird, dt_millis);

    let previous_offset = game.scroll.horizontal_offset;
    if let Some(offset) = game.animation.advance(dt_millis) {
        game.scroll.horizontal_offset = offset;
    }

    if game.bird.vertical_position != previous_position
        && check_collision(&game.bird, game.scroll.horizontal_offset, &game.viewport)
    {
        game.state.is_over = true;
        game.animation.cancel();
        debug!(
            "crashed at y={:.1} offset={:.1} score={}",
            game.bird.vertical_position, game.scroll.horizontal_offset, game.state.score
        );
        events.push(FrameEvent::Crashed {
            score: game.state.score,
        });
    }

    if game.scroll.horizontal_offset != previous_offset {
        let mid = game.bird_anchor_x();
        if game
            .score_trigger
            .observe(game.scroll.horizontal_offset, mid)
        {
            game.state.score += 1;
            debug!("scored, total {}", game.state.score);
            events.push(FrameEvent::Scored {
                score: game.state.score,
            });
        }
    }

    events
}

/// Handle a tap: flap while playing, restart after a crash.
pub fn on_tap(game: &mut FlappyGame) -> FrameEvent {
    if game.state.is_over {
        reset_game(game);
        return FrameEvent::Restarted;
    }

    // Override, not additive
    game.bird.vertical_velocity = JUMP_FORCE;
    FrameEvent::Flapped
}

/// Put bird, pipes and score back to the start of a round and restart scrolling.
pub fn reset_game(game: &mut FlappyGame) {
    let viewport = game.viewport;
    game.bird = BirdState::new(viewport.bird_start_y(), 0.0);
    game.state = GameState::default();
    game.scroll.horizontal_offset = viewport.width;
    game.animation.restart(viewport.width);
    game.score_trigger = ScoreTrigger::primed(viewport.width);
    debug!("round restarted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Viewport;

    fn new_game() -> FlappyGame {
        FlappyGame::new(Viewport::new(400.0, 800.0))
    }

    #[test]
    fn test_tap_sets_exact_jump_velocity() {
        for velocity in [-900.0, -500.0, 0.0, 350.0, 10_000.0] {
            let mut game = new_game();
            game.bird.vertical_velocity = velocity;
            assert_eq!(on_tap(&mut game), FrameEvent::Flapped);
            assert_eq!(game.bird.vertical_velocity, -500.0);
        }
    }

    #[test]
    fn test_repeated_taps_are_not_cumulative() {
        let mut game = new_game();
        on_tap(&mut game);
        on_tap(&mut game);
        on_tap(&mut game);
        assert_eq!(game.bird.vertical_velocity, JUMP_FORCE);
    }

    #[test]
    fn test_frame_moves_bird_and_pipes() {
        let mut game = new_game();
        let start = game.bird;
        let events = process_frame(&mut game, 16.0);
        assert!(events.is_empty());
        assert_eq!(game.bird, advance(start, 16.0));
        assert!(game.scroll.horizontal_offset < 400.0);
    }

    #[test]
    fn test_zero_delta_frame_is_noop() {
        let mut game = new_game();
        let before = game.clone();
        assert!(process_frame(&mut game, 0.0).is_empty());
        assert_eq!(game.bird, before.bird);
        assert_eq!(game.scroll, before.scroll);
        assert_eq!(game.animation, before.animation);
    }

    #[test]
    fn test_ground_crash_ends_game_and_stops_scroll() {
        let mut game = new_game();
        game.bird = BirdState::new(690.0, 1000.0);
        let events = process_frame(&mut game, 16.0);
        assert_eq!(events, vec![FrameEvent::Crashed { score: 0 }]);
        assert!(game.is_over());
        assert!(!game.animation.is_running());
    }

    #[test]
    fn test_frames_after_crash_are_frozen() {
        let mut game = new_game();
        game.bird = BirdState::new(690.0, 1000.0);
        process_frame(&mut game, 16.0);
        let bird = game.bird;
        let offset = game.scroll.horizontal_offset;

        for _ in 0..50 {
            assert!(process_frame(&mut game, 16.0).is_empty());
        }
        assert_eq!(game.bird, bird);
        assert_eq!(game.scroll.horizontal_offset, offset);
    }

    #[test]
    fn test_crash_is_sticky_until_reset() {
        let mut game = new_game();
        game.state.is_over = true;
        game.bird = BirdState::new(300.0, 0.0);
        process_frame(&mut game, 16.0);
        assert!(game.is_over());
    }

    #[test]
    fn test_tap_after_crash_resets() {
        let mut game = new_game();
        game.state = GameState {
            score: 5,
            is_over: true,
        };
        game.bird = BirdState::new(750.0, 420.0);
        game.scroll.horizontal_offset = 12.0;
        game.animation.cancel();

        assert_eq!(on_tap(&mut game), FrameEvent::Restarted);

        assert!(!game.is_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.bird.vertical_position, 800.0 / 3.0);
        assert_eq!(game.bird.vertical_velocity, 0.0);
        assert_eq!(game.scroll.horizontal_offset, 400.0);
        assert!(game.animation.is_running());
        assert_eq!(game.animation.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut game = new_game();
        game.state.score = 9;
        reset_game(&mut game);
        let once = game.clone();
        reset_game(&mut game);
        assert_eq!(game.bird, once.bird);
        assert_eq!(game.state, once.state);
        assert_eq!(game.scroll, once.scroll);
        assert_eq!(game.animation, once.animation);
        assert_eq!(game.score_trigger, once.score_trigger);
    }

    #[test]
    fn test_pipe_pass_scores_once() {
        let mut game = new_game();
        // Hold the bird in the gap, drifting slightly so collision runs every frame
        let mut scored = Vec::new();
        for _ in 0..200 {
            game.bird = BirdState::new(380.0, -8.0);
            for event in process_frame(&mut game, 16.0) {
                if let FrameEvent::Scored { score } = event {
                    scored.push(score);
                }
            }
        }
        // 200 frames of 16ms is 3.2s, a bit more than one pass
        assert_eq!(scored, vec![1]);
        assert!(!game.is_over());
    }
}

//! Vertical integration of the bird.

use super::types::BirdState;
use crate::constants::{GRAVITY, MAX_TILT, MILLIS_PER_SECOND, TILT_VELOCITY_RANGE};

/// Advance the bird by `dt_millis` using semi-implicit Euler.
///
/// Position moves by the velocity from *before* gravity is applied. A zero,
/// negative or non-finite delta leaves the state untouched. Nothing is clamped.
pub fn advance(state: BirdState, dt_millis: f64) -> BirdState {
    if !is_usable_delta(dt_millis) {
        return state;
    }

    BirdState {
        vertical_position: state.vertical_position
            + (state.vertical_velocity * dt_millis) / MILLIS_PER_SECOND,
        vertical_velocity: state.vertical_velocity + (GRAVITY * dt_millis) / MILLIS_PER_SECOND,
    }
}

/// Whether a frame delta should move the simulation at all.
pub(crate) fn is_usable_delta(dt_millis: f64) -> bool {
    dt_millis.is_finite() && dt_millis > 0.0
}

/// Sprite rotation in radians for a given velocity.
///
/// Linear from -500..500 onto -0.5..0.5, clamped outside that range.
pub fn bird_tilt(vertical_velocity: f64) -> f64 {
    let t = vertical_velocity / TILT_VELOCITY_RANGE;
    (t * MAX_TILT).clamp(-MAX_TILT, MAX_TILT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_exact_arithmetic() {
        let cases = [
            (100.0, 0.0, 16.0),
            (250.5, -500.0, 33.3),
            (-40.0, 1200.0, 1.0),
            (0.0, 100.0, 1000.0),
        ];
        for (position, velocity, dt) in cases {
            let next = advance(BirdState::new(position, velocity), dt);
            assert_eq!(next.vertical_position, position + (velocity * dt) / 1000.0);
            assert_eq!(next.vertical_velocity, velocity + (GRAVITY * dt) / 1000.0);
        }
    }

    #[test]
    fn test_advance_zero_delta_is_identity() {
        let state = BirdState::new(321.0, -77.0);
        assert_eq!(advance(state, 0.0), state);
    }

    #[test]
    fn test_advance_ignores_degenerate_delta() {
        let state = BirdState::new(10.0, 20.0);
        assert_eq!(advance(state, -5.0), state);
        assert_eq!(advance(state, f64::NAN), state);
        assert_eq!(advance(state, f64::INFINITY), state);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let state = BirdState::new(100.0, 0.0);
        let mut next = advance(state, 16.0);
        next = advance(next, 16.0);
        assert!(next.vertical_position > 100.0);
        assert!(next.vertical_velocity > 0.0);
    }

    #[test]
    fn test_no_velocity_clamp() {
        let state = BirdState::new(0.0, 1.0e6);
        let next = advance(state, 1000.0);
        assert_eq!(next.vertical_velocity, 1.0e6 + GRAVITY);
        assert_eq!(next.vertical_position, 1.0e6);
    }

    #[test]
    fn test_tilt_interpolates_and_clamps() {
        assert_eq!(bird_tilt(0.0), 0.0);
        assert_eq!(bird_tilt(250.0), 0.25);
        assert_eq!(bird_tilt(-500.0), -0.5);
        assert_eq!(bird_tilt(5000.0), 0.5);
        assert_eq!(bird_tilt(-5000.0), -0.5);
    }
}

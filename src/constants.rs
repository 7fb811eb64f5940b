// Physics
pub const GRAVITY: f64 = 1000.0; // units/s², positive = downward
pub const JUMP_FORCE: f64 = -500.0; // units/s, velocity override on tap
pub const INITIAL_VELOCITY: f64 = 100.0; // fresh game only; reset uses 0
pub const MILLIS_PER_SECOND: f64 = 1000.0;

// Bird sprite box
pub const BIRD_WIDTH: f64 = 64.0;
pub const BIRD_HEIGHT: f64 = 48.0;
pub const BIRD_CENTER_OFFSET_X: f64 = BIRD_WIDTH / 2.0;
pub const BIRD_CENTER_OFFSET_Y: f64 = BIRD_HEIGHT / 2.0;

// Bird tilt (radians) interpolated from velocity, clamped
pub const TILT_VELOCITY_RANGE: f64 = 500.0;
pub const MAX_TILT: f64 = 0.5;

// Pipes
pub const PIPE_WIDTH: f64 = 104.0;
pub const PIPE_HEIGHT: f64 = 640.0;
pub const PIPE_VERTICAL_SHIFT: f64 = 320.0;
pub const PIPE_OFFSET: f64 = 0.0;

// Ground
pub const GROUND_MARGIN: f64 = 100.0; // collision line is height - margin
pub const GROUND_BAND_OFFSET: f64 = 75.0; // drawn band starts at height - offset

// Scroll animation
pub const SCROLL_DURATION_MS: f64 = 3000.0;
pub const SCROLL_END_OFFSET: f64 = -150.0;

// Viewport defaults (world units)
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 400.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// Terminal frame pacing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_MS: u64 = 1000;

// Score text baseline (world units from the top)
pub const SCORE_TEXT_Y: f64 = 100.0;

/// Game tuning parameters for Pong
///
/// Distances are field units (one unit per terminal-independent "pixel"),
/// velocities are field units per reference frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (centered on the origin, +y is up)
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const WALL_MARGIN: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    pub const PADDLE_STEP: f32 = 28.0; // per key press
    pub const PADDLE_INSET: f32 = 60.0; // distance from the side edge
    pub const PADDLE_MARGIN: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 18.0; // visual only
    pub const BALL_SPEED_START: f32 = 6.5;
    pub const BALL_SPEED_MAX: f32 = 13.0;
    pub const BALL_SERVE_RATIO: f32 = 0.62; // vy = start * ratio on serve
    pub const BALL_SPEED_UP_X: f32 = 1.04;
    pub const BALL_SPEED_UP_Y: f32 = 1.03;
    pub const ENGLISH_GAIN: f32 = 4.2;

    // Collision tolerances
    pub const CONTACT_MARGIN: f32 = 14.0;
    pub const CONTACT_TOLERANCE: f32 = 10.0;
    pub const SCORE_MARGIN: f32 = 10.0;

    // Timing
    pub const SERVE_DELAY: f32 = 0.35; // seconds
    pub const REFERENCE_FRAME_RATE: f32 = 60.0;
    pub const TICK_RATE: f32 = 60.0;
    pub const MAX_DT: f32 = 0.03; // cap for the variable timestep
    pub const MAX_SUB_STEP: f32 = 1.0; // reference frames
    pub const IDLE_SLEEP_MS: u64 = 1;
}

/// Game tuning parameters for Pong
///
/// Speeds are in pixels per simulation step, not per second.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (used when the host does not provide a surface size)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between field edge and paddle
    pub const PADDLE_SPEED: f32 = 5.0; // AI step per frame

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 6.0;
    pub const SPIN_FACTOR: f32 = 0.2;

    // AI
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Net
    pub const NET_STEP: f32 = 30.0;
    pub const NET_DASH: f32 = 20.0;
    pub const NET_WIDTH: f32 = 4.0;

    // Palette
    pub const NET_COLOR: &str = "#444";
    pub const PLAYER_COLOR: &str = "#0f0";
    pub const AI_COLOR: &str = "#f00";
    pub const BALL_COLOR: &str = "#fff";

    // Frame pacing
    pub const FIXED_STEP_MS: f64 = 1000.0 / 60.0; // ~60 Hz
    pub const MAX_FRAME_MS: f64 = 100.0; // Clamp to prevent large jumps
}

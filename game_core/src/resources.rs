use crate::Config;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Latest pointer target for the human paddle
///
/// Holds the desired paddle *center* in surface coordinates. Writers may
/// update it at any time; the last write wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    target_y: Option<f32>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new target. NaN is dropped so the last valid target stays.
    pub fn set_target(&mut self, center_y: f32) {
        if !center_y.is_nan() {
            self.target_y = Some(center_y);
        }
    }

    pub fn target(&self) -> Option<f32> {
        self.target_y
    }

    /// Paddle top edge for the current target, clamped to the field
    pub fn target_paddle_y(&self, config: &Config) -> Option<f32> {
        self.target_y
            .map(|center| config.clamp_paddle_y(center - config.paddle_height / 2.0))
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
    pub ball_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.left_paddle_hit = false;
        self.right_paddle_hit = false;
        self.ball_reset = false;
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.left_paddle_hit || self.right_paddle_hit
    }
}

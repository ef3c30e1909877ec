use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// How simulation steps are paced against display refreshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// One step per refresh, whatever the refresh rate is
    PerFrame,
    /// Fixed 60 Hz steps driven by an accumulator
    #[default]
    FixedRate,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub spin_factor: f32,
    pub ai_dead_zone: f32,
    pub pacing: Pacing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            spin_factor: Params::SPIN_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            pacing: Pacing::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning for a surface of the given size
    pub fn for_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_width - self.paddle_margin,
        }
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_height).max(0.0)
    }

    /// Clamp paddle Y (top edge) to the field. Non-finite values snap to the
    /// nearest boundary, NaN to the top.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        clamp_finite(y, self.max_paddle_y())
    }

    pub fn max_ball_y(&self) -> f32 {
        (self.field_height - self.ball_size).max(0.0)
    }

    pub fn clamp_ball_y(&self, y: f32) -> f32 {
        clamp_finite(y, self.max_ball_y())
    }

    /// Paddles start vertically centered
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Top-left of the ball when centered on the field
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.ball_size) / 2.0,
            (self.field_height - self.ball_size) / 2.0,
        )
    }
}

fn clamp_finite(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

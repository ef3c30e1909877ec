use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a vertically movable rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to field)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left of the bounding box
    pub vel: Vec2, // Pixels per step
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    /// Reset ball to center with a random direction
    ///
    /// Horizontal speed is always exactly `ball_speed` towards one side;
    /// vertical speed is drawn uniformly from `[-ball_speed, ball_speed]`.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let spread: f32 = rng.0.gen_range(-1.0..=1.0);

        self.vel = Vec2::new(config.ball_speed * dir, config.ball_speed * spread);
    }
}

/// Marks the paddle that follows the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerControl;

/// Marks the computer-controlled paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct AiTracker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_centers_ball() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-3.0, 40.0), Vec2::ZERO);

        ball.reset(&config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
    }

    #[test]
    fn test_reset_velocity_bounds() {
        let config = Config::new();
        let mut rng = GameRng::new(12345);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        let mut saw_left = false;
        let mut saw_right = false;

        for _ in 0..200 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert!(ball.vel.y.abs() <= config.ball_speed);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }

        assert!(saw_left && saw_right, "Serve should go both ways");
    }

    #[test]
    fn test_reset_is_reproducible_with_seed() {
        let config = Config::new();
        let mut a = Ball::new(Vec2::ZERO, Vec2::ZERO);
        let mut b = Ball::new(Vec2::ZERO, Vec2::ZERO);

        a.reset(&config, &mut GameRng::new(99));
        b.reset(&config, &mut GameRng::new(99));

        assert_eq!(a, b);
    }

    #[test]
    fn test_centers() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 250.0);
        let ball = Ball::new(Vec2::new(20.0, 300.0), Vec2::ZERO);
        assert_eq!(paddle.center_y(&config), 300.0);
        assert_eq!(ball.center_y(&config), 307.5);
    }
}

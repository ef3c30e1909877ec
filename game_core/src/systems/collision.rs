use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

use super::find_paddle;

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collision(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_size >= config.field_height {
            ball.vel.y = -ball.vel.y;
            // Clamp position to prevent tunneling past the wall
            ball.pos.y = config.clamp_ball_y(ball.pos.y);
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball collisions with both paddles
///
/// The left paddle is tested first, then the right paddle against the
/// updated ball. Both tests always run.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let left = find_paddle(world, Side::Left);
    let right = find_paddle(world, Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(paddle) = left {
            let face = config.paddle_x(Side::Left) + config.paddle_width;
            if ball.pos.x <= face && overlaps_vertically(ball, &paddle, config) {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = face;
                ball.vel.y = spin(ball, &paddle, config);
                events.left_paddle_hit = true;
            }
        }

        if let Some(paddle) = right {
            let face = config.paddle_x(Side::Right);
            if ball.pos.x + config.ball_size >= face
                && overlaps_vertically(ball, &paddle, config)
            {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = face - config.ball_size;
                ball.vel.y = spin(ball, &paddle, config);
                events.right_paddle_hit = true;
            }
        }
    }
}

fn overlaps_vertically(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    ball.pos.y + config.ball_size >= paddle.y && ball.pos.y <= paddle.y + config.paddle_height
}

/// Vertical speed after a paddle hit, proportional to the offset from the
/// paddle center. Replaces the incoming vertical speed.
fn spin(ball: &Ball, paddle: &Paddle, config: &Config) -> f32 {
    (ball.center_y(config) - paddle.center_y(config)) * config.spin_factor
}

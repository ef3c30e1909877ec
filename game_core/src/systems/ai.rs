use crate::{AiTracker, Config, Paddle};
use hecs::World;

use super::find_ball;

/// Move the AI paddle one step towards the ball's vertical center
///
/// The paddle holds still while its center is within the dead zone of the
/// ball center.
pub fn track_ball(world: &mut World, config: &Config) {
    let Some(ball) = find_ball(world) else {
        return;
    };
    let ball_center = ball.center_y(config);

    for (_entity, (paddle, _ai)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        let paddle_center = paddle.center_y(config);
        if paddle_center < ball_center - config.ai_dead_zone {
            paddle.y += config.paddle_speed;
        } else if paddle_center > ball_center + config.ai_dead_zone {
            paddle.y -= config.paddle_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

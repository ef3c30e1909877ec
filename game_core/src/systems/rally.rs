use crate::{Ball, Config, Events, GameRng};
use hecs::World;

/// Reset the ball once it has left the field horizontally
///
/// This starts a new rally. No score is recorded.
pub fn check_out_of_bounds(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 || ball.pos.x + config.ball_size > config.field_width {
            log::debug!("ball left the field at x = {:.1}, new rally", ball.pos.x);
            ball.reset(config, rng);
            events.ball_reset = true;
        }
    }
}

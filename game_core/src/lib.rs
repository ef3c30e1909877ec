pub mod clock;
pub mod components;
pub mod config;
pub mod params;
pub mod render;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one discrete step
pub fn step(
    world: &mut World,
    config: &Config,
    input: &PlayerInput,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of step
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Bounce off top/bottom walls
    check_wall_collision(world, config, events);

    // 3-4. Bounce off paddles (left, then right)
    check_paddle_collisions(world, config, events);

    // 5. Reset the ball if it left the field
    check_out_of_bounds(world, config, events, rng);

    // 6. AI paddle follows the ball
    track_ball(world, config);

    // 7. Human paddle follows the pointer
    apply_player_input(world, config, input);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Populate an empty world for a new game
///
/// Both paddles start vertically centered, the left one following the
/// pointer and the right one tracking the ball. The ball is served from the
/// center in a random direction.
pub fn spawn_match(world: &mut World, config: &Config, rng: &mut GameRng) {
    let paddle_y = config.paddle_spawn_y();
    world.spawn((Paddle::new(Side::Left, paddle_y), PointerControl));
    world.spawn((Paddle::new(Side::Right, paddle_y), AiTracker));

    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.reset(config, rng);
    create_ball(world, ball.pos, ball.vel);
}

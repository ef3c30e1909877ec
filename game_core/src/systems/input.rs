use crate::{Config, Paddle, PlayerInput, PointerControl};
use hecs::World;

/// Move the pointer-controlled paddle to the latest target
///
/// Without a target the paddle stays where it is, still clamped to the field.
pub fn apply_player_input(world: &mut World, config: &Config, input: &PlayerInput) {
    let target = input.target_paddle_y(config);

    for (_entity, (paddle, _control)) in world.query_mut::<(&mut Paddle, &PointerControl)>() {
        paddle.y = target.unwrap_or_else(|| config.clamp_paddle_y(paddle.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Side};

    fn setup_world() -> (World, Config) {
        let mut world = World::new();
        let paddle = create_paddle(&mut world, Side::Left, 250.0);
        world
            .insert_one(paddle, PointerControl)
            .expect("paddle exists");
        (world, Config::new())
    }

    fn player_y(world: &World) -> f32 {
        crate::systems::find_paddle(world, Side::Left)
            .expect("player paddle")
            .y
    }

    #[test]
    fn test_paddle_centers_on_target() {
        let (mut world, config) = setup_world();
        let mut input = PlayerInput::new();
        input.set_target(120.0);

        apply_player_input(&mut world, &config, &input);

        assert_eq!(player_y(&world), 70.0);
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let (mut world, config) = setup_world();
        let mut input = PlayerInput::new();

        input.set_target(-500.0);
        apply_player_input(&mut world, &config, &input);
        assert_eq!(player_y(&world), 0.0);

        input.set_target(5000.0);
        apply_player_input(&mut world, &config, &input);
        assert_eq!(player_y(&world), config.max_paddle_y());
    }

    #[test]
    fn test_no_target_keeps_position() {
        let (mut world, config) = setup_world();
        apply_player_input(&mut world, &config, &PlayerInput::new());
        assert_eq!(player_y(&world), 250.0);
    }

    #[test]
    fn test_non_finite_target_never_escapes_field() {
        let (mut world, config) = setup_world();
        let mut input = PlayerInput::new();

        input.set_target(f32::NEG_INFINITY);
        apply_player_input(&mut world, &config, &input);
        assert_eq!(player_y(&world), 0.0);

        input.set_target(f32::NAN);
        apply_player_input(&mut world, &config, &input);
        assert_eq!(player_y(&world), 0.0, "NaN keeps the last valid target");
    }
}

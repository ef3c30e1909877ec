use game_core::{
    draw_frame, spawn_match, step, systems::apply_player_input, Config, Events, FrameClock,
    GameRng, PlayerInput, Snapshot, Surface,
};
use hecs::World;

/// A single-player game running entirely in the browser
pub struct LocalGame {
    pub world: World,
    pub config: Config,
    pub input: PlayerInput,
    pub events: Events,
    pub rng: GameRng,
    clock: FrameClock,
}

impl LocalGame {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_config(Config::for_field(width, height), GameRng::new(seed))
    }

    pub fn with_config(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();
        spawn_match(&mut world, &config, &mut rng);

        Self {
            world,
            config,
            input: PlayerInput::new(),
            events: Events::new(),
            rng,
            clock: FrameClock::new(),
        }
    }

    /// Record a pointer position (paddle center, surface pixels)
    ///
    /// The paddle moves right away so it tracks the pointer between frames.
    pub fn set_pointer_target(&mut self, center_y: f32) {
        self.input.set_target(center_y);
        apply_player_input(&mut self.world, &self.config, &self.input);
    }

    /// Run the simulation for one display refresh. Returns the number of
    /// steps taken.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let steps = self.clock.advance(now_ms, self.config.pacing);
        for _ in 0..steps {
            step(
                &mut self.world,
                &self.config,
                &self.input,
                &mut self.events,
                &mut self.rng,
            );
            if self.events.ball_reset {
                log::info!("Ball out, serving a new rally");
            }
        }
        steps
    }

    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        draw_frame(&self.world, &self.config, surface)
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Snapshot::capture(&self.world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Pacing, Params};

    #[test]
    fn test_new_game_uses_surface_size() {
        let game = LocalGame::new(1, 640.0, 480.0);
        let snapshot = game.snapshot().expect("spawned");

        assert_eq!(snapshot.player_y, 190.0);
        assert_eq!(snapshot.ai_y, 190.0);
        assert_eq!(snapshot.ball.pos, game.config.ball_spawn());
    }

    #[test]
    fn test_pointer_moves_paddle_immediately() {
        let mut game = LocalGame::new(1, 800.0, 600.0);

        game.set_pointer_target(400.0);

        assert_eq!(game.snapshot().expect("spawned").player_y, 350.0);
    }

    #[test]
    fn test_frames_step_the_ball() {
        let mut game = LocalGame::new(3, 800.0, 600.0);
        let before = game.snapshot().expect("spawned").ball;

        let steps = game.frame(0.0);

        let after = game.snapshot().expect("spawned").ball;
        assert_eq!(steps, 1);
        assert!((after.pos.x - (before.pos.x + before.vel.x)).abs() < 1e-4);
    }

    #[test]
    fn test_fixed_rate_catches_up_after_slow_frame() {
        let mut game = LocalGame::new(4, 800.0, 600.0);
        game.frame(0.0);

        let steps = game.frame(Params::FIXED_STEP_MS * 3.0 + 1.0);

        assert_eq!(steps, 3);
    }

    #[test]
    fn test_per_frame_pacing_ignores_time() {
        let config = Config {
            pacing: Pacing::PerFrame,
            ..Config::for_field(800.0, 600.0)
        };
        let mut game = LocalGame::with_config(config, GameRng::new(5));
        game.frame(0.0);

        assert_eq!(game.frame(90.0), 1);
        assert_eq!(game.frame(91.0), 1);
    }
}

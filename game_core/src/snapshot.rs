use hecs::World;

use crate::systems::{find_ball, find_paddle};
use crate::{Ball, Side};

/// Plain copy of the whole game state at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub player_y: f32,
    pub ai_y: f32,
    pub ball: Ball,
}

impl Snapshot {
    /// Read both paddles and the ball. `None` if any of them is missing.
    pub fn capture(world: &World) -> Option<Self> {
        Some(Self {
            player_y: find_paddle(world, Side::Left)?.y,
            ai_y: find_paddle(world, Side::Right)?.y,
            ball: find_ball(world)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_capture_reads_all_entities() {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 10.0);
        create_paddle(&mut world, Side::Right, 20.0);
        create_ball(&mut world, Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));

        let snapshot = Snapshot::capture(&world).expect("complete world");

        assert_eq!(snapshot.player_y, 10.0);
        assert_eq!(snapshot.ai_y, 20.0);
        assert_eq!(snapshot.ball.pos, Vec2::new(1.0, 2.0));
        assert_eq!(snapshot.ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_capture_incomplete_world() {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 10.0);
        assert!(Snapshot::capture(&world).is_none());
    }
}

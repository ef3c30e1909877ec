pub mod ai;
pub mod collision;
pub mod input;
pub mod movement;
pub mod rally;

pub use ai::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use rally::*;

use hecs::World;

use crate::{Ball, Paddle, Side};

/// Copy of the paddle guarding `side`, if one exists
pub(crate) fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

/// Copy of the ball, if one exists
pub(crate) fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
}

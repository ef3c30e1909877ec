//! Frame drawing against an abstract 2D surface
//!
//! The host supplies the surface (a browser canvas in `client_wasm`, a
//! recorder in tests); this module only decides what gets drawn and in
//! which order.

use hecs::World;

use crate::{Config, Params, Side, Snapshot};

/// Rendering collaborator: a fixed-size surface with fill primitives
pub trait Surface {
    type Error;

    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Clear the entire surface
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str)
        -> Result<(), Self::Error>;

    /// Fill a circle centered at `(cx, cy)`
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str)
        -> Result<(), Self::Error>;
}

/// Draw one frame: clear, net, player paddle, AI paddle, ball
pub fn draw_frame<S: Surface>(
    world: &World,
    config: &Config,
    surface: &mut S,
) -> Result<(), S::Error> {
    surface.clear()?;
    draw_net(surface)?;

    let Some(snapshot) = Snapshot::capture(world) else {
        return Ok(());
    };

    surface.fill_rect(
        config.paddle_x(Side::Left),
        snapshot.player_y,
        config.paddle_width,
        config.paddle_height,
        Params::PLAYER_COLOR,
    )?;
    surface.fill_rect(
        config.paddle_x(Side::Right),
        snapshot.ai_y,
        config.paddle_width,
        config.paddle_height,
        Params::AI_COLOR,
    )?;

    let radius = config.ball_size / 2.0;
    surface.fill_circle(
        snapshot.ball.pos.x + radius,
        snapshot.ball.pos.y + radius,
        radius,
        Params::BALL_COLOR,
    )
}

/// Dashed vertical net down the middle of the surface
fn draw_net<S: Surface>(surface: &mut S) -> Result<(), S::Error> {
    let x = surface.width() / 2.0 - Params::NET_WIDTH / 2.0;
    let height = surface.height();
    let mut y = 0.0;
    while y < height {
        surface.fill_rect(x, y, Params::NET_WIDTH, Params::NET_DASH, Params::NET_COLOR)?;
        y += Params::NET_STEP;
    }
    Ok(())
}

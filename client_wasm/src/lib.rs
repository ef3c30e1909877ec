//! Browser client for single-player Pong
//!
//! Canvas 2D rendering, mouse control of the left paddle and a
//! requestAnimationFrame loop around the `game_core` simulation.

pub mod canvas;
pub mod input;
pub mod scheduler;
pub mod simulation;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use game_core::{Config, GameRng, Surface};
use simulation::LocalGame;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Start a game on `canvas` with a random seed
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    start(canvas, GameRng::from_entropy())
}

/// Start a game on `canvas` with a fixed seed (reproducible serves)
#[wasm_bindgen]
pub fn init_client_with_seed(canvas: HtmlCanvasElement, seed: u64) -> Result<(), JsValue> {
    start(canvas, GameRng::new(seed))
}

fn start(canvas: HtmlCanvasElement, rng: GameRng) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("Logger already installed: {}", e);
    }

    let surface = CanvasSurface::from_canvas(&canvas).map_err(|e| {
        log::error!("Canvas setup failed: {:?}", e);
        e
    })?;
    let config = Config::for_field(surface.width(), surface.height());
    log::info!(
        "Pong starting on a {}x{} canvas",
        config.field_width,
        config.field_height
    );

    let game = Rc::new(RefCell::new(LocalGame::with_config(config, rng)));
    input::attach_pointer_input(&canvas, game.clone())?;
    scheduler::start_loop(game, surface)
}

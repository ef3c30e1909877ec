//! requestAnimationFrame loop: step, render, re-arm

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::canvas::CanvasSurface;
use crate::simulation::LocalGame;

/// Start the frame chain. It runs until the page goes away.
pub fn start_loop(game: Rc<RefCell<LocalGame>>, surface: CanvasSurface) -> Result<(), JsValue> {
    request_frame(game, surface)
}

fn request_frame(game: Rc<RefCell<LocalGame>>, surface: CanvasSurface) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let callback = Closure::once_into_js(move |now_ms: f64| run_frame(game, surface, now_ms));
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

fn run_frame(game: Rc<RefCell<LocalGame>>, mut surface: CanvasSurface, now_ms: f64) {
    {
        let mut g = game.borrow_mut();
        g.frame(now_ms);
        if let Err(e) = g.render(&mut surface) {
            log::error!("Failed to render frame: {:?}", e);
        }
    }

    if let Err(e) = request_frame(game, surface) {
        log::error!("Failed to schedule next frame: {:?}", e);
    }
}

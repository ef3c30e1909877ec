//! Mouse input handling

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::simulation::LocalGame;

/// Convert a pointer's client Y into surface pixels
///
/// Scales by the ratio of backing-store height to on-page height so a
/// CSS-resized canvas still maps the pointer onto the right row.
pub fn pointer_to_surface_y(
    client_y: f64,
    rect_top: f64,
    rect_height: f64,
    surface_height: f64,
) -> f32 {
    let local = client_y - rect_top;
    let scale = if rect_height > 0.0 && rect_height.is_finite() {
        surface_height / rect_height
    } else {
        1.0
    };
    (local * scale) as f32
}

/// Feed `mousemove` events on the canvas into the game
pub fn attach_pointer_input(
    canvas: &HtmlCanvasElement,
    game: Rc<RefCell<LocalGame>>,
) -> Result<(), JsValue> {
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let y = pointer_to_surface_y(
            event.client_y() as f64,
            rect.top(),
            rect.height(),
            target.height() as f64,
        );
        if let Ok(mut game) = game.try_borrow_mut() {
            game.set_pointer_target(y);
        }
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_canvas_uses_offset() {
        assert_eq!(pointer_to_surface_y(350.0, 50.0, 600.0, 600.0), 300.0);
    }

    #[test]
    fn test_css_scaled_canvas() {
        // Canvas backing store 600 px tall, shown 300 px tall
        assert_eq!(pointer_to_surface_y(200.0, 50.0, 300.0, 600.0), 300.0);
    }

    #[test]
    fn test_pointer_above_canvas_is_negative() {
        assert_eq!(pointer_to_surface_y(10.0, 50.0, 600.0, 600.0), -40.0);
    }

    #[test]
    fn test_zero_height_rect_does_not_divide() {
        assert_eq!(pointer_to_surface_y(70.0, 20.0, 0.0, 600.0), 50.0);
    }
}

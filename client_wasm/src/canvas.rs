use game_core::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D context sized to its canvas element
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| JsValue::from_str(&format!("Not a 2d context: {:?}", e)))?;

        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) -> Result<(), JsValue> {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.begin_path();
        self.ctx
            .arc(cx as f64, cy as f64, radius as f64, 0.0, std::f64::consts::TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

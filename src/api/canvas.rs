use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::Vec2;
use crate::systems::render::{RenderSurface, Rgba};

/// `<canvas>` 2D context as a render surface
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Skip re-setting the fill style when consecutive particles share a color
    last_fill: Option<Rgba>,
}

impl CanvasSurface {
    pub fn from_element_id(id: &str) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document available")?;

        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| format!("canvas '#{}' not found", id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("'#{}' is not a <canvas>", id))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "getContext('2d') threw".to_string())?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "unexpected context type".to_string())?;

        Ok(Self { canvas, ctx, last_fill: None })
    }
}

impl RenderSurface for CanvasSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        // Resizing a canvas resets its context state
        self.last_fill = None;
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.last_fill != Some(color) {
            self.ctx.set_fill_style_str(&color.css());
            self.last_fill = Some(color);
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

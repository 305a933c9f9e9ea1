//! Render surface abstraction
//!
//! The driver paints through this trait and never owns the surface.

use crate::core::Vec2;
use crate::domain::Rgb;

/// Fill color with straight alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn from_rgb(rgb: Rgb, alpha: f32) -> Self {
        Self { r: rgb[0], g: rgb[1], b: rgb[2], a: alpha }
    }

    /// CSS `rgba(...)` string for canvas fill styles
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait RenderSurface {
    /// Called whenever the viewport dimensions change
    fn resize(&mut self, width: f32, height: f32);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Surface that draws nothing. Used when the page has no canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn resize(&mut self, _width: f32, _height: f32) {}
    fn clear(&mut self) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_matches_canvas_syntax() {
        let c = Rgba::from_rgb([239, 35, 60], 0.25);
        assert_eq!(c.css(), "rgba(239, 35, 60, 0.25)");
    }
}

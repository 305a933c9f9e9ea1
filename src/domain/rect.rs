use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Bounding box of one tracked content element.
///
/// Stored in document space; converted to viewport space with
/// [`ContentRect::to_viewport`] right before it is compared with particles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ContentRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 { self.x }

    #[inline]
    pub fn right(&self) -> f32 { self.x + self.width }

    #[inline]
    pub fn top(&self) -> f32 { self.y }

    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.height }

    /// Zero or negative area (hidden elements report these)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Document space -> viewport space
    #[inline]
    pub fn to_viewport(&self, scroll: Vec2) -> Self {
        Self {
            x: self.x - scroll.x,
            y: self.y - scroll.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Strict overlap test against a square of half-extent `half` centered at `center`
    #[inline]
    pub fn intersects_box(&self, center: Vec2, half: f32) -> bool {
        !self.is_degenerate()
            && center.x + half > self.left()
            && center.x - half < self.right()
            && center.y + half > self.top()
            && center.y - half < self.bottom()
    }
}

/// Visible window: size plus the current document scroll offset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scroll: Vec2::zero(),
        }
    }
}

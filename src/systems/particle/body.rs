use crate::core::{Rng, Vec2};
use crate::domain::{ContentRect, Rgb, SimConfig, DEFAULT_PALETTE};

use super::forces::{self, MIN_SIZE};
use super::types::UpdateOutcome;
use super::update::update_particle;

/// A decorative point mass drawn as a filled circle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Viewport position (pixels)
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    size: f32,
    mass: f32,
    color: Rgb,
}

impl Particle {
    /// `size` is the radius; anything not strictly positive is raised to `MIN_SIZE`.
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: Rgb) -> Self {
        let size = size.max(MIN_SIZE);
        Self {
            pos,
            vel,
            size,
            mass: size / 2.0,
            color,
        }
    }

    /// Random size, color and horizontal drift at `pos`
    pub fn spawn(pos: Vec2, config: &SimConfig, rng: &mut Rng) -> Self {
        let vx = (rng.next_f32() - 0.5) * config.spawn_velocity_spread;
        let size = rng.range(config.min_size, config.max_size);
        let color = pick_color(&config.palette, rng);
        Self::new(pos, Vec2::new(vx, 0.0), size, color)
    }

    #[inline]
    pub fn size(&self) -> f32 { self.size }

    #[inline]
    pub fn mass(&self) -> f32 { self.mass }

    #[inline]
    pub fn color(&self) -> Rgb { self.color }

    /// Inflated box overlaps the (viewport-space) rect
    #[inline]
    pub fn overlaps(&self, rect: &ContentRect) -> bool {
        rect.intersects_box(self.pos, self.size)
    }

    /// Advance one frame against viewport-space `rects`
    pub fn update(
        &mut self,
        config: &SimConfig,
        rects: &[ContentRect],
        width: f32,
        height: f32,
        rng: &mut Rng,
    ) -> UpdateOutcome {
        update_particle(self, config, rects, width, height, rng)
    }

    /// Upward impulse; lighter particles go higher
    pub fn jump(&mut self, force: f32) {
        forces::jump(self, force);
    }

    /// Radial impulse away from `origin`, linear falloff to zero at `radius`.
    /// Returns true if the particle was inside the radius.
    pub fn push(&mut self, origin: Vec2, force: f32, radius: f32) -> bool {
        forces::push(self, origin, force, radius)
    }

    /// Resting on (or close to) the floor, or falling
    pub fn can_jump(&self, height: f32, floor_proximity: f32) -> bool {
        self.pos.y + self.size > height - floor_proximity || self.vel.y > 0.0
    }
}

fn pick_color(palette: &[Rgb], rng: &mut Rng) -> Rgb {
    if palette.is_empty() {
        return DEFAULT_PALETTE[0];
    }
    palette[rng.index(palette.len())]
}

use crate::core::{Rng, Vec2};
use crate::domain::SimConfig;

use super::body::Particle;
use super::types::BoundaryEvents;

/// Walls reflect, the floor bounces with damping, the ceiling recycles.
///
/// Clamping uses `max`/`min` rather than `f32::clamp` so a viewport narrower
/// than the particle cannot panic.
pub fn resolve_viewport(
    p: &mut Particle,
    width: f32,
    height: f32,
    config: &SimConfig,
    rng: &mut Rng,
) -> BoundaryEvents {
    let mut events = BoundaryEvents::default();
    let size = p.size();

    if p.pos.x - size < 0.0 || p.pos.x + size > width {
        p.vel.x = -p.vel.x;
        p.pos.x = size.max(p.pos.x.min(width - size));
        events.wall = true;
    }

    if p.pos.y + size > height {
        p.pos.y = height - size;
        p.vel.y *= -config.bounce_damping;
        events.floor = true;
    }

    if p.pos.y - size < 0.0 {
        recycle(p, width, config.spawn_velocity_spread, rng);
        events.recycled = true;
    }

    events
}

/// Re-enter at a random spot along the top edge with no vertical speed
pub fn recycle(p: &mut Particle, width: f32, spread: f32, rng: &mut Rng) {
    let x = rng.next_f32() * width.max(0.0);
    p.pos = Vec2::new(x, p.size() + 1.0);
    p.vel = Vec2::new((rng.next_f32() - 0.5) * spread, 0.0);
}

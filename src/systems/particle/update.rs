use crate::core::Rng;
use crate::domain::{ContentRect, SimConfig};

use super::body::Particle;
use super::bounds::{recycle, resolve_viewport};
use super::collision::resolve_content_collision;
use super::forces::{apply_friction, apply_gravity, integrate};
use super::types::{BoundaryEvents, UpdateOutcome};

/// Full physics update for a single particle.
///
/// `rects` must already be in viewport space.
pub fn update_particle(
    p: &mut Particle,
    config: &SimConfig,
    rects: &[ContentRect],
    width: f32,
    height: f32,
    rng: &mut Rng,
) -> UpdateOutcome {
    // 1. Forces
    apply_gravity(p, config.gravity);
    apply_friction(p, config.friction);

    // 2. Move
    integrate(p);

    // A NaN from a stimulus would otherwise stick forever
    if !p.pos.is_finite() || !p.vel.is_finite() {
        recycle(p, width, config.spawn_velocity_spread, rng);
        return UpdateOutcome {
            content: None,
            bounds: BoundaryEvents { recycled: true, ..BoundaryEvents::default() },
        };
    }

    // 3. Content, then viewport edges
    let content = resolve_content_collision(
        p,
        rects,
        config.content_bounce_damping,
        config.horizontal_push_force,
        rng,
    );
    let bounds = resolve_viewport(p, width, height, config, rng);

    UpdateOutcome { content, bounds }
}

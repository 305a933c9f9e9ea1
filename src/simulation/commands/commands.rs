use crate::core::Vec2;
use crate::systems::particle::jump_force;

use super::SimulationCore;

/// External events the driver reacts to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stimulus {
    /// New absolute document scroll offset
    Scroll { x: f32, y: f32 },
    /// Relative vertical scroll (negative = up)
    ScrollDelta { dy: f32 },
    /// Pointer click in viewport coordinates
    Click { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
}

pub(super) fn handle(core: &mut SimulationCore, stimulus: Stimulus) -> usize {
    match stimulus {
        Stimulus::Scroll { x, y } => scroll_to(core, x, y),
        Stimulus::ScrollDelta { dy } => {
            let scroll = core.viewport.scroll;
            scroll_to(core, scroll.x, scroll.y + dy)
        }
        Stimulus::Click { x, y } => push(core, x, y),
        Stimulus::Resize { width, height } => {
            resize(core, width, height);
            0
        }
    }
}

/// Non-finite offsets are dropped: the previous scroll stays, nothing jumps
pub(super) fn scroll_to(core: &mut SimulationCore, x: f32, y: f32) -> usize {
    if !(x.is_finite() && y.is_finite()) {
        return 0;
    }
    let delta = y - core.viewport.scroll.y;
    core.viewport.scroll = Vec2::new(x, y);
    jump(core, delta)
}

/// Only upward scrolls jump, and only particles that are grounded or falling
pub(super) fn jump(core: &mut SimulationCore, delta: f32) -> usize {
    if !(delta < 0.0) {
        return 0;
    }

    let config = &core.config;
    let force = jump_force(delta, config.scroll_jump_scale, config.max_scroll_jump_force);
    let height = core.viewport.height;

    let mut jumped = 0;
    for particle in core.particles.iter_mut() {
        if particle.can_jump(height, config.floor_proximity) {
            particle.jump(force);
            jumped += 1;
        }
    }
    jumped
}

pub(super) fn push(core: &mut SimulationCore, x: f32, y: f32) -> usize {
    let origin = Vec2::new(x, y);
    let (force, radius) = (core.config.click_push_force, core.config.click_push_radius);

    let mut pushed = 0;
    for particle in core.particles.iter_mut() {
        if particle.push(origin, force, radius) {
            pushed += 1;
        }
    }
    pushed
}

pub(super) fn resize(core: &mut SimulationCore, width: f32, height: f32) {
    core.viewport.width = width.max(0.0);
    core.viewport.height = height.max(0.0);
    core.surface_stale = true;
}

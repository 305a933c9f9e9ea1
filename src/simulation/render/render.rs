use crate::systems::render::{RenderSurface, Rgba};

use super::{PerfTimer, SimulationCore};

pub(super) fn draw(core: &mut SimulationCore, surface: &mut dyn RenderSurface) {
    let t0 = if core.perf_enabled { Some(PerfTimer::start()) } else { None };

    if core.surface_stale {
        surface.resize(core.viewport.width, core.viewport.height);
        core.surface_stale = false;
    }

    surface.clear();

    let alpha = core.config.opacity;
    for particle in core.particles.iter() {
        surface.fill_circle(
            particle.pos,
            particle.size(),
            Rgba::from_rgb(particle.color(), alpha),
        );
    }

    if let Some(t0) = t0 {
        core.perf_stats.draw_ms = t0.elapsed_ms();
    }
}

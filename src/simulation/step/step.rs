use super::{PerfTimer, SimulationCore};

pub(super) fn step(core: &mut SimulationCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.particle_count = core.particles.len() as u32;
        core.perf_stats.rect_count = core.rects.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let (width, height) = (core.viewport.width, core.viewport.height);
    // Document -> viewport once per frame, against this frame's scroll
    let rects = core.rects.to_viewport(core.viewport.scroll);

    for particle in core.particles.iter_mut() {
        let outcome = particle.update(&core.config, rects, width, height, &mut core.rng);
        if perf_on {
            core.perf_stats.record(&outcome);
        }
    }

    core.frame += 1;

    if let Some(t0) = step_start {
        core.perf_stats.step_ms = t0.elapsed_ms();
    }
}

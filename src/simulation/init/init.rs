use crate::core::{Rng, Vec2};
use crate::domain::{SimConfig, Viewport};
use crate::systems::geometry::{ContentRects, GeometrySource};
use crate::systems::particle::Particle;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// How seeding went
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub placed: usize,
    /// Placed on top of content after running out of retries
    pub forced: usize,
}

pub(super) fn create_core(
    config: SimConfig,
    viewport: Viewport,
    source: &dyn GeometrySource,
) -> SimulationCore {
    let mut core = create_core_with_particles(config, viewport, Vec::new());
    core.rects.refresh(source);
    core.init_report = seed_particles(&mut core);

    if core.init_report.forced > 0 {
        console_warn!(
            "{} of {} particles spawned over content (retries exhausted)",
            core.init_report.forced,
            core.init_report.placed
        );
    }
    console_log!(
        "Seeded {} particles around {} content rects",
        core.init_report.placed,
        core.rects.len()
    );
    core
}

pub(super) fn create_core_with_particles(
    config: SimConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
) -> SimulationCore {
    let placed = particles.len();
    SimulationCore {
        rng: Rng::new(config.seed),
        config,
        viewport,
        particles,
        rects: ContentRects::new(),
        frame: 0,
        init_report: InitReport { placed, forced: 0 },
        surface_stale: true,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Uniform placement, resampling spots that overlap content.
/// After `spawn_max_attempts` the last candidate is kept regardless.
fn seed_particles(core: &mut SimulationCore) -> InitReport {
    let count = core.config.particle_count;
    let max_attempts = core.config.spawn_max_attempts.max(1);
    let (width, height) = (core.viewport.width, core.viewport.height);
    let rects = core.rects.to_viewport(core.viewport.scroll);

    core.particles.reserve(count);
    let mut report = InitReport::default();

    for _ in 0..count {
        let mut attempts = 0;
        let particle = loop {
            attempts += 1;
            let pos = Vec2::new(core.rng.next_f32() * width, core.rng.next_f32() * height);
            let candidate = Particle::spawn(pos, &core.config, &mut core.rng);

            if !rects.iter().any(|r| candidate.overlaps(r)) {
                break candidate;
            }
            if attempts >= max_attempts {
                report.forced += 1;
                break candidate;
            }
        };
        core.particles.push(particle);
        report.placed += 1;
    }

    report
}

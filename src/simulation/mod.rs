//! Simulation driver
//!
//! Owns the particle collection and the content snapshot, runs the
//! per-frame update/draw cycle and turns stimuli into impulses.
//!
//! Everything takes `&mut self`: stimuli and frames are serialized by
//! ownership, so particle state never needs a lock.

use crate::core::{Rng, Vec2};
use crate::domain::{ContentRect, SimConfig, Viewport};
use crate::systems::geometry::{ContentRects, GeometrySource};
use crate::systems::particle::Particle;
use crate::systems::render::RenderSurface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render.rs"]
mod render;
mod facade;

pub use commands::Stimulus;
pub use facade::Backdrop;
pub use init::InitReport;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The particle field
pub struct SimulationCore {
    config: SimConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    rects: ContentRects,
    rng: Rng,

    // State
    frame: u64,
    init_report: InitReport,
    // Surface has not seen the current viewport size yet
    surface_stale: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Measure content, then seed `config.particle_count` particles around it
    pub fn new(config: SimConfig, viewport: Viewport, source: &dyn GeometrySource) -> Self {
        init::create_core(config, viewport, source)
    }

    /// Start from an explicit particle set (no seeding)
    pub fn with_particles(config: SimConfig, viewport: Viewport, particles: Vec<Particle>) -> Self {
        init::create_core_with_particles(config, viewport, particles)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn width(&self) -> f32 { self.viewport.width }

    pub fn height(&self) -> f32 { self.viewport.height }

    pub fn scroll_offset(&self) -> Vec2 { self.viewport.scroll }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Direct access for hosts and tests that place or perturb particles
    pub fn particles_mut(&mut self) -> &mut [Particle] { &mut self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn init_report(&self) -> InitReport { self.init_report }

    /// Document-space content rectangles from the last refresh
    pub fn content_rects(&self) -> &[ContentRect] {
        self.rects.document()
    }

    /// Re-measure content. The previous set is dropped, not merged.
    pub fn refresh_geometry(&mut self, source: &dyn GeometrySource) {
        self.rects.refresh(source);
    }

    pub fn set_content_rects(&mut self, rects: Vec<ContentRect>) {
        self.rects.replace(rects);
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === STIMULI ===

    /// Route one external event; returns how many particles it touched
    pub fn handle(&mut self, stimulus: Stimulus) -> usize {
        commands::handle(self, stimulus)
    }

    /// New absolute scroll offset. Scrolling up makes grounded/falling particles jump.
    pub fn scroll_to(&mut self, x: f32, y: f32) -> usize {
        commands::scroll_to(self, x, y)
    }

    /// Jump for a signed vertical scroll delta (negative = up)
    pub fn jump(&mut self, delta: f32) -> usize {
        commands::jump(self, delta)
    }

    /// Radial push from a click at viewport `(x, y)`
    pub fn push(&mut self, x: f32, y: f32) -> usize {
        commands::push(self, x, y)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    // === FRAME ===

    /// Advance every particle one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Paint the current state
    pub fn draw(&mut self, surface: &mut dyn RenderSurface) {
        render::draw(self, surface);
    }

    /// One display refresh: update, then paint
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        self.step();
        self.draw(surface);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

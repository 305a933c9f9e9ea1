use wasm_bindgen::prelude::*;

use crate::systems::particle::UpdateOutcome;

/// Snapshot of the last frame. Only filled while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) particle_count: u32,
    pub(super) rect_count: u32,
    pub(super) content_hits: u32,
    pub(super) wall_hits: u32,
    pub(super) floor_bounces: u32,
    pub(super) recycled: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record(&mut self, outcome: &UpdateOutcome) {
        if outcome.content.is_some() {
            self.content_hits += 1;
        }
        if outcome.bounds.wall {
            self.wall_hits += 1;
        }
        if outcome.bounds.floor {
            self.floor_bounces += 1;
        }
        if outcome.bounds.recycled {
            self.recycled += 1;
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn rect_count(&self) -> u32 { self.rect_count }
    #[wasm_bindgen(getter)]
    pub fn content_hits(&self) -> u32 { self.content_hits }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn floor_bounces(&self) -> u32 { self.floor_bounces }
    #[wasm_bindgen(getter)]
    pub fn recycled(&self) -> u32 { self.recycled }
}

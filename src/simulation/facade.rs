use wasm_bindgen::prelude::*;

use crate::api::{window_viewport, CanvasSurface, DomGeometry};
use crate::domain::SimConfig;
use crate::systems::geometry::StaticGeometry;
use crate::systems::render::{NullSurface, RenderSurface};

use super::perf_stats::PerfStats;
use super::{SimulationCore, Stimulus};

/// Page-facing handle. JS wires window events to the `on_*` methods and
/// calls `tick()` from `requestAnimationFrame`.
#[wasm_bindgen]
pub struct Backdrop {
    core: SimulationCore,
    surface: Box<dyn RenderSurface>,
    geometry: DomGeometry,
}

#[wasm_bindgen]
impl Backdrop {
    /// Default configuration. `selector` picks the content elements to avoid.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, selector: &str) -> Self {
        Self::build(canvas_id, selector, SimConfig::default())
    }

    /// Same as `new`, with a (partial) JSON config override
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(canvas_id: &str, selector: &str, config_json: &str) -> Result<Backdrop, JsValue> {
        let config = SimConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::build(canvas_id, selector, config))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// One animation frame: update and paint
    pub fn tick(&mut self) {
        self.core.tick(self.surface.as_mut());
    }

    pub fn on_resize(&mut self) {
        let viewport = window_viewport();
        self.core.handle(Stimulus::Resize {
            width: viewport.width,
            height: viewport.height,
        });
        self.core.refresh_geometry(&self.geometry);
    }

    /// Returns how many particles jumped
    pub fn on_scroll(&mut self) -> usize {
        let viewport = window_viewport();
        let jumped = self.core.handle(Stimulus::Scroll {
            x: viewport.scroll.x,
            y: viewport.scroll.y,
        });
        self.core.refresh_geometry(&self.geometry);
        jumped
    }

    /// Re-measure after late layout (images, fonts)
    pub fn on_load(&mut self) {
        self.core.refresh_geometry(&self.geometry);
    }

    /// Returns how many particles were pushed
    pub fn on_click(&mut self, client_x: f32, client_y: f32) -> usize {
        self.core.handle(Stimulus::Click { x: client_x, y: client_y })
    }

    /// Replace tracked content with host-measured document-space rects,
    /// flat as `[x, y, w, h, ...]`. The next DOM refresh overrides it.
    pub fn set_content_rects(&mut self, flat: &[f32]) {
        self.core.refresh_geometry(&StaticGeometry::from_flat(flat));
    }

    pub fn content_rect_count(&self) -> usize {
        self.core.content_rects().len()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl Backdrop {
    fn build(canvas_id: &str, selector: &str, mut config: SimConfig) -> Self {
        if config.seed == 0 {
            // Low bits of the clock; `| 1` keeps it non-zero
            config.seed = (js_sys::Date::now() as u64 as u32) | 1;
        }

        let surface: Box<dyn RenderSurface> = match CanvasSurface::from_element_id(canvas_id) {
            Ok(canvas) => Box::new(canvas),
            Err(e) => {
                console_warn!("{}; running without drawing", e);
                Box::new(NullSurface)
            }
        };

        let geometry = DomGeometry::new(selector);
        let core = SimulationCore::new(config, window_viewport(), &geometry);

        Self { core, surface, geometry }
    }
}

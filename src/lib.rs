//! Backdrop Engine - ambient gravity particles behind page content, in WASM
//!
//! Particles fall, bounce off the viewport floor, slide off tracked content
//! boxes, jump when the page scrolls up and scatter on click.
//!
//! Architecture:
//! - core/        - Vec2, RNG, console macros
//! - domain/      - Config and content geometry types
//! - systems/     - Geometry source, particle physics, render surface
//! - simulation/  - Frame driver + wasm facade
//! - api/         - web-sys adapters (canvas, DOM)

// Macros first so every later module can use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Lets the console macros resolve web-sys from any crate
#[doc(hidden)]
pub use web_sys as __web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Backdrop engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ContentRect, SimConfig, Viewport};
pub use simulation::{Backdrop, InitReport, PerfStats, SimulationCore, Stimulus};
pub use systems::geometry::{GeometrySource, StaticGeometry};
pub use systems::particle::Particle;
pub use systems::render::{NullSurface, RenderSurface, Rgba};

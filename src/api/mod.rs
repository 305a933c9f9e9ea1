//! Browser adapters (web-sys)
//!
//! The physics core never touches the DOM; these types bridge it to a
//! real page. They must only be used from a wasm32 host.

pub mod canvas;
pub mod dom;

pub use canvas::CanvasSurface;
pub use dom::{window_viewport, DomGeometry};

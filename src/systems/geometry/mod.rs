//! Content geometry
//!
//! A `GeometrySource` measures the page; `ContentRects` holds the latest
//! snapshot. Snapshots are replaced wholesale, never patched.

mod source;
mod snapshot;

pub use snapshot::ContentRects;
pub use source::{GeometrySource, StaticGeometry};

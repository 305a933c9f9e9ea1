//! Systems: everything that reads or mutates particles
//!
//! - geometry/  - content rectangles and where they come from
//! - particle/  - integration, collision response, stimuli
//! - render     - drawing surface abstraction

pub mod geometry;
pub mod particle;
pub mod render;

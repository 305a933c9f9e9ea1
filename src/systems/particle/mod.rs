//! Particle physics
//!
//! Per frame, in order: gravity, horizontal friction, integrate,
//! content collision, viewport bounds. One update per rendered frame,
//! no substeps.

mod body;
mod bounds;
mod collision;
mod forces;
mod types;
mod update;

pub use body::Particle;
pub use bounds::{recycle, resolve_viewport};
pub use collision::resolve_content_collision;
pub use forces::{jump_force, MIN_SIZE};
pub use types::{BoundaryEvents, ContentHit, Face, UpdateOutcome};
pub use update::update_particle;

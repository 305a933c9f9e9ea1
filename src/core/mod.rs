//! Core building blocks shared by every layer
//!
//! - log     - console macros (must be first for macro export!)
//! - vec2    - 2D vector math
//! - random  - xorshift RNG

#[macro_use]
pub mod log;
pub mod random;
pub mod vec2;

pub use random::Rng;
pub use vec2::Vec2;

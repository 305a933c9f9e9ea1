//! Domain types: configuration and content geometry

pub mod config;
pub mod rect;

pub use config::{Rgb, SimConfig, DEFAULT_PALETTE};
pub use rect::{ContentRect, Viewport};

//! Simulation configuration
//!
//! One immutable `SimConfig` is handed to the driver at construction.
//! JSON overrides are partial: any field left out keeps its default.

use serde::{Deserialize, Serialize};

/// RGB triple, mixed with `opacity` at draw time
pub type Rgb = [u8; 3];

pub const DEFAULT_PALETTE: [Rgb; 5] = [
    [43, 45, 66],    // #2b2d42
    [141, 153, 174], // #8d99ae
    [237, 242, 244], // #edf2f4
    [239, 35, 60],   // #ef233c
    [217, 4, 41],    // #d90429
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Population ===
    pub particle_count: usize,
    /// Global alpha applied to every palette color
    pub opacity: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub palette: Vec<Rgb>,

    // === Physics ===
    /// Scaled by mass, so heavier particles fall faster
    pub gravity: f32,
    /// Horizontal only
    pub friction: f32,
    /// Velocity retained after a floor bounce
    pub bounce_damping: f32,
    /// Velocity retained after a content bounce
    pub content_bounce_damping: f32,
    /// Sideways kick on content tops, keeps particles from stacking
    pub horizontal_push_force: f32,

    // === Stimuli ===
    pub click_push_radius: f32,
    pub click_push_force: f32,
    pub max_scroll_jump_force: f32,
    /// Jump force per pixel of upward scroll (before the cap)
    pub scroll_jump_scale: f32,
    /// Distance above the floor that still counts as grounded for jumps
    pub floor_proximity: f32,

    // === Spawning ===
    /// Initial and recycled vx is drawn from +-spread/2
    pub spawn_velocity_spread: f32,
    pub spawn_max_attempts: u32,
    /// 0 = let the host pick (the wasm facade uses the clock)
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 500,
            opacity: 0.25,
            min_size: 0.5,
            max_size: 4.5,
            palette: DEFAULT_PALETTE.to_vec(),
            gravity: 0.15,
            friction: 0.99,
            bounce_damping: 0.6,
            content_bounce_damping: 0.9,
            horizontal_push_force: 3.0,
            click_push_radius: 80.0,
            click_push_force: 15.0,
            max_scroll_jump_force: 80.0,
            scroll_jump_scale: 50.0,
            floor_proximity: 5.0,
            spawn_velocity_spread: 5.0,
            spawn_max_attempts: 50,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_size > 0.0) {
            return Err(format!("min_size must be > 0, got {}", self.min_size));
        }
        if !(self.max_size >= self.min_size) {
            return Err(format!(
                "max_size ({}) must be >= min_size ({})",
                self.max_size, self.min_size
            ));
        }
        if self.palette.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(format!("opacity must be within [0, 1], got {}", self.opacity));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(format!("friction must be within (0, 1], got {}", self.friction));
        }
        for (name, value) in [
            ("bounce_damping", self.bounce_damping),
            ("content_bounce_damping", self.content_bounce_damping),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0, 1], got {}", name, value));
            }
        }
        if !(self.click_push_radius > 0.0) {
            return Err(format!(
                "click_push_radius must be > 0, got {}",
                self.click_push_radius
            ));
        }
        if self.spawn_max_attempts == 0 {
            return Err("spawn_max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

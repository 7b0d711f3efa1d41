//! Ant Arena - movable circular obstacles shared with point agents
//!
//! Core modules:
//! - `sim`: Deterministic obstacle/agent contact resolution
//! - `settings`: Data-driven arena and kernel configuration
//! - `error`: Construction and configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Error, GeometryFault, Result};
pub use settings::{KernelSettings, ObstacleConfig, Settings};

use glam::Vec2;

/// Arena configuration constants
pub mod consts {
    /// Added to every distance before dividing by it (agent on a center, coincident obstacles)
    pub const EPSILON: f32 = 0.001;
    /// Fraction of obstacle-obstacle overlap resolved per tick
    pub const REPULSION_SCALE: f32 = 0.25;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 200.0;
    pub const ARENA_HEIGHT: f32 = 200.0;

    /// Demo defaults
    pub const DEFAULT_ANTS: usize = 50;
    pub const DEFAULT_STEPS: u32 = 500;
}

/// Largest length in a slice of vectors (0 for an empty slice)
#[inline]
pub fn max_length(vecs: &[Vec2]) -> f32 {
    vecs.iter().map(|v| v.length()).fold(0.0, f32::max)
}

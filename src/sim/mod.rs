//! Deterministic obstacle simulation
//!
//! This module must stay pure and deterministic:
//! - No hidden state between ticks beyond the obstacle arrays
//! - Stable iteration order (by obstacle and agent index)
//! - No rendering or platform dependencies

pub mod ants;
pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use ants::{AgentPositions, Ants};
pub use collision::{obstacle_repulsion, penetration, phase_a, phase_b};
pub use obstacles::{CircleObstacles, ObstacleSnapshot};
pub use state::{AgentGroupId, ArenaState};
pub use tick::{run, tick};

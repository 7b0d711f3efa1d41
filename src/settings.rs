//! Arena and kernel settings
//!
//! Loaded from a JSON file; every field falls back to its default, so a
//! partial file (or none at all) is fine.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::CircleObstacles;

/// Switches for the collision kernel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelSettings {
    /// Push overlapping obstacles apart from each other (off by default)
    pub obstacle_repulsion: bool,
    /// Fraction of obstacle-obstacle overlap resolved per tick
    pub repulsion_scale: f32,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            obstacle_repulsion: false,
            repulsion_scale: REPULSION_SCALE,
        }
    }
}

/// One obstacle as written in a settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub center: Vec2,
    pub radius: f32,
    pub weight: f32,
}

/// Arena settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena_width: f32,
    pub arena_height: f32,

    /// Ants placed by the demo driver
    pub n_ants: usize,
    /// Ticks run by the demo driver
    pub steps: u32,
    /// Seed for ant placement
    pub seed: u64,

    pub obstacles: Vec<ObstacleConfig>,
    pub kernel: KernelSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let obstacle = |x: f32, y: f32, radius: f32, weight: f32| ObstacleConfig {
            center: Vec2::new(x, y),
            radius,
            weight,
        };
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            n_ants: DEFAULT_ANTS,
            steps: DEFAULT_STEPS,
            seed: 0,
            obstacles: vec![
                obstacle(50.0, 50.0, 12.0, 4.0),
                obstacle(140.0, 70.0, 20.0, 10.0),
                obstacle(90.0, 150.0, 8.0, 2.0),
            ],
            kernel: KernelSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject arena sizes ants cannot be placed in
    pub fn validate(&self) -> Result<()> {
        let ok = |side: f32| side.is_finite() && side > 0.0;
        if !ok(self.arena_width) || !ok(self.arena_height) {
            return Err(Error::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configured obstacles into a live set
    pub fn build_obstacles(&self) -> Result<CircleObstacles> {
        self.validate()?;
        let centers = self.obstacles.iter().map(|o| o.center).collect();
        let radiuses = self.obstacles.iter().map(|o| o.radius).collect();
        let weights = self.obstacles.iter().map(|o| o.weight).collect();
        CircleObstacles::with_settings(centers, radiuses, weights, self.kernel.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryFault;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.arena_width, 200.0);
        assert_eq!(settings.n_ants, 50);
        assert!(!settings.kernel.obstacle_repulsion);
        assert_eq!(settings.kernel.repulsion_scale, 0.25);
        assert_eq!(settings.build_obstacles().unwrap().len(), 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(
            r#"{
                "steps": 10,
                "kernel": { "obstacle_repulsion": true },
                "obstacles": [ { "center": [1.0, 2.0], "radius": 3.0, "weight": 4.0 } ]
            }"#,
        )
        .unwrap();
        assert_eq!(settings.steps, 10);
        assert_eq!(settings.n_ants, 50);
        assert!(settings.kernel.obstacle_repulsion);
        assert_eq!(settings.kernel.repulsion_scale, 0.25);

        let obstacles = settings.build_obstacles().unwrap();
        assert_eq!(obstacles.centers(), &[Vec2::new(1.0, 2.0)]);
        assert!(obstacles.kernel_settings().obstacle_repulsion);
    }

    #[test]
    fn test_bad_obstacle_rejected() {
        let settings = Settings::from_json(
            r#"{ "obstacles": [ { "center": [0.0, 0.0], "radius": 3.0, "weight": 0.0 } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            settings.build_obstacles(),
            Err(Error::InvalidGeometry(GeometryFault::NonPositiveWeight { .. }))
        ));
    }

    #[test]
    fn test_bad_arena_size_rejected() {
        for json in [
            r#"{ "arena_width": 0.0, "n_ants": 3 }"#,
            r#"{ "arena_height": -10.0 }"#,
            r#"{ "arena_width": -1.0, "arena_height": 0.0 }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(Error::InvalidArena { .. })),
                "{json} accepted"
            );
        }

        let settings = Settings {
            arena_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.build_obstacles(),
            Err(Error::InvalidArena { .. })
        ));
    }

    #[test]
    fn test_bad_repulsion_scale_in_file_rejected() {
        let settings = Settings::from_json(
            r#"{ "kernel": { "obstacle_repulsion": true, "repulsion_scale": -0.25 } }"#,
        )
        .unwrap();
        assert!(matches!(
            settings.build_obstacles(),
            Err(Error::InvalidRepulsionScale(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Settings::from_json("{ nope"), Err(Error::Json(_))));
        assert!(matches!(
            Settings::load("/definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back.obstacles, settings.obstacles);
        assert_eq!(back.kernel, settings.kernel);
    }
}

//! Circular obstacle geometry
//!
//! Each obstacle is a disc with a center, a radius and a weight. Centers move
//! every tick; radiuses and weights are fixed once the set is built. Pairwise
//! sums are precomputed for the obstacle-obstacle repulsion pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, GeometryFault, Result};
use crate::settings::KernelSettings;

/// The live obstacle set, exclusively owned and mutated by the collision kernel
#[derive(Debug, Clone)]
pub struct CircleObstacles {
    pub(crate) centers: Vec<Vec2>,
    pub(crate) radiuses: Vec<f32>,
    pub(crate) weights: Vec<f32>,
    /// `crossed_radiuses[i][j] = radiuses[i] + radiuses[j]`
    pub(crate) crossed_radiuses: Vec<Vec<f32>>,
    /// `crossed_weights[i][j] = weights[j] / (weights[i] + weights[j])`
    pub(crate) crossed_weights: Vec<Vec<f32>>,
    pub(crate) kernel: KernelSettings,
}

impl CircleObstacles {
    /// Build an obstacle set with default kernel settings
    pub fn new(centers: Vec<Vec2>, radiuses: Vec<f32>, weights: Vec<f32>) -> Result<Self> {
        Self::with_settings(centers, radiuses, weights, KernelSettings::default())
    }

    pub fn with_settings(
        centers: Vec<Vec2>,
        radiuses: Vec<f32>,
        weights: Vec<f32>,
        kernel: KernelSettings,
    ) -> Result<Self> {
        validate(&centers, &radiuses, &weights)?;
        let scale = kernel.repulsion_scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidRepulsionScale(scale));
        }

        let crossed_radiuses = radiuses
            .iter()
            .map(|ri| radiuses.iter().map(|rj| ri + rj).collect())
            .collect();
        let crossed_weights = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wj / (wi + wj)).collect())
            .collect();

        log::info!(
            "Created {} obstacles (repulsion {})",
            radiuses.len(),
            if kernel.obstacle_repulsion { "on" } else { "off" }
        );

        Ok(Self {
            centers,
            radiuses,
            weights,
            crossed_radiuses,
            crossed_weights,
            kernel,
        })
    }

    /// Number of obstacles
    #[inline]
    pub fn len(&self) -> usize {
        self.radiuses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radiuses.is_empty()
    }

    pub fn centers(&self) -> &[Vec2] {
        &self.centers
    }

    pub fn radiuses(&self) -> &[f32] {
        &self.radiuses
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn crossed_radiuses(&self) -> &[Vec<f32>] {
        &self.crossed_radiuses
    }

    pub fn crossed_weights(&self) -> &[Vec<f32>] {
        &self.crossed_weights
    }

    pub fn kernel_settings(&self) -> &KernelSettings {
        &self.kernel
    }

    /// Toggle the obstacle-obstacle repulsion pass
    pub fn set_obstacle_repulsion(&mut self, enabled: bool) {
        self.kernel.obstacle_repulsion = enabled;
    }

    /// Independent copy of the current geometry for rendering
    pub fn snapshot(&self) -> ObstacleSnapshot {
        ObstacleSnapshot {
            centers: self.centers.clone(),
            radiuses: self.radiuses.clone(),
            weights: self.weights.clone(),
        }
    }
}

fn validate(
    centers: &[Vec2],
    radiuses: &[f32],
    weights: &[f32],
) -> std::result::Result<(), GeometryFault> {
    if centers.len() != radiuses.len() || radiuses.len() != weights.len() {
        return Err(GeometryFault::LengthMismatch {
            centers: centers.len(),
            radiuses: radiuses.len(),
            weights: weights.len(),
        });
    }
    // `!(x > 0.0)` also rejects NaN
    if let Some((index, &value)) = radiuses.iter().enumerate().find(|(_, r)| !(**r > 0.0)) {
        return Err(GeometryFault::NonPositiveRadius { index, value });
    }
    if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !(**w > 0.0)) {
        return Err(GeometryFault::NonPositiveWeight { index, value });
    }
    Ok(())
}

/// Frozen copy of obstacle geometry. Owns its data, so later ticks never show through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub centers: Vec<Vec2>,
    pub radiuses: Vec<f32>,
    pub weights: Vec<f32>,
}

//! Obstacle/agent contact resolution
//!
//! One tick runs in two phases:
//! - Phase A: every agent that sits inside an obstacle pushes that obstacle
//!   away, scaled down by the obstacle's weight.
//! - Phase B: against the *moved* obstacles, every agent still inside one is
//!   pushed back out.
//!
//! Agents are points. The push for one (agent, obstacle) pair is the
//! penetration vector `v * (1 - r / (|v| + ε))` with `v = center - agent`,
//! zeroed when the agent lies outside the disc.

use glam::Vec2;

use super::ants::AgentPositions;
use super::obstacles::CircleObstacles;
use crate::consts::EPSILON;
use crate::max_length;

/// Penetration vector for one agent against one obstacle
///
/// Zero when `|center - agent| > radius`. Inside the disc the factor is
/// negative, so the result points from the center through the agent and
/// shrinks to zero as the agent reaches the rim.
#[inline]
pub fn penetration(agent: Vec2, center: Vec2, radius: f32) -> Vec2 {
    let v = center - agent;
    let d = v.length();
    if d > radius {
        return Vec2::ZERO;
    }
    v * (1.0 - radius / (d + EPSILON))
}

/// Phase A: displace obstacles by the agents overlapping them
///
/// For each obstacle `j`, `centers[j] -= Σ_i penetration(i, j) / weights[j]`.
/// Each center only reads itself, so updating in place is order-independent.
pub fn phase_a(centers: &mut [Vec2], radiuses: &[f32], weights: &[f32], agents: &[Vec2]) {
    debug_assert!(centers.len() == radiuses.len() && radiuses.len() == weights.len());
    for ((center, &radius), &weight) in centers.iter_mut().zip(radiuses).zip(weights) {
        let push = agents
            .iter()
            .fold(Vec2::ZERO, |acc, &a| acc + penetration(a, *center, radius));
        *center -= push / weight;
    }
}

/// Phase B: per-agent correction against the given (post Phase A) centers
///
/// Agents have unit responsiveness: contributions are summed over obstacles
/// without any weighting.
pub fn phase_b(centers: &[Vec2], radiuses: &[f32], agents: &[Vec2]) -> Vec<Vec2> {
    debug_assert_eq!(centers.len(), radiuses.len());
    agents
        .iter()
        .map(|&a| {
            centers
                .iter()
                .zip(radiuses)
                .fold(Vec2::ZERO, |acc, (&c, &r)| acc + penetration(a, c, r))
        })
        .collect()
}

/// Obstacle-obstacle repulsion
///
/// For every ordered pair `i != j` that overlaps, obstacle `i` moves along
/// `centers[j] - centers[i]` by `(d - crossed_radiuses[i][j]) * crossed_weights[i][j] * scale`
/// (a negative amount, so away from `j`). All pairs read the same centers;
/// displacements are applied afterwards.
pub fn obstacle_repulsion(
    centers: &mut [Vec2],
    crossed_radiuses: &[Vec<f32>],
    crossed_weights: &[Vec<f32>],
    scale: f32,
) {
    let n = centers.len();
    debug_assert!(crossed_radiuses.len() == n && crossed_radiuses.iter().all(|row| row.len() == n));
    debug_assert!(crossed_weights.len() == n && crossed_weights.iter().all(|row| row.len() == n));

    let deltas: Vec<Vec2> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| j != i)
                .fold(Vec2::ZERO, |acc, j| {
                    let v = centers[j] - centers[i];
                    let d = v.length();
                    let overlap = (d - crossed_radiuses[i][j]).min(0.0);
                    let unit = v / (d + EPSILON);
                    acc + unit * (overlap * crossed_weights[i][j] * scale)
                })
        })
        .collect();

    for (center, delta) in centers.iter_mut().zip(deltas) {
        *center += delta;
    }
}

impl CircleObstacles {
    /// Run one tick against every registered agent group
    ///
    /// Phase A runs for all groups (in order, each seeing the centers left by
    /// the previous one), then the optional repulsion pass, then Phase B.
    /// Each group receives exactly one `translate` call carrying its full
    /// correction; empty groups are skipped.
    pub fn update<G: AgentPositions>(&mut self, groups: &mut [G]) {
        if self.is_empty() {
            log::trace!("No obstacles, skipping tick");
            return;
        }

        let debug = log::log_enabled!(log::Level::Debug);
        let before = if debug { self.centers.clone() } else { Vec::new() };
        for group in groups.iter() {
            phase_a(&mut self.centers, &self.radiuses, &self.weights, group.positions());
        }

        if self.kernel.obstacle_repulsion {
            obstacle_repulsion(
                &mut self.centers,
                &self.crossed_radiuses,
                &self.crossed_weights,
                self.kernel.repulsion_scale,
            );
        }

        let mut max_correction = 0.0_f32;
        for group in groups.iter_mut() {
            if group.positions().is_empty() {
                continue;
            }
            let correction = phase_b(&self.centers, &self.radiuses, group.positions());
            if debug {
                max_correction = max_correction.max(max_length(&correction));
            }
            group.translate(&correction);
        }

        if debug {
            let shifts: Vec<Vec2> = self.centers.iter().zip(&before).map(|(a, b)| *a - *b).collect();
            log::debug!(
                "Obstacle tick: max obstacle shift {:.4}, max agent correction {:.4}",
                max_length(&shifts),
                max_correction
            );
        }
    }

    /// Delay before the next scheduled update; all work happens inside `update`
    #[inline]
    pub fn update_step(&self) -> u32 {
        0
    }
}

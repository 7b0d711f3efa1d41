//! Agent position sources
//!
//! The kernel only ever sees agents through [`AgentPositions`]: a readable
//! slice of points and a single call that adds a displacement to every agent.
//! How agents move, learn or turn is not its business.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Capability exposed by any group of point agents sharing the arena
pub trait AgentPositions {
    /// Current positions, one per agent
    fn positions(&self) -> &[Vec2];

    /// Add `displacement[i]` to agent `i`. `displacement.len() == positions().len()`.
    fn translate(&mut self, displacement: &[Vec2]);
}

impl<T: AgentPositions + ?Sized> AgentPositions for Box<T> {
    fn positions(&self) -> &[Vec2] {
        (**self).positions()
    }

    fn translate(&mut self, displacement: &[Vec2]) {
        (**self).translate(displacement)
    }
}

impl<T: AgentPositions + ?Sized> AgentPositions for &mut T {
    fn positions(&self) -> &[Vec2] {
        (**self).positions()
    }

    fn translate(&mut self, displacement: &[Vec2]) {
        (**self).translate(displacement)
    }
}

/// A plain group of ants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ants {
    pub xy: Vec<Vec2>,
}

impl Ants {
    pub fn new(xy: Vec<Vec2>) -> Self {
        Self { xy }
    }

    /// Place `n` ants uniformly in a `width` x `height` arena (seeded, deterministic)
    pub fn scatter(n: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let xy = (0..n)
            .map(|_| Vec2::new(sample_axis(&mut rng, width), sample_axis(&mut rng, height)))
            .collect();
        Self { xy }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xy.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xy.is_empty()
    }
}

/// Uniform in `[0, extent)`; a degenerate extent collapses to 0
fn sample_axis(rng: &mut Pcg32, extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

impl AgentPositions for Ants {
    fn positions(&self) -> &[Vec2] {
        &self.xy
    }

    fn translate(&mut self, displacement: &[Vec2]) {
        debug_assert_eq!(displacement.len(), self.xy.len());
        for (p, d) in self.xy.iter_mut().zip(displacement) {
            *p += *d;
        }
    }
}

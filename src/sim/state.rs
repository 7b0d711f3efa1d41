//! Arena state
//!
//! Owns the obstacle set and every agent group registered with it. Groups are
//! registered explicitly; the tick never has to guess which objects are agents.

use super::ants::AgentPositions;
use super::obstacles::{CircleObstacles, ObstacleSnapshot};

/// Index of a registered agent group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentGroupId(pub usize);

/// Complete arena state (deterministic)
pub struct ArenaState {
    pub width: f32,
    pub height: f32,
    /// Obstacle set, mutated only by the collision kernel
    pub obstacles: CircleObstacles,
    /// Registered agent groups, in registration order
    agents: Vec<Box<dyn AgentPositions>>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl ArenaState {
    pub fn new(width: f32, height: f32, obstacles: CircleObstacles) -> Self {
        log::info!(
            "Arena {}x{} with {} obstacles",
            width,
            height,
            obstacles.len()
        );
        Self {
            width,
            height,
            obstacles,
            agents: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Register an agent group with the collision kernel
    pub fn register_agents(&mut self, group: Box<dyn AgentPositions>) -> AgentGroupId {
        let id = AgentGroupId(self.agents.len());
        log::info!(
            "Registered agent group {} ({} agents)",
            id.0,
            group.positions().len()
        );
        self.agents.push(group);
        id
    }

    pub fn agent_groups(&self) -> &[Box<dyn AgentPositions>] {
        &self.agents
    }

    pub fn agent_group(&self, id: AgentGroupId) -> Option<&dyn AgentPositions> {
        self.agents.get(id.0).map(|g| &**g)
    }

    /// Mutable access for the agents' own motion, outside the kernel
    pub fn agent_group_mut(&mut self, id: AgentGroupId) -> Option<&mut Box<dyn AgentPositions>> {
        self.agents.get_mut(id.0)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut CircleObstacles, &mut [Box<dyn AgentPositions>]) {
        (&mut self.obstacles, &mut self.agents)
    }

    pub fn snapshot(&self) -> ObstacleSnapshot {
        self.obstacles.snapshot()
    }
}

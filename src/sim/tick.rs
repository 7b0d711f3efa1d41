//! Arena tick
//!
//! One call resolves one tick of obstacle/agent contact. Nothing is scheduled
//! for later: the kernel's update step is always zero.

use super::state::ArenaState;

/// Advance the arena by one tick
pub fn tick(state: &mut ArenaState) {
    let (obstacles, agents) = state.parts_mut();
    obstacles.update(agents);
    debug_assert_eq!(obstacles.update_step(), 0);

    state.time_ticks += 1;
    log::trace!("Tick {} done", state.time_ticks);
}

/// Run `steps` ticks back to back
pub fn run(state: &mut ArenaState, steps: u32) {
    for _ in 0..steps {
        tick(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::KernelSettings;
    use crate::sim::{Ants, CircleObstacles};
    use glam::Vec2;

    fn arena() -> ArenaState {
        let obstacles = CircleObstacles::new(
            vec![Vec2::new(50.0, 50.0), Vec2::new(150.0, 150.0)],
            vec![10.0, 20.0],
            vec![2.0, 8.0],
        )
        .unwrap();
        ArenaState::new(200.0, 200.0, obstacles)
    }

    #[test]
    fn test_tick_counts() {
        let mut state = arena();
        run(&mut state, 3);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_tick_pushes_registered_ants_out() {
        let mut state = arena();
        let id = state.register_agents(Box::new(Ants::new(vec![Vec2::new(55.0, 50.0)])));

        tick(&mut state);

        let center = state.obstacles.centers()[0];
        let ant = state.agent_group(id).unwrap().positions()[0];
        assert!(center.x < 50.0);
        assert!(ant.x > 55.0);
        // The far obstacle is untouched
        assert_eq!(state.obstacles.centers()[1], Vec2::new(150.0, 150.0));
    }

    #[test]
    fn test_repeated_ticks_separate_ant_and_obstacle() {
        let mut state = arena();
        let id = state.register_agents(Box::new(Ants::new(vec![Vec2::new(52.0, 50.0)])));

        run(&mut state, 50);

        let center = state.obstacles.centers()[0];
        let ant = state.agent_group(id).unwrap().positions()[0];
        // Agent ends up at (or just on) the rim
        assert!((ant - center).length() > 9.9);
    }

    #[test]
    fn test_snapshot_survives_ticks() {
        let mut state = arena();
        state.register_agents(Box::new(Ants::new(vec![Vec2::new(48.0, 50.0)])));
        let before = state.snapshot();

        tick(&mut state);

        assert_eq!(before.centers[0], Vec2::new(50.0, 50.0));
        assert_ne!(state.snapshot().centers[0], before.centers[0]);
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            let mut state = ArenaState::new(
                200.0,
                200.0,
                CircleObstacles::with_settings(
                    vec![Vec2::new(60.0, 60.0), Vec2::new(75.0, 60.0)],
                    vec![12.0, 10.0],
                    vec![3.0, 1.0],
                    KernelSettings {
                        obstacle_repulsion: true,
                        ..Default::default()
                    },
                )
                .unwrap(),
            );
            state.register_agents(Box::new(Ants::scatter(40, 200.0, 200.0, 7)));
            state
        };
        let mut a = build();
        let mut b = build();
        run(&mut a, 20);
        run(&mut b, 20);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

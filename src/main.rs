//! Ant Arena entry point
//!
//! Scatters ants over the configured arena, runs the obstacle kernel for the
//! configured number of ticks and prints the final obstacle snapshot as JSON.
//!
//! Usage: `ant-arena [settings.json]`

use std::process::ExitCode;

use ant_arena::sim::{Ants, ArenaState, run};
use ant_arena::{Result, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ant Arena starting...");

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let obstacles = settings.build_obstacles()?;
    let mut state = ArenaState::new(settings.arena_width, settings.arena_height, obstacles);
    state.register_agents(Box::new(Ants::scatter(
        settings.n_ants,
        settings.arena_width,
        settings.arena_height,
        settings.seed,
    )));

    let start = state.snapshot();
    run(&mut state, settings.steps);
    let end = state.snapshot();

    for (i, (a, b)) in start.centers.iter().zip(&end.centers).enumerate() {
        log::info!("Obstacle {}: {} -> {} (moved {:.3})", i, a, b, a.distance(*b));
    }
    log::info!("Ran {} ticks", state.time_ticks);

    println!("{}", serde_json::to_string_pretty(&end)?);
    Ok(())
}

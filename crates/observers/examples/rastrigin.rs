//! Drives a swarm over the 2-D Rastrigin function and reports its progress.
//!
//! # Usage
//!
//! ```text
//! cargo run --example rastrigin
//! cargo run --example rastrigin -- 42
//! RUST_LOG=debug cargo run --example rastrigin
//! ```
//!
//! The optional argument seeds the swarm for a reproducible run. The run stops
//! after 1000 steps or once every particle is within 0.05 of the global best,
//! whichever comes first. The final best position is also mapped onto a
//! 1200×900 canvas, the way a renderer would place it.

use std::error::Error;

use pso_core::{
    Observer,
    functions::{Rastrigin, remap},
};
use pso_observers::{ClusterConvergence, FitnessHistory, ProgressLog};
use pso_solvers::swarm::{Action, Coefficients, Config, Event, Status, Swarm, minimize};
use tracing::info;
use tracing_subscriber::EnvFilter;

const BOUNDS: [f64; 2] = [-5.12, 5.12];
const CANVAS: [f64; 2] = [1200.0, 900.0];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid seed: expected an unsigned integer, e.g. 42");
            std::process::exit(1);
        });

    let config = Config::new(2, BOUNDS, 50)?
        .with_max_iterations(1000)
        .with_coefficients(Coefficients {
            inertia: 0.8,
            cognitive: 1.5,
            social: 1.5,
        })?;

    let objective = Rastrigin::with_dimension(2);
    let mut swarm = match seed {
        Some(seed) => Swarm::seeded(config, objective, seed)?,
        None => Swarm::from_os_rng(config, objective)?,
    };

    let mut history = FitnessHistory::new();
    let mut progress = ProgressLog::every(100);
    let mut convergence = ClusterConvergence::default();

    let solution = minimize(&mut swarm, |event: &Event<'_>| -> Option<Action> {
        history.record(event);
        progress.record(event);
        convergence.observe(event)
    })?;

    match solution.status {
        Status::StoppedByObserver => info!(iters = solution.iters, "all particles converged"),
        Status::MaxIters => info!(iters = solution.iters, "iteration budget exhausted"),
    }

    if let Some(position) = &solution.position {
        let [x, y] = [position[0], position[1]];
        info!(x, y, fitness = solution.fitness, "best position");
        info!(
            px = remap(x, BOUNDS, [0.0, CANVAS[0]]),
            py = remap(y, BOUNDS, [0.0, CANVAS[1]]),
            "best position on canvas"
        );
    }

    if let Some(ratio) = history.improvement_ratio() {
        info!(ratio, "best fitness improvement from first to last step");
    }

    Ok(())
}

use pso_core::Objective;
use rand::Rng;

use super::{Config, Particle, Swarm};

/// Emitted by the driver after every completed step.
///
/// Events borrow the swarm's state read-only, so observers can inspect
/// particles and bests (for rendering, logging, or convergence checks) without
/// reaching into the update logic.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Zero-based index of the step that just completed.
    pub iteration: usize,

    /// Whether the global best strictly improved during this step.
    pub improved: bool,

    /// Best fitness found so far.
    pub global_best_fitness: f64,

    /// Best position found so far, if any fitness was recorded.
    pub global_best_position: Option<&'a [f64]>,

    /// The particles after this step's move.
    pub particles: &'a [Particle],

    /// The swarm configuration.
    pub config: &'a Config,
}

impl<'a> Event<'a> {
    pub(super) fn new<F, R>(iteration: usize, improved: bool, swarm: &'a Swarm<F, R>) -> Self
    where
        F: Objective,
        R: Rng,
    {
        Self {
            iteration,
            improved,
            global_best_fitness: swarm.global_best_fitness(),
            global_best_position: swarm.global_best_position(),
            particles: swarm.particles(),
            config: swarm.config(),
        }
    }
}

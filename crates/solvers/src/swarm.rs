//! Global-best particle swarm optimization over a bounded box.
//!
//! # Algorithm
//!
//! A fixed population of particles moves through `[min, max]^D`. Each step
//! ([`Swarm::run`]) has two passes:
//!
//! 1. **Evaluate** every particle and update its personal best and the swarm's
//!    global best. Only strict improvements are recorded, so ties keep the
//!    first position found.
//! 2. **Move** every particle. Per dimension, with fresh `r1, r2 ∈ [0, 1)`:
//!    `v = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)`, then `x += v`, then `x`
//!    is clamped into the bounds.
//!
//! The evaluation pass finishes before any particle moves, so every particle in
//! a step is pulled toward the same global best.
//!
//! Velocity is never clamped. A particle that overshoots a bound loses the
//! excess distance but keeps its velocity for later steps.
//!
//! # Driving the swarm
//!
//! The swarm does not enforce [`Config::max_iterations`] or decide when it has
//! converged. Either call [`Swarm::run`] directly once per tick, or use
//! [`minimize`], which runs up to `max_iterations` steps and emits one [`Event`]
//! per step. Observers can return [`Action::StopEarly`] to halt, which is how
//! convergence policies are plugged in.
//!
//! # Failures
//!
//! An objective error aborts the step and is returned as [`Error::Objective`].
//! Particles evaluated before the failure keep their updated bests and nothing
//! has moved; re-initialize before continuing. NaN fitness is never recorded as
//! a best.

mod action;
mod config;
mod driver;
mod error;
mod event;
mod optimizer;
mod particle;
mod solution;


pub use action::Action;
pub use config::{Coefficients, Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use optimizer::Swarm;
pub use particle::Particle;
pub use solution::{Solution, Status};

use pso_core::{Objective, Observer};
use rand::Rng;

/// Runs the swarm for up to `max_iterations` steps, reporting each to `observer`.
///
/// Steps continue from the swarm's current state, so calling this twice
/// resumes rather than restarts. The observer receives an [`Event`] after every
/// step and can return [`Action::StopEarly`] to halt.
///
/// # Errors
///
/// Returns an error if the objective fails during a step.
pub fn minimize<F, R, Obs>(swarm: &mut Swarm<F, R>, observer: Obs) -> Result<Solution, Error>
where
    F: Objective,
    R: Rng,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    driver::drive(swarm, observer)
}

/// Runs the swarm for `max_iterations` steps without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the objective fails during a step.
pub fn minimize_unobserved<F, R>(swarm: &mut Swarm<F, R>) -> Result<Solution, Error>
where
    F: Objective,
    R: Rng,
{
    minimize(swarm, ())
}

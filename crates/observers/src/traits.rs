//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any solver whose events carry
//! the data it needs.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events tied to a step index
//! - [`HasObjective`] — events that carry a best-so-far objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pso_core::Observer;
//! use pso_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use pso_solvers::swarm;

/// An event tied to a zero-based step index.
pub trait HasIteration {
    /// Returns the index of the step that produced this event.
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the best objective known when the event was emitted.
    ///
    /// Returns `f64::INFINITY` when nothing has been recorded yet.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for swarm::Event<'_> {
    fn iteration(&self) -> usize {
        self.iteration
    }
}

impl HasObjective for swarm::Event<'_> {
    fn objective(&self) -> f64 {
        self.global_best_fitness
    }
}

impl CanStopEarly for swarm::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

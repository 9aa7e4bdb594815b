//! Reusable observers for driving a particle swarm.
//!
//! The swarm never decides on its own when to stop; these observers carry the
//! driver-side policies and bookkeeping instead:
//!
//! - [`ClusterConvergence`] — stops once enough particles gather around the
//!   global best
//! - [`FitnessHistory`] — records the global best fitness after every step
//! - [`ProgressLog`] — reports progress through `tracing`
//! - [`traits`] — capability traits that let observers work across event types
//!   ([`HasIteration`], [`HasObjective`], [`CanStopEarly`])
//!
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod convergence;
mod history;
mod progress;

pub use convergence::ClusterConvergence;
pub use history::FitnessHistory;
pub use progress::ProgressLog;

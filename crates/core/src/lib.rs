//! Core traits and objective functions for particle swarm optimization.
//!
//! This crate defines the shared abstractions that the swarm solver and its
//! observers build on:
//!
//! - [`Objective`] — a fitness function mapping a position to a scalar to minimize
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`functions`] — stateless math used by objectives and presentation layers
//!   (the Rastrigin benchmark, linear remapping, Euclidean distance)

mod objective;
mod observer;

pub mod functions;

pub use objective::Objective;
pub use observer::Observer;

//! Particle swarm optimization for the pso framework.
//!
//! - [`swarm`] — the swarm optimizer, its configuration, and an observed
//!   iteration driver

pub mod swarm;

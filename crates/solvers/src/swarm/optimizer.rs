use pso_core::Objective;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace, warn};

use super::{Coefficients, Config, Error, Particle};

/// A global-best particle swarm.
///
/// The swarm exclusively owns its particles, its best-tracking state, and its
/// random source `R`. Construction initializes the particles, so a `Swarm` is
/// always ready to [`run`](Self::run).
///
/// Inject a seeded `R` for reproducible runs; two swarms built from the same
/// config, objective, and seed follow identical trajectories.
#[derive(Debug)]
pub struct Swarm<F, R = StdRng> {
    config: Config,
    objective: F,
    rng: R,
    particles: Vec<Particle>,
    global_best_position: Option<Vec<f64>>,
    global_best_fitness: f64,
}

impl<F: Objective> Swarm<F, StdRng> {
    /// Creates a swarm whose random source is seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the objective expects a different
    /// dimension than the config.
    pub fn seeded(config: Config, objective: F, seed: u64) -> Result<Self, Error> {
        Self::new(config, objective, StdRng::seed_from_u64(seed))
    }

    /// Creates a swarm whose random source is seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the objective expects a different
    /// dimension than the config.
    pub fn from_os_rng(config: Config, objective: F) -> Result<Self, Error> {
        Self::new(config, objective, StdRng::from_os_rng())
    }
}

impl<F: Objective, R: Rng> Swarm<F, R> {
    /// Creates a swarm and initializes its particles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if the objective expects a different
    /// dimension than the config.
    pub fn new(config: Config, objective: F, rng: R) -> Result<Self, Error> {
        if let Some(expected) = objective.dimension() {
            if expected != config.dimension() {
                return Err(Error::Dimension {
                    expected,
                    found: config.dimension(),
                });
            }
        }

        let mut swarm = Self {
            config,
            objective,
            rng,
            particles: Vec::with_capacity(config.population_size()),
            global_best_position: None,
            global_best_fitness: f64::INFINITY,
        };
        swarm.initialize_particles();
        Ok(swarm)
    }

    /// Replaces every particle with a freshly randomized one.
    ///
    /// Positions are drawn uniformly from `[min, max]` and velocities from
    /// `[min - max, max - min]` in every dimension. The global best is kept.
    pub fn initialize_particles(&mut self) {
        let [min, max] = self.config.bounds();
        let span = max - min;
        let dimension = self.config.dimension();

        let rng = &mut self.rng;
        self.particles = (0..self.config.population_size())
            .map(|_| {
                let mut particle = Particle::new(dimension);
                for (x, v) in particle.position.iter_mut().zip(&mut particle.velocity) {
                    *x = rng.random_range(min..=max);
                    *v = rng.random_range(-span..=span);
                }
                particle
            })
            .collect();

        debug!(
            population = self.particles.len(),
            dimension, "initialized swarm particles"
        );
    }

    /// Performs one step: evaluates every particle, then moves every particle.
    ///
    /// `iteration` is only used for logging; the update rule does not depend
    /// on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] if the objective fails. The step stops at
    /// the failing particle, leaving the swarm partially evaluated and not
    /// moved. Re-initialize before continuing.
    pub fn run(&mut self, iteration: usize) -> Result<(), Error> {
        let previous_best = self.global_best_fitness;

        self.evaluate()?;

        if self.global_best_fitness < previous_best {
            debug!(
                iteration,
                fitness = self.global_best_fitness,
                "global best improved"
            );
        }

        if self.global_best_position.is_none() {
            warn!(iteration, "no finite fitness recorded; skipping social term");
        }

        self.advance();

        trace!(iteration, best = self.global_best_fitness, "swarm step complete");
        Ok(())
    }

    /// Evaluates every particle and records personal and global bests.
    fn evaluate(&mut self) -> Result<(), Error> {
        for particle in &mut self.particles {
            let fitness = self
                .objective
                .evaluate(&particle.position)
                .map_err(|e| Error::Objective(Box::new(e)))?;

            if fitness < particle.best_fitness {
                particle.best_position.clone_from(&particle.position);
                particle.best_fitness = fitness;
            }

            if fitness < self.global_best_fitness {
                self.global_best_position
                    .get_or_insert_with(Vec::new)
                    .clone_from(&particle.position);
                self.global_best_fitness = fitness;
            }
        }
        Ok(())
    }

    /// Updates every particle's velocity and position toward the bests.
    fn advance(&mut self) {
        let Coefficients {
            inertia,
            cognitive,
            social,
        } = self.config.coefficients();
        let [min, max] = self.config.bounds();
        let global_best = self.global_best_position.as_deref();

        for particle in &mut self.particles {
            let Particle {
                position,
                velocity,
                best_position,
                ..
            } = particle;

            let axes = position.iter_mut().zip(velocity.iter_mut());
            for (j, ((x, v), pbest)) in axes.zip(best_position.iter()).enumerate() {
                let r1: f64 = self.rng.random();
                let r2: f64 = self.rng.random();

                let social_pull = global_best.map_or(0.0, |g| social * r2 * (g[j] - *x));
                *v = inertia * *v + cognitive * r1 * (pbest - *x) + social_pull;
                *x = (*x + *v).clamp(min, max);
            }
        }
    }

    /// Returns the swarm configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the objective being minimized.
    #[must_use]
    pub fn objective(&self) -> &F {
        &self.objective
    }

    /// Returns the particles in a fixed order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns the best position found so far, if any fitness was recorded.
    #[must_use]
    pub fn global_best_position(&self) -> Option<&[f64]> {
        self.global_best_position.as_deref()
    }

    /// Returns the best fitness found so far, or `+∞` before any was recorded.
    #[must_use]
    pub fn global_best_fitness(&self) -> f64 {
        self.global_best_fitness
    }

    /// Returns the number of particles.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.config.population_size()
    }

    /// Returns the iteration budget drivers should respect.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use pso_core::functions::{Rastrigin, rastrigin};

    fn config() -> Config {
        Config::new(2, [-5.12, 5.12], 10).unwrap()
    }

    #[test]
    fn new_initializes_within_bounds() {
        let swarm = Swarm::seeded(config(), rastrigin, 1).unwrap();

        assert_eq!(swarm.particles().len(), 10);
        for particle in swarm.particles() {
            assert_eq!(particle.dimension(), 2);
            for (&x, &v) in particle.position().iter().zip(particle.velocity()) {
                assert!((-5.12..=5.12).contains(&x));
                assert!((-10.24..=10.24).contains(&v));
            }
            assert!(particle.best_fitness().is_infinite());
        }
        assert!(swarm.global_best_position().is_none());
        assert!(swarm.global_best_fitness().is_infinite());
    }

    #[test]
    fn wide_bounds_initialize_within_bounds() {
        let config = Config::new(1, [0.0, 8e307], 4).unwrap();
        let swarm = Swarm::seeded(config, rastrigin, 1).unwrap();

        for particle in swarm.particles() {
            assert!((0.0..=8e307).contains(&particle.position()[0]));
            assert!(particle.velocity()[0].is_finite());
        }
    }

    #[test]
    fn rejects_objective_with_other_dimension() {
        let result = Swarm::seeded(config(), Rastrigin::with_dimension(3), 1);

        assert!(matches!(
            result,
            Err(Error::Dimension {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn first_run_records_best_of_initial_positions() {
        let mut swarm = Swarm::seeded(config(), rastrigin, 7).unwrap();
        let expected = swarm
            .particles()
            .iter()
            .map(|p| rastrigin(p.position()))
            .fold(f64::INFINITY, f64::min);

        swarm.run(0).unwrap();

        assert_relative_eq!(swarm.global_best_fitness(), expected);
    }

    #[test]
    fn ties_keep_first_best() {
        // Constant objective: only the first evaluation is a strict improvement.
        let mut swarm = Swarm::seeded(config(), |_: &[f64]| 1.0, 3).unwrap();
        let first = swarm.particles()[0].position().to_vec();
        let initial: Vec<Vec<f64>> = swarm
            .particles()
            .iter()
            .map(|p| p.position().to_vec())
            .collect();

        swarm.run(0).unwrap();
        swarm.run(1).unwrap();

        assert_eq!(swarm.global_best_position(), Some(first.as_slice()));
        for (particle, start) in swarm.particles().iter().zip(&initial) {
            assert_eq!(particle.best_position(), start.as_slice());
        }
    }

    #[test]
    fn nan_fitness_is_never_recorded() {
        let mut swarm = Swarm::seeded(config(), |_: &[f64]| f64::NAN, 5).unwrap();

        swarm.run(0).unwrap();

        assert!(swarm.global_best_position().is_none());
        assert!(swarm.global_best_fitness().is_infinite());
        for particle in swarm.particles() {
            assert!(particle.best_fitness().is_infinite());
            for &x in particle.position() {
                assert!((-5.12..=5.12).contains(&x));
            }
        }
    }

    #[test]
    fn velocity_is_not_clamped() {
        // Zero pulls and unit inertia: particles drift at their initial velocity
        // and pile up on the bounds, but velocity keeps its magnitude.
        let coefficients = Coefficients {
            inertia: 1.0,
            cognitive: 0.0,
            social: 0.0,
        };
        let config = config().with_coefficients(coefficients).unwrap();
        let mut swarm = Swarm::seeded(config, rastrigin, 11).unwrap();
        let initial: Vec<Vec<f64>> = swarm
            .particles()
            .iter()
            .map(|p| p.velocity().to_vec())
            .collect();

        for i in 0..20 {
            swarm.run(i).unwrap();
        }

        for (particle, start) in swarm.particles().iter().zip(&initial) {
            assert_eq!(particle.velocity(), start.as_slice());

            // Twenty steps at |v| > 0.6 cover more than the full width.
            for (&x, &v) in particle.position().iter().zip(particle.velocity()) {
                if v > 0.6 {
                    assert_relative_eq!(x, 5.12);
                } else if v < -0.6 {
                    assert_relative_eq!(x, -5.12);
                }
            }
        }
    }

    #[test]
    fn reinitializing_keeps_global_best() {
        let mut swarm = Swarm::seeded(config(), rastrigin, 9).unwrap();
        swarm.run(0).unwrap();
        let best = swarm.global_best_fitness();
        let before = swarm.particles().to_vec();

        swarm.initialize_particles();

        assert_ne!(swarm.particles(), before.as_slice());
        assert_relative_eq!(swarm.global_best_fitness(), best);
        for particle in swarm.particles() {
            assert!(particle.best_fitness().is_infinite());
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    struct FailsOnSecondCall {
        calls: std::cell::Cell<usize>,
    }

    impl Objective for FailsOnSecondCall {
        type Error = Boom;

        fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
            let calls = self.calls.get() + 1;
            self.calls.set(calls);
            if calls == 2 { Err(Boom) } else { Ok(x[0]) }
        }
    }

    #[test]
    fn objective_error_aborts_step_before_moving() {
        let objective = FailsOnSecondCall {
            calls: std::cell::Cell::new(0),
        };
        let mut swarm = Swarm::seeded(config(), objective, 2).unwrap();
        let before = swarm.particles().to_vec();

        let result = swarm.run(0);

        assert!(matches!(result, Err(Error::Objective(_))));
        assert_eq!(
            swarm.particles()[0].best_position(),
            before[0].position(),
            "first particle was evaluated"
        );
        assert!(swarm.particles()[1].best_fitness().is_infinite());
        for (after, before) in swarm.particles().iter().zip(&before) {
            assert_eq!(after.position(), before.position());
        }
    }

    #[test]
    fn infallible_objectives_work_with_custom_rng() {
        struct Sphere;

        impl Objective for Sphere {
            type Error = Infallible;

            fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
                Ok(x.iter().map(|v| v * v).sum())
            }
        }

        let rng = StdRng::seed_from_u64(4);
        let mut swarm = Swarm::new(config(), Sphere, rng).unwrap();

        for i in 0..200 {
            swarm.run(i).unwrap();
        }

        assert!(swarm.global_best_fitness() < 1e-2);
    }
}

use pso_core::{Observer, functions::euclidean_distance};
use pso_solvers::swarm::Event;
use tracing::info;

use crate::traits::CanStopEarly;

/// Stops the swarm once enough particles sit close to the global best.
///
/// A particle counts as clustered when its Euclidean distance to the global
/// best position is strictly less than `radius`. By default the whole
/// population must be clustered; [`with_min_count`](Self::with_min_count)
/// relaxes that.
///
/// This is a driver-side policy: the swarm itself never reports convergence.
///
/// # Example
///
/// ```rust
/// use pso_core::functions::rastrigin;
/// use pso_observers::ClusterConvergence;
/// use pso_solvers::swarm::{Config, Status, Swarm, minimize};
///
/// let config = Config::new(2, [-5.12, 5.12], 30).unwrap();
/// let mut swarm = Swarm::seeded(config, rastrigin, 7).unwrap();
///
/// let mut convergence = ClusterConvergence::new(0.05);
/// let solution = minimize(&mut swarm, &mut convergence).unwrap();
///
/// if solution.status == Status::StoppedByObserver {
///     assert!(convergence.converged_at().is_some());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConvergence {
    radius: f64,
    min_count: Option<usize>,
    converged_at: Option<usize>,
}

impl ClusterConvergence {
    /// Distance threshold used by [`Default`].
    pub const DEFAULT_RADIUS: f64 = 0.05;

    /// Creates a policy requiring every particle within `radius` of the best.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            min_count: None,
            converged_at: None,
        }
    }

    /// Requires only `min_count` clustered particles instead of all of them.
    #[must_use]
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// Returns the distance threshold.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the iteration at which convergence was first detected.
    #[must_use]
    pub fn converged_at(&self) -> Option<usize> {
        self.converged_at
    }

    /// Counts particles strictly within `radius` of the global best.
    ///
    /// Returns zero before any best has been recorded. Renderers can use the
    /// same test per particle to highlight clustered ones.
    #[must_use]
    pub fn count_within(&self, event: &Event<'_>) -> usize {
        let Some(best) = event.global_best_position else {
            return 0;
        };

        event
            .particles
            .iter()
            .filter(|p| euclidean_distance(p.position(), best) < self.radius)
            .count()
    }

    /// Returns whether this event satisfies the policy.
    #[must_use]
    pub fn is_converged(&self, event: &Event<'_>) -> bool {
        let required = self.min_count.unwrap_or(event.config.population_size());
        event.global_best_position.is_some() && self.count_within(event) >= required
    }
}

impl Default for ClusterConvergence {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl<A: CanStopEarly> Observer<Event<'_>, A> for ClusterConvergence {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        if !self.is_converged(event) {
            return None;
        }

        self.converged_at.get_or_insert(event.iteration);
        info!(
            iteration = event.iteration,
            fitness = event.global_best_fitness,
            radius = self.radius,
            "all required particles clustered around the global best"
        );
        Some(A::stop_early())
    }
}

/// Allows `&mut ClusterConvergence` to be passed to drivers that take an
/// observer by value, so [`converged_at`](ClusterConvergence::converged_at)
/// can be read afterwards.
impl<A: CanStopEarly> Observer<Event<'_>, A> for &mut ClusterConvergence {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        (**self).observe(event)
    }
}

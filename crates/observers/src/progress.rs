use pso_core::Observer;
use tracing::{debug, info};

use crate::traits::{HasIteration, HasObjective};

/// Reports swarm progress through `tracing`.
///
/// Emits an `info` record on the first step and every `every` steps after
/// that, and a `debug` record whenever the best objective improves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressLog {
    every: usize,
    best: f64,
}

impl ProgressLog {
    /// Creates a logger that reports every `every` steps.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
            best: f64::INFINITY,
        }
    }

    /// Logs the event if it falls on the reporting interval.
    ///
    /// Returns `true` if an `info` record was emitted.
    pub fn record<E>(&mut self, event: &E) -> bool
    where
        E: HasIteration + HasObjective,
    {
        let iteration = event.iteration();
        let objective = event.objective();

        if objective < self.best {
            self.best = objective;
            debug!(iteration, objective, "best objective improved");
        }

        if iteration % self.every == 0 {
            info!(iteration, objective, "swarm progress");
            return true;
        }
        false
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::every(100)
    }
}

impl<E, A> Observer<E, A> for ProgressLog
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Step {
        iteration: usize,
        objective: f64,
    }

    impl HasIteration for Step {
        fn iteration(&self) -> usize {
            self.iteration
        }
    }

    impl HasObjective for Step {
        fn objective(&self) -> f64 {
            self.objective
        }
    }

    #[test]
    fn reports_on_interval() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt().with_test_writer().finish(),
        );
        let mut log = ProgressLog::every(3);

        let reported: Vec<usize> = (0..10)
            .filter(|&iteration| {
                log.record(&Step {
                    iteration,
                    objective: 1.0,
                })
            })
            .collect();

        assert_eq!(reported, vec![0, 3, 6, 9]);
    }

    #[test]
    fn zero_interval_reports_every_step() {
        let mut log = ProgressLog::every(0);

        assert!((0..5).all(|iteration| log.record(&Step {
            iteration,
            objective: 0.0,
        })));
    }

    #[test]
    fn never_stops_the_swarm() {
        let mut log = ProgressLog::default();
        let action: Option<pso_solvers::swarm::Action> = log.observe(&Step {
            iteration: 0,
            objective: 2.0,
        });

        assert_eq!(action, None);
    }
}

use pso_core::{Objective, Observer};
use rand::Rng;
use tracing::debug;

use super::{Action, Error, Event, Solution, Status, Swarm};

/// Steps the swarm up to `max_iterations` times, emitting one event per step.
pub(super) fn drive<F, R, Obs>(
    swarm: &mut Swarm<F, R>,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    R: Rng,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let max_iterations = swarm.max_iterations();

    for iteration in 0..max_iterations {
        let previous_best = swarm.global_best_fitness();
        swarm.run(iteration)?;

        let improved = swarm.global_best_fitness() < previous_best;
        let event = Event::new(iteration, improved, swarm);

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iteration, "observer stopped the swarm");
            return Ok(solution(swarm, Status::StoppedByObserver, iteration + 1));
        }
    }

    Ok(solution(swarm, Status::MaxIters, max_iterations))
}

fn solution<F, R>(swarm: &Swarm<F, R>, status: Status, iters: usize) -> Solution
where
    F: Objective,
    R: Rng,
{
    Solution {
        status,
        position: swarm.global_best_position().map(<[f64]>::to_vec),
        fitness: swarm.global_best_fitness(),
        iters,
    }
}

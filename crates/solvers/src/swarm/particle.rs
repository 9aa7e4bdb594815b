/// A single candidate solution in the swarm.
///
/// All three vectors have the swarm's dimension for the particle's whole
/// lifetime. Particles are read-only outside this crate; the swarm mutates them
/// in place each step.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(super) position: Vec<f64>,
    pub(super) velocity: Vec<f64>,
    pub(super) best_position: Vec<f64>,
    pub(super) best_fitness: f64,
}

impl Particle {
    /// Creates a particle at the origin with zero velocity and no recorded best.
    ///
    /// `best_fitness` starts at `+∞` so the first finite evaluation always
    /// becomes the personal best.
    #[must_use]
    pub fn new(dimensions: usize) -> Self {
        Self {
            position: vec![0.0; dimensions],
            velocity: vec![0.0; dimensions],
            best_position: vec![0.0; dimensions],
            best_fitness: f64::INFINITY,
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Per-dimension step applied on the next move.
    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Lowest-fitness position this particle has visited.
    #[must_use]
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Fitness at [`best_position`](Self::best_position).
    #[must_use]
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.position.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_is_zeroed_with_infinite_best() {
        let particle = Particle::new(3);

        assert_eq!(particle.dimension(), 3);
        assert_eq!(particle.position(), &[0.0; 3]);
        assert_eq!(particle.velocity(), &[0.0; 3]);
        assert_eq!(particle.best_position(), &[0.0; 3]);
        assert!(particle.best_fitness().is_infinite() && particle.best_fitness() > 0.0);
    }
}

use std::convert::Infallible;

/// A fitness function to be minimized over a continuous search space.
///
/// An objective maps a position (one coordinate per dimension) to a scalar
/// fitness; lower is better. Objectives should be pure: the solver may call
/// `evaluate` any number of times and in any order.
///
/// Closures of the form `Fn(&[f64]) -> f64` implement this trait with
/// [`Infallible`] as their error type. Implement the trait directly when the
/// objective can fail or expects a fixed number of dimensions.
///
/// # NaN and infinite fitness
///
/// Fitness values are compared with `<`. A NaN fitness compares false to
/// everything and is never recorded as a best; an infinite fitness is never
/// better than the initial `+∞`. Solvers do not sanitize either case.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the fitness at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the fitness cannot be computed.
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;

    /// Returns the number of dimensions this objective expects, if fixed.
    ///
    /// Solvers use this to reject a mismatched configuration up front.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn fitness_of<O: Objective>(objective: &O, x: &[f64]) -> f64 {
        objective.evaluate(x).unwrap()
    }

    #[test]
    fn closures_are_objectives() {
        let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();

        assert_relative_eq!(fitness_of(&sphere, &[1.0, 2.0]), 5.0);
        assert_eq!(sphere.dimension(), None);
    }

    #[test]
    fn function_items_are_objectives() {
        fn first(x: &[f64]) -> f64 {
            x[0]
        }

        assert_relative_eq!(fitness_of(&first, &[-3.5, 1.0]), -3.5);
    }
}

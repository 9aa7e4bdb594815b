/// Indicates why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran the configured number of iterations.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of driving a swarm.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final driver status.
    pub status: Status,

    /// Best position found.
    ///
    /// `None` if no fitness was ever recorded, which happens when no steps ran
    /// or every evaluation returned NaN.
    pub position: Option<Vec<f64>>,

    /// Fitness at `position`, or `+∞` if none was recorded.
    pub fitness: f64,

    /// Number of steps completed by the driver.
    pub iters: usize,
}

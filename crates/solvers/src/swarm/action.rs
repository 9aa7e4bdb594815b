/// Actions an observer can take while the swarm is being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the best solution found so far.
    StopEarly,
}

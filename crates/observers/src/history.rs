use pso_core::Observer;

use crate::traits::HasObjective;

/// Records the best objective after every step.
///
/// Pass `&mut FitnessHistory` as the observer to keep access to the data
/// afterwards, or call [`record`](Self::record) from inside a closure when
/// combining it with other observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessHistory {
    values: Vec<f64>,
}

impl FitnessHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the event's objective.
    pub fn record<E: HasObjective>(&mut self, event: &E) {
        self.values.push(event.objective());
    }

    /// Recorded objectives, one per observed step.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The most recently recorded objective.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the ratio of the first recorded objective to the last.
    ///
    /// A value of `10` means the best objective fell by an order of magnitude.
    /// Returns `None` with fewer than two records.
    #[must_use]
    pub fn improvement_ratio(&self) -> Option<f64> {
        match self.values.as_slice() {
            [first, .., last] => Some(first / last),
            _ => None,
        }
    }
}

impl<E: HasObjective, A> Observer<E, A> for FitnessHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut FitnessHistory` to be passed to drivers that take an observer
/// by value, so the history can be read after the run completes.
impl<E: HasObjective, A> Observer<E, A> for &mut FitnessHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

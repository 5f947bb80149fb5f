use uom::ConstZero;

use crate::support::{thermo::State, units::SpecificEnergy};

/// Mutable bookkeeping for one full cycle evaluation.
///
/// Holds the running energy balance and the predecessor state of every leg
/// evaluated so far. A context belongs to exactly one evaluation: create a
/// fresh one (or [`reset`](Self::reset) it) before visiting leg `1→2`.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    accumulated: SpecificEnergy,
    history: Vec<State>,
}

impl EvaluationContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accumulated: SpecificEnergy::ZERO,
            history: Vec::with_capacity(4),
        }
    }

    /// Zeroes the accumulator and clears the state history.
    pub fn reset(&mut self) {
        self.accumulated = SpecificEnergy::ZERO;
        self.history.clear();
    }

    /// Net heat and work booked by the legs evaluated so far.
    #[must_use]
    pub fn accumulated(&self) -> SpecificEnergy {
        self.accumulated
    }

    /// Predecessor states in visiting order; `history()[0]` is state 1.
    #[must_use]
    pub fn history(&self) -> &[State] {
        &self.history
    }

    pub(crate) fn record(&mut self, state: State) {
        self.history.push(state);
    }

    pub(crate) fn book(&mut self, energy: SpecificEnergy) {
        self.accumulated += energy;
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}

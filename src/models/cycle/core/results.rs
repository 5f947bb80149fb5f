use uom::{ConstZero, si::f64::Ratio};

use crate::support::{
    thermo::{PropertyError, State},
    units::{SpecificEnergy, SpecificEnthalpy, SpecificEntropy},
};

use super::{Cycle, process::ProcessKind};

/// One corner of a cycle.
///
/// `enthalpy` and `entropy` are changes relative to the preceding corner.
/// `entropy` is `None` when it could not be evaluated; the accompanying
/// [`Diagnostic::UndefinedEntropy`] says why.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub state: State,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: Option<SpecificEntropy>,
}

impl StatePoint {
    /// The supplied state 1, which is the enthalpy and entropy reference.
    #[must_use]
    pub fn initial(state: State) -> Self {
        Self {
            state,
            enthalpy: SpecificEnthalpy::ZERO,
            entropy: Some(SpecificEntropy::ZERO),
        }
    }
}

/// Energy exchanged over one leg, per unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub kind: ProcessKind,
    pub title: &'static str,
    pub heat: SpecificEnergy,
    pub work: SpecificEnergy,
    pub internal_energy: SpecificEnergy,

    /// This leg's contribution to the cycle energy balance.
    pub booked: SpecificEnergy,
}

/// A recoverable problem noticed while evaluating a cycle.
///
/// The affected output is marked as missing; every other output stays valid.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The entropy change over a leg could not be evaluated.
    UndefinedEntropy {
        /// Leg number, `1..=4`.
        leg: usize,
        source: PropertyError,
    },

    /// The booked energy does not sum to zero around the loop.
    Unbalanced { residual: SpecificEnergy },
}

/// The result of evaluating one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub cycle: Cycle,

    /// States 1 through 4. State 1 is reported as supplied.
    pub states: [StatePoint; 4],

    /// The state the fourth leg returns to.
    ///
    /// For a balanced cycle this coincides with state 1.
    pub closure: StatePoint,

    /// Legs `1→2`, `2→3`, `3→4` and `4→1`.
    pub legs: [Leg; 4],

    pub efficiency: Ratio,
    pub diagnostics: Vec<Diagnostic>,
}

impl Solution {
    /// Sum of the energy booked by all four legs.
    ///
    /// Zero, to floating-point precision, for every closed cycle.
    #[must_use]
    pub fn residual(&self) -> SpecificEnergy {
        self.legs
            .iter()
            .fold(SpecificEnergy::ZERO, |sum, leg| sum + leg.booked)
    }
}

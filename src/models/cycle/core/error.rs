use thiserror::Error;

use crate::support::thermo::PropertyError;

use super::{CycleKind, InputError};

/// Errors raised while applying a single transformation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// A leg refers to a predecessor state that was never recorded.
    #[error("no state recorded at history index {index}")]
    MissingHistory { index: usize },

    /// An entropy change required by the leg could not be evaluated.
    #[error("entropy change is not defined")]
    Entropy(#[from] PropertyError),

    /// A division by zero or an invalid power produced a non-finite result.
    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },
}

/// Errors raised while evaluating a full cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CycleError {
    /// The cycle inputs are invalid.
    #[error(transparent)]
    Input(#[from] InputError),

    /// One of the four legs failed.
    #[error("leg {leg} ({title}) failed")]
    Leg {
        /// Leg number, `1..=4`.
        leg: usize,
        title: &'static str,
        source: ProcessError,
    },

    /// The closed-form efficiency is not a finite number.
    #[error("{cycle} efficiency is not finite (got {value})")]
    Efficiency { cycle: CycleKind, value: f64 },
}

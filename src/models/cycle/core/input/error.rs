use thiserror::Error;

use crate::support::{
    constraint::ConstraintError,
    thermo::{fluid::UnknownPreset, model::perfect_gas::PerfectGasParametersError},
};

/// A required input is missing or unusable.
///
/// These are raised before an evaluation starts and are always recoverable:
/// fix the field and evaluate again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A required field was left empty.
    #[error("please fill in {field}")]
    Missing { field: String },

    /// A field does not hold a number.
    #[error("{field} must be numerical (use . instead of ,), got {text:?}")]
    NotNumeric { field: String, text: String },

    /// A field holds a number that violates its constraint.
    #[error("invalid {field}: {source}")]
    Invalid {
        field: String,
        source: ConstraintError,
    },

    /// The cycle name matches none of the supported cycles.
    #[error("unknown cycle: {name:?}")]
    UnknownCycle { name: String },

    /// The working gas name matches no preset.
    #[error(transparent)]
    UnknownMedium(#[from] UnknownPreset),

    /// Custom working gas constants are non-physical.
    #[error("invalid working gas")]
    Medium(#[from] PerfectGasParametersError),
}

impl InputError {
    pub(crate) fn invalid(field: &str, source: ConstraintError) -> Self {
        Self::Invalid {
            field: field.to_owned(),
            source,
        }
    }
}

use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is undefined at the given state.
    ///
    /// For example, an entropy change across a zero absolute temperature.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input lies outside the model's valid domain.
    ///
    /// For example, the logarithm of a negative temperature ratio.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },
}

//! Values supplied by the host application, validated before any computation.
//!
//! Nothing in here touches the evaluation context: an input that fails to
//! validate leaves no partial state behind.

mod error;
mod initial_state;

pub use error::InputError;
pub use initial_state::InitialState;

use crate::support::constraint::{Constraint, NonZero};

/// Parses one numeric form field.
///
/// Surrounding whitespace is ignored. Empty text, text that is not a number
/// (including a decimal comma), and zero are all rejected.
///
/// # Errors
///
/// Returns [`InputError::Missing`], [`InputError::NotNumeric`] or
/// [`InputError::Invalid`] respectively.
///
/// # Example
///
/// ```
/// use cycle_models::models::cycle::{InputError, parse_value};
///
/// assert_eq!(parse_value("Compression Ratio", " 8 "), Ok(8.0));
/// assert!(matches!(
///     parse_value("Compression Ratio", "8,5"),
///     Err(InputError::NotNumeric { .. })
/// ));
/// ```
pub fn parse_value(field: &str, text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Missing {
            field: field.to_owned(),
        });
    }

    let value = text.parse::<f64>().map_err(|_| InputError::NotNumeric {
        field: field.to_owned(),
        text: text.to_owned(),
    })?;

    NonZero::check(&value).map_err(|source| InputError::Invalid {
        field: field.to_owned(),
        source,
    })?;

    Ok(value)
}

//! Type-level numeric constraints checked once, at construction.
//!
//! Cycle inputs carry a handful of "this must never be zero" and "this must be
//! strictly positive" rules. Rather than re-checking them at every use, a value
//! is wrapped in [`Constrained<T, C>`] when it enters the crate, and the marker
//! type `C` records which rule it already passed.
//!
//! # Provided constraints
//!
//! - [`NonZero`]: Not equal to zero (control ratios, heat inputs)
//! - [`StrictlyPositive`]: Greater than zero (state 1, medium constants)
//!
//! Both reject `NaN`.
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for a zero-sized marker type to add a new rule.

mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A numeric rule that a value can be checked against.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use cycle_models::support::constraint::{Constrained, NonZero};
///
/// let z = Constrained::<_, NonZero>::new(8.0).unwrap();
/// assert_eq!(z.into_inner(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

//! Supporting utilities used by models.
//!
//! Everything here is public because it is useful alongside the models, but
//! the APIs are not stable.

pub mod constraint;
pub mod thermo;
pub mod units;

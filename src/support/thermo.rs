//! Working-medium modeling for ideal-gas cycles.
//!
//! The cycle engine only ever needs a calorically perfect gas: constant `cp`,
//! `cv` and `k`, with the ideal gas law tying `T`, `p` and `v` together.

mod error;
mod state;

pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;

//! # Cycle Models
//!
//! State-propagation models for closed four-leg ideal gas power cycles
//! (Otto, Diesel, Stirling and Joule/Brayton), built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and their cycle engine.
//! - [`support`]: Constraints, units and perfect gas thermodynamics used by the models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Code specific to one model starts in that model's internal `core` module
//! and only moves to [`support`] once it is useful elsewhere.

pub mod models;
pub mod support;

//! Extensions to [`uom`].
//!
//! Every physical value that crosses the public API is a [`uom`] quantity.
//! This module adds the specific-energy aliases that [`uom`] does not name
//! (enthalpy, entropy, heat, work) and a helper for absolute-temperature
//! differences.
//!
//! ## Temperature differences
//!
//! Subtracting two [`ThermodynamicTemperature`] values is not allowed by [`uom`].
//! [`TemperatureDifference::minus`] returns the [`TemperatureInterval`] instead:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use cycle_models::support::units::TemperatureDifference;
//!
//! let t2 = ThermodynamicTemperature::new::<kelvin>(689.2);
//! let t1 = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let delta_t = t2.minus(t1);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod quantities;
mod temperature_difference;

pub use quantities::{
    SpecificEnergy, SpecificEnthalpy, SpecificEntropy, SpecificGasConstant,
    SpecificInternalEnergy,
};
pub use temperature_difference::TemperatureDifference;

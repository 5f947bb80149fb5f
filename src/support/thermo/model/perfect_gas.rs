//! Calorically perfect gas model.
//!
//! `PerfectGas` is the working medium of every cycle in this crate: an ideal
//! gas with constant heat capacities.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p·v = R·T` with `R = cp − cv`
//! - Calorically perfect: `cp`, `cv` and `k` do not vary with temperature
//!
//! # Heat capacity ratio
//!
//! The ratio `k` is carried as its own parameter rather than derived from
//! `cp / cv`. Tabulated presets round it (air: `1005 / 718 = 1.3997`, `k = 1.4`),
//! and the isentropic relations use `k` as given.

use thiserror::Error;
use uom::si::{
    f64::{Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::PropertyError,
    units::{SpecificEntropy, SpecificGasConstant},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerfectGasParametersError {
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid cv: {cv:?}")]
    Cv { cv: SpecificHeatCapacity },
    #[error("invalid heat capacity ratio k: {k}")]
    HeatCapacityRatio { k: f64 },
    #[error("non-physical heat capacities: R = cp - cv must be > 0; cp={cp:?}, cv={cv:?}")]
    NonPhysicalGasConstant {
        cp: SpecificHeatCapacity,
        cv: SpecificHeatCapacity,
    },
}

/// Constant parameters for the [`PerfectGas`] model.
///
/// These values are typically provided by a fluid's [`PerfectGasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub cp: SpecificHeatCapacity,
    pub cv: SpecificHeatCapacity,
    pub k: f64,
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas model (constant `cp`, `cv`, `k`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    cp: SpecificHeatCapacity,
    cv: SpecificHeatCapacity,
    k: f64,
}

impl PerfectGas {
    /// Creates a perfect gas model from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if `cp`, `cv` or `k` is not
    /// strictly positive, or if `cp ≤ cv`.
    pub fn new(parameters: PerfectGasParameters) -> Result<Self, PerfectGasParametersError> {
        let PerfectGasParameters { cp, cv, k } = parameters;

        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::Cp { cp });
        }

        if StrictlyPositive::check(&cv.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::Cv { cv });
        }

        if StrictlyPositive::check(&k).is_err() || !k.is_finite() {
            return Err(PerfectGasParametersError::HeatCapacityRatio { k });
        }

        let gas_constant = cp - cv;
        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::NonPhysicalGasConstant { cp, cv });
        }

        Ok(Self { cp, cv, k })
    }

    /// Creates a perfect gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if the fluid's constants are non-physical.
    pub fn from_fluid<Fluid: PerfectGasFluid>() -> Result<Self, PerfectGasParametersError> {
        Self::new(Fluid::parameters())
    }

    /// Creates a model without checking the constants.
    ///
    /// Evaluating a cycle with a zero `cv` or `cp` is then allowed to proceed,
    /// and surfaces as a non-finite result instead of a parameter error.
    #[must_use]
    pub fn new_unchecked(parameters: PerfectGasParameters) -> Self {
        let PerfectGasParameters { cp, cv, k } = parameters;
        Self { cp, cv, k }
    }

    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    #[must_use]
    pub fn cv(&self) -> SpecificHeatCapacity {
        self.cv
    }

    /// Heat capacity ratio `k`.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Specific gas constant `R = cp − cv`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.cp - self.cv
    }

    /// Entropy change at constant volume, `cv·ln(T₂⁄T₁)`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either temperature is non-positive.
    pub fn entropy_change_isochoric(
        &self,
        from: ThermodynamicTemperature,
        to: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        Ok(self.cv * log_ratio("temperature", (to / from).get::<ratio>())?)
    }

    /// Entropy change at constant pressure, `cp·ln(T₂⁄T₁)`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either temperature is non-positive.
    pub fn entropy_change_isobaric(
        &self,
        from: ThermodynamicTemperature,
        to: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        Ok(self.cp * log_ratio("temperature", (to / from).get::<ratio>())?)
    }

    /// Entropy change reported for an isothermal leg, `cv·ln(p₂⁄p₁) + cp·ln(v₂⁄v₁)`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if a pressure or volume ratio is non-positive.
    pub fn entropy_change_isothermal(
        &self,
        (p1, v1): (Pressure, SpecificVolume),
        (p2, v2): (Pressure, SpecificVolume),
    ) -> Result<SpecificEntropy, PropertyError> {
        let ln_p = log_ratio("pressure", (p2 / p1).get::<ratio>())?;
        let ln_v = log_ratio("volume", (v2 / v1).get::<ratio>())?;
        Ok(self.cv * ln_p + self.cp * ln_v)
    }
}

/// Natural log of a state ratio, rejecting ratios outside `(0, ∞)`.
fn log_ratio(what: &str, value: f64) -> Result<f64, PropertyError> {
    if !value.is_finite() {
        return Err(PropertyError::Undefined {
            context: format!("{what} ratio is {value}"),
        });
    }
    if value <= 0.0 {
        return Err(PropertyError::OutOfDomain {
            context: format!("ln of non-positive {what} ratio {value}"),
        });
    }
    Ok(value.ln())
}

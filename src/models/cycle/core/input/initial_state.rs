use uom::si::{
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::bar,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        State,
        model::{PerfectGas, ideal_gas_eos},
    },
};

use super::InputError;

/// State 1 of a cycle: the only corner that is supplied rather than derived.
///
/// Temperature, pressure and specific volume are each guaranteed to be
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    state: State,
}

impl InitialState {
    /// Validates a fully specified state 1.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] naming the first field that is zero,
    /// negative, or not a number.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        volume: SpecificVolume,
    ) -> Result<Self, InputError> {
        StrictlyPositive::check(&temperature.get::<kelvin>())
            .map_err(|source| InputError::invalid("T1", source))?;
        StrictlyPositive::check(&pressure.get::<bar>())
            .map_err(|source| InputError::invalid("p1", source))?;
        StrictlyPositive::check(&volume.get::<cubic_meter_per_kilogram>())
            .map_err(|source| InputError::invalid("v1", source))?;

        Ok(Self {
            state: State::new(temperature, pressure, volume),
        })
    }

    /// Builds state 1 from temperature and pressure, taking `v` from the ideal gas law.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if the temperature or pressure is not
    /// strictly positive.
    pub fn from_temperature_pressure(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas: &PerfectGas,
    ) -> Result<Self, InputError> {
        let volume = ideal_gas_eos::volume(temperature, pressure, gas.gas_constant());
        Self::new(temperature, pressure, volume)
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }
}

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

/// The `(T, p, v)` triple that fixes the state of a unit mass of gas.
///
/// Each corner of a cycle is one of these, and the evaluation history is a
/// log of them. Enthalpy and entropy are not stored here: in a cycle they are
/// reported per leg, relative to the preceding corner.
///
/// # Example
///
/// ```
/// use cycle_models::support::thermo::State;
/// use uom::si::{
///     f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
///     pressure::bar,
///     specific_volume::cubic_meter_per_kilogram,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
///     pressure: Pressure::new::<bar>(1.0),
///     volume: SpecificVolume::new::<cubic_meter_per_kilogram>(0.861),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub volume: SpecificVolume,
}

impl State {
    /// Creates a new state from temperature, pressure, and specific volume.
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        volume: SpecificVolume,
    ) -> Self {
        Self {
            temperature,
            pressure,
            volume,
        }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given pressure, keeping other fields unchanged.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    /// Returns a new state with the given specific volume, keeping other fields unchanged.
    #[must_use]
    pub fn with_volume(self, volume: SpecificVolume) -> Self {
        Self { volume, ..self }
    }

    /// Returns `true` if every field is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.temperature.value.is_finite()
            && self.pressure.value.is_finite()
            && self.volume.value.is_finite()
    }
}

//! Shared fixtures for cycle tests.

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::bar,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{fluid::Air, model::PerfectGas},
    units::SpecificEnergy,
};

use super::InitialState;

pub(crate) fn air() -> PerfectGas {
    PerfectGas::from_fluid::<Air>().expect("air constants must be physically valid")
}

/// Air at 300 K, 1 bar and 0.861 m³/kg.
pub(crate) fn otto_initial() -> InitialState {
    InitialState::new(
        ThermodynamicTemperature::new::<kelvin>(300.0),
        Pressure::new::<bar>(1.0),
        SpecificVolume::new::<cubic_meter_per_kilogram>(0.861),
    )
    .expect("reference state must be valid")
}

pub(crate) fn kj(value: f64) -> SpecificEnergy {
    SpecificEnergy::new::<kilojoule_per_kilogram>(value)
}

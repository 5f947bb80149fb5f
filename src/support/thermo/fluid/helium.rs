use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for helium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Helium;

impl PerfectGasFluid for Helium {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(5193.0),
            cv: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3116.0),
            k: 1.66,
        }
    }
}

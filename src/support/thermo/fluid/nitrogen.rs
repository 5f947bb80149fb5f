use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for nitrogen (N₂).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nitrogen;

impl PerfectGasFluid for Nitrogen {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1040.0),
            cv: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(743.0),
            k: 1.4,
        }
    }
}

use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl PerfectGasFluid for Air {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            cv: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(718.0),
            k: 1.4,
        }
    }
}

use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for hydrogen (H₂).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hydrogen;

impl PerfectGasFluid for Hydrogen {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(14304.0),
            cv: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(10153.0),
            k: 1.41,
        }
    }
}

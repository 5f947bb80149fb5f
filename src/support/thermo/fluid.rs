//! Working-gas presets.
//!
//! Each preset is a marker type implementing [`PerfectGasFluid`], so a model can
//! be built with `PerfectGas::from_fluid::<Air>()`. When the gas is picked at
//! runtime (for example from a list of names), use [`Preset`] instead.
//!
//! A custom gas needs no marker type: build [`PerfectGasParameters`] directly.

mod air;
mod helium;
mod hydrogen;
mod nitrogen;

use std::{fmt, str::FromStr};

pub use air::Air;
pub use helium::Helium;
pub use hydrogen::Hydrogen;
pub use nitrogen::Nitrogen;

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// A working gas selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Air,
    Hydrogen,
    Nitrogen,
    Helium,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 4] = [Self::Air, Self::Hydrogen, Self::Nitrogen, Self::Helium];

    /// Returns the tabulated constants for this gas.
    #[must_use]
    pub fn parameters(self) -> PerfectGasParameters {
        match self {
            Self::Air => Air::parameters(),
            Self::Hydrogen => Hydrogen::parameters(),
            Self::Nitrogen => Nitrogen::parameters(),
            Self::Helium => Helium::parameters(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Air => "Air",
            Self::Hydrogen => "Hydrogen",
            Self::Nitrogen => "Nitrogen",
            Self::Helium => "Helium",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name matches no [`Preset`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown working gas: {name:?}")]
pub struct UnknownPreset {
    pub name: String,
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownPreset {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

    #[test]
    fn parse_names() {
        assert_eq!("Air".parse::<Preset>(), Ok(Preset::Air));
        assert_eq!(" helium ".parse::<Preset>(), Ok(Preset::Helium));
        assert_eq!(
            "Argon".parse::<Preset>(),
            Err(UnknownPreset {
                name: "Argon".into()
            })
        );
    }

    #[test]
    fn tabulated_constants() {
        let hydrogen = Preset::Hydrogen.parameters();
        assert_relative_eq!(hydrogen.cp.get::<joule_per_kilogram_kelvin>(), 14304.0);
        assert_relative_eq!(hydrogen.cv.get::<joule_per_kilogram_kelvin>(), 10153.0);
        assert_relative_eq!(hydrogen.k, 1.41);

        let helium = Preset::Helium.parameters();
        assert_relative_eq!(helium.k, 1.66);
    }

    #[test]
    fn every_preset_is_physical() {
        for preset in Preset::ALL {
            let parameters = preset.parameters();
            assert!(parameters.cp > parameters.cv, "{preset}: cp must exceed cv");
        }
    }
}

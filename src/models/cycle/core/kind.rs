//! The four supported cycles and their per-cycle control parameters.

use std::{fmt, str::FromStr};

use uom::{ConstZero, si::available_energy::kilojoule_per_kilogram};

use crate::support::{
    constraint::{Constrained, NonZero},
    units::SpecificEnergy,
};

use super::{
    InputError,
    process::{HeatFlow, IsentropicRatio, IsobaricHeat, Step, Stroke},
};

/// A cycle type, without its control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleKind {
    Otto,
    Diesel,
    Stirling,
    Joule,
}

impl CycleKind {
    pub const ALL: [CycleKind; 4] = [Self::Otto, Self::Diesel, Self::Stirling, Self::Joule];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Otto => "Otto",
            Self::Diesel => "Diesel",
            Self::Stirling => "Stirling",
            Self::Joule => "Joule",
        }
    }

    /// Label of the ratio field (`z`) for this cycle.
    #[must_use]
    pub fn ratio_label(self) -> &'static str {
        match self {
            Self::Otto | Self::Diesel | Self::Stirling => "Compression Ratio [v1/v2]",
            Self::Joule => "Pressure Ratio [p2/p1]",
        }
    }

    /// Label of the second control field (`phi`) for this cycle.
    #[must_use]
    pub fn control_label(self) -> &'static str {
        match self {
            Self::Otto | Self::Stirling | Self::Joule => "Heat Transfer [kJ/kg]",
            Self::Diesel => "Injection Ratio [T3/T2]",
        }
    }
}

impl fmt::Display for CycleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CycleKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InputError::UnknownCycle {
                name: name.to_owned(),
            })
    }
}

/// A cycle together with its validated control parameters.
///
/// The meaning of the two controls depends on the cycle, so each variant
/// names them explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cycle {
    /// Isentropic compression, isochoric heat input, isentropic expansion,
    /// isochoric heat output.
    Otto {
        compression_ratio: Constrained<f64, NonZero>,
        heat: Constrained<SpecificEnergy, NonZero>,
    },
    /// Isentropic compression, isobaric heat input at a given injection
    /// (cut-off) ratio `T3/T2`, isentropic expansion, isochoric heat output.
    Diesel {
        compression_ratio: Constrained<f64, NonZero>,
        injection_ratio: Constrained<f64, NonZero>,
    },
    /// Isothermal compression, isochoric heat input, isothermal expansion,
    /// isochoric heat output.
    Stirling {
        compression_ratio: Constrained<f64, NonZero>,
        heat: Constrained<SpecificEnergy, NonZero>,
    },
    /// Isentropic compression at pressure ratio `p2/p1`, isobaric heat input,
    /// isentropic expansion, isobaric heat output.
    Joule {
        pressure_ratio: Constrained<f64, NonZero>,
        heat: Constrained<SpecificEnergy, NonZero>,
    },
}

impl Cycle {
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if either control is zero or `NaN`.
    pub fn otto(compression_ratio: f64, heat: SpecificEnergy) -> Result<Self, InputError> {
        Ok(Self::Otto {
            compression_ratio: ratio("compression ratio", compression_ratio)?,
            heat: heat_input(heat)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if either control is zero or `NaN`.
    pub fn diesel(compression_ratio: f64, injection_ratio: f64) -> Result<Self, InputError> {
        Ok(Self::Diesel {
            compression_ratio: ratio("compression ratio", compression_ratio)?,
            injection_ratio: ratio("injection ratio", injection_ratio)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if either control is zero or `NaN`.
    pub fn stirling(compression_ratio: f64, heat: SpecificEnergy) -> Result<Self, InputError> {
        Ok(Self::Stirling {
            compression_ratio: ratio("compression ratio", compression_ratio)?,
            heat: heat_input(heat)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if either control is zero or `NaN`.
    pub fn joule(pressure_ratio: f64, heat: SpecificEnergy) -> Result<Self, InputError> {
        Ok(Self::Joule {
            pressure_ratio: ratio("pressure ratio", pressure_ratio)?,
            heat: heat_input(heat)?,
        })
    }

    /// Builds a cycle from the two raw control fields of a form.
    ///
    /// `phi` is read as heat in kJ/kg, except for Diesel where it is the
    /// injection ratio `T3/T2`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if either control is zero or `NaN`.
    pub fn from_controls(kind: CycleKind, z: f64, phi: f64) -> Result<Self, InputError> {
        let heat = SpecificEnergy::new::<kilojoule_per_kilogram>(phi);
        match kind {
            CycleKind::Otto => Self::otto(z, heat),
            CycleKind::Diesel => Self::diesel(z, phi),
            CycleKind::Stirling => Self::stirling(z, heat),
            CycleKind::Joule => Self::joule(z, heat),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CycleKind {
        match self {
            Self::Otto { .. } => CycleKind::Otto,
            Self::Diesel { .. } => CycleKind::Diesel,
            Self::Stirling { .. } => CycleKind::Stirling,
            Self::Joule { .. } => CycleKind::Joule,
        }
    }

    /// The primary ratio `z`: compression ratio, or pressure ratio for Joule.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Otto {
                compression_ratio, ..
            }
            | Self::Diesel {
                compression_ratio, ..
            }
            | Self::Stirling {
                compression_ratio, ..
            } => *compression_ratio.as_ref(),
            Self::Joule { pressure_ratio, .. } => *pressure_ratio.as_ref(),
        }
    }

    /// Returns the same cycle with a different primary ratio `z`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] if `z` is zero or `NaN`.
    pub fn with_ratio(self, z: f64) -> Result<Self, InputError> {
        let z = match self.kind() {
            CycleKind::Joule => ratio("pressure ratio", z)?,
            _ => ratio("compression ratio", z)?,
        };
        Ok(match self {
            Self::Otto { heat, .. } => Self::Otto {
                compression_ratio: z,
                heat,
            },
            Self::Diesel {
                injection_ratio, ..
            } => Self::Diesel {
                compression_ratio: z,
                injection_ratio,
            },
            Self::Stirling { heat, .. } => Self::Stirling {
                compression_ratio: z,
                heat,
            },
            Self::Joule { heat, .. } => Self::Joule {
                pressure_ratio: z,
                heat,
            },
        })
    }

    /// The four legs of this cycle, in order `1→2`, `2→3`, `3→4`, `4→1`.
    #[must_use]
    pub fn steps(&self) -> [Step; 4] {
        match *self {
            Self::Otto {
                compression_ratio,
                heat,
            } => {
                let z = compression_ratio.into_inner();
                let q = heat.into_inner();
                [
                    Step::Isentropic {
                        stroke: Stroke::Compression,
                        ratio: IsentropicRatio::Volume(z),
                    },
                    Step::Isochoric {
                        flow: HeatFlow::Input,
                        heat: q,
                    },
                    Step::Isentropic {
                        stroke: Stroke::Expansion,
                        ratio: IsentropicRatio::Volume(z),
                    },
                    Step::Isochoric {
                        flow: HeatFlow::Output,
                        heat: q,
                    },
                ]
            }
            Self::Diesel {
                compression_ratio,
                injection_ratio,
            } => {
                let z = compression_ratio.into_inner();
                [
                    Step::Isentropic {
                        stroke: Stroke::Compression,
                        ratio: IsentropicRatio::Volume(z),
                    },
                    Step::Isobaric(IsobaricHeat::InjectionRatio(injection_ratio.into_inner())),
                    // Expansion ends at state 2's volume scaled back up by z.
                    Step::Isentropic {
                        stroke: Stroke::Expansion,
                        ratio: IsentropicRatio::FromHistory { index: 1, ratio: z },
                    },
                    // Closing leg: the heat rejected is set by the energy balance.
                    Step::Isochoric {
                        flow: HeatFlow::Output,
                        heat: SpecificEnergy::ZERO,
                    },
                ]
            }
            Self::Stirling {
                compression_ratio,
                heat,
            } => {
                let z = compression_ratio.into_inner();
                let q = heat.into_inner();
                [
                    Step::Isothermal {
                        stroke: Stroke::Compression,
                        ratio: z,
                    },
                    Step::Isochoric {
                        flow: HeatFlow::Input,
                        heat: q,
                    },
                    Step::Isothermal {
                        stroke: Stroke::Expansion,
                        ratio: z,
                    },
                    Step::Isochoric {
                        flow: HeatFlow::Output,
                        heat: q,
                    },
                ]
            }
            Self::Joule {
                pressure_ratio,
                heat,
            } => {
                let z = pressure_ratio.into_inner();
                let q = heat.into_inner();
                [
                    Step::Isentropic {
                        stroke: Stroke::Compression,
                        ratio: IsentropicRatio::Pressure(z),
                    },
                    Step::Isobaric(IsobaricHeat::Input(q)),
                    Step::Isentropic {
                        stroke: Stroke::Expansion,
                        ratio: IsentropicRatio::Pressure(z),
                    },
                    Step::Isobaric(IsobaricHeat::Output(q)),
                ]
            }
        }
    }
}

fn ratio(field: &str, value: f64) -> Result<Constrained<f64, NonZero>, InputError> {
    NonZero::new(value).map_err(|source| InputError::invalid(field, source))
}

fn heat_input(value: SpecificEnergy) -> Result<Constrained<SpecificEnergy, NonZero>, InputError> {
    NonZero::new(value).map_err(|source| InputError::invalid("heat transfer", source))
}

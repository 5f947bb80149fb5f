//! The four per-leg transformations and the dispatcher that selects one.
//!
//! Each transformation takes the predecessor state and returns the successor
//! state together with the heat, work and internal-energy change of the leg.
//! Every transformation first records the predecessor in the evaluation
//! history, then updates the accumulator unless it is the closing leg. The
//! closing leg instead reads the accumulator and sets its own energy so the
//! loop sums to zero.

mod isentropic;
mod isobaric;
mod isochoric;
mod isothermal;

use std::fmt;

use crate::support::{
    thermo::{PropertyError, State, model::PerfectGas},
    units::{SpecificEnergy, SpecificEnthalpy, SpecificEntropy},
};

use super::{EvaluationContext, Leg, ProcessError, StatePoint};

/// The thermodynamic path followed by a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    Isentropic,
    Isochoric,
    Isothermal,
    Isobaric,
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Isentropic => "Isentropic",
            Self::Isochoric => "Isochoric",
            Self::Isothermal => "Isothermal",
            Self::Isobaric => "Isobaric",
        })
    }
}

/// Direction of a work leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Compression,
    Expansion,
}

/// Direction of a heat leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatFlow {
    Input,
    Output,
}

/// How an isentropic leg is driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsentropicRatio {
    /// Volume ratio `z = v_large / v_small`.
    Volume(f64),

    /// Pressure ratio `z = p_high / p_low`.
    Pressure(f64),

    /// Volume ratio applied to a previously recorded state's volume rather
    /// than the predecessor's.
    ///
    /// `index` counts recorded predecessors from zero, so `1` is state 2.
    FromHistory { index: usize, ratio: f64 },
}

/// How an isobaric leg is driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsobaricHeat {
    /// Heat added to the gas.
    Input(SpecificEnergy),

    /// Temperature ratio `T_out / T_in` that fixes the heat added.
    InjectionRatio(f64),

    /// Heat removed from the gas.
    Output(SpecificEnergy),
}

impl IsobaricHeat {
    fn flow(self) -> HeatFlow {
        match self {
            Self::Input(_) | Self::InjectionRatio(_) => HeatFlow::Input,
            Self::Output(_) => HeatFlow::Output,
        }
    }
}

/// A fully parameterized leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Isentropic {
        stroke: Stroke,
        ratio: IsentropicRatio,
    },
    Isochoric {
        flow: HeatFlow,
        heat: SpecificEnergy,
    },
    Isothermal {
        stroke: Stroke,
        ratio: f64,
    },
    Isobaric(IsobaricHeat),
}

/// The outcome of applying a [`Step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub point: StatePoint,
    pub leg: Leg,

    /// Why `point.entropy` is `None`, if it is.
    pub entropy_error: Option<PropertyError>,
}

/// What a transformation computes before it is labelled as a [`Leg`].
struct Outcome {
    state: State,
    enthalpy: SpecificEnthalpy,
    entropy: Result<SpecificEntropy, PropertyError>,
    heat: SpecificEnergy,
    work: SpecificEnergy,
    internal_energy: SpecificEnergy,
    booked: SpecificEnergy,
}

impl Step {
    #[must_use]
    pub fn kind(&self) -> ProcessKind {
        match self {
            Self::Isentropic { .. } => ProcessKind::Isentropic,
            Self::Isochoric { .. } => ProcessKind::Isochoric,
            Self::Isothermal { .. } => ProcessKind::Isothermal,
            Self::Isobaric(_) => ProcessKind::Isobaric,
        }
    }

    /// Display title, e.g. `"Isochoric Heat Input"`.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match *self {
            Self::Isentropic {
                stroke: Stroke::Compression,
                ..
            } => "Isentropic Compression",
            Self::Isentropic {
                stroke: Stroke::Expansion,
                ..
            } => "Isentropic Expansion",
            Self::Isochoric {
                flow: HeatFlow::Input,
                ..
            } => "Isochoric Heat Input",
            Self::Isochoric {
                flow: HeatFlow::Output,
                ..
            } => "Isochoric Heat Output",
            Self::Isothermal {
                stroke: Stroke::Compression,
                ..
            } => "Isothermal Compression",
            Self::Isothermal {
                stroke: Stroke::Expansion,
                ..
            } => "Isothermal Expansion",
            Self::Isobaric(heat) => match heat.flow() {
                HeatFlow::Input => "Isobaric Heat Input",
                HeatFlow::Output => "Isobaric Heat Output",
            },
        }
    }

    /// Applies this leg to `from`.
    ///
    /// `closing` marks the fourth leg of a cycle, whose energy is set from the
    /// accumulator instead of being added to it.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if a required entropy change is undefined, a
    /// referenced history entry is missing, or any result is not finite.
    /// An undefined isochoric entropy is not an error: it is reported through
    /// [`Transition::entropy_error`].
    pub fn apply(
        &self,
        ctx: &mut EvaluationContext,
        from: State,
        gas: &PerfectGas,
        closing: bool,
    ) -> Result<Transition, ProcessError> {
        let outcome = match *self {
            Self::Isentropic { stroke, ratio } => {
                isentropic::apply(ctx, from, gas, stroke, ratio, closing)?
            }
            Self::Isochoric { flow, heat } => {
                isochoric::apply(ctx, from, gas, flow, heat, closing)
            }
            Self::Isothermal { stroke, ratio } => {
                isothermal::apply(ctx, from, gas, stroke, ratio, closing)?
            }
            Self::Isobaric(heat) => isobaric::apply(ctx, from, gas, heat, closing)?,
        };

        ensure_finite(&outcome)?;

        let (entropy, entropy_error) = match outcome.entropy {
            Ok(entropy) => (Some(entropy), None),
            Err(error) => (None, Some(error)),
        };

        Ok(Transition {
            point: StatePoint {
                state: outcome.state,
                enthalpy: outcome.enthalpy,
                entropy,
            },
            leg: Leg {
                kind: self.kind(),
                title: self.title(),
                heat: outcome.heat,
                work: outcome.work,
                internal_energy: outcome.internal_energy,
                booked: outcome.booked,
            },
            entropy_error,
        })
    }
}

fn ensure_finite(outcome: &Outcome) -> Result<(), ProcessError> {
    let entropy_ok = match &outcome.entropy {
        Ok(entropy) => entropy.value.is_finite(),
        Err(_) => true,
    };

    let checks = [
        ("state", outcome.state.is_finite()),
        ("enthalpy", outcome.enthalpy.value.is_finite()),
        ("entropy", entropy_ok),
        ("heat", outcome.heat.value.is_finite()),
        ("work", outcome.work.value.is_finite()),
        ("internal energy", outcome.internal_energy.value.is_finite()),
        ("booked energy", outcome.booked.value.is_finite()),
    ];

    match checks.into_iter().find(|(_, ok)| !ok) {
        Some((quantity, _)) => Err(ProcessError::NonFinite { quantity }),
        None => Ok(()),
    }
}

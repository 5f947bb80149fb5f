//! Closed four-leg gas cycle evaluation.
//!
//! A cycle is evaluated by walking its legs `1→2→3→4→1` with a fresh
//! [`EvaluationContext`]. Each non-final leg adds its energy to the context's
//! accumulator; the fourth leg is evaluated as the closing leg, which takes
//! its energy from the accumulator so the loop balances.

mod context;
mod diagram;
mod efficiency;
mod error;
mod input;
mod kind;
mod process;
mod report;
mod results;
mod target_ratio;

#[cfg(test)]
pub(super) mod test_support;

pub use context::EvaluationContext;
pub use diagram::{Curve, Diagram, SAMPLES};
pub use error::{CycleError, ProcessError};
pub use input::{InitialState, InputError, parse_value};
pub use kind::{Cycle, CycleKind};
pub use process::{
    HeatFlow, IsentropicRatio, IsobaricHeat, ProcessKind, Step, Stroke, Transition,
};
pub use report::format_value;
pub use results::{Diagnostic, Leg, Solution, StatePoint};
pub use target_ratio::{TargetRatioConfig, TargetRatioError};

pub(crate) use target_ratio::ratio_for_efficiency;

use tracing::{debug, warn};
use uom::si::{available_energy::kilojoule_per_kilogram, thermodynamic_temperature::kelvin};

use crate::support::thermo::model::PerfectGas;

/// Largest booked-energy residual, in kJ/kg, accepted as a balanced cycle.
pub const BALANCE_TOLERANCE: f64 = 1e-9;

/// Evaluates one full cycle starting from `initial`.
///
/// # Errors
///
/// Returns [`CycleError::Leg`] if a leg fails, or [`CycleError::Efficiency`]
/// if the closed-form efficiency is not finite. An undefined isochoric
/// entropy does not fail the evaluation; it is reported in
/// [`Solution::diagnostics`].
pub fn evaluate(
    initial: &InitialState,
    gas: &PerfectGas,
    cycle: &Cycle,
) -> Result<Solution, CycleError> {
    let mut ctx = EvaluationContext::new();
    let mut diagnostics = Vec::new();

    let [a, b, c, d] = cycle.steps();
    let state1 = StatePoint::initial(initial.state());

    let (state2, leg1) = run_leg(&mut ctx, &mut diagnostics, gas, 1, &a, &state1, false)?;
    let (state3, leg2) = run_leg(&mut ctx, &mut diagnostics, gas, 2, &b, &state2, false)?;
    let (state4, leg3) = run_leg(&mut ctx, &mut diagnostics, gas, 3, &c, &state3, false)?;
    let (closure, leg4) = run_leg(&mut ctx, &mut diagnostics, gas, 4, &d, &state4, true)?;

    let efficiency = efficiency::efficiency(cycle, gas.k(), &closure, &state3)?;

    let mut solution = Solution {
        cycle: *cycle,
        states: [state1, state2, state3, state4],
        closure,
        legs: [leg1, leg2, leg3, leg4],
        efficiency,
        diagnostics,
    };

    let residual = solution.residual();
    if residual.get::<kilojoule_per_kilogram>().abs() > BALANCE_TOLERANCE {
        warn!(
            cycle = %cycle.kind(),
            residual_kj_per_kg = residual.get::<kilojoule_per_kilogram>(),
            "cycle energy balance does not close"
        );
        solution.diagnostics.push(Diagnostic::Unbalanced { residual });
    }

    Ok(solution)
}

fn run_leg(
    ctx: &mut EvaluationContext,
    diagnostics: &mut Vec<Diagnostic>,
    gas: &PerfectGas,
    leg: usize,
    step: &Step,
    from: &StatePoint,
    closing: bool,
) -> Result<(StatePoint, Leg), CycleError> {
    let transition = step
        .apply(ctx, from.state, gas, closing)
        .map_err(|source| CycleError::Leg {
            leg,
            title: step.title(),
            source,
        })?;

    debug!(
        leg,
        title = step.title(),
        closing,
        temperature_k = transition.point.state.temperature.get::<kelvin>(),
        heat_kj_per_kg = transition.leg.heat.get::<kilojoule_per_kilogram>(),
        work_kj_per_kg = transition.leg.work.get::<kilojoule_per_kilogram>(),
        accumulated_kj_per_kg = ctx.accumulated().get::<kilojoule_per_kilogram>(),
        "evaluated leg"
    );

    if let Some(source) = transition.entropy_error {
        warn!(leg, title = step.title(), error = %source, "entropy change is undefined");
        diagnostics.push(Diagnostic::UndefinedEntropy { leg, source });
    }

    Ok((transition.point, transition.leg))
}


use uom::{ConstZero, si::ratio::ratio};

use crate::support::{
    thermo::{State, model::PerfectGas},
    units::{SpecificEnergy, TemperatureDifference},
};

use super::{EvaluationContext, HeatFlow, Outcome};

/// Heat addition or rejection at constant volume.
///
/// On the closing leg the heat is taken from the accumulator, replacing the
/// supplied value. An undefined entropy change does not fail the leg.
pub(super) fn apply(
    ctx: &mut EvaluationContext,
    from: State,
    gas: &PerfectGas,
    flow: HeatFlow,
    heat: SpecificEnergy,
    closing: bool,
) -> Outcome {
    ctx.record(from);

    let heat = if closing { ctx.accumulated() } else { heat };
    let heat = match flow {
        HeatFlow::Input => heat,
        HeatFlow::Output => -heat,
    };
    if !closing {
        ctx.book(heat);
    }

    let temperature = from.temperature + heat / gas.cv();
    let pressure = from.pressure * (temperature / from.temperature).get::<ratio>();
    let to = State::new(temperature, pressure, from.volume);

    let delta_t = to.temperature.minus(from.temperature);

    Outcome {
        state: to,
        enthalpy: gas.cp() * delta_t,
        entropy: gas.entropy_change_isochoric(from.temperature, to.temperature),
        heat,
        work: SpecificEnergy::ZERO,
        internal_energy: gas.cv() * delta_t,
        booked: heat,
    }
}

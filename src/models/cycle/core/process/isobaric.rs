use uom::si::ratio::ratio;

use crate::support::{
    thermo::{State, model::PerfectGas},
    units::TemperatureDifference,
};

use super::{EvaluationContext, IsobaricHeat, Outcome, ProcessError};

/// Heat addition or rejection at constant pressure.
///
/// A closing leg returns to the temperature of state 1. Its boundary work is
/// booked first, and the heat is then set to cancel the whole accumulator.
pub(super) fn apply(
    ctx: &mut EvaluationContext,
    from: State,
    gas: &PerfectGas,
    heat: IsobaricHeat,
    closing: bool,
) -> Result<Outcome, ProcessError> {
    ctx.record(from);

    let temperature = if closing {
        ctx.history()
            .first()
            .ok_or(ProcessError::MissingHistory { index: 0 })?
            .temperature
    } else {
        match heat {
            IsobaricHeat::Input(q) => from.temperature + q / gas.cp(),
            IsobaricHeat::Output(q) => from.temperature + -q / gas.cp(),
            IsobaricHeat::InjectionRatio(phi) => from.temperature * phi.abs(),
        }
    };

    let volume = from.volume * (temperature / from.temperature).get::<ratio>();
    let to = State::new(temperature, from.pressure, volume);

    let delta_t = to.temperature.minus(from.temperature);
    let entropy = gas.entropy_change_isobaric(from.temperature, to.temperature)?;

    let expansion = ((to.volume - from.volume) / to.volume).get::<ratio>();
    let work = -(gas.gas_constant() * to.temperature) * expansion;

    let heat = if closing {
        ctx.book(work);
        -ctx.accumulated()
    } else {
        let heat = gas.cp() * delta_t;
        ctx.book(heat + work);
        heat
    };

    Ok(Outcome {
        state: to,
        enthalpy: gas.cp() * delta_t,
        entropy: Ok(entropy),
        heat,
        work,
        internal_energy: gas.cv() * delta_t,
        booked: heat + work,
    })
}

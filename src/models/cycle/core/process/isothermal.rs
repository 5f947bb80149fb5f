use uom::{ConstZero, si::ratio::ratio};

use crate::support::{
    thermo::{State, model::PerfectGas},
    units::SpecificEnergy,
};

use super::{EvaluationContext, Outcome, ProcessError, Stroke};

/// Compression or expansion at constant temperature.
///
/// The internal energy of a perfect gas depends on temperature only, so it
/// does not change and the heat exchanged mirrors the work.
pub(super) fn apply(
    ctx: &mut EvaluationContext,
    from: State,
    gas: &PerfectGas,
    stroke: Stroke,
    z: f64,
    closing: bool,
) -> Result<Outcome, ProcessError> {
    ctx.record(from);

    let volume = match stroke {
        Stroke::Compression => from.volume / z,
        Stroke::Expansion => from.volume * z,
    };
    let pressure = from.pressure * (from.volume / volume).get::<ratio>();
    let to = State::new(from.temperature, pressure, volume);

    let entropy = gas.entropy_change_isothermal(
        (from.pressure, from.volume),
        (to.pressure, to.volume),
    )?;

    let (work, heat, booked) = if closing {
        let work = -ctx.accumulated();
        (work, -work, work)
    } else {
        let ln_p = (from.pressure / to.pressure).get::<ratio>().ln();
        let work = -(gas.gas_constant() * to.temperature) * ln_p;
        let heat = -work;
        ctx.book(work + heat);
        (work, heat, work + heat)
    };

    Ok(Outcome {
        state: to,
        enthalpy: SpecificEnergy::ZERO,
        entropy: Ok(entropy),
        heat,
        work,
        internal_energy: SpecificEnergy::ZERO,
        booked,
    })
}

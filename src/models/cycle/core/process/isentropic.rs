use uom::{
    ConstZero,
    si::{f64::SpecificVolume, ratio::ratio},
};

use crate::support::{
    thermo::{State, model::PerfectGas},
    units::{SpecificEnergy, SpecificEntropy, TemperatureDifference},
};

use super::{EvaluationContext, IsentropicRatio, Outcome, ProcessError, Stroke};

/// Reversible adiabatic compression or expansion, `p·vᵏ = const`.
///
/// No heat crosses the boundary, so the work equals the change in internal
/// energy.
pub(super) fn apply(
    ctx: &mut EvaluationContext,
    from: State,
    gas: &PerfectGas,
    stroke: Stroke,
    driver: IsentropicRatio,
    closing: bool,
) -> Result<Outcome, ProcessError> {
    ctx.record(from);

    let k = gas.k();

    let to = match driver {
        IsentropicRatio::Pressure(z) => {
            let z = match stroke {
                Stroke::Compression => z,
                Stroke::Expansion => 1.0 / z,
            };
            let pressure = from.pressure * z;
            let volume_ratio = (from.pressure / pressure).get::<ratio>().powf(1.0 / k);
            State::new(
                from.temperature * z.powf((k - 1.0) / k),
                pressure,
                from.volume * volume_ratio,
            )
        }
        IsentropicRatio::Volume(z) => along_volume(from, scale(from.volume, stroke, z), k),
        IsentropicRatio::FromHistory { index, ratio: z } => {
            let base = ctx
                .history()
                .get(index)
                .ok_or(ProcessError::MissingHistory { index })?
                .volume;
            along_volume(from, scale(base, stroke, z), k)
        }
    };

    let delta_t = to.temperature.minus(from.temperature);
    let enthalpy = gas.cp() * delta_t;

    let (work, internal_energy) = if closing {
        let work = -ctx.accumulated();
        (work, work)
    } else {
        let internal_energy = gas.cv() * delta_t;
        ctx.book(internal_energy);
        (internal_energy, internal_energy)
    };

    Ok(Outcome {
        state: to,
        enthalpy,
        entropy: Ok(SpecificEntropy::ZERO),
        heat: SpecificEnergy::ZERO,
        work,
        internal_energy,
        booked: work,
    })
}

/// Shrinks (compression) or grows (expansion) a volume by `z`.
fn scale(volume: SpecificVolume, stroke: Stroke, z: f64) -> SpecificVolume {
    match stroke {
        Stroke::Compression => volume / z,
        Stroke::Expansion => volume * z,
    }
}

/// The isentropic state at `volume`, starting from `from`.
fn along_volume(from: State, volume: SpecificVolume, k: f64) -> State {
    let r = (from.volume / volume).get::<ratio>();
    State::new(
        from.temperature * r.powf(k - 1.0),
        from.pressure * r.powf(k),
        volume,
    )
}

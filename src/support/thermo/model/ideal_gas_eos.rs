//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state written per unit
//! mass: `p·v = R·T`.

use uom::si::{
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    temperature_interval, thermodynamic_temperature,
};

use crate::support::units::SpecificGasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub fn pressure(
    temperature: ThermodynamicTemperature,
    volume: SpecificVolume,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    gas_constant * temperature / volume
}

/// Computes specific volume using the ideal gas equation of state.
#[must_use]
pub fn volume(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> SpecificVolume {
    gas_constant * temperature / pressure
}

/// Computes temperature using the ideal gas equation of state.
///
/// Since [`SpecificGasConstant`] is associated with a `TemperatureInterval`,
/// the result must be manually converted to an absolute temperature.
#[must_use]
pub fn temperature(
    pressure: Pressure,
    volume: SpecificVolume,
    gas_constant: SpecificGasConstant,
) -> ThermodynamicTemperature {
    let temperature = pressure * volume / gas_constant;
    ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(
        temperature.get::<temperature_interval::kelvin>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::bar, specific_heat_capacity::joule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
    };

    fn air_gas_constant() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(1005.0 - 718.0)
    }

    #[test]
    fn ambient_air_volume() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let p = Pressure::new::<bar>(1.0);

        let v = volume(t, p, air_gas_constant());

        assert_relative_eq!(v.get::<cubic_meter_per_kilogram>(), 0.861, epsilon = 1e-12);
    }

    #[test]
    fn pressure_volume_roundtrip() {
        let t = ThermodynamicTemperature::new::<kelvin>(689.2);
        let v = SpecificVolume::new::<cubic_meter_per_kilogram>(0.107_625);
        let r = air_gas_constant();

        let p = pressure(t, v, r);
        let v_2 = volume(t, p, r);

        assert_relative_eq!(
            v_2.get::<cubic_meter_per_kilogram>(),
            v.get::<cubic_meter_per_kilogram>()
        );
    }

    #[test]
    fn pressure_temperature_roundtrip() {
        let p = Pressure::new::<bar>(18.38);
        let v = SpecificVolume::new::<cubic_meter_per_kilogram>(0.107_625);
        let r = air_gas_constant();

        let t = temperature(p, v, r);
        let p_2 = pressure(t, v, r);

        assert_relative_eq!(p_2.get::<bar>(), p.get::<bar>(), max_relative = 1e-12);
    }
}

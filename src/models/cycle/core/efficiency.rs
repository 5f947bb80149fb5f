use uom::si::{
    f64::Ratio, pressure::bar, ratio::ratio, thermodynamic_temperature::kelvin,
};

use super::{Cycle, CycleError, StatePoint};

/// Closed-form thermal efficiency of an evaluated cycle.
///
/// `low` is the state the cycle returns to and `high` is state 3. Otto and
/// Diesel depend only on the controls; Stirling compares temperatures and
/// Joule compares pressures at the two states.
///
/// # Errors
///
/// Returns [`CycleError::Efficiency`] when the formula is not finite, e.g. a
/// Diesel injection ratio of exactly 1.
pub(super) fn efficiency(
    cycle: &Cycle,
    k: f64,
    low: &StatePoint,
    high: &StatePoint,
) -> Result<Ratio, CycleError> {
    let value = match *cycle {
        Cycle::Otto {
            compression_ratio, ..
        } => 1.0 - 1.0 / compression_ratio.into_inner().powf(k - 1.0),
        Cycle::Diesel {
            compression_ratio,
            injection_ratio,
        } => {
            let z = compression_ratio.into_inner();
            let phi = injection_ratio.into_inner();
            1.0 - (1.0 / (k * z.powf(k - 1.0))) * (phi.powf(k) - 1.0) / (phi - 1.0)
        }
        Cycle::Stirling { .. } => {
            1.0 - low.state.temperature.get::<kelvin>() / high.state.temperature.get::<kelvin>()
        }
        Cycle::Joule { .. } => {
            let pressures = low.state.pressure.get::<bar>() / high.state.pressure.get::<bar>();
            1.0 - pressures.powf((k - 1.0) / k)
        }
    };

    if !value.is_finite() {
        return Err(CycleError::Efficiency {
            cycle: cycle.kind(),
            value,
        });
    }

    Ok(Ratio::new::<ratio>(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, ratio::percent};

    use crate::models::cycle::core::test_support::{kj, otto_initial};

    fn point_at(t: f64) -> StatePoint {
        StatePoint::initial(
            otto_initial()
                .state()
                .with_temperature(ThermodynamicTemperature::new::<kelvin>(t)),
        )
    }

    #[test]
    fn otto() -> Result<(), CycleError> {
        let cycle = Cycle::otto(8.0, kj(800.0))?;
        let p = point_at(300.0);

        let eta = efficiency(&cycle, 1.4, &p, &p)?;
        assert_relative_eq!(eta.get::<percent>(), 56.472, epsilon = 1e-3);
        assert_relative_eq!(
            eta.get::<ratio>(),
            1.0 - 1.0 / 8.0_f64.powf(0.4),
            epsilon = 1e-12
        );

        Ok(())
    }

    #[test]
    fn otto_increases_with_compression_ratio() -> Result<(), CycleError> {
        let p = point_at(300.0);
        let mut last = f64::NEG_INFINITY;

        for z in [1.5, 2.0, 4.0, 8.0, 12.0, 20.0] {
            let cycle = Cycle::otto(z, kj(800.0))?;
            let eta = efficiency(&cycle, 1.4, &p, &p)?.get::<ratio>();
            assert!(eta > last, "efficiency must increase: z={z}");
            last = eta;
        }

        Ok(())
    }

    #[test]
    fn diesel() -> Result<(), CycleError> {
        let cycle = Cycle::diesel(18.0, 2.0)?;
        let p = point_at(300.0);

        let eta = efficiency(&cycle, 1.4, &p, &p)?.get::<ratio>();
        let expected =
            1.0 - 1.0 / (1.4 * 18.0_f64.powf(0.4)) * (2.0_f64.powf(1.4) - 1.0) / (2.0 - 1.0);
        assert_relative_eq!(eta, expected, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn diesel_unit_injection_ratio_fails() -> Result<(), CycleError> {
        let cycle = Cycle::diesel(18.0, 1.0)?;
        let p = point_at(300.0);

        let result = efficiency(&cycle, 1.4, &p, &p);
        assert!(matches!(result, Err(CycleError::Efficiency { .. })));

        Ok(())
    }

    #[test]
    fn stirling_uses_temperature_extremes() -> Result<(), CycleError> {
        let cycle = Cycle::stirling(4.0, kj(800.0))?;

        let eta = efficiency(&cycle, 1.4, &point_at(300.0), &point_at(1200.0))?;
        assert_relative_eq!(eta.get::<ratio>(), 0.75, epsilon = 1e-12);

        Ok(())
    }
}

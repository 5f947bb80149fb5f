//! Closed four-leg ideal gas power cycles.
//!
//! This module provides a [`twine_core::Model`] implementation, [`ClosedCycle`],
//! for the Otto, Diesel, Stirling and Joule (Brayton) cycles. The computational
//! core is in an internal module and re-exported here.
//!
//! # Example
//!
//! ```
//! use cycle_models::{
//!     models::cycle::{ClosedCycle, Cycle, InitialState},
//!     support::{
//!         thermo::{fluid::Air, model::PerfectGas},
//!         units::SpecificEnergy,
//!     },
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
//!     pressure::bar,
//!     ratio::percent,
//!     specific_volume::cubic_meter_per_kilogram,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gas = PerfectGas::from_fluid::<Air>()?;
//! let heat = SpecificEnergy::new::<kilojoule_per_kilogram>(800.0);
//! let otto = ClosedCycle::new(gas, Cycle::otto(8.0, heat)?);
//!
//! let initial = InitialState::new(
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//!     Pressure::new::<bar>(1.0),
//!     SpecificVolume::new::<cubic_meter_per_kilogram>(0.861),
//! )?;
//!
//! let solution = otto.call(&initial)?;
//! assert!((solution.efficiency.get::<percent>() - 56.47).abs() < 0.01);
//! # Ok(())
//! # }
//! ```

mod core;

pub use self::core::{
    BALANCE_TOLERANCE, Curve, Cycle, CycleError, CycleKind, Diagnostic, Diagram,
    EvaluationContext, HeatFlow, InitialState, InputError, IsentropicRatio, IsobaricHeat, Leg,
    ProcessError, ProcessKind, SAMPLES, Solution, StatePoint, Step, Stroke, TargetRatioConfig,
    TargetRatioError, Transition, evaluate, format_value, parse_value,
};

use twine_core::Model;
use uom::si::f64::Ratio;

use crate::support::thermo::model::PerfectGas;

/// A cycle type with its controls, evaluated on a fixed working gas.
///
/// Calling the model with a state 1 runs the four legs and returns every
/// state, leg and the cycle efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedCycle {
    gas: PerfectGas,
    cycle: Cycle,
}

impl ClosedCycle {
    #[must_use]
    pub fn new(gas: PerfectGas, cycle: Cycle) -> Self {
        Self { gas, cycle }
    }

    #[must_use]
    pub fn gas(&self) -> &PerfectGas {
        &self.gas
    }

    #[must_use]
    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Finds the primary ratio (`z`) within `bracket` that reaches `target`
    /// efficiency, keeping the other control fixed.
    ///
    /// # Errors
    ///
    /// Returns [`TargetRatioError`] if a bracket end is invalid, the target is
    /// not bracketed, or the solver fails to converge.
    pub fn ratio_for_efficiency(
        &self,
        initial: &InitialState,
        target: Ratio,
        bracket: [f64; 2],
        config: TargetRatioConfig,
    ) -> Result<Solution, TargetRatioError> {
        self::core::ratio_for_efficiency(initial, &self.gas, self.cycle, target, bracket, config)
    }
}

impl Model for ClosedCycle {
    type Input = InitialState;
    type Output = Solution;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(input, &self.gas, &self.cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        f64::SpecificHeatCapacity,
        pressure::bar,
        ratio::{percent, ratio},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::{
        fluid::{Helium, Preset},
        model::perfect_gas::PerfectGasFluid,
    };

    use super::core::test_support::{air, kj, otto_initial};

    fn all_cycles() -> Result<[Cycle; 4], InputError> {
        Ok([
            Cycle::otto(8.0, kj(800.0))?,
            Cycle::diesel(18.0, 2.0)?,
            Cycle::stirling(4.0, kj(800.0))?,
            Cycle::joule(10.0, kj(500.0))?,
        ])
    }

    #[test]
    fn otto_reference_scenario() -> Result<(), CycleError> {
        let model = ClosedCycle::new(air(), Cycle::otto(8.0, kj(800.0))?);
        let solution = model.call(&otto_initial())?;

        let t2 = solution.states[1].state.temperature.get::<kelvin>();
        assert_relative_eq!(t2, 689.2, epsilon = 0.05);

        let t3 = solution.states[2].state.temperature.get::<kelvin>();
        assert_relative_eq!(t3, t2 + 800.0 / 718.0 * 1000.0, epsilon = 1e-9);

        assert_relative_eq!(
            solution.efficiency.get::<ratio>(),
            1.0 - 1.0 / 8.0_f64.powf(0.4),
            epsilon = 1e-12
        );
        assert_relative_eq!(solution.efficiency.get::<percent>(), 56.47, epsilon = 0.005);

        assert_eq!(solution.states[0], StatePoint::initial(otto_initial().state()));
        assert!(solution.diagnostics.is_empty());

        Ok(())
    }

    #[test]
    fn every_cycle_balances_and_closes() -> Result<(), CycleError> {
        for preset in Preset::ALL {
            let gas = PerfectGas::new(preset.parameters()).map_err(InputError::from)?;

            for cycle in all_cycles()? {
                let solution = evaluate(&otto_initial(), &gas, &cycle)?;

                assert_relative_eq!(
                    solution.residual().get::<kilojoule_per_kilogram>(),
                    0.0,
                    epsilon = 1e-9
                );
                assert!(solution.diagnostics.is_empty(), "{cycle:?} on {preset}");

                // The fourth leg returns to state 1.
                assert_relative_eq!(
                    solution.closure.state.temperature.get::<kelvin>(),
                    300.0,
                    max_relative = 1e-9
                );
            }
        }

        Ok(())
    }

    #[test]
    fn templates_follow_cycle_kind() -> Result<(), CycleError> {
        let gas = air();
        let titles = |solution: &Solution| solution.legs.map(|leg| leg.title);

        let [otto, diesel, stirling, joule] = all_cycles()?;

        let solution = evaluate(&otto_initial(), &gas, &otto)?;
        assert_eq!(
            titles(&solution),
            [
                "Isentropic Compression",
                "Isochoric Heat Input",
                "Isentropic Expansion",
                "Isochoric Heat Output",
            ]
        );

        let solution = evaluate(&otto_initial(), &gas, &stirling)?;
        assert_eq!(solution.legs[0].kind, ProcessKind::Isothermal);
        assert_eq!(solution.legs[2].kind, ProcessKind::Isothermal);

        let solution = evaluate(&otto_initial(), &gas, &joule)?;
        assert_eq!(
            titles(&solution),
            [
                "Isentropic Compression",
                "Isobaric Heat Input",
                "Isentropic Expansion",
                "Isobaric Heat Output",
            ]
        );

        let solution = evaluate(&otto_initial(), &gas, &diesel)?;
        assert_eq!(solution.legs[1].kind, ProcessKind::Isobaric);

        Ok(())
    }

    #[test]
    fn diesel_injection_ratio_sets_peak_temperature() -> Result<(), CycleError> {
        let gas = air();

        for z in [12.0, 18.0, 22.0] {
            let solution = evaluate(&otto_initial(), &gas, &Cycle::diesel(z, 2.0)?)?;
            let t2 = solution.states[1].state.temperature.get::<kelvin>();
            let t3 = solution.states[2].state.temperature.get::<kelvin>();
            assert_eq!(t3, t2 * 2.0);

            // Expansion ends at state 1's volume.
            assert_relative_eq!(
                solution.states[3].state.volume.get::<cubic_meter_per_kilogram>(),
                0.861,
                max_relative = 1e-12
            );
        }

        Ok(())
    }

    #[test]
    fn diesel_unit_injection_ratio_fails() -> Result<(), InputError> {
        let result = evaluate(&otto_initial(), &air(), &Cycle::diesel(18.0, 1.0)?);
        assert!(matches!(
            result,
            Err(CycleError::Efficiency {
                cycle: CycleKind::Diesel,
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn stirling_efficiency_uses_temperature_extremes() -> Result<(), CycleError> {
        let solution = evaluate(&otto_initial(), &air(), &Cycle::stirling(4.0, kj(800.0))?)?;

        let t_max = 300.0 + 800.0 / 718.0 * 1000.0;
        assert_relative_eq!(
            solution.states[2].state.temperature.get::<kelvin>(),
            t_max,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            solution.efficiency.get::<ratio>(),
            1.0 - 300.0 / t_max,
            epsilon = 1e-9
        );

        Ok(())
    }

    #[test]
    fn joule_efficiency_uses_pressure_ratio() -> Result<(), CycleError> {
        let solution = evaluate(&otto_initial(), &air(), &Cycle::joule(10.0, kj(500.0))?)?;

        assert_relative_eq!(solution.states[1].state.pressure.get::<bar>(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(solution.states[3].state.pressure.get::<bar>(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(
            solution.efficiency.get::<ratio>(),
            1.0 - (0.1_f64).powf(0.4 / 1.4),
            epsilon = 1e-9
        );

        Ok(())
    }

    #[test]
    fn zero_cv_surfaces_as_non_finite() -> Result<(), InputError> {
        let mut parameters = Helium::parameters();
        parameters.cv = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0);
        let gas = PerfectGas::new_unchecked(parameters);

        let result = evaluate(&otto_initial(), &gas, &Cycle::otto(8.0, kj(800.0))?);
        assert!(matches!(
            result,
            Err(CycleError::Leg {
                leg: 2,
                source: ProcessError::NonFinite { .. },
                ..
            })
        ));

        Ok(())
    }

    #[test]
    fn undefined_entropy_is_reported_not_fatal() -> Result<(), CycleError> {
        // Rejecting 500 kJ/kg at constant volume from 300 K goes below absolute zero.
        let solution = evaluate(&otto_initial(), &air(), &Cycle::stirling(1.0, kj(-500.0))?)?;

        assert_eq!(solution.states[2].entropy, None);
        assert!(matches!(
            solution.diagnostics.as_slice(),
            [Diagnostic::UndefinedEntropy { leg: 2, .. }, ..]
        ));

        Ok(())
    }

    #[test]
    fn evaluations_are_independent() -> Result<(), CycleError> {
        let model = ClosedCycle::new(air(), Cycle::diesel(18.0, 2.0)?);

        let first = model.call(&otto_initial())?;
        let second = model.call(&otto_initial())?;
        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn unit_compression_ratio_leaves_state_unchanged() -> Result<(), CycleError> {
        let solution = evaluate(&otto_initial(), &air(), &Cycle::otto(1.0, kj(800.0))?)?;

        assert_eq!(solution.states[1].state, otto_initial().state());
        assert_eq!(solution.efficiency.get::<ratio>(), 0.0);

        Ok(())
    }

    #[test]
    fn sizing_search_through_model() -> Result<(), TargetRatioError> {
        let model = ClosedCycle::new(air(), Cycle::otto(4.0, kj(800.0))?);
        let solution = model.ratio_for_efficiency(
            &otto_initial(),
            Ratio::new::<percent>(50.0),
            [1.5, 30.0],
            TargetRatioConfig::default(),
        )?;

        // 1 − z^(1−k) = 0.5
        assert_relative_eq!(solution.cycle.ratio(), 2.0_f64.powf(2.5), max_relative = 1e-9);
        assert_eq!(solution.cycle.kind(), model.cycle().kind());

        Ok(())
    }
}

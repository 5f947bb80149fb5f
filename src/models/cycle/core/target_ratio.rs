//! Iterative search for the ratio that yields a target efficiency.
//!
//! The cycle's primary ratio (compression ratio, or pressure ratio for Joule)
//! is varied by bisection until the evaluated efficiency matches the target.

mod config;
mod error;
mod problem;

pub use config::TargetRatioConfig;
pub use error::TargetRatioError;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{f64::Ratio, ratio::percent};

use crate::support::thermo::model::PerfectGas;

use super::{Cycle, InitialState, Solution};

use problem::{EfficiencyProblem, RatioModel};

/// Finds the ratio within `bracket` at which `cycle` reaches `target` efficiency.
///
/// The returned solution's [`Solution::cycle`] carries the ratio found.
///
/// # Errors
///
/// Returns [`TargetRatioError`] if a bracket end is not a valid ratio, the
/// bracket does not straddle the target, or the solver fails to converge.
pub(crate) fn ratio_for_efficiency(
    initial: &InitialState,
    gas: &PerfectGas,
    cycle: Cycle,
    target: Ratio,
    bracket: [f64; 2],
    config: TargetRatioConfig,
) -> Result<Solution, TargetRatioError> {
    for end in bracket {
        cycle.with_ratio(end)?;
    }

    let model = RatioModel::new(initial, gas, cycle);
    let problem = EfficiencyProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A ratio at which the cycle cannot be evaluated (e.g. a Diesel
            // efficiency that divides by zero) is steered away from.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(TargetRatioError::MaxIters {
            residual: Ratio::new::<percent>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(
        cycle = %cycle.kind(),
        ratio = solution.x,
        iters = solution.iters,
        "matched target efficiency"
    );

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use crate::{
        models::cycle::core::{
            InputError,
            test_support::{air, kj, otto_initial},
        },
        support::constraint::ConstraintError,
    };

    #[test]
    fn recovers_otto_compression_ratio() -> Result<(), TargetRatioError> {
        let gas = air();
        let cycle = Cycle::otto(2.0, kj(800.0))?;
        let target = Ratio::new::<ratio>(1.0 - 1.0 / 8.0_f64.powf(0.4));

        let solution = ratio_for_efficiency(
            &otto_initial(),
            &gas,
            cycle,
            target,
            [1.5, 30.0],
            TargetRatioConfig::default(),
        )?;

        assert_relative_eq!(solution.cycle.ratio(), 8.0, epsilon = 1e-8);
        assert_relative_eq!(
            solution.efficiency.get::<percent>(),
            target.get::<percent>(),
            epsilon = 1e-8
        );

        Ok(())
    }

    #[test]
    fn joule_pressure_ratio() -> Result<(), TargetRatioError> {
        let gas = air();
        let cycle = Cycle::joule(4.0, kj(500.0))?;
        let target = Ratio::new::<percent>(40.0);

        let solution = ratio_for_efficiency(
            &otto_initial(),
            &gas,
            cycle,
            target,
            [1.1, 50.0],
            TargetRatioConfig::default(),
        )?;

        // 1 − (1/z)^((k−1)/k) = 0.4
        let expected = (1.0_f64 / 0.6).powf(1.4 / 0.4);
        assert_relative_eq!(solution.cycle.ratio(), expected, max_relative = 1e-6);

        Ok(())
    }

    #[test]
    fn rejects_zero_bracket_end() -> Result<(), InputError> {
        let cycle = Cycle::otto(8.0, kj(800.0))?;

        let result = ratio_for_efficiency(
            &otto_initial(),
            &air(),
            cycle,
            Ratio::new::<percent>(50.0),
            [0.0, 20.0],
            TargetRatioConfig::default(),
        );
        assert!(matches!(
            result,
            Err(TargetRatioError::Input(InputError::Invalid {
                source: ConstraintError::Zero,
                ..
            }))
        ));

        Ok(())
    }

    #[test]
    fn iteration_limit() -> Result<(), TargetRatioError> {
        let gas = air();
        let cycle = Cycle::otto(8.0, kj(800.0))?;
        let config = TargetRatioConfig {
            max_iters: 2,
            ..TargetRatioConfig::default()
        };

        let result = ratio_for_efficiency(
            &otto_initial(),
            &gas,
            cycle,
            Ratio::new::<percent>(50.0),
            [1.5, 30.0],
            config,
        );
        assert!(matches!(result, Err(TargetRatioError::MaxIters { .. })));

        Ok(())
    }
}

//! Problem formulation for matching a target efficiency.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::Ratio, ratio::percent};

use crate::{
    models::cycle::core::{Cycle, CycleError, InitialState, Solution, evaluate},
    support::thermo::model::PerfectGas,
};

/// Model adapter that exposes the cycle's primary ratio as its only input.
pub(super) struct RatioModel<'a> {
    initial: &'a InitialState,
    gas: &'a PerfectGas,
    cycle: Cycle,
}

impl<'a> RatioModel<'a> {
    pub(super) fn new(initial: &'a InitialState, gas: &'a PerfectGas, cycle: Cycle) -> Self {
        Self {
            initial,
            gas,
            cycle,
        }
    }
}

impl Model for RatioModel<'_> {
    type Input = f64;
    type Output = Solution;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let cycle = self.cycle.with_ratio(*input)?;
        evaluate(self.initial, self.gas, &cycle)
    }
}

/// Computes the residual as `achieved_efficiency - target_efficiency`, in percent.
pub(super) struct EfficiencyProblem {
    target: Ratio,
}

impl EfficiencyProblem {
    pub(super) fn new(target: Ratio) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for EfficiencyProblem {
    type Input = f64;
    type Output = Solution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.efficiency.get::<percent>();
        let target = self.target.get::<percent>();
        Ok([achieved - target])
    }
}

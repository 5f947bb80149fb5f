use twine_solvers::equation::bisection;
use uom::si::{f64::Ratio, ratio::percent};

/// Solver configuration for matching a target efficiency.
#[derive(Debug, Clone, Copy)]
pub struct TargetRatioConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the ratio being searched for.
    pub ratio_tol: f64,

    /// Absolute tolerance on the efficiency residual (achieved - target).
    pub efficiency_tol: Ratio,
}

impl Default for TargetRatioConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            ratio_tol: 1e-12,
            efficiency_tol: Ratio::new::<percent>(1e-9),
        }
    }
}

impl TargetRatioConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.ratio_tol,
            x_rel_tol: 0.0,
            residual_tol: self.efficiency_tol.get::<percent>(),
        }
    }
}

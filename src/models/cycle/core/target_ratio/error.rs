use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Ratio;

use crate::models::cycle::core::InputError;

/// Errors that can occur while searching for a ratio that hits a target efficiency.
#[derive(Debug, Error)]
pub enum TargetRatioError {
    /// The bracket is not a valid ratio for this cycle.
    #[error("invalid bracket")]
    Input(#[from] InputError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best efficiency residual achieved (achieved - target).
        residual: Ratio,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

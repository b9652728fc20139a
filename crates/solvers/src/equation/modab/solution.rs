use modab_core::Snapshot;

use crate::equation::Evaluation;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the residual or step tolerance.
    Converged,

    /// Reached the iteration limit; `x` is the last accepted estimate.
    MaxIters,

    /// A false-position step left the bracket; `x` is `NaN`.
    Diverged,

    /// Stopped early due to an observer decision; `x` is the last accepted estimate.
    StoppedByObserver,
}

/// The result of a modab solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root, or `NaN` if the solver diverged.
    pub x: f64,

    /// Residual from the evaluation behind `x` (`NaN` if diverged).
    pub residual: f64,

    /// Snapshot from the evaluation behind `x`, absent if diverged.
    pub snapshot: Option<Snapshot<I, O>>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of model evaluations attempted.
    pub evals: usize,

    /// Final search bracket, in the same order the caller supplied it.
    pub bracket: [f64; 2],
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(
        eval: Evaluation<I, O>,
        status: Status,
        iters: usize,
        evals: usize,
        bracket: [f64; 2],
    ) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: Some(eval.snapshot),
            iters,
            evals,
            bracket,
        }
    }

    /// Constructs the solution for a diverged false-position step.
    pub(super) fn diverged(iters: usize, evals: usize, bracket: [f64; 2]) -> Self {
        Self {
            status: Status::Diverged,
            x: f64::NAN,
            residual: f64::NAN,
            snapshot: None,
            iters,
            evals,
            bracket,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

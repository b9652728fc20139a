//! Solvers for scalar equation problems.
//!
//! An [`EquationProblem`] maps a solver variable `x` to a model input, calls
//! the model, and computes a residual. Solvers in this module drive that
//! residual to zero on a bracketing interval.
//!
//! # Solvers
//!
//! - [`modab`]: bisection / false-position hybrid with an Anderson–Björck
//!   correction and a periodic bisection safeguard
//!
//! [`EquationProblem`]: modab_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod modab;

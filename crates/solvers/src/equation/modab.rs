//! Modified Anderson–Björck bracketing root finder.
//!
//! # Algorithm
//!
//! The solver starts from a bracket `[x1, x2]` whose residuals have opposite
//! signs and alternates between two kinds of steps:
//!
//! - **Bisection** evaluates the midpoint and compares its residual with the
//!   chord through both endpoints. If the chord predicts the midpoint well
//!   enough, the function is treated as locally linear and the solver
//!   switches to false position.
//! - **False position** evaluates where the chord crosses zero. When the same
//!   end of the bracket moves twice in a row, the residual kept at the other
//!   end is scaled down (the Anderson–Björck correction) so that the stuck end
//!   is eventually released.
//!
//! Every `floor(-log2(precision) / 2) + 1` iterations the solver is forced
//! back to bisection, which bounds how long false position can stagnate.
//!
//! # Convergence
//!
//! An iteration converges when its residual is within
//! [`Config::residual_tol`] of zero, or when it lies within
//! `precision * width / 2` of the previous estimate, where `width` is the
//! initial bracket width. The converged estimate is clamped into the bracket.
//!
//! Two outcomes are not errors:
//!
//! - [`Status::MaxIters`]: the budget ran out; `x` is the last estimate.
//! - [`Status::Diverged`]: a false-position point fell outside the bracket,
//!   which only happens when the bracket is invalid; `x` is `NaN`.
//!
//! The bracket is not validated. Endpoints may be given in either order; the
//! solver works on the sorted bracket and reports [`Solution::bracket`] in the
//! caller's order.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per model evaluation, including both
//! endpoints. Each event carries the [`Step`] that produced it and the sorted
//! bracket at the time:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or residual)
//!
//! Observers can return [`Action::StopEarly`] to halt immediately. A stop
//! on a failure event suppresses the error and returns the last accepted
//! estimate instead.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Point, Sign};
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_PRECISION};
pub use error::Error;
pub use event::{Event, Step};
pub use solution::{Solution, Status};

use modab_core::{EquationProblem, FnModel, Model, Observer, Target};

use search::search;

/// Finds a root of the problem's residual within `bracket`.
///
/// The observer receives an [`Event`] for every evaluation.
/// See the [module docs](self) for details on events and observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation and the
/// observer does not return [`Action::StopEarly`], or if the observer stops
/// the solver after the very first evaluation failed.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, observer)
}

/// Finds a root without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Solves `f(x) = target` for `x` between `left` and `right`.
///
/// The residual tolerance is derived from the target with
/// [`Config::for_target`]. Returns the root estimate, or `NaN` if the solver
/// diverged or `precision` is not in `(0, 1)`. If the iteration budget runs
/// out, the last estimate is returned.
///
/// ```
/// use modab_solvers::find_root;
///
/// let root = find_root(|x: f64| x.powi(3), 0.5, 1.5, 1.0, 1e-14);
/// assert!((root - 1.0).abs() < 1e-12);
/// ```
pub fn find_root<F>(f: F, left: f64, right: f64, target: f64, precision: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let Ok(config) = Config::for_target(precision, target) else {
        return f64::NAN;
    };

    solve_unobserved(&FnModel::new(f), &Target::new(target), [left, right], &config)
        .map_or(f64::NAN, |solution| solution.x)
}

/// Calls [`find_root`] with [`DEFAULT_PRECISION`].
pub fn find_root_default<F>(f: F, left: f64, right: f64, target: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    find_root(f, left, right, target, DEFAULT_PRECISION)
}

//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use modab_core::{FnModel, Observer, Target};
//! use modab_observers::traits::{CanStopEarly, HasResidual};
//! use modab_solvers::equation::modab::{self, Config, Status};
//!
//! /// Stops once the residual is small enough for the caller's purposes.
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//!
//! let model = FnModel::new(|x: f64| x * x - 2.0);
//! let observer = GoodEnough { tolerance: 1e-3 };
//!
//! let solution = modab::solve(&model, &Target::zero(), [0.0, 2.0], &Config::default(), observer)
//!     .unwrap();
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! ```

use modab_core::{EquationProblem, Model};

use modab_solvers::equation::modab;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<M, P> HasResidual for modab::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        modab::Event::residual(self).unwrap_or(f64::NAN)
    }
}

impl CanStopEarly for modab::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

//! Core traits and types for the modab root finder.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`]: adapts solver variables to model inputs and computes
//!   residuals from outputs
//!
//! It also provides small adapters for plain functions:
//!
//! - [`FnModel`]: wraps `Fn(f64) -> f64` as an infallible [`Model`]
//! - [`Counted`]: counts calls to any [`Model`] without altering results
//! - [`Target`]: an [`EquationProblem`] driving a scalar output to a value

mod counted;
mod fn_model;
mod model;
mod observer;
mod problems;

pub use counted::Counted;
pub use fn_model::FnModel;
pub use observer::Observer;
pub use problems::{EquationProblem, Target};
pub use {model::Model, model::Snapshot};

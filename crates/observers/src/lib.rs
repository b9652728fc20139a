//! Reusable observers for the modab root finder.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that plug into [`modab_solvers::equation::modab::solve`].
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for solver-agnostic observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`]: Logs every evaluation through [`tracing`], leaving the
//!   choice of subscriber to the application.
//!
//! [`Observer`]: modab_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

mod trace;
pub mod traits;

pub use trace::Trace;

use std::cell::Cell;

use crate::Model;

/// Counts calls to a wrapped [`Model`].
///
/// `Counted` forwards every call unchanged and increments an internal
/// counter, including calls that return an error. It is meant for measuring
/// how many evaluations a solver needs; solvers never see the count.
///
/// The counter uses a [`Cell`], so a `Counted` model is not `Sync`.
///
/// # Example
///
/// ```
/// use modab_core::{Counted, FnModel, Model};
///
/// let model = Counted::new(FnModel::new(|x: f64| x + 1.0));
/// model.call(&1.0).unwrap();
/// model.call(&2.0).unwrap();
/// assert_eq!(model.count(), 2);
/// ```
#[derive(Debug)]
pub struct Counted<M> {
    inner: M,
    count: Cell<usize>,
}

impl<M: Model> Counted<M> {
    /// Wraps a model with a zeroed counter.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    /// Returns the number of calls since creation or the last reset.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Resets the call counter to zero.
    pub fn reset(&self) {
        self.count.set(0);
    }

    /// Returns a reference to the wrapped model.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwraps the model, discarding the count.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Model> Model for Counted<M> {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.count.set(self.count.get() + 1);
        self.inner.call(input)
    }
}

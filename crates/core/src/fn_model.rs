use std::convert::Infallible;

use crate::Model;

/// Wraps a plain `Fn(f64) -> f64` so it can be used as a [`Model`].
///
/// The wrapped function cannot fail; non-finite outputs are passed through
/// unchanged for the solver to deal with.
#[derive(Debug, Clone, Copy)]
pub struct FnModel<F> {
    f: F,
}

impl<F> FnModel<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a model from a scalar function.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Model for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.f)(*input))
    }
}

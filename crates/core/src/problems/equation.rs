use std::convert::Infallible;

/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output. Solvers search for the input
/// that drives every residual to zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// Bracketing root finders work with `N = 1`.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}

/// Drives the output of a scalar model to a target value.
///
/// The model input is `x` itself and the residual is `output - value`,
/// so solving this problem finds `x` with `f(x) = value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub value: f64,
}

impl Target {
    /// Creates a problem targeting `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Targets zero, the plain root of `f`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl EquationProblem<1> for Target {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.value])
    }
}

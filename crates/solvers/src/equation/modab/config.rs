use thiserror::Error;

/// Default precision used by [`Config::default`] and [`find_root_default`].
///
/// [`find_root_default`]: crate::find_root_default
pub const DEFAULT_PRECISION: f64 = 1e-14;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Configuration for the modab solver.
///
/// `precision` is relative to the bracket: the step tolerance is
/// `precision * width / 2`, and it also sets how often the solver is forced
/// back to bisection. `residual_tol` is an absolute tolerance on the residual
/// and is zero by default, so convergence relies on the step size alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    precision: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating a modab solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be finite and strictly between 0 and 1")]
    Precision,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            precision: DEFAULT_PRECISION,
            residual_tol: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is outside `(0, 1)` or non-finite,
    /// or if `residual_tol` is negative or non-finite.
    pub fn new(max_iters: usize, precision: f64, residual_tol: f64) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision <= 0.0 || precision >= 1.0 {
            return Err(ConfigError::Precision);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            precision,
            residual_tol,
        })
    }

    /// Creates a config for solving `f(x) = target`.
    ///
    /// The residual tolerance is `precision * |target|` when `|target| > 1`
    /// and zero otherwise, so large targets are compared relatively.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is invalid or `target` is non-finite.
    pub fn for_target(precision: f64, target: f64) -> Result<Self, ConfigError> {
        let residual_tol = if target.abs() > 1.0 {
            precision * target.abs()
        } else if target.is_nan() {
            f64::NAN
        } else {
            0.0
        };
        Self::new(DEFAULT_MAX_ITERS, precision, residual_tol)
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative precision.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the number of iterations after which bisection is forced.
    ///
    /// This is `floor(-log2(precision) / 2) + 1`, roughly the number of
    /// false-position steps a well-behaved problem needs at this precision.
    #[must_use]
    pub fn stagnation_period(&self) -> usize {
        // Precision is in (0, 1), so the quotient is positive and finite.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let half_bits = (-self.precision.log2() / 2.0).floor() as usize;
        half_bits + 1
    }

    /// Returns the step tolerance for a bracket of the given width.
    #[must_use]
    pub(super) fn step_tol(&self, width: f64) -> f64 {
        self.precision * width / 2.0
    }
}

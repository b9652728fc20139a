//! Bracketing root finders built on [`modab_core`] abstractions.
//!
//! The main entry point is [`equation::modab`], a hybrid of bisection and
//! false position with an Anderson–Björck correction. It converges at least
//! as reliably as bisection on a valid bracket and usually needs far fewer
//! function evaluations.
//!
//! For plain scalar functions, [`find_root`] offers the minimal call contract
//! `(f, left, right, target, precision) -> f64`, returning `NaN` when the
//! interpolation step diverges.
//!
//! ```
//! let root = modab_solvers::find_root(|x: f64| x.cos() - x, -11.0, 9.0, 0.0, 1e-14);
//! assert!((root - 0.739_085_133_215_160_7).abs() < 1e-12);
//! ```

pub mod equation;

pub use equation::modab::{DEFAULT_PRECISION, find_root, find_root_default};

//! Benchmark problems shared by the integration tests.
//!
//! Each problem is a scalar function with a bracketing interval taken from
//! the root-finding literature (Galdino's regula falsi family, Stage's Brent
//! comparisons, Oliveira and Takahashi's ITP benchmarks, and the SciML
//! suite).

/// A bracketed root-finding problem `f(x) = target`.
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub name: &'static str,
    pub f: fn(f64) -> f64,
    pub bracket: [f64; 2],
    pub target: f64,
}

impl Problem {
    fn new(name: &'static str, f: fn(f64) -> f64, left: f64, right: f64) -> Self {
        Self {
            name,
            f,
            bracket: [left, right],
            target: 0.0,
        }
    }

    /// Returns `f(x) - target`.
    #[must_use]
    pub fn residual(&self, x: f64) -> f64 {
        (self.f)(x) - self.target
    }
}

fn p(x: f64) -> f64 {
    x + 1.11111
}

/// Smooth problems with a simple root, where false position pays off.
#[must_use]
pub fn smooth() -> Vec<Problem> {
    vec![
        Problem::new("f01", |x| x.powi(3) - 1.0, 0.5, 1.5),
        Problem::new(
            "f02",
            |x| {
                x.powi(2) * (x.powi(2) / 3.0 + 2.0_f64.sqrt() * x.sin()) - 3.0_f64.sqrt() / 18.0
            },
            0.1,
            1.0,
        ),
        Problem::new("f03", |x| 11.0 * x.powi(11) - 1.0, 0.1, 1.0),
        Problem::new("f04", |x| x.powi(3) + 1.0, -1.8, 0.0),
        Problem::new("f05", |x| x.powi(3) - 2.0 * x - 5.0, 2.0, 3.0),
        Problem::new(
            "f06",
            |x| 2.0 * x * (-5.0_f64).exp() + 1.0 - 2.0 * (-5.0 * x).exp(),
            0.0,
            1.0,
        ),
        Problem::new(
            "f08",
            |x| 2.0 * x * (-20.0_f64).exp() + 1.0 - 2.0 * (-20.0 * x).exp(),
            0.0,
            1.0,
        ),
        Problem::new("f09", |x| 17.0 * x.powi(2) - (1.0 - 5.0 * x).powi(2), 0.0, 1.0),
        Problem::new("f11", |x| 362.0 * x.powi(2) - (1.0 - 20.0 * x).powi(2), 0.0, 1.0),
        Problem::new("f12", |x| x.powi(2) - (1.0 - x).powi(5), 0.0, 1.0),
        Problem::new("f14", |x| x.powi(2) - (1.0 - x).powi(20), 0.0, 1.0),
        Problem::new("f15", |x| 257.0 * x - (1.0 - 5.0 * x).powi(4), 0.0, 1.0),
        Problem::new("f17", |x| 130_322.0 * x - (1.0 - 20.0 * x).powi(4), 0.0, 1.0),
        Problem::new("f18", |x| (-5.0 * x).exp() * (x - 1.0) + x.powi(5), 0.0, 1.0),
        Problem::new("f20", |x| (-20.0 * x).exp() * (x - 1.0) + x.powi(20), 0.0, 1.0),
        Problem::new("f21", |x| x.powi(2) + (x / 5.0).sin() - 0.25, 0.0, 1.0),
        Problem::new("f31", |x| std::f64::consts::PI - 1.0 / x, 0.05, 5.0),
        Problem::new("f32", |x| 4.0 - x.tan(), 0.0, 1.5),
        Problem::new("f33", |x| x.cos() - x.powi(3), 0.0, 4.0),
        Problem::new("f34", |x| x.cos() - x, -11.0, 9.0),
        Problem::new(
            "f37",
            |x| (x - 7.0 / 9.0).powi(3) + (x - 7.0 / 9.0) * 1e-3,
            -11.0,
            9.0,
        ),
        Problem::new(
            "f47",
            |x| 1.0 / x.sqrt() - 2.0 * (5e3 * x.sqrt()).ln() + 0.8,
            0.0005,
            0.5,
        ),
        Problem::new(
            "f49",
            |x| {
                if x <= 0.0 {
                    -x.powi(3) - x - 1.0
                } else {
                    x.cbrt() - x - 1.0
                }
            },
            -1.0,
            1.0,
        ),
        Problem::new("f51", f64::ln, 0.5, 5.0),
        Problem::new("f53", |x| x.sin().exp() - x - 1.0, 1.0, 4.0),
        Problem::new("f58", |x| x.atan() - 1.0, 1.0, 8.0),
        Problem::new("f63", |x| x * x.exp() - 1.0, -1.0, 1.0),
        Problem::new(
            "f68",
            |x| std::f64::consts::PI.powf(x) - std::f64::consts::E,
            -1.0,
            1.0,
        ),
        Problem::new("f71", |x| (x + 2.0 / 3.0) / (x + 1.01), -1.0, 1.0),
        Problem::new(
            "f84",
            |x| (x - 1.0) * (x - 2.0) * (x - 3.0) * (x - 4.0) * (x - 5.0) - 0.05,
            0.5,
            5.5,
        ),
        Problem::new("f85", |x| x.sin() - 0.5 * x - 0.3, -10.0, 10.0),
        Problem::new("f88", |x| x.ln() - x + 2.0 - 0.05, 0.1, 3.0),
        Problem::new("f91", |x| x * (1.0 / x).sin() - 0.1 - 0.01, 0.01, 1.0),
    ]
}

/// Problems that defeat false position: multiple roots, jumps, and poles.
///
/// The solver should still terminate with a finite estimate inside the
/// bracket, falling back on bisection.
#[must_use]
pub fn hard() -> Vec<Problem> {
    vec![
        Problem::new(
            "f24",
            |x| (x + 2.0) * (x + 1.0) * (x - 3.0).powi(3),
            2.6,
            4.6,
        ),
        Problem::new("f26", |x| (x.sin() - x / 4.0).powi(3), 2.0, 4.0),
        Problem::new(
            "f27",
            |x| {
                let p = p(x);
                let quartic = 81.0 - p * (108.0 - p * (54.0 - p * (12.0 - p)));
                if p < 3.0 {
                    quartic
                } else if p > 3.0 {
                    -quartic
                } else {
                    0.0
                }
            },
            1.0,
            3.0,
        ),
        Problem::new(
            "f36",
            |x| {
                let magnitude = (x - 2.0 / 3.0).abs().powf(0.2);
                if x <= 2.0 / 3.0 { magnitude } else { -magnitude }
            },
            -11.0,
            9.0,
        ),
        Problem::new("f38", |x| if x <= 1.0 / 3.0 { -0.5 } else { 0.5 }, -11.0, 9.0),
        Problem::new(
            "f40",
            |x| if x == 0.0 { 0.0 } else { 1.0 / (x - 2.0 / 3.0) },
            -11.0,
            9.0,
        ),
        Problem::new("f43", |x| x.powi(3), -1.0, 1.5),
        Problem::new("f72", |x| (x * 1e6 - 1.0).powi(3), -1.0, 1.0),
        Problem::new(
            "f76",
            |x| if x > (1.0 - 1e6) / 1e6 { (1.0 + 1e6) / 1e6 } else { -1.0 },
            -1.0,
            1.0,
        ),
        Problem::new("f79", |x| (10.0 * x - 1.0).ceil() + 0.5, -1.0, 1.0),
    ]
}

use std::{cell::Cell, convert::Infallible};

use approx::assert_relative_eq;
use thiserror::Error;

use modab_core::{Counted, EquationProblem, FnModel, Model, Target};

use super::{
    Action, Config, Error, Event, Status, Step, find_root, find_root_default, solve,
    solve_unobserved,
};

const COS_ROOT: f64 = 0.739_085_133_215_160_7;

fn cos_minus_x(x: f64) -> f64 {
    x.cos() - x
}

#[test]
fn cubic_root_is_hit_by_first_bisection() {
    let model = Counted::new(FnModel::new(|x: f64| x * x * x - 1.0));

    let solution = solve_unobserved(&model, &Target::zero(), [0.5, 1.5], &Config::default())
        .expect("infallible model");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.evals, 3);
    assert_eq!(model.count(), 3);
}

#[test]
fn solves_logarithm() {
    let root = find_root_default(f64::ln, 0.5, 5.0, 0.0);
    assert_relative_eq!(root, 1.0, epsilon = 1e-14);
}

#[test]
fn solves_cos_minus_x_on_wide_bracket() {
    let model = FnModel::new(cos_minus_x);

    let solution = solve_unobserved(&model, &Target::zero(), [-11.0, 9.0], &Config::default())
        .expect("infallible model");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, COS_ROOT, epsilon = 1e-15);
    assert!(solution.evals <= 12, "took {} evaluations", solution.evals);
    assert_eq!(solution.evals, solution.iters + 2);

    let snapshot = solution.snapshot.expect("converged solutions carry a snapshot");
    assert_relative_eq!(snapshot.input, solution.x, epsilon = 1e-15);
}

#[test]
fn linear_function_converges_after_one_interpolation() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        steps.push(event.step());
        None
    };

    let solution = solve(
        &FnModel::new(|x: f64| x + 1.11111),
        &Target::zero(),
        [-11.0, 9.0],
        &Config::default(),
        observer,
    )
    .expect("infallible model");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -1.11111, epsilon = 1e-14);
    assert_eq!(
        steps,
        [Step::Left, Step::Right, Step::Bisection, Step::Interpolation]
    );
}

#[test]
fn piecewise_quartic_converges_quickly() {
    let p = |x: f64| x + 1.11111;
    let f27 = |x: f64| {
        let p = p(x);
        let quartic = 81.0 - p * (108.0 - p * (54.0 - p * (12.0 - p)));
        let sign = if p < 3.0 {
            1.0
        } else if p > 3.0 {
            -1.0
        } else {
            0.0
        };
        quartic * sign
    };
    let model = Counted::new(FnModel::new(f27));

    let solution = solve_unobserved(&model, &Target::zero(), [1.0, 3.0], &Config::default())
        .expect("infallible model");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 3.0 - 1.11111, epsilon = 1e-3);
    assert!(model.count() <= 20, "took {} evaluations", model.count());
}

#[test]
fn step_function_terminates_near_jump() {
    let step = |x: f64| if x <= 1.0 / 3.0 { -0.5 } else { 0.5 };
    let model = Counted::new(FnModel::new(step));

    let solution = solve_unobserved(&model, &Target::zero(), [-11.0, 9.0], &Config::default())
        .expect("infallible model");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x.is_finite());
    assert_relative_eq!(solution.x, 1.0 / 3.0, epsilon = 1e-12);
    assert!(solution.iters < Config::default().max_iters());
    assert_eq!(model.count(), solution.evals);
}

#[test]
fn root_at_left_end_costs_one_evaluation() {
    let model = Counted::new(FnModel::new(|x: f64| x - 2.0));

    let solution = solve_unobserved(&model, &Target::zero(), [2.0, 5.0], &Config::default())
        .expect("infallible model");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.x, 2.0);
    assert_eq!(solution.iters, 0);
    assert_eq!(model.count(), 1);
}

#[test]
fn root_at_right_end_costs_two_evaluations() {
    let model = Counted::new(FnModel::new(|x: f64| x - 5.0));

    let solution = solve_unobserved(&model, &Target::zero(), [2.0, 5.0], &Config::default())
        .expect("infallible model");

    assert_eq!(solution.x, 5.0);
    assert_eq!(model.count(), 2);
}

#[test]
fn reversed_bracket_finds_same_root() {
    let forward = solve_unobserved(
        &FnModel::new(cos_minus_x),
        &Target::zero(),
        [-11.0, 9.0],
        &Config::default(),
    )
    .expect("infallible model");
    let reversed = solve_unobserved(
        &FnModel::new(cos_minus_x),
        &Target::zero(),
        [9.0, -11.0],
        &Config::default(),
    )
    .expect("infallible model");

    assert_eq!(forward.x, reversed.x);
    assert_eq!(forward.evals, reversed.evals);
    assert!(forward.bracket[0] <= forward.bracket[1]);
    assert_eq!(reversed.bracket, [forward.bracket[1], forward.bracket[0]]);
}

#[test]
fn large_target_uses_scaled_residual_tolerance() {
    let root = find_root(f64::exp, 0.0, 10.0, 1000.0, 1e-10);
    assert_relative_eq!(root, 1000.0_f64.ln(), epsilon = 1e-9);
    assert_relative_eq!(root.exp(), 1000.0, epsilon = 1e-7);
}

#[test]
fn interpolation_outside_bracket_diverges() {
    let model = Counted::new(FnModel::new(|x: f64| x + 10.0));

    let solution = solve_unobserved(&model, &Target::zero(), [0.0, 1.0], &Config::default())
        .expect("infallible model");

    assert_eq!(solution.status, Status::Diverged);
    assert!(solution.x.is_nan());
    assert!(solution.snapshot.is_none());
    assert_eq!(solution.iters, 2);
    assert_eq!(model.count(), 3);

    assert!(find_root_default(|x| x + 10.0, 0.0, 1.0, 0.0).is_nan());
}

#[test]
fn constant_function_diverges() {
    let root = find_root_default(|_| 1.0, 0.0, 1.0, 0.0);
    assert!(root.is_nan());
}

#[test]
fn exhausted_budget_returns_last_estimate() {
    let config = Config::new(3, 1e-14, 0.0).expect("valid config");

    let solution = solve_unobserved(
        &FnModel::new(cos_minus_x),
        &Target::zero(),
        [-11.0, 9.0],
        &config,
    )
    .expect("infallible model");

    assert_eq!(solution.status, Status::MaxIters);
    assert_relative_eq!(solution.x, 0.835_992_394_506_995_4, epsilon = 1e-12);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.evals, 5);
}

#[test]
fn invalid_precision_returns_nan() {
    assert!(find_root(cos_minus_x, -11.0, 9.0, 0.0, 0.0).is_nan());
    assert!(find_root(cos_minus_x, -11.0, 9.0, 0.0, 1.5).is_nan());
    assert!(find_root(cos_minus_x, -11.0, 9.0, f64::NAN, 1e-14).is_nan());
}

#[test]
fn bracket_shrinks_monotonically_and_halves_on_bisection() {
    let mut events = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        events.push((event.step(), event.bracket()));
        None
    };

    solve(
        &FnModel::new(cos_minus_x),
        &Target::zero(),
        [-11.0, 9.0],
        &Config::default(),
        observer,
    )
    .expect("infallible model");

    let width = |bracket: [f64; 2]| bracket[1] - bracket[0];
    for pair in events.windows(2) {
        let (step, before) = pair[0];
        let (_, after) = pair[1];
        assert!(before[0] <= after[0] && after[1] <= before[1]);
        if step == Step::Bisection {
            assert_relative_eq!(width(after), width(before) / 2.0);
        }
    }
    assert_eq!(events[2], (Step::Bisection, [-11.0, 9.0]));
    assert_eq!(events[3].1, [-1.0, 9.0]);
}

#[test]
fn solving_near_converged_root_is_stable() {
    let root = find_root_default(cos_minus_x, -11.0, 9.0, 0.0);
    let again = find_root_default(cos_minus_x, root - 1e-6, root + 1e-6, 0.0);
    assert_relative_eq!(again, root, epsilon = 1e-15);
}

#[test]
fn observer_can_stop_early() {
    let mut seen = 0;
    let observer = |_: &Event<'_, _, _>| {
        seen += 1;
        (seen == 4).then_some(Action::StopEarly)
    };

    let solution = solve(
        &FnModel::new(cos_minus_x),
        &Target::zero(),
        [-11.0, 9.0],
        &Config::default(),
        observer,
    )
    .expect("infallible model");

    // The fourth evaluation is discarded; the first midpoint is the estimate.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_relative_eq!(solution.x, -1.0);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.evals, 4);
}

// --- Failure handling ---

#[derive(Debug, Error)]
#[error("model refused call {call}")]
struct Refused {
    call: usize,
}

/// Computes `x - 1` but fails on one particular call.
struct FailsOnCall {
    fail_at: usize,
    calls: Cell<usize>,
}

impl FailsOnCall {
    fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            calls: Cell::new(0),
        }
    }
}

impl Model for FailsOnCall {
    type Input = f64;
    type Output = f64;
    type Error = Refused;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call == self.fail_at {
            Err(Refused { call })
        } else {
            Ok(x - 1.0)
        }
    }
}

fn stop_on_failure<M, P>(event: &Event<'_, M, P>) -> Option<Action>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    event.residual().is_none().then_some(Action::StopEarly)
}

#[test]
fn model_failure_is_an_error() {
    let result = solve_unobserved(
        &FailsOnCall::new(3),
        &Target::zero(),
        [0.0, 4.0],
        &Config::default(),
    );

    let Err(Error::Model(source)) = result else {
        panic!("expected a model error");
    };
    assert_eq!(source.to_string(), "model refused call 3");
}

#[test]
fn observer_sees_failure_and_can_stop() {
    let mut failures = Vec::new();
    let observer = |event: &Event<'_, FailsOnCall, Target>| {
        if let Event::ModelFailed { step, x, error, .. } = event {
            failures.push((*step, *x, error.call));
        }
        stop_on_failure(event)
    };

    let solution = solve(
        &FailsOnCall::new(3),
        &Target::zero(),
        [0.0, 4.0],
        &Config::default(),
        observer,
    )
    .expect("observer suppresses the failure");

    assert_eq!(failures, [(Step::Bisection, 2.0, 3)]);
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.x, 0.0);
    assert_eq!(solution.evals, 3);
}

#[test]
fn stopping_on_right_end_failure_returns_left_end() {
    let solution = solve(
        &FailsOnCall::new(2),
        &Target::zero(),
        [0.0, 4.0],
        &Config::default(),
        stop_on_failure::<FailsOnCall, Target>,
    )
    .expect("observer suppresses the failure");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.x, 0.0);
    assert_eq!(solution.bracket, [0.0, 4.0]);
}

#[test]
fn stopping_on_left_end_failure_has_no_estimate() {
    let result = solve(
        &FailsOnCall::new(1),
        &Target::zero(),
        [0.0, 4.0],
        &Config::default(),
        stop_on_failure::<FailsOnCall, Target>,
    );

    assert!(matches!(result, Err(Error::NoSuccessfulEvaluation)));
}

#[derive(Debug, Error)]
#[error("x must be non-negative")]
struct NegativeX;

/// Solves `sqrt(x) = 1`, rejecting negative `x` when building the input.
struct SqrtProblem;

impl EquationProblem<1> for SqrtProblem {
    type Input = f64;
    type Output = f64;
    type Error = NegativeX;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        if x[0] < 0.0 { Err(NegativeX) } else { Ok(x[0]) }
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output.sqrt() - 1.0])
    }
}

/// Identity model for problems that do their own math.
struct Identity;

impl Model for Identity {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(*x)
    }
}

#[test]
fn problem_failure_is_an_error() {
    let result = solve_unobserved(&Identity, &SqrtProblem, [-1.0, 4.0], &Config::default());
    assert!(matches!(result, Err(Error::Problem(_))));

    let solution = solve_unobserved(&Identity, &SqrtProblem, [0.0, 4.0], &Config::default())
        .expect("bracket avoids negative x");
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-14);
}

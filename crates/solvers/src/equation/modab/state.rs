use crate::equation::Evaluation;

use super::{
    Config, Point, Solution, Status, Step,
    bracket::{Bracket, End, Orientation},
};

/// Which step the next iteration takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    Bisection,
    Interpolation,
}

/// What the next iteration should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Candidate {
    /// Evaluate the model at `x`.
    Evaluate(Step, f64),

    /// The false-position point left the bracket.
    Diverged,
}

/// Per-call search state, threaded through the iteration loop.
pub(super) struct State<I, O> {
    bracket: Bracket,
    mode: Mode,
    /// End that moved on the previous false-position step.
    moved: Option<End>,
    /// Last accepted evaluation.
    accepted: Evaluation<I, O>,
    orientation: Orientation,
    step_tol: f64,
    residual_tol: f64,
    period: usize,
}

impl<I, O> State<I, O> {
    /// Creates the initial state from both endpoint evaluations.
    ///
    /// The left endpoint becomes the first accepted estimate.
    pub(super) fn new(
        left: Evaluation<I, O>,
        right: Point,
        orientation: Orientation,
        config: &Config,
    ) -> Self {
        let bracket = Bracket::new(Point::new(left.x, left.residual), right);
        Self {
            step_tol: config.step_tol(bracket.width()),
            residual_tol: config.residual_tol(),
            period: config.stagnation_period(),
            bracket,
            mode: Mode::Bisection,
            moved: None,
            accepted: left,
            orientation,
        }
    }

    /// Returns the current sorted bracket bounds.
    pub(super) fn bounds(&self) -> [f64; 2] {
        self.bracket.as_array()
    }

    /// Decides where to evaluate next.
    pub(super) fn candidate(&self) -> Candidate {
        match self.mode {
            Mode::Bisection => Candidate::Evaluate(Step::Bisection, self.bracket.midpoint()),
            Mode::Interpolation => {
                let x = self.bracket.secant();
                if self.bracket.admits(x, self.step_tol) {
                    Candidate::Evaluate(Step::Interpolation, x)
                } else {
                    Candidate::Diverged
                }
            }
        }
    }

    /// Switches to false position if the function looks linear across the bracket.
    ///
    /// `midpoint` is the bisection point just evaluated. The chord between the
    /// endpoints predicts a value there; if the prediction is close to the real
    /// residual, subsequent iterations interpolate.
    pub(super) fn test_linearity(&mut self, midpoint: Point) {
        let chord = self.bracket.chord_midpoint();
        let deviation = (chord - midpoint.residual).abs();
        let scale = midpoint.residual.abs() + chord.abs();
        let k = linearity_factor(self.bracket.left().residual, self.bracket.right().residual);
        if deviation < k * scale {
            self.mode = Mode::Interpolation;
        }
    }

    /// Returns true if `point` satisfies the residual or step tolerance.
    pub(super) fn is_converged(&self, point: Point) -> bool {
        point.residual.abs() <= self.residual_tol
            || (point.x - self.accepted.x).abs() <= self.step_tol
    }

    /// Accepts an evaluation and shrinks the bracket around it.
    ///
    /// On consecutive false-position steps that move the same end, the
    /// residual at the other end is scaled by `m = 1 - y_new / y_old`, or
    /// halved when `m` is not positive, so the stuck end is released.
    pub(super) fn advance(&mut self, step: Step, eval: Evaluation<I, O>) {
        let point = Point::new(eval.x, eval.residual);
        let end = self.bracket.end_for(point);

        if step == Step::Interpolation {
            if self.moved == Some(end) {
                self.release_other_end(end, point);
            }
            self.moved = Some(end);
        }

        self.bracket.replace(end, point);
        self.accepted = eval;
    }

    /// Forces bisection once every stagnation period.
    pub(super) fn apply_safeguard(&mut self, iter: usize) {
        if iter % self.period == 0 {
            self.mode = Mode::Bisection;
            self.moved = None;
        }
    }

    fn release_other_end(&mut self, end: End, point: Point) {
        let (replaced, other) = match end {
            End::Left => (self.bracket.left(), End::Right),
            End::Right => (self.bracket.right(), End::Left),
        };
        let m = 1.0 - point.residual / replaced.residual;
        let factor = if m > 0.0 { m } else { 0.5 };
        self.bracket.scale(other, factor);
    }

    /// Finishes with a converged evaluation, clamped into the bracket.
    ///
    /// The estimate is the same for either caller ordering; only the reported
    /// bracket is restored to the caller's orientation.
    pub(super) fn into_converged(
        self,
        eval: Evaluation<I, O>,
        iters: usize,
        evals: usize,
    ) -> Solution<I, O> {
        let x = self.bracket.clamp(eval.x);
        let bracket = self.orientation.restore(self.bracket.as_array());
        let mut solution = Solution::from_eval(eval, Status::Converged, iters, evals, bracket);
        solution.x = x;
        solution
    }

    /// Finishes with the last accepted estimate.
    pub(super) fn into_solution(self, status: Status, iters: usize, evals: usize) -> Solution<I, O> {
        let bracket = self.orientation.restore(self.bracket.as_array());
        Solution::from_eval(self.accepted, status, iters, evals, bracket)
    }

    /// Finishes after a false-position step left the bracket.
    pub(super) fn into_diverged(self, iters: usize, evals: usize) -> Solution<I, O> {
        let bracket = self.orientation.restore(self.bracket.as_array());
        Solution::diverged(iters, evals, bracket)
    }
}

/// Tolerance factor for the linearity test.
///
/// Equals `(min(|y1|, |y2|) / max(|y1|, |y2|))^(1/4)`, so lopsided brackets
/// must match the chord more closely before false position is trusted.
fn linearity_factor(y1: f64, y2: f64) -> f64 {
    let (a1, a2) = (y1.abs(), y2.abs());
    if a1 > 0.0 && a2 > 0.0 {
        (a1.min(a2) / a1.max(a2)).powf(0.25)
    } else {
        1.0
    }
}

use modab_core::{EquationProblem, Model, Observer};

use crate::equation::EvalError;

use super::{Action, Point};

/// The kind of evaluation that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Initial evaluation of the lower bracket endpoint.
    Left,

    /// Initial evaluation of the upper bracket endpoint.
    Right,

    /// Evaluation at the bracket midpoint.
    Bisection,

    /// Evaluation at the false-position point.
    Interpolation,
}

/// Events emitted by the modab solver, one per model evaluation.
///
/// `bracket` is the sorted search bracket at the time of the evaluation
/// (`bracket[0] <= bracket[1]`), regardless of the caller's ordering.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation.
    Evaluated {
        /// What kind of step produced this evaluation.
        step: Step,

        /// The evaluated point (x and residual).
        point: Point,

        /// Current search bracket.
        bracket: [f64; 2],

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// What kind of step was attempted.
        step: Step,

        /// The x value where evaluation failed.
        x: f64,

        /// Current search bracket.
        bracket: [f64; 2],

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or residual computation).
    ProblemFailed {
        /// What kind of step was attempted.
        step: Step,

        /// The x value where evaluation failed.
        x: f64,

        /// Current search bracket.
        bracket: [f64; 2],

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the kind of step behind this event.
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            Self::Evaluated { step, .. }
            | Self::ModelFailed { step, .. }
            | Self::ProblemFailed { step, .. } => *step,
        }
    }

    /// Returns the search bracket at the time of this event.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        match self {
            Self::Evaluated { bracket, .. }
            | Self::ModelFailed { bracket, .. }
            | Self::ProblemFailed { bracket, .. } => *bracket,
        }
    }

    /// Returns the residual, or `None` if the evaluation failed.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } => Some(point.residual),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        step: Step,
        x: f64,
        bracket: [f64; 2],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    step,
                    x,
                    bracket,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    step,
                    x,
                    bracket,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}

use modab_core::{EquationProblem, Model, Observer};

use crate::equation::Evaluation;

use super::{
    Action, Config, Error, Event, Point, Solution, Status, Step,
    bracket::Orientation,
    search::{Outcome, eval_and_observe},
    state::State,
};

pub(super) enum InitResult<I, O> {
    Continue(State<I, O>),
    Done(Solution<I, O>),
}

/// Evaluates both bracket endpoints, left first.
///
/// An endpoint whose residual is within `precision` of zero is returned
/// immediately, so a root at the left end costs one evaluation and a root at
/// the right end costs two. Endpoint residuals are kept in the state and
/// never re-evaluated.
pub(super) fn init<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: &mut Obs,
    evals: &mut usize,
) -> Result<InitResult<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let ([x1, x2], orientation) = Orientation::sort(bracket);
    let sorted = [x1, x2];
    let done = |eval: Evaluation<M::Input, M::Output>, status, evals| {
        Solution::from_eval(eval, status, 0, evals, orientation.restore(sorted))
    };

    let outcome = eval_and_observe(model, problem, Step::Left, x1, sorted, observer, evals)?;
    let left = match outcome {
        Outcome::Continue(eval) => eval,
        Outcome::StopEarly(Some(eval)) => {
            return Ok(InitResult::Done(done(eval, Status::StoppedByObserver, *evals)));
        }
        Outcome::StopEarly(None) => return Err(Error::NoSuccessfulEvaluation),
    };
    if left.residual.abs() <= config.precision() {
        return Ok(InitResult::Done(done(left, Status::Converged, *evals)));
    }

    let outcome = eval_and_observe(model, problem, Step::Right, x2, sorted, observer, evals)?;
    let right = match outcome {
        Outcome::Continue(eval) => eval,
        Outcome::StopEarly(_) => {
            return Ok(InitResult::Done(done(left, Status::StoppedByObserver, *evals)));
        }
    };
    if right.residual.abs() <= config.precision() {
        return Ok(InitResult::Done(done(right, Status::Converged, *evals)));
    }

    let right = Point::new(right.x, right.residual);
    Ok(InitResult::Continue(State::new(left, right, orientation, config)))
}

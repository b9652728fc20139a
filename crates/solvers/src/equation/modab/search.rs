use modab_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution, Status, Step,
    init::{InitResult, init},
    state::Candidate,
};

/// Core modab iteration.
///
/// Each iteration takes either a bisection step (with the linearity test) or
/// a false-position step, checks convergence against the last accepted
/// estimate, then updates the bracket and applies the stagnation safeguard.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let mut evals = 0;

    let mut state = match init(model, problem, bracket, config, &mut observer, &mut evals)? {
        InitResult::Continue(state) => state,
        InitResult::Done(solution) => return Ok(solution),
    };

    for iter in 1..=config.max_iters() {
        let (step, x) = match state.candidate() {
            Candidate::Evaluate(step, x) => (step, x),
            Candidate::Diverged => return Ok(state.into_diverged(iter, evals)),
        };

        let bounds = state.bounds();
        let outcome = eval_and_observe(model, problem, step, x, bounds, &mut observer, &mut evals)?;
        let eval = match outcome {
            Outcome::Continue(eval) => eval,
            Outcome::StopEarly(_) => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter, evals));
            }
        };

        let point = Point::new(eval.x, eval.residual);
        if step == Step::Bisection {
            state.test_linearity(point);
        }

        if state.is_converged(point) {
            return Ok(state.into_converged(eval, iter, evals));
        }

        state.advance(step, eval);
        state.apply_safeguard(iter);
    }

    Ok(state.into_solution(Status::MaxIters, config.max_iters(), evals))
}

// ============================================================================
// Eval + observe helper
// ============================================================================

pub(super) enum Outcome<I, O> {
    Continue(Evaluation<I, O>),

    /// The observer asked to stop; carries the evaluation if it succeeded.
    StopEarly(Option<Evaluation<I, O>>),
}

/// Evaluate at `x`, emit event, and handle observer action.
///
/// A failed evaluation becomes an error unless the observer stops the solver.
pub(super) fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    step: Step,
    x: f64,
    bracket: [f64; 2],
    observer: &mut Obs,
    evals: &mut usize,
) -> Result<Outcome<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    *evals += 1;

    match evaluate(model, problem, x) {
        Ok(eval) => {
            let event = Event::Evaluated {
                step,
                point: Point::new(eval.x, eval.residual),
                bracket,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(Outcome::StopEarly(Some(eval))),
                None => Ok(Outcome::Continue(eval)),
            }
        }
        Err(e) => match Event::emit_failure(step, x, bracket, &e, observer) {
            Some(Action::StopEarly) => Ok(Outcome::StopEarly(None)),
            None => Err(e.into()),
        },
    }
}

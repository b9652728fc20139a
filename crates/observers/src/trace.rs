//! Structured logging of solver progress with [`tracing`].

use modab_core::{EquationProblem, Model, Observer};
use modab_solvers::equation::modab::Event;
use tracing::{debug, warn};

/// An observer that records every modab evaluation as a `tracing` event.
///
/// Successful evaluations are logged at `DEBUG` level, failed ones at `WARN`.
/// Each event carries the observer's label, the evaluation count, the step
/// kind, the evaluated point and the current bracket. The observer never
/// returns an action, so it cannot change the solver's result.
///
/// Pass it by value, or as `&mut Trace` to inspect the counts afterwards.
///
/// ```
/// use modab_core::{FnModel, Target};
/// use modab_observers::Trace;
/// use modab_solvers::equation::modab::{self, Config};
///
/// let mut trace = Trace::new("cos");
/// let model = FnModel::new(|x: f64| x.cos() - x);
/// let solution = modab::solve(&model, &Target::zero(), [-11.0, 9.0], &Config::default(), &mut trace)
///     .unwrap();
///
/// assert_eq!(trace.evals(), solution.evals);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    label: String,
    evals: usize,
    failures: usize,
}

impl Trace {
    /// Creates a trace observer whose events are tagged with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            evals: 0,
            failures: 0,
        }
    }

    /// Returns the label attached to every event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of evaluations observed so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Returns the number of failed evaluations observed so far.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    fn record<M, P>(&mut self, event: &Event<'_, M, P>)
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    {
        self.evals += 1;
        let [lower, upper] = event.bracket();

        match event {
            Event::Evaluated { step, point, .. } => debug!(
                label = %self.label,
                eval = self.evals,
                ?step,
                x = point.x,
                residual = point.residual,
                lower,
                upper,
                "modab evaluation"
            ),
            Event::ModelFailed { step, x, error, .. } => {
                self.failures += 1;
                warn!(
                    label = %self.label,
                    eval = self.evals,
                    ?step,
                    x,
                    lower,
                    upper,
                    error = %error,
                    "modab model call failed"
                );
            }
            Event::ProblemFailed { step, x, error, .. } => {
                self.failures += 1;
                warn!(
                    label = %self.label,
                    eval = self.evals,
                    ?step,
                    x,
                    lower,
                    upper,
                    error = %error,
                    "modab problem evaluation failed"
                );
            }
        }
    }
}

impl<M, P, A> Observer<Event<'_, M, P>, A> for Trace
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P>) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by value.
impl<M, P, A> Observer<Event<'_, M, P>, A> for &mut Trace
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P>) -> Option<A> {
        self.record(event);
        None
    }
}

/// Control actions supported by the modab solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the last accepted estimate.
    ///
    /// When returned for a failed evaluation, the failure is not propagated
    /// as an error.
    StopEarly,
}

/// Indicates how a Newton iteration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The measure of `f` at the iterate satisfied the tolerance.
    Converged,
    /// Reached the iteration cap without converging.
    MaxIters,
    /// The derivative was exactly zero at the point the solver was about
    /// to step from. Terminal but not an error: the current iterate is
    /// returned as a best-effort value.
    DegenerateDerivative,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Final approximation (the last trajectory entry).
    pub x: f64,
    /// Measure of `f` at `x`.
    pub measure: f64,
    /// Iterations performed; never exceeds the configured cap.
    pub iters: usize,
    /// Every iterate from the seed to `x`, present when recording was
    /// requested. Its length is always `iters + 1`.
    pub trajectory: Option<Vec<f64>>,
}

impl Solution {
    /// Returns true iff termination was due to the tolerance condition
    /// being satisfied, not cap exhaustion or a degenerate point.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

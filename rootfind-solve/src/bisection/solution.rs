/// Indicates how a bisection search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The measure of `f` at the midpoint satisfied the tolerance, or the
    /// midpoint was an exact root.
    Converged,
    /// Reached the iteration cap without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Final midpoint (the last trajectory entry).
    pub x: f64,
    /// Measure of `f` at `x`.
    pub measure: f64,
    /// Iterations performed; never exceeds the configured cap.
    pub iters: usize,
    /// Every midpoint from the first to `x`, present when recording was
    /// requested. Its length is always `iters + 1`.
    pub trajectory: Option<Vec<f64>>,
}

impl Solution {
    /// Returns true iff termination was due to the tolerance condition
    /// being satisfied (or an exact root), not cap exhaustion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

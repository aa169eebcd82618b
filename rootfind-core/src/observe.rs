/// Receives solver iteration events and decides how the run should proceed.
///
/// Observers are the diagnostic surface of the solvers: each iteration emits
/// one event describing the step just taken, which an observer may print,
/// collect, or use to stop the run early. Returning `Some(action)` requests
/// a solver-specific action; `None` lets the iteration continue unchanged.
///
/// Closures implement `Observer` directly, and `()` is the no-op observer
/// used by the `solve_unobserved` entry points.
pub trait Observer<E, A> {
    /// Observes one solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always lets the solver continue.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

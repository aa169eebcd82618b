/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Tolerance on the measure of `f` at a midpoint.
    pub tolerance: f64,
    /// Maximum number of halvings before giving up.
    pub max_iters: usize,
    /// Record every midpoint in the returned solution.
    pub record_trajectory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iters: 100,
            record_trajectory: false,
        }
    }
}

impl Config {
    /// Validates that the tolerance is finite and strictly positive.
    ///
    /// A cap of zero is allowed: the solver evaluates only the initial
    /// midpoint and reports whether it already satisfies the tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-positive or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        Ok(())
    }
}

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a bisection solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// Both bounds are equal and the iteration cap is zero, so the solver
    /// has nothing to do and no budget to do it with. Equal bounds with a
    /// non-zero cap are permitted; the search simply stalls at the shared
    /// midpoint.
    #[error("degenerate interval: both bounds are {value} with no iteration budget")]
    DegenerateInterval { value: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

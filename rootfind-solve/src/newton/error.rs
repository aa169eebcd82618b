use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a Newton solve.
///
/// Failures of the caller-supplied handles are wrapped only to identify
/// which handle failed and where; the underlying cause is preserved as the
/// source and never translated into a numerical outcome.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("derivative evaluation failed at x = {x}")]
    Derivative {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("ratio evaluation failed at x = {x}")]
    Ratio {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

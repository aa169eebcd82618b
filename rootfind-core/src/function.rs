use std::convert::Infallible;

/// A caller-supplied function of one real variable.
///
/// This is the only thing a solver knows about the functions it is handed:
/// a single evaluation method from `f64` into an arbitrary codomain. How the
/// handle is built (closure, struct over tabulated data, wrapper around a
/// larger model) is invisible to the solver.
///
/// Evaluation is fallible. A solver never catches or translates a handle
/// failure into a numerical outcome; it stops and reports the error with the
/// input that triggered it, so caller bugs stay visible.
///
/// Implementations must be deterministic: the same input must always produce
/// the same output.
///
/// Any `Fn(f64) -> O` closure is a `RealFunction` that cannot fail:
///
/// ```
/// use rootfind_core::RealFunction;
///
/// let f = |x: f64| x * x - 2.0;
/// assert_eq!(f.eval(2.0), Ok(2.0));
/// ```
pub trait RealFunction {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle cannot produce a value at `x`.
    fn eval(&self, x: f64) -> Result<Self::Output, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<O, F> RealFunction for F
where
    F: Fn(f64) -> O,
{
    type Output = O;
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<O, Infallible> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_real_functions() {
        let f = |x: f64| 2.0 * x + 1.0;
        let y = f.eval(3.0).expect("infallible");
        assert_relative_eq!(y, 7.0);
    }

    #[test]
    fn struct_handles_can_fail() {
        #[derive(Debug, thiserror::Error)]
        #[error("undefined at {0}")]
        struct Undefined(f64);

        struct Reciprocal;
        impl RealFunction for Reciprocal {
            type Output = f64;
            type Error = Undefined;

            fn eval(&self, x: f64) -> Result<f64, Undefined> {
                if x == 0.0 {
                    return Err(Undefined(x));
                }
                Ok(1.0 / x)
            }
        }

        assert!(Reciprocal.eval(0.0).is_err());
        assert_relative_eq!(Reciprocal.eval(4.0).expect("nonzero input"), 0.25);
    }
}

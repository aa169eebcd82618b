/// A measure of distance from zero on a function's codomain.
///
/// Solvers decide convergence by comparing `measure(f(x))` against a
/// tolerance, so the codomain itself only needs to support this one
/// reduction to a non-negative real. A measure must satisfy
/// `measure(0) == 0`; otherwise an exact root would never register as
/// converged.
pub trait Measure<T> {
    /// Returns the non-negative distance of `value` from zero.
    fn measure(&self, value: &T) -> f64;
}

/// The absolute-value measure, the default choice for real codomains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteValue;

impl Measure<f64> for AbsoluteValue {
    fn measure(&self, value: &f64) -> f64 {
        value.abs()
    }
}

/// Blanket implementation for measure closures.
impl<T, F> Measure<T> for F
where
    F: Fn(&T) -> f64,
{
    fn measure(&self, value: &T) -> f64 {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn absolute_value_measures_distance_from_zero() {
        assert_relative_eq!(AbsoluteValue.measure(&-3.5), 3.5);
        assert_relative_eq!(AbsoluteValue.measure(&0.0), 0.0);
    }

    #[test]
    fn closures_are_measures() {
        // Euclidean norm over a two-component codomain.
        let norm = |v: &[f64; 2]| v[0].hypot(v[1]);
        assert_relative_eq!(norm.measure(&[3.0, 4.0]), 5.0);
    }
}

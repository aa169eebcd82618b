mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use rootfind_core::{Measure, Observer, RealFunction};

/// Control actions supported by the Newton solver.
pub enum Action {
    /// Stop the solver early and return the current iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton solver after each step.
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The approximation produced by this iteration.
    pub x: f64,
}

/// Approximates a zero of `function` near `seed` using first-order Newton
/// iteration, `x ← x − (f/f′)(x)`.
///
/// `ratio` is the caller-simplified `f/f′` expression, supplied directly so
/// the solver never divides two handle outputs. The derivative handle is
/// consulted only to detect a numerically degenerate point: when it is
/// exactly zero (under `measure`) at the point the solver is about to step
/// from, iteration halts with [`Status::DegenerateDerivative`] instead of
/// stepping through a vanishing slope.
///
/// Convergence is checked before the iteration cap, so a zero cap still
/// reports whether the seed itself satisfies the tolerance. Observers see
/// one [`Event`] per completed step and may stop the run early.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the config fails validation, or the
/// corresponding handle error if `function`, `derivative`, or `ratio` fails
/// to evaluate. Handle failures are never suppressed.
pub fn solve<F, D, R, M, Obs>(
    function: &F,
    derivative: &D,
    ratio: &R,
    measure: &M,
    seed: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction,
    D: RealFunction<Output = F::Output>,
    R: RealFunction<Output = f64>,
    M: Measure<F::Output>,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut x = seed;
    let mut iters = 0;
    let mut trajectory = config.record_trajectory.then(|| vec![seed]);

    let (status, final_measure) = loop {
        let value = function.eval(x).map_err(|e| Error::Function {
            x,
            source: Box::new(e),
        })?;
        let distance = measure.measure(&value);

        if distance <= config.tolerance {
            break (Status::Converged, distance);
        }
        if iters >= config.max_iters {
            break (Status::MaxIters, distance);
        }

        let slope = derivative.eval(x).map_err(|e| Error::Derivative {
            x,
            source: Box::new(e),
        })?;
        #[allow(clippy::float_cmp)]
        if measure.measure(&slope) == 0.0 {
            break (Status::DegenerateDerivative, distance);
        }

        let step = ratio.eval(x).map_err(|e| Error::Ratio {
            x,
            source: Box::new(e),
        })?;

        iters += 1;
        x -= step;
        if let Some(trajectory) = trajectory.as_mut() {
            trajectory.push(x);
        }

        let event = Event { iter: iters, x };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    let value = function.eval(x).map_err(|e| Error::Function {
                        x,
                        source: Box::new(e),
                    })?;
                    break (Status::StoppedByObserver, measure.measure(&value));
                }
            }
        }
    };

    Ok(Solution {
        status,
        x,
        measure: final_measure,
        iters,
        trajectory,
    })
}

/// Runs Newton iteration without observation.
///
/// # Errors
///
/// Returns an error if the config fails validation or a handle fails to
/// evaluate.
pub fn solve_unobserved<F, D, R, M>(
    function: &F,
    derivative: &D,
    ratio: &R,
    measure: &M,
    seed: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: RealFunction,
    D: RealFunction<Output = F::Output>,
    R: RealFunction<Output = f64>,
    M: Measure<F::Output>,
{
    solve(function, derivative, ratio, measure, seed, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::AbsoluteValue;

    // f(x) = x^2 - 2, whose positive zero is sqrt(2).
    fn f(x: f64) -> f64 {
        x * x - 2.0
    }

    fn fp(x: f64) -> f64 {
        2.0 * x
    }

    // f/f' simplified by hand.
    fn ratio(x: f64) -> f64 {
        x / 2.0 - 1.0 / x
    }

    #[test]
    fn finds_sqrt_two_from_seed_one() {
        let solution = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.is_converged());
        assert!(solution.iters <= 6);
        assert!(solution.measure <= 1e-3);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn records_trajectory_when_requested() {
        let config = Config {
            record_trajectory: true,
            ..Config::default()
        };
        let solution = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &config)
            .expect("should solve");

        let trajectory = solution.trajectory.expect("recording was requested");
        assert_eq!(trajectory.len(), solution.iters + 1);
        assert_relative_eq!(trajectory[0], 1.0);
        assert_relative_eq!(*trajectory.last().expect("non-empty"), solution.x);
        // First step from 1: 1 - (1/2 - 1/1) = 1.5
        assert_relative_eq!(trajectory[1], 1.5);
    }

    #[test]
    fn omits_trajectory_by_default() {
        let solution = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &Config::default())
            .expect("should solve");

        assert!(solution.trajectory.is_none());
    }

    #[test]
    fn zero_cap_reports_seed_state() {
        let config = Config {
            max_iters: 0,
            record_trajectory: true,
            ..Config::default()
        };

        // Seed far from the root: no iterations, cap exhausted.
        let solution = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &config)
            .expect("should solve");
        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.trajectory.as_deref(), Some(&[1.0][..]));
        assert_relative_eq!(solution.measure, 1.0);

        // Seed already at the root: convergence reported despite zero budget.
        let solution = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 2.0_f64.sqrt(), &config)
            .expect("should solve");
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn zero_derivative_terminates_without_error() {
        // f'(0) = 0: the solver halts before evaluating the ratio at 0.
        let solution = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 0.0, &Config::default())
            .expect("degenerate point is not an error");

        assert_eq!(solution.status, Status::DegenerateDerivative);
        assert!(!solution.is_converged());
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 0.0);
        assert_relative_eq!(solution.measure, 2.0);
    }

    #[test]
    fn ratio_failure_propagates() {
        #[derive(Debug, thiserror::Error)]
        #[error("ratio undefined at {0}")]
        struct RatioUndefined(f64);

        struct FailingRatio;
        impl RealFunction for FailingRatio {
            type Output = f64;
            type Error = RatioUndefined;

            fn eval(&self, x: f64) -> Result<f64, RatioUndefined> {
                Err(RatioUndefined(x))
            }
        }

        let result =
            solve_unobserved(&f, &fp, &FailingRatio, &AbsoluteValue, 1.0, &Config::default());

        assert!(matches!(result, Err(Error::Ratio { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            tolerance: 0.0,
            ..Config::default()
        };
        let result = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));

        let config = Config {
            tolerance: f64::NAN,
            ..Config::default()
        };
        let result = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn observer_sees_each_step_and_can_stop() {
        let mut steps = Vec::new();
        let observer = |event: &Event| {
            steps.push((event.iter, event.x));
            if event.iter >= 2 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&f, &fp, &ratio, &AbsoluteValue, 1.0, &Config::default(), observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].0, 1);
        assert_relative_eq!(steps[0].1, 1.5);
        // Second step from 1.5: 1.5 - (0.75 - 2/3) = 1.41666...
        assert_relative_eq!(solution.x, 17.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn identical_calls_yield_identical_solutions() {
        let config = Config {
            record_trajectory: true,
            ..Config::default()
        };
        let first = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &config)
            .expect("should solve");
        let second = solve_unobserved(&f, &fp, &ratio, &AbsoluteValue, 1.0, &config)
            .expect("should solve");

        assert_eq!(first, second);
    }

    #[test]
    fn supports_non_real_codomains() {
        // Codomain is a pair, measured by its Euclidean norm.
        let f = |x: f64| (x * x - 2.0, 0.0);
        let fp = |x: f64| (2.0 * x, 0.0);
        let norm = |v: &(f64, f64)| v.0.hypot(v.1);

        let solution = solve_unobserved(&f, &fp, &ratio, &norm, 1.0, &Config::default())
            .expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-3);
    }
}

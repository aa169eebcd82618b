mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use rootfind_core::{Measure, Observer, RealFunction};

/// Control actions supported by the bisection solver.
pub enum Action {
    /// Stop the solver early and return the current midpoint.
    StopEarly,
}

/// Iteration event emitted by the bisection solver after each halving.
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current search interval as `[below, above]` after the shrink.
    pub bracket: [f64; 2],
    /// The midpoint produced by this iteration.
    pub x: f64,
    /// The function value at the midpoint.
    pub value: f64,
}

/// Locates a zero of `function` inside `bounds` by interval halving.
///
/// The bracketing precondition is trusted, not verified: `f` is assumed to
/// change sign across `bounds`, to be negative on the `bounds[0]` side of
/// the root and positive on the `bounds[1]` side. A function with the
/// opposite orientation silently walks the interval away from the root and
/// comes back non-converged; no sign-convention detection is performed.
/// Bounds are used as given, without reordering.
///
/// Convergence is checked before the iteration cap, so a zero cap still
/// reports whether the initial midpoint satisfies the tolerance. A midpoint
/// where `f` is exactly zero ends the search as converged even if the
/// measure does not report it. Observers see one [`Event`] per halving and
/// may stop the run early.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the config fails validation,
/// [`Error::DegenerateInterval`] for equal bounds with a zero cap, or
/// [`Error::Function`] if the handle fails to evaluate.
pub fn solve<F, M, Obs>(
    function: &F,
    measure: &M,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction<Output = f64>,
    M: Measure<f64>,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [mut below, mut above] = bounds;

    #[allow(clippy::float_cmp)]
    if below == above && config.max_iters == 0 {
        return Err(Error::DegenerateInterval { value: below });
    }

    let mut mid = 0.5 * (below + above);
    let mut value = function.eval(mid).map_err(|e| Error::Function {
        x: mid,
        source: Box::new(e),
    })?;
    let mut iters = 0;
    let mut trajectory = config.record_trajectory.then(|| vec![mid]);

    let (status, final_measure) = loop {
        let distance = measure.measure(&value);

        if distance <= config.tolerance {
            break (Status::Converged, distance);
        }
        // An exact root the measure fails to report still ends the search.
        #[allow(clippy::float_cmp)]
        if value == 0.0 {
            break (Status::Converged, distance);
        }
        if iters >= config.max_iters {
            break (Status::MaxIters, distance);
        }

        iters += 1;
        if value < 0.0 {
            below = mid;
        } else {
            above = mid;
        }
        mid = 0.5 * (below + above);
        value = function.eval(mid).map_err(|e| Error::Function {
            x: mid,
            source: Box::new(e),
        })?;
        if let Some(trajectory) = trajectory.as_mut() {
            trajectory.push(mid);
        }

        let event = Event {
            iter: iters,
            bracket: [below, above],
            x: mid,
            value,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    break (Status::StoppedByObserver, measure.measure(&value));
                }
            }
        }
    };

    Ok(Solution {
        status,
        x: mid,
        measure: final_measure,
        iters,
        trajectory,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config fails validation, the interval is
/// degenerate with a zero cap, or the handle fails to evaluate.
pub fn solve_unobserved<F, M>(
    function: &F,
    measure: &M,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: RealFunction<Output = f64>,
    M: Measure<f64>,
{
    solve(function, measure, bounds, config, ())
}

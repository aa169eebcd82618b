//! Zero-finding for functions of one real variable.
//!
//! Two independent solvers share a common contract: a tolerance on a
//! caller-supplied measure of "distance from zero", an iteration cap,
//! optional recording of every iterate, and per-iteration observation.
//!
//! - [`newton`] — first-order Newton iteration from a seed value, using a
//!   caller-simplified `f/f′` ratio.
//! - [`bisection`] — interval halving inside a sign-changing bracket.
//!
//! Neither solver raises an error for ordinary non-convergence; inspect
//! [`newton::Solution::is_converged`] (or the full `Status`) to learn how a
//! run ended. A non-converged `x` is a best-effort value, not a certified
//! root.
//!
//! ```
//! use rootfind_core::AbsoluteValue;
//! use rootfind_solve::newton;
//!
//! let f = |x: f64| x * x - 2.0;
//! let fp = |x: f64| 2.0 * x;
//! let ratio = |x: f64| x / 2.0 - 1.0 / x;
//!
//! let solution = newton::solve_unobserved(
//!     &f,
//!     &fp,
//!     &ratio,
//!     &AbsoluteValue,
//!     1.0,
//!     &newton::Config::default(),
//! )
//! .expect("valid configuration");
//!
//! assert!(solution.is_converged());
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-3);
//! ```

pub mod bisection;
pub mod newton;

pub use rootfind_core::{AbsoluteValue, Measure, Observer, RealFunction};

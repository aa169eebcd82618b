//! Core abstractions shared by the `rootfind` solvers.
//!
//! Solvers are written against three narrow traits:
//!
//! - [`RealFunction`], a caller-supplied handle mapping a real input to a
//!   measurable codomain,
//! - [`Measure`], the distance-from-zero used for convergence checks, and
//! - [`Observer`], an optional per-iteration hook for diagnostics or early
//!   stopping.

mod function;
mod measure;
mod observe;

pub use function::RealFunction;
pub use measure::{AbsoluteValue, Measure};
pub use observe::Observer;

//! Two-dimensional parameter sweeps.
//!
//! Re-evaluates the Black-Scholes formulas over the cross product of two axes,
//! each bound to one [`InputField`](crate::pricing::InputField), holding the
//! other four inputs at their baseline values.

pub mod grid;
pub mod types;

pub use grid::*;
pub use types::*;

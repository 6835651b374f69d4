//! # Heatmap-Lib: Black-Scholes Pricing and Parameter Sweeps
//!
//! `heatmap-lib` prices European call and put options with the closed-form
//! Black-Scholes formula and evaluates two-dimensional parameter sweeps showing
//! how both prices move as any two of the six inputs vary.
//!
//! ## Core Features
//!
//! - **Pricing**: one canonical call/put formula with continuous dividend yield
//! - **Sweeps**: `n x n` call and put grids over any two inputs, the other four
//!   held at a baseline
//! - **Heatmaps**: SVG output with a red-yellow-green scale centred on the
//!   purchase price
//! - **Config & export**: TOML request files and CSV output of sweep results
//!
//! ## Quick Start
//!
//! ```rust
//! use heatmap_lib::{price, sweep, AxisBinding, InputField, OptionInputs};
//!
//! let inputs = OptionInputs::new(31.55, 22.75, 0.5, 0.05, 3.5).with_dividend_yield(0.05);
//! let prices = price(&inputs)?;
//! println!("call {:.2} / put {:.2}", prices.call, prices.put);
//!
//! let x = AxisBinding::new(InputField::Underlying, 20.0, 40.0);
//! let y = AxisBinding::new(InputField::Volatility, 0.1, 0.9);
//! let grid = sweep(&inputs, &x, &y, 10)?;
//! assert_eq!(grid.call.size(), 10);
//! # Ok::<(), heatmap_lib::PricingError>(())
//! ```
//!
//! ## Errors
//!
//! The raw formulas in [`models::bs`] never fail and propagate inf/NaN. The
//! checked entry points [`price`] and [`sweep`] validate first and return
//! [`PricingError::InvalidInput`] or [`PricingError::NumericDegenerate`].

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pricing;
pub mod render;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Errors
pub use error::{PricingError, Result};

// Inputs and single-point pricing
pub use pricing::{price, InputField, OptionInputs, OptionPrices};

// Grid sweep
pub use sweep::{linspace, sweep, AxisBinding, PriceGrid, SweepOutput, DEFAULT_SAMPLE_COUNT};

// Raw formulas
pub use models::bs::{call_price, put_price};

// Presentation
pub use export::{write_csv, write_csv_file};
pub use render::{format_price, render_svg, render_to_file, ColorScale, HeatmapStyle};

#[cfg(feature = "serde")]
pub use config::HeatmapConfig;

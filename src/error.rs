//! Error types for pricing and sweep evaluation.
//!
//! The raw formulas in [`crate::models::bs`] never fail; they propagate
//! non-finite values. The checked entry points ([`crate::price()`] and
//! [`crate::sweep()`]) validate first and surface problems through
//! [`PricingError`].

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by the checked pricing and sweep entry points.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PricingError {
    /// Inputs rejected before any formula was evaluated (missing or
    /// non-positive S/K/σ/T, overlapping axes, empty axis range, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The formula was evaluated but produced infinity or NaN.
    #[error("numeric degenerate result: {message}")]
    NumericDegenerate { message: String },
}

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn numeric_degenerate(msg: impl Into<String>) -> Self {
        Self::NumericDegenerate {
            message: msg.into(),
        }
    }

    /// Returns `true` for errors raised before evaluation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = PricingError::invalid_input("strike price must be > 0, got 0");
        assert_eq!(
            err.to_string(),
            "invalid input: strike price must be > 0, got 0"
        );

        let err = PricingError::numeric_degenerate("call price is NaN");
        assert_eq!(err.to_string(), "numeric degenerate result: call price is NaN");
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(PricingError::invalid_input("sample count must be >= 2"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<PricingError>().is_some());
    }
}

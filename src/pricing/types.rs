use std::fmt;

use crate::error::{PricingError, Result};

/// One of the six Black-Scholes inputs.
///
/// Used to bind a sweep axis to the field it overwrites. The serde form is the
/// snake_case [`key`](InputField::key), e.g. `"risk_free_rate"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum InputField {
    /// Underlying price S
    Underlying,
    /// Strike price K
    Strike,
    /// Volatility σ
    Volatility,
    /// Risk-free rate r
    RiskFreeRate,
    /// Dividend yield q
    DividendYield,
    /// Time to expiration T (years)
    TimeToExpiration,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::Underlying,
        InputField::Strike,
        InputField::Volatility,
        InputField::RiskFreeRate,
        InputField::DividendYield,
        InputField::TimeToExpiration,
    ];

    /// Stable machine-readable key (config files, CSV headers).
    pub fn key(self) -> &'static str {
        match self {
            InputField::Underlying => "underlying",
            InputField::Strike => "strike",
            InputField::Volatility => "volatility",
            InputField::RiskFreeRate => "risk_free_rate",
            InputField::DividendYield => "dividend_yield",
            InputField::TimeToExpiration => "time_to_expiration",
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            InputField::Underlying => "Underlying Price (in USD)",
            InputField::Strike => "Strike Price (in USD)",
            InputField::Volatility => "Volatility",
            InputField::RiskFreeRate => "Risk-Free Interest Rate",
            InputField::DividendYield => "Dividend Yield",
            InputField::TimeToExpiration => "Time to Expiration (Yrs)",
        }
    }

    /// S, K, σ and T must be strictly positive for the formula to be defined.
    pub fn requires_positive(self) -> bool {
        !matches!(self, InputField::RiskFreeRate | InputField::DividendYield)
    }

    fn describe(self) -> &'static str {
        match self {
            InputField::Underlying => "underlying price",
            InputField::Strike => "strike price",
            InputField::Volatility => "volatility",
            InputField::RiskFreeRate => "risk-free rate",
            InputField::DividendYield => "dividend yield",
            InputField::TimeToExpiration => "time to expiration",
        }
    }

    /// Checks a single value against this field's domain.
    pub fn check_value(self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "{} must be finite, got {}",
                self.describe(),
                value
            )));
        }
        if self.requires_positive() && value <= 0.0 {
            return Err(PricingError::invalid_input(format!(
                "{} must be > 0, got {}",
                self.describe(),
                value
            )));
        }
        Ok(())
    }

    /// Error for a field that was never supplied.
    pub fn missing(self) -> PricingError {
        PricingError::invalid_input(format!("{} is not set", self.describe()))
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The six scalar Black-Scholes inputs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionInputs {
    /// Underlying price S
    pub underlying: f64,
    /// Strike price K
    pub strike: f64,
    /// Volatility σ (0.50 = 50%)
    pub volatility: f64,
    /// Continuously compounded risk-free rate r
    pub risk_free_rate: f64,
    /// Continuously compounded dividend yield q
    pub dividend_yield: f64,
    /// Time to expiration T in years
    pub time_to_expiration: f64,
}

impl OptionInputs {
    /// Inputs with no dividend yield.
    pub fn new(
        underlying: f64,
        strike: f64,
        volatility: f64,
        risk_free_rate: f64,
        time_to_expiration: f64,
    ) -> Self {
        Self {
            underlying,
            strike,
            volatility,
            risk_free_rate,
            dividend_yield: 0.0,
            time_to_expiration,
        }
    }

    pub fn with_dividend_yield(mut self, q: f64) -> Self {
        self.dividend_yield = q;
        self
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Underlying => self.underlying,
            InputField::Strike => self.strike,
            InputField::Volatility => self.volatility,
            InputField::RiskFreeRate => self.risk_free_rate,
            InputField::DividendYield => self.dividend_yield,
            InputField::TimeToExpiration => self.time_to_expiration,
        }
    }

    /// Copy of `self` with `field` overwritten by `value`.
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        match field {
            InputField::Underlying => self.underlying = value,
            InputField::Strike => self.strike = value,
            InputField::Volatility => self.volatility = value,
            InputField::RiskFreeRate => self.risk_free_rate = value,
            InputField::DividendYield => self.dividend_yield = value,
            InputField::TimeToExpiration => self.time_to_expiration = value,
        }
        self
    }

    /// Rejects non-positive S, K, σ, T and non-finite values anywhere.
    pub fn validate(&self) -> Result<()> {
        self.validate_except(&[])
    }

    /// Like [`validate`](Self::validate) but skips the given fields; used by the
    /// sweep, where axis-bound fields are replaced before evaluation.
    pub fn validate_except(&self, skip: &[InputField]) -> Result<()> {
        InputField::ALL
            .iter()
            .filter(|field| !skip.contains(*field))
            .try_for_each(|&field| field.check_value(self.get(field)))
    }
}

/// Call and put prices for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

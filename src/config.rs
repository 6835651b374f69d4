//! TOML configuration for a single heatmap request.
//!
//! Baseline values are `Option`s at parse time so that an absent key is reported
//! as "not set" rather than being confused with a legitimate zero.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::pricing::{InputField, OptionInputs};
use crate::render::HeatmapStyle;
use crate::sweep::{sweep, AxisBinding, SweepOutput, DEFAULT_SAMPLE_COUNT};

/// Baseline inputs as written in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineConfig {
    pub underlying: Option<f64>,
    pub strike: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_free_rate: Option<f64>,
    /// Defaults to 0 when absent
    pub dividend_yield: Option<f64>,
    pub time_to_expiration: Option<f64>,
}

impl BaselineConfig {
    fn value(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::Underlying => self.underlying,
            InputField::Strike => self.strike,
            InputField::Volatility => self.volatility,
            InputField::RiskFreeRate => self.risk_free_rate,
            InputField::DividendYield => self.dividend_yield.or(Some(0.0)),
            InputField::TimeToExpiration => self.time_to_expiration,
        }
    }

    /// Build inputs, skipping presence/domain checks for fields in `bound`.
    ///
    /// Skipped fields that are absent are filled with NaN; a sweep overwrites
    /// them before any evaluation.
    pub fn to_inputs_except(&self, bound: &[InputField]) -> Result<OptionInputs, PricingError> {
        let mut inputs = OptionInputs::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN);
        for field in InputField::ALL {
            match self.value(field) {
                Some(v) => inputs = inputs.with(field, v),
                None if bound.contains(&field) => {}
                None => return Err(field.missing()),
            }
        }
        inputs.validate_except(bound)?;
        Ok(inputs)
    }

    /// Build fully validated inputs for single-point pricing.
    pub fn to_inputs(&self) -> Result<OptionInputs, PricingError> {
        self.to_inputs_except(&[])
    }
}

/// Purchase prices the colour scale is centred on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    pub call: Option<f64>,
    pub put: Option<f64>,
}

impl ThresholdConfig {
    /// A purchase price, when given, must be finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (name, value) in [("call", self.call), ("put", self.put)] {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                return Err(PricingError::invalid_input(format!(
                    "{} purchase price must be finite, got {}",
                    name, v
                )));
            }
        }
        Ok(())
    }
}

/// Where and how large to write outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub svg: Option<PathBuf>,
    #[serde(default)]
    pub csv: Option<PathBuf>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Print each cell's price inside it
    #[serde(default = "default_annotate")]
    pub annotate: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg: None,
            csv: None,
            width: default_width(),
            height: default_height(),
            annotate: default_annotate(),
        }
    }
}

/// Main configuration struct for a heatmap request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatmapConfig {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    #[serde(default)]
    pub baseline: BaselineConfig,

    pub x_axis: AxisBinding,

    pub y_axis: AxisBinding,

    #[serde(default)]
    pub thresholds: ThresholdConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl HeatmapConfig {
    /// Config with the default sample count and an empty baseline.
    pub fn new(x_axis: AxisBinding, y_axis: AxisBinding) -> Self {
        Self {
            sample_count: default_sample_count(),
            baseline: BaselineConfig::default(),
            x_axis,
            y_axis,
            thresholds: ThresholdConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse heatmap config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Baseline inputs for the sweep; axis-bound fields may be left unset.
    pub fn sweep_baseline(&self) -> Result<OptionInputs, PricingError> {
        self.baseline
            .to_inputs_except(&[self.x_axis.field, self.y_axis.field])
    }

    /// Run the configured sweep.
    pub fn evaluate(&self) -> Result<SweepOutput, PricingError> {
        self.thresholds.validate()?;
        let baseline = self.sweep_baseline()?;
        sweep(&baseline, &self.x_axis, &self.y_axis, self.sample_count)
    }

    /// Rendering options derived from the output and threshold sections.
    pub fn style(&self) -> Result<HeatmapStyle, PricingError> {
        self.thresholds.validate()?;
        Ok(HeatmapStyle {
            width: self.output.width,
            height: self.output.height,
            call_threshold: self.thresholds.call,
            put_threshold: self.thresholds.put,
            annotate: self.output.annotate,
            ..HeatmapStyle::default()
        })
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_width() -> u32 {
    1600
}

fn default_height() -> u32 {
    760
}

fn default_annotate() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
sample_count = 5

[baseline]
underlying = 31.55
strike = 22.75
volatility = 0.5
risk_free_rate = 0.05
dividend_yield = 0.05
time_to_expiration = 3.5

[x_axis]
field = "underlying"
min = 20.0
max = 40.0

[y_axis]
field = "volatility"
min = 0.1
max = 0.9

[thresholds]
call = 12.0

[output]
svg = "out/heatmap.svg"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = HeatmapConfig::from_toml_str(FULL).unwrap();
        assert_eq!(config.sample_count, 5);
        assert_eq!(config.x_axis.field, InputField::Underlying);
        assert_eq!(config.y_axis.field, InputField::Volatility);
        assert_eq!(config.thresholds.call, Some(12.0));
        assert_eq!(config.thresholds.put, None);
        assert_eq!(config.output.svg, Some(PathBuf::from("out/heatmap.svg")));
        assert_eq!(config.output.width, 1600);

        let out = config.evaluate().unwrap();
        assert_eq!(out.sample_count(), 5);

        let style = config.style().unwrap();
        assert_eq!(style.call_threshold, Some(12.0));
        assert_eq!(style.height, 760);
        assert!(style.annotate);
    }

    #[test]
    fn test_defaults() {
        let config = HeatmapConfig::from_toml_str(
            r#"
x_axis = { field = "strike", min = 10.0, max = 30.0 }
y_axis = { field = "time_to_expiration", min = 0.25, max = 2.0 }
"#,
        )
        .unwrap();
        assert_eq!(config.sample_count, DEFAULT_SAMPLE_COUNT);
        assert!(config.output.svg.is_none());
        assert!(config.output.annotate);
    }

    #[test]
    fn test_annotate_can_be_disabled() {
        let text = FULL.replace("[output]", "[output]\nannotate = false");
        let config = HeatmapConfig::from_toml_str(&text).unwrap();
        assert!(!config.output.annotate);
        assert!(!config.style().unwrap().annotate);
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let text = FULL.replace("call = 12.0", "call = nan");
        let config = HeatmapConfig::from_toml_str(&text).unwrap();
        assert!(config.thresholds.call.unwrap().is_nan());

        let err = config.style().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("call purchase price must be finite"), "{}", err);
        assert!(config.evaluate().unwrap_err().is_invalid_input());

        let text = FULL.replace("call = 12.0", "put = inf");
        let config = HeatmapConfig::from_toml_str(&text).unwrap();
        assert!(config.style().is_err());
    }

    #[test]
    fn test_missing_is_distinct_from_zero() {
        let missing = BaselineConfig {
            underlying: None,
            strike: Some(100.0),
            volatility: Some(0.2),
            risk_free_rate: Some(0.0),
            dividend_yield: None,
            time_to_expiration: Some(1.0),
        };
        let err = missing.to_inputs().unwrap_err();
        assert!(err.to_string().contains("underlying price is not set"), "{}", err);

        let zero = BaselineConfig {
            underlying: Some(0.0),
            ..missing.clone()
        };
        let err = zero.to_inputs().unwrap_err();
        assert!(err.to_string().contains("underlying price must be > 0"), "{}", err);

        // r = 0 and absent q are accepted
        let ok = BaselineConfig {
            underlying: Some(100.0),
            ..missing
        };
        let inputs = ok.to_inputs().unwrap();
        assert_eq!(inputs.risk_free_rate, 0.0);
        assert_eq!(inputs.dividend_yield, 0.0);
    }

    #[test]
    fn test_axis_fields_need_not_be_in_baseline() {
        let mut config = HeatmapConfig::from_toml_str(FULL).unwrap();
        config.baseline.underlying = None;
        config.baseline.volatility = None;
        assert!(config.evaluate().is_ok());
        assert!(config.baseline.to_inputs().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = HeatmapConfig::from_toml_str(
            r#"
x_axis = { field = "gamma", min = 0.1, max = 0.2 }
y_axis = { field = "strike", min = 10.0, max = 30.0 }
"#,
        );
        assert!(err.is_err());
    }
}

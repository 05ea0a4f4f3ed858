use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::pricing::error::Parameter;
use crate::pricing::types::PricingRequest;

/// One numeric input on the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Prompt shown to the user
    pub label: String,
    /// Initial value
    pub default: f64,
    /// Smallest accepted entry (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest accepted entry (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Suggested increment, shown as a hint
    #[serde(default = "default_step")]
    pub step: f64,
}

impl FieldSpec {
    pub fn new(label: &str, default: f64, min: Option<f64>, max: Option<f64>, step: f64) -> Self {
        Self {
            label: label.to_string(),
            default,
            min,
            max,
            step,
        }
    }

    /// Whether `value` lies within `[min, max]`. NaN is never accepted.
    pub fn accepts(&self, value: f64) -> bool {
        !value.is_nan()
            && self.min.map_or(true, |min| value >= min)
            && self.max.map_or(true, |max| value <= max)
    }

    /// Human-readable range, e.g. `[0.01, 10]` or `>= 0.01`.
    pub fn range_hint(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("[{}, {}]", min, max),
            (Some(min), None) => format!(">= {}", min),
            (None, Some(max)) => format!("<= {}", max),
            (None, None) => "any".to_string(),
        }
    }
}

/// Layout and affordances of the pricing form.
///
/// Ranges here only constrain what the form accepts; the pricing core applies its
/// own domain checks independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Decimal places used when rendering prices
    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default = "default_call_heading")]
    pub call_heading: String,

    #[serde(default = "default_put_heading")]
    pub put_heading: String,

    #[serde(default = "default_spot")]
    pub spot: FieldSpec,

    #[serde(default = "default_strike")]
    pub strike: FieldSpec,

    #[serde(default = "default_maturity")]
    pub maturity: FieldSpec,

    #[serde(default = "default_rate")]
    pub rate: FieldSpec,

    #[serde(default = "default_volatility")]
    pub volatility: FieldSpec,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            precision: default_precision(),
            call_heading: default_call_heading(),
            put_heading: default_put_heading(),
            spot: default_spot(),
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
            volatility: default_volatility(),
        }
    }
}

impl FormConfig {
    /// The classic form layout
    pub fn standard() -> Self {
        Self::default()
    }

    /// Relaxed ranges for long maturities, negative rates and high volatility
    pub fn wide() -> Self {
        Self {
            maturity: FieldSpec::new("Time to Maturity (T, in years)", 1.0, Some(0.01), Some(30.0), 0.1),
            rate: FieldSpec::new("Risk-Free Interest Rate (r)", 0.05, Some(-0.05), Some(1.0), 0.01),
            volatility: FieldSpec::new("Volatility (σ)", 0.2, Some(0.0), Some(2.0), 0.01),
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys fall back to the standard layout.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: FormConfig = toml::from_str(s).context("Failed to parse form config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML form config from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid form config {}", path.display()))?;
        info!("Loaded form config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize form config")
    }

    pub fn field(&self, parameter: Parameter) -> &FieldSpec {
        match parameter {
            Parameter::Spot => &self.spot,
            Parameter::Strike => &self.strike,
            Parameter::Maturity => &self.maturity,
            Parameter::Rate => &self.rate,
            Parameter::Volatility => &self.volatility,
        }
    }

    /// Request pre-filled with every field's default.
    pub fn default_request(&self) -> PricingRequest {
        let mut request = PricingRequest::new(0.0, 0.0, 0.0, 0.0, 0.0);
        for parameter in Parameter::ALL {
            request.set(parameter, self.field(parameter).default);
        }
        request
    }

    /// Check the config is self-consistent.
    pub fn validate(&self) -> Result<()> {
        if self.precision > 10 {
            bail!("precision must be at most 10, got {}", self.precision);
        }
        for parameter in Parameter::ALL {
            let field = self.field(parameter);
            if !field.default.is_finite() {
                bail!("{}: default must be finite, got {}", parameter, field.default);
            }
            if let (Some(min), Some(max)) = (field.min, field.max) {
                if min > max {
                    bail!("{}: min {} exceeds max {}", parameter, min, max);
                }
            }
            if !field.accepts(field.default) {
                bail!(
                    "{}: default {} outside range {}",
                    parameter,
                    field.default,
                    field.range_hint()
                );
            }
            if !(field.step > 0.0) {
                bail!("{}: step must be > 0, got {}", parameter, field.step);
            }
        }
        Ok(())
    }
}

fn default_title() -> String {
    "Black-Scholes Option Pricing Model".to_string()
}

fn default_description() -> String {
    "Adjust the input parameters to see the call and put option prices.".to_string()
}

fn default_precision() -> usize {
    2
}

fn default_call_heading() -> String {
    "Call Option Price".to_string()
}

fn default_put_heading() -> String {
    "Put Option Price".to_string()
}

fn default_step() -> f64 {
    0.01
}

fn default_spot() -> FieldSpec {
    FieldSpec::new("Current Stock Price (S)", 100.0, Some(0.01), None, 0.1)
}

fn default_strike() -> FieldSpec {
    FieldSpec::new("Strike Price (X)", 100.0, Some(0.01), None, 0.1)
}

fn default_maturity() -> FieldSpec {
    FieldSpec::new("Time to Maturity (T, in years)", 1.0, Some(0.01), Some(10.0), 0.1)
}

fn default_rate() -> FieldSpec {
    FieldSpec::new("Risk-Free Interest Rate (r)", 0.05, Some(0.0), Some(1.0), 0.01)
}

fn default_volatility() -> FieldSpec {
    FieldSpec::new("Volatility (σ)", 0.2, Some(0.0), Some(1.0), 0.01)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_defaults() {
        let config = FormConfig::standard();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.default_request(),
            PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2)
        );
        assert_eq!(config.maturity.min, Some(0.01));
        assert_eq!(config.maturity.max, Some(10.0));
        assert_eq!(config.volatility.min, Some(0.0));
        assert_eq!(config.spot.max, None);
    }

    #[test]
    fn test_wide_preset_is_valid() {
        let config = FormConfig::wide();
        assert!(config.validate().is_ok());
        assert!(config.rate.accepts(-0.03));
        assert!(!FormConfig::standard().rate.accepts(-0.03));
        assert!(config.maturity.accepts(25.0));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
            precision = 4

            [volatility]
            label = "Vol"
            default = 0.35
            min = 0.05
            max = 1.5
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.precision, 4);
        assert_eq!(config.volatility.label, "Vol");
        assert_eq!(config.volatility.default, 0.35);
        assert_eq!(config.volatility.step, 0.01);
        assert_eq!(config.spot, FormConfig::default().spot);
        assert_eq!(config.call_heading, "Call Option Price");
    }

    #[test]
    fn test_default_outside_range_rejected() {
        let toml = r#"
            [maturity]
            label = "T"
            default = 12.0
            min = 0.01
            max = 10.0
        "#;
        let err = FormConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("outside range"), "{}", err);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = FormConfig::default();
        config.rate.min = Some(0.5);
        config.rate.max = Some(0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_precision_rejected() {
        let config = FormConfig {
            precision: 11,
            ..FormConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(FormConfig::from_toml_str("precision = \"two\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_default() {
        let config = FormConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(FormConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_range_hint_and_accepts() {
        let f = FieldSpec::new("x", 1.0, Some(0.01), Some(10.0), 0.1);
        assert_eq!(f.range_hint(), "[0.01, 10]");
        assert!(f.accepts(0.01));
        assert!(f.accepts(10.0));
        assert!(!f.accepts(10.5));
        assert!(!f.accepts(f64::NAN));

        let open = FieldSpec::new("y", 1.0, Some(0.01), None, 0.1);
        assert_eq!(open.range_hint(), ">= 0.01");
        assert!(open.accepts(1.0e9));
    }
}

//! Error types for Black-Scholes pricing.

use thiserror::Error;

/// Pricing errors.
///
/// # Variants
/// - `InvalidDomain`: a parameter lies outside the formula's domain
/// - `NumericOverflow`: an intermediate term became non-finite
///
/// # Examples
/// ```
/// use bs_pricer::{Parameter, PricingError};
///
/// let err = PricingError::InvalidDomain { parameter: Parameter::Volatility, value: 0.0 };
/// assert_eq!(err.to_string(), "Invalid domain: volatility (sigma) = 0, must be > 0");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PricingError {
    /// A parameter is non-positive (S, X, T, sigma) or non-finite (any).
    #[error("Invalid domain: {parameter} = {value}, {}", .parameter.requirement())]
    InvalidDomain {
        /// Offending parameter
        parameter: Parameter,
        /// The rejected value
        value: f64,
    },

    /// An intermediate term overflowed despite in-domain inputs.
    #[error("Numeric overflow: {term} is not finite")]
    NumericOverflow {
        /// Name of the term that overflowed
        term: &'static str,
    },
}

/// The five inputs of a pricing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter {
    Spot,
    Strike,
    Maturity,
    Rate,
    Volatility,
}

impl Parameter {
    /// All parameters in form order.
    pub const ALL: [Parameter; 5] = [
        Parameter::Spot,
        Parameter::Strike,
        Parameter::Maturity,
        Parameter::Rate,
        Parameter::Volatility,
    ];

    /// Whether the formula requires the parameter to be strictly positive.
    pub fn must_be_positive(self) -> bool {
        !matches!(self, Parameter::Rate)
    }

    fn requirement(self) -> &'static str {
        if self.must_be_positive() {
            "must be > 0"
        } else {
            "must be finite"
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Parameter::Spot => "spot (S)",
            Parameter::Strike => "strike (X)",
            Parameter::Maturity => "maturity (T)",
            Parameter::Rate => "rate (r)",
            Parameter::Volatility => "volatility (sigma)",
        };
        f.write_str(name)
    }
}

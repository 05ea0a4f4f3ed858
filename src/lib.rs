//! # bs-pricer: Black-Scholes Pricing for European Options
//!
//! `bs-pricer` computes European call and put prices with the closed-form Black-Scholes
//! formula and ships a small interactive terminal form that collects the five market
//! parameters and renders both prices.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put from spot, strike, maturity, rate and volatility
//! - **Explicit domain checks**: non-positive or non-finite inputs are rejected, never priced
//! - **Pluggable normal CDF**: `statrs` by default, `libm` as an alternative provider
//! - **Form shell**: TOML-configurable labels, defaults and input ranges
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{price, PricingError};
//!
//! let prices = price(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! assert!((prices.call - 10.45).abs() < 0.01);
//! assert!((prices.put - 5.57).abs() < 0.01);
//!
//! // Zero volatility is outside the formula's domain
//! assert!(matches!(
//!     price(100.0, 100.0, 1.0, 0.05, 0.0),
//!     Err(PricingError::InvalidDomain { .. })
//! ));
//! # Ok::<(), PricingError>(())
//! ```
//!
//! ## Form Presets
//!
//! - `standard()`: the classic form (T up to 10 years, r and sigma in [0, 1])
//! - `wide()`: long-dated and negative-rate scenarios

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod form;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Request, result and error types
pub use pricing::{
    error::{Parameter, PricingError},
    types::{PricingRequest, PricingResult},
};

// Normal CDF providers and the pricing kernel
pub use models::{
    bs::black_scholes_price,
    normal::{LibmNormal, StatrsNormal},
    traits::NormalCdf,
};

// Form shell and its configuration
#[cfg(feature = "serde")]
pub use form::{
    config::{FieldSpec, FormConfig},
    shell::FormShell,
};

// ================================================================================================
// DEFAULT FORMS
// ================================================================================================

/// Pre-configured form layouts.
///
/// # Available Forms
///
/// - [`standard()`]: the classic single-screen form
/// - [`wide()`]: relaxed ranges for long-dated and negative-rate scenarios
#[cfg(feature = "serde")]
pub mod default_forms {
    use crate::form::config::FormConfig;

    /// Classic form: S=100, X=100, T=1, r=5%, sigma=20%.
    ///
    /// **Ranges:**
    /// - S, X: at least 0.01
    /// - T: 0.01 to 10 years
    /// - r: 0 to 1
    /// - sigma: 0 to 1
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_pricer::default_forms;
    ///
    /// let form = default_forms::standard();
    /// assert_eq!(form.precision, 2);
    /// ```
    pub fn standard() -> FormConfig {
        FormConfig::standard()
    }

    /// Wide form for stress scenarios.
    ///
    /// **Ranges:**
    /// - T: 0.01 to 30 years
    /// - r: -0.05 to 1
    /// - sigma: 0 to 2
    pub fn wide() -> FormConfig {
        FormConfig::wide()
    }
}

// ================================================================================================
// PRICING
// ================================================================================================

/// Price a European call and put with the Black-Scholes formula.
///
/// # Arguments
///
/// * `s` - Spot price of the underlying, must be > 0
/// * `x` - Strike price, must be > 0
/// * `t` - Time to maturity in years, must be > 0
/// * `r` - Annualized continuously-compounded risk-free rate (decimal), any finite value
/// * `sigma` - Annualized volatility (decimal), must be > 0
///
/// # Returns
///
/// [`PricingResult`] holding both prices. For valid inputs both are non-negative and
/// satisfy put-call parity `call - put = s - x * exp(-r * t)` to within rounding.
///
/// # Errors
///
/// * [`PricingError::InvalidDomain`] if `s`, `x`, `t` or `sigma` is not strictly
///   positive, or any argument is NaN or infinite
/// * [`PricingError::NumericOverflow`] if an intermediate term overflows for extreme
///   but in-domain magnitudes
///
/// # Example
///
/// ```rust
/// use bs_pricer::price;
///
/// let p = price(50.0, 60.0, 0.5, 0.03, 0.3).unwrap();
/// let parity = 50.0 - 60.0 * (-0.03_f64 * 0.5).exp();
/// assert!((p.call - p.put - parity).abs() < 1e-9);
/// ```
pub fn price(s: f64, x: f64, t: f64, r: f64, sigma: f64) -> Result<PricingResult, PricingError> {
    PricingRequest::new(s, x, t, r, sigma).price()
}

use crate::models::{bs::black_scholes_price, normal::StatrsNormal, traits::NormalCdf};
use crate::pricing::error::{Parameter, PricingError};

/// Inputs to a single Black-Scholes valuation.
///
/// Requests are plain values: build one, price it, drop it. Construction does
/// not validate; [`PricingRequest::validate`] runs as the first step of every
/// pricing call so that requests built directly are checked too.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (X)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Annualized continuously-compounded risk-free rate, as a decimal (r)
    pub rate: f64,
    /// Annualized volatility, as a decimal (sigma)
    pub volatility: f64,
}

impl PricingRequest {
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        }
    }

    /// Value of a single parameter.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Spot => self.spot,
            Parameter::Strike => self.strike,
            Parameter::Maturity => self.maturity,
            Parameter::Rate => self.rate,
            Parameter::Volatility => self.volatility,
        }
    }

    /// Replace a single parameter.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::Spot => self.spot = value,
            Parameter::Strike => self.strike = value,
            Parameter::Maturity => self.maturity = value,
            Parameter::Rate => self.rate = value,
            Parameter::Volatility => self.volatility = value,
        }
    }

    /// Check every parameter against the formula's domain.
    ///
    /// S, X, T and sigma must be finite and strictly positive; r must be finite.
    /// The first offending parameter, in form order, is reported.
    pub fn validate(&self) -> Result<(), PricingError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            let in_domain = if parameter.must_be_positive() {
                value.is_finite() && value > 0.0
            } else {
                value.is_finite()
            };
            if !in_domain {
                return Err(PricingError::InvalidDomain { parameter, value });
            }
        }
        Ok(())
    }

    /// Price with the default CDF provider.
    pub fn price(&self) -> Result<PricingResult, PricingError> {
        black_scholes_price(self, &StatrsNormal)
    }

    /// Price with a caller-supplied CDF provider.
    pub fn price_with<C: NormalCdf + ?Sized>(
        &self,
        cdf: &C,
    ) -> Result<PricingResult, PricingError> {
        black_scholes_price(self, cdf)
    }

    /// Strike discounted to today, `X * exp(-r * T)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.maturity).exp()
    }
}

/// Prices of the European call and put on the same request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call: f64,
    pub put: f64,
}

impl PricingResult {
    /// Deviation from put-call parity: `(call - put) - (S - X * exp(-r * T))`.
    pub fn parity_residual(&self, request: &PricingRequest) -> f64 {
        (self.call - self.put) - (request.spot - request.discounted_strike())
    }
}

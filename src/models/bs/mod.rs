// Closed-form Black-Scholes valuation of a European call and put on the same
// request. Greeks, dividends and implied volatility are out of scope; the
// function only turns a validated request into two prices.

use log::debug;

use crate::models::traits::NormalCdf;
use crate::pricing::error::PricingError;
use crate::pricing::types::{PricingRequest, PricingResult};

fn finite(value: f64, term: &'static str) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NumericOverflow { term })
    }
}

/// Price of a European call and put under Black-Scholes assumptions.
///
/// ```text
/// d1   = (ln(S / X) + (r + sigma^2 / 2) * T) / (sigma * sqrt(T))
/// d2   = d1 - sigma * sqrt(T)
/// call = S * N(d1) - X * exp(-r * T) * N(d2)
/// put  = X * exp(-r * T) * N(-d2) - S * N(-d1)
/// ```
///
/// # Errors
///
/// * [`PricingError::InvalidDomain`] if S, X, T or sigma is not strictly positive,
///   or any parameter is non-finite
/// * [`PricingError::NumericOverflow`] if an intermediate term is non-finite
#[allow(non_snake_case)]
pub fn black_scholes_price<C: NormalCdf + ?Sized>(
    request: &PricingRequest,
    cdf: &C,
) -> Result<PricingResult, PricingError> {
    if let Err(err) = request.validate() {
        debug!("rejected {:?}: {}", request, err);
        return Err(err);
    }

    let PricingRequest {
        spot: S,
        strike: X,
        maturity: T,
        rate: r,
        volatility: sigma,
    } = *request;

    let log_moneyness = finite((S / X).ln(), "ln(S / X)")?;
    let discount = finite((-r * T).exp(), "exp(-r * T)")?;
    let vol_sqrt_t = sigma * T.sqrt();

    let d1 = finite(
        (log_moneyness + (r + sigma.powi(2) / 2.0) * T) / vol_sqrt_t,
        "d1",
    )?;
    let d2 = finite(d1 - vol_sqrt_t, "d2")?;

    let call = finite(S * cdf.cdf(d1) - X * discount * cdf.cdf(d2), "call")?;
    let put = finite(X * discount * cdf.cdf(-d2) - S * cdf.cdf(-d1), "put")?;

    // Deep out-of-the-money legs can round a hair below zero.
    let result = PricingResult {
        call: call.max(0.0),
        put: put.max(0.0),
    };

    debug!(
        "d1={:.6} d2={:.6} call={:.6} put={:.6} parity_residual={:.3e}",
        d1,
        d2,
        result.call,
        result.put,
        result.parity_residual(request)
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::normal::{LibmNormal, StatrsNormal};
    use crate::pricing::error::Parameter;

    fn price(s: f64, x: f64, t: f64, r: f64, sigma: f64) -> Result<PricingResult, PricingError> {
        black_scholes_price(&PricingRequest::new(s, x, t, r, sigma), &StatrsNormal)
    }

    #[test]
    fn test_reference_at_the_money() {
        let res = price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert!((res.call - 10.450_583_572_2).abs() < 1e-8, "call={}", res.call);
        assert!((res.put - 5.573_526_022_3).abs() < 1e-8, "put={}", res.put);
    }

    #[test]
    fn test_zero_rate_parity_is_spot_minus_strike() {
        let res = price(80.0, 100.0, 0.25, 0.0, 0.4).unwrap();
        assert!((res.call - res.put - (80.0 - 100.0)).abs() < 1e-10);
    }

    #[test]
    fn test_providers_produce_matching_prices() {
        let req = PricingRequest::new(42.0, 40.0, 0.5, 0.1, 0.2);
        let a = black_scholes_price(&req, &StatrsNormal).unwrap();
        let b = black_scholes_price(&req, &LibmNormal).unwrap();
        let scale = req.spot.max(req.strike);
        assert!((a.call - b.call).abs() < 1e-10 * scale);
        assert!((a.put - b.put).abs() < 1e-10 * scale);
    }

    #[test]
    fn test_zero_volatility_rejected_before_division() {
        let err = price(100.0, 100.0, 1.0, 0.05, 0.0).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidDomain {
                parameter: Parameter::Volatility,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_zero_maturity_rejected_before_division() {
        let err = price(100.0, 100.0, 0.0, 0.05, 0.2).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidDomain {
                parameter: Parameter::Maturity,
                ..
            }
        ));
    }

    #[test]
    fn test_log_moneyness_overflow() {
        let err = price(f64::MAX, f64::MIN_POSITIVE, 1.0, 0.05, 0.2).unwrap_err();
        assert_eq!(err, PricingError::NumericOverflow { term: "ln(S / X)" });
    }

    #[test]
    fn test_discount_overflow() {
        let err = price(100.0, 100.0, 10.0, -1.0e3, 0.2).unwrap_err();
        assert_eq!(err, PricingError::NumericOverflow { term: "exp(-r * T)" });
    }

    #[test]
    fn test_d1_overflow() {
        // sigma^2 overflows to infinity while every input stays finite.
        let err = price(100.0, 100.0, 1.0, 0.05, 1.0e200).unwrap_err();
        assert_eq!(err, PricingError::NumericOverflow { term: "d1" });
    }

    #[test]
    fn test_deep_out_of_the_money_call_is_not_negative() {
        let res = price(1.0, 1.0e6, 0.01, 0.0, 0.05).unwrap();
        assert!(res.call >= 0.0);
        assert!(res.call < 1e-12);
    }

    #[test]
    fn test_dyn_provider_is_accepted() {
        let cdf: &dyn NormalCdf = &LibmNormal;
        let res = black_scholes_price(&PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2), cdf)
            .unwrap();
        assert!((res.call - 10.45).abs() < 0.01);
    }
}

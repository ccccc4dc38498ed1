// Closed-form Black-Scholes prices for European calls and puts on a
// non-dividend-paying underlying. Greeks live in `greeks.rs`.

pub mod greeks;

use tracing::debug;

use crate::error::{Field, PricingError, Result};
use crate::market_params::MarketParams;
use crate::models::utils::normal_cdf;
use crate::models::OptionType;

/// Risk-adjusted arguments `(d1, d2)` of the normal CDF.
///
/// Returns `Ok(None)` at expiry (`time_to_expiry == 0`), where the closed
/// form is replaced by intrinsic value. Inputs that are valid on their own
/// but cannot be evaluated in `f64` are rejected: an overflowing `K·e^(-rT)`
/// names `time_to_expiry`, an underflowing `sigma * sqrt(T)` or a non-finite
/// `d1` names `volatility`.
pub fn d1_d2(params: &MarketParams) -> Result<Option<(f64, f64)>> {
    params.validate()?;
    if !params.discounted_strike().is_finite() {
        return Err(PricingError::invalid_input(
            Field::TimeToExpiry,
            params.time_to_expiry,
            "discount factor e^(-rT) overflows",
        ));
    }
    if params.is_expired() {
        return Ok(None);
    }

    let sig_sqrt_t = params.volatility * params.time_to_expiry.sqrt();
    if !sig_sqrt_t.is_normal() {
        return Err(PricingError::invalid_input(
            Field::Volatility,
            params.volatility,
            "sigma * sqrt(time_to_expiry) underflows",
        ));
    }
    let d1 = ((params.spot / params.strike).ln()
        + (params.risk_free_rate + 0.5 * params.volatility.powi(2)) * params.time_to_expiry)
        / sig_sqrt_t;
    let d2 = d1 - sig_sqrt_t;
    if !d1.is_finite() || !d2.is_finite() {
        return Err(non_finite_result(params));
    }
    debug!(d1, d2, "computed Black-Scholes arguments");
    Ok(Some((d1, d2)))
}

/// Error for a valid input set whose evaluation leaves the `f64` range.
pub(crate) fn non_finite_result(params: &MarketParams) -> PricingError {
    PricingError::invalid_input(
        Field::Volatility,
        params.volatility,
        "too small for this expiry, result is not finite",
    )
}

/// Payoff at expiry: `max(S - K, 0)` for a call, `max(K - S, 0)` for a put.
pub fn intrinsic_value(params: &MarketParams, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => (params.spot - params.strike).max(0.0),
        OptionType::Put => (params.strike - params.spot).max(0.0),
    }
}

/// Price from precomputed `d1_d2`; `None` means the option has expired.
pub(crate) fn price_from_d(
    params: &MarketParams,
    option_type: OptionType,
    d: Option<(f64, f64)>,
) -> f64 {
    let Some((d1, d2)) = d else {
        return intrinsic_value(params, option_type);
    };
    let s = params.spot;
    let k_disc = params.discounted_strike();
    match option_type {
        OptionType::Call => s * normal_cdf(d1) - k_disc * normal_cdf(d2),
        OptionType::Put => k_disc * normal_cdf(-d2) - s * normal_cdf(-d1),
    }
}

/// Price of a European option of either side.
pub fn option_price(params: &MarketParams, option_type: OptionType) -> Result<f64> {
    let price = price_from_d(params, option_type, d1_d2(params)?);
    if !price.is_finite() {
        return Err(non_finite_result(params));
    }
    Ok(price)
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn call_price(params: &MarketParams) -> Result<f64> {
    option_price(params, OptionType::Call)
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn put_price(params: &MarketParams) -> Result<f64> {
    option_price(params, OptionType::Put)
}

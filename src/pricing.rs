//! Full evaluation of a call/put pair: both prices and all ten Greeks from a
//! single `d1`/`d2` computation.

use tracing::debug;

use crate::error::Result;
use crate::market_params::MarketParams;
use crate::models::bs::greeks::{greeks_from_d, Greeks};
use crate::models::bs::{d1_d2, non_finite_result, price_from_d};
use crate::models::OptionType;

/// Prices and Greeks for the call and put sharing one set of market inputs.
///
/// All Greeks are in base units (see [`Greeks`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
    pub call_greeks: Greeks,
    pub put_greeks: Greeks,
    /// `None` at expiry
    pub d1: Option<f64>,
    /// `None` at expiry
    pub d2: Option<f64>,
}

impl PricingResult {
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }

    pub fn greeks(&self, option_type: OptionType) -> &Greeks {
        match option_type {
            OptionType::Call => &self.call_greeks,
            OptionType::Put => &self.put_greeks,
        }
    }

    /// Prices and all ten Greeks are finite.
    pub fn is_finite(&self) -> bool {
        self.call_price.is_finite()
            && self.put_price.is_finite()
            && self.call_greeks.is_finite()
            && self.put_greeks.is_finite()
    }

    /// `(C - P) - (S - K·e^(-rT))`; zero up to rounding for a consistent result.
    pub fn parity_residual(&self, params: &MarketParams) -> f64 {
        (self.call_price - self.put_price) - (params.spot - params.discounted_strike())
    }
}

/// Black-Scholes prices and Greeks for both sides.
///
/// Inputs are validated first; on failure nothing is computed and the error
/// names the offending field. A successful result is always finite: input
/// sets that overflow or underflow `f64` during evaluation are rejected.
///
/// # Example
///
/// ```rust
/// use bs_greeks::{price_and_greeks, MarketParams};
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
/// let result = price_and_greeks(&params)?;
/// assert!((result.call_price - 10.4506).abs() < 1e-3);
/// assert!((result.put_price - 5.5735).abs() < 1e-3);
/// # Ok::<(), bs_greeks::PricingError>(())
/// ```
pub fn price_and_greeks(params: &MarketParams) -> Result<PricingResult> {
    let d = d1_d2(params)?;
    let result = PricingResult {
        call_price: price_from_d(params, OptionType::Call, d),
        put_price: price_from_d(params, OptionType::Put, d),
        call_greeks: greeks_from_d(params, OptionType::Call, d),
        put_greeks: greeks_from_d(params, OptionType::Put, d),
        d1: d.map(|(d1, _)| d1),
        d2: d.map(|(_, d2)| d2),
    };
    if !result.is_finite() {
        return Err(non_finite_result(params));
    }
    debug!(
        call = result.call_price,
        put = result.put_price,
        "priced option pair"
    );
    Ok(result)
}

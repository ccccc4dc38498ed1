// src/market_params.rs

//! Market inputs for a single Black-Scholes evaluation.
//!
//! The five scalars are validated together so that the pricing code can
//! assume `spot > 0`, `strike > 0`, `time_to_expiry >= 0`, `volatility > 0`
//! and finite values everywhere.

use crate::error::{Field, PricingError, Result};

/// Option market parameters for one European call/put pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Current underlying price
    pub spot: f64,
    /// Option strike price
    pub strike: f64,
    /// Time to expiration (years)
    pub time_to_expiry: f64,
    /// Annualized, continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Annualized volatility of log-returns (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
}

/// Checks every field in declaration order and reports the first violation.
fn validate_market_params(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<()> {
    if !spot.is_finite() {
        return Err(PricingError::invalid_input(Field::Spot, spot, "must be finite"));
    }
    if spot <= 0.0 {
        return Err(PricingError::invalid_input(Field::Spot, spot, "must be > 0"));
    }
    if !strike.is_finite() {
        return Err(PricingError::invalid_input(
            Field::Strike,
            strike,
            "must be finite",
        ));
    }
    if strike <= 0.0 {
        return Err(PricingError::invalid_input(Field::Strike, strike, "must be > 0"));
    }
    if !time_to_expiry.is_finite() {
        return Err(PricingError::invalid_input(
            Field::TimeToExpiry,
            time_to_expiry,
            "must be finite",
        ));
    }
    if time_to_expiry < 0.0 {
        return Err(PricingError::invalid_input(
            Field::TimeToExpiry,
            time_to_expiry,
            "must be >= 0",
        ));
    }
    // Negative rates are allowed; only NaN and infinities are rejected.
    if !risk_free_rate.is_finite() {
        return Err(PricingError::invalid_input(
            Field::RiskFreeRate,
            risk_free_rate,
            "must be finite",
        ));
    }
    if !volatility.is_finite() {
        return Err(PricingError::invalid_input(
            Field::Volatility,
            volatility,
            "must be finite",
        ));
    }
    if volatility <= 0.0 {
        return Err(PricingError::invalid_input(
            Field::Volatility,
            volatility,
            "must be > 0",
        ));
    }

    Ok(())
}

impl MarketParams {
    /// Creates validated market parameters.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        validate_market_params(spot, strike, time_to_expiry, risk_free_rate, volatility)?;

        Ok(Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        })
    }

    /// Re-checks the preconditions; useful when the struct was built with a
    /// literal or deserialized rather than through [`MarketParams::new`].
    pub fn validate(&self) -> Result<()> {
        validate_market_params(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
        )
    }

    /// True when the option has reached expiry and the closed form is not used.
    pub fn is_expired(&self) -> bool {
        self.time_to_expiry == 0.0
    }

    /// Discount factor `e^(-rT)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Present value of the strike, `K·e^(-rT)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }
}

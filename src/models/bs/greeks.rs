//! Option Greeks
//!
//! First and second order sensitivities of the Black-Scholes price. Values
//! are in base units: vega per 1.00 of volatility, theta per year, rho per
//! 1.00 of rate. [`Greeks::scaled`] converts to reporting conventions.
//!
//! At expiry the convention is: delta is the moneyness indicator (0.5 when
//! exactly at the money), and gamma, theta, vega and rho are all zero.

use tracing::debug;

use super::{d1_d2, non_finite_result};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::market_params::MarketParams;
use crate::models::utils::{normal_cdf, normal_pdf};
use crate::models::OptionType;

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: dV/dS
    pub delta: f64,
    /// Gamma: d²V/dS²
    pub gamma: f64,
    /// Theta: dV/dt, per year
    pub theta: f64,
    /// Vega: dV/dσ, per unit of volatility
    pub vega: f64,
    /// Rho: dV/dr, per unit of rate
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Greeks expressed in the units selected by `config`.
    pub fn scaled(&self, config: &ReportConfig) -> Self {
        Self {
            delta: self.delta,
            gamma: self.gamma,
            theta: self.theta / config.theta_unit.divisor(),
            vega: self.vega / config.vega_unit.divisor(),
            rho: self.rho / config.rho_unit.divisor(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
            && self.vega.is_finite()
            && self.rho.is_finite()
    }
}

fn expiry_greeks(params: &MarketParams, option_type: OptionType) -> Greeks {
    let call_delta = if params.spot > params.strike {
        1.0
    } else if params.spot < params.strike {
        0.0
    } else {
        0.5
    };
    let delta = match option_type {
        OptionType::Call => call_delta,
        OptionType::Put => call_delta - 1.0,
    };
    debug!(delta, "option at expiry, using boundary Greeks");
    Greeks::new(delta, 0.0, 0.0, 0.0, 0.0)
}

/// Greeks from precomputed `d1_d2`; `None` means the option has expired.
pub(crate) fn greeks_from_d(
    params: &MarketParams,
    option_type: OptionType,
    d: Option<(f64, f64)>,
) -> Greeks {
    let Some((d1, d2)) = d else {
        return expiry_greeks(params, option_type);
    };

    let s = params.spot;
    let t = params.time_to_expiry;
    let r = params.risk_free_rate;
    let sigma = params.volatility;
    let sqrt_t = t.sqrt();
    let k_disc = params.discounted_strike();
    let pdf_d1 = normal_pdf(d1);

    // Side-independent terms
    let gamma = pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * pdf_d1 * sqrt_t;
    let time_decay = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);

    match option_type {
        OptionType::Call => {
            let nd2 = normal_cdf(d2);
            Greeks::new(
                normal_cdf(d1),
                gamma,
                time_decay - r * k_disc * nd2,
                vega,
                k_disc * t * nd2,
            )
        }
        OptionType::Put => {
            let nd2m = normal_cdf(-d2);
            Greeks::new(
                normal_cdf(d1) - 1.0,
                gamma,
                time_decay + r * k_disc * nd2m,
                vega,
                -k_disc * t * nd2m,
            )
        }
    }
}

/// Greeks for one side of the option pair.
pub fn greeks(params: &MarketParams, option_type: OptionType) -> Result<Greeks> {
    let greeks = greeks_from_d(params, option_type, d1_d2(params)?);
    if !greeks.is_finite() {
        return Err(non_finite_result(params));
    }
    Ok(greeks)
}

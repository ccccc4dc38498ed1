//! # bs-greeks: Closed-Form Black-Scholes Pricing and Greeks
//!
//! `bs-greeks` evaluates the Black-Scholes formula for European calls and puts
//! on a non-dividend-paying underlying, together with the five standard
//! Greeks for each side. Inputs are validated up front and every failure names
//! the offending field; a successful result never contains NaN or infinity.
//!
//! ## Core Features
//!
//! - **Prices**: call and put from one `d1`/`d2` evaluation
//! - **Greeks**: delta, gamma, theta, vega and rho for both sides
//! - **Expiry boundary**: intrinsic value with documented Greek conventions at `T = 0`
//! - **Reporting**: unit conventions (per vol point, per day, ...) loaded from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{price_and_greeks, report, default_configs, MarketParams};
//!
//! let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! let result = price_and_greeks(&params)?;
//!
//! assert!((result.call_greeks.delta - 0.6368).abs() < 1e-3);
//! println!("{}", report::render(&result, &default_configs::desk()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Units
//!
//! [`PricingResult`] always holds base units: vega per 1.00 of volatility,
//! theta per year, rho per 1.00 of rate. Use [`ReportConfig`] to scale them
//! for display.
//!
//! ## Normal Distribution
//!
//! The normal CDF is `0.5 * erfc(-x / sqrt(2))` (via `libm`), accurate to
//! within 1e-12 on `[-8, 8]` and saturated to exactly 0 or 1 outside.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod market_params;
pub mod models;
pub mod pricing;
pub mod report;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{ReportConfig, RhoUnit, ThetaUnit, VegaUnit};
pub use error::{Field, PricingError, Result};
pub use market_params::MarketParams;
pub use models::{
    bs::{
        call_price, d1_d2,
        greeks::{greeks, Greeks},
        intrinsic_value, option_price, put_price,
    },
    utils::{normal_cdf, normal_pdf},
    OptionType,
};
pub use pricing::{price_and_greeks, PricingResult};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured reporting conventions.
///
/// - [`reference()`]: base units, full precision, call-side Greeks only
/// - [`desk()`]: vega per vol point, theta per calendar day, rho per rate point
/// - [`full()`]: base units, six decimals, both sides (the default)
pub mod default_configs {
    use crate::config::ReportConfig;

    /// Plain output matching the classic script printout.
    ///
    /// ```rust
    /// use bs_greeks::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert!(!config.include_put_greeks);
    /// ```
    pub fn reference() -> ReportConfig {
        ReportConfig::reference()
    }

    /// Trading-desk conventions, four decimals.
    pub fn desk() -> ReportConfig {
        ReportConfig::desk()
    }

    /// Everything, in base units.
    pub fn full() -> ReportConfig {
        ReportConfig::full()
    }

    /// Look up a preset by name (`reference`, `desk`, `full`).
    pub fn by_name(name: &str) -> Option<ReportConfig> {
        match name.to_lowercase().as_str() {
            "reference" => Some(reference()),
            "desk" => Some(desk()),
            "full" => Some(full()),
            _ => None,
        }
    }
}

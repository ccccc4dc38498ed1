//! Reporting conventions.
//!
//! [`PricingResult`](crate::PricingResult) always carries base units. The
//! settings here only decide how values are scaled and formatted when a
//! result is rendered, and can be loaded from a TOML file.

#[cfg(feature = "serde")]
use anyhow::{Context, Result};
#[cfg(feature = "serde")]
use std::path::Path;

/// Unit in which vega is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VegaUnit {
    /// Change in price for a 1.00 change in volatility
    #[default]
    PerUnitVol,
    /// Change in price for a 1 percentage point change in volatility
    PerVolPoint,
}

impl VegaUnit {
    pub fn divisor(self) -> f64 {
        match self {
            VegaUnit::PerUnitVol => 1.0,
            VegaUnit::PerVolPoint => 100.0,
        }
    }
}

/// Unit in which theta is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThetaUnit {
    #[default]
    PerYear,
    /// Year divided into 365 calendar days
    PerCalendarDay,
    /// Year divided into 252 trading days
    PerTradingDay,
}

impl ThetaUnit {
    pub fn divisor(self) -> f64 {
        match self {
            ThetaUnit::PerYear => 1.0,
            ThetaUnit::PerCalendarDay => 365.0,
            ThetaUnit::PerTradingDay => 252.0,
        }
    }
}

/// Unit in which rho is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RhoUnit {
    #[default]
    PerUnitRate,
    /// Change in price for a 1 percentage point change in the rate
    PerRatePoint,
}

impl RhoUnit {
    pub fn divisor(self) -> f64 {
        match self {
            RhoUnit::PerUnitRate => 1.0,
            RhoUnit::PerRatePoint => 100.0,
        }
    }
}

/// Main configuration struct for rendering pricing results
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    pub vega_unit: VegaUnit,
    pub theta_unit: ThetaUnit,
    pub rho_unit: RhoUnit,

    /// Digits after the decimal point; `None` prints the shortest
    /// round-trip representation of each `f64`.
    pub precision: Option<usize>,

    /// Also print the put-side Greeks
    pub include_put_greeks: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl ReportConfig {
    /// Base units, full precision, call-side Greeks only.
    pub fn reference() -> Self {
        Self {
            vega_unit: VegaUnit::PerUnitVol,
            theta_unit: ThetaUnit::PerYear,
            rho_unit: RhoUnit::PerUnitRate,
            precision: None,
            include_put_greeks: false,
        }
    }

    /// Trading-desk conventions: per vol point, per calendar day, per rate point.
    pub fn desk() -> Self {
        Self {
            vega_unit: VegaUnit::PerVolPoint,
            theta_unit: ThetaUnit::PerCalendarDay,
            rho_unit: RhoUnit::PerRatePoint,
            precision: Some(4),
            include_put_greeks: true,
        }
    }

    /// Base units, six decimals, both sides.
    pub fn full() -> Self {
        Self {
            vega_unit: VegaUnit::PerUnitVol,
            theta_unit: ThetaUnit::PerYear,
            rho_unit: RhoUnit::PerUnitRate,
            precision: Some(6),
            include_put_greeks: true,
        }
    }
}

#[cfg(feature = "serde")]
impl ReportConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse report configuration")
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

//! Error types for the pricer.
//!
//! Every precondition violation is reported as [`PricingError::InvalidInput`]
//! before any formula is evaluated, so callers never see a NaN or a division
//! by zero coming out of `d1`.

use std::fmt;
use thiserror::Error;

/// Market input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    Spot,
    Strike,
    TimeToExpiry,
    RiskFreeRate,
    Volatility,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Spot => "spot",
            Field::Strike => "strike",
            Field::TimeToExpiry => "time_to_expiry",
            Field::RiskFreeRate => "risk_free_rate",
            Field::Volatility => "volatility",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: Field,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(field: Field, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// The input that caused the error.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidInput { field, .. } => *field,
        }
    }
}

//! Text rendering of a [`PricingResult`].
//!
//! Rendering only builds strings; printing is left to the caller so the
//! pricing path stays free of I/O.

use crate::config::ReportConfig;
use crate::models::bs::greeks::Greeks;
use crate::models::OptionType;
use crate::pricing::PricingResult;

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

fn push_line(out: &mut String, label: &str, value: f64, precision: Option<usize>) {
    out.push_str(&format!("{}: {}\n", label, format_value(value, precision)));
}

fn push_greeks(out: &mut String, prefix: &str, greeks: &Greeks, precision: Option<usize>) {
    let rows = [
        ("Delta", greeks.delta),
        ("Gamma", greeks.gamma),
        ("Theta", greeks.theta),
        ("Vega", greeks.vega),
        ("Rho", greeks.rho),
    ];
    for (name, value) in rows {
        push_line(out, &format!("{}{}", prefix, name), value, precision);
    }
}

/// Same result with Greeks converted to the units chosen in `config`.
pub fn scaled_result(result: &PricingResult, config: &ReportConfig) -> PricingResult {
    PricingResult {
        call_greeks: result.call_greeks.scaled(config),
        put_greeks: result.put_greeks.scaled(config),
        ..*result
    }
}

/// Labeled lines in the form `Call Option Price: <value>`.
///
/// Call-side Greeks are printed without a prefix (`Delta: ...`), put-side
/// Greeks, when enabled, as `Put Delta: ...`.
pub fn render(result: &PricingResult, config: &ReportConfig) -> String {
    let scaled = scaled_result(result, config);
    let precision = config.precision;
    let mut out = String::new();

    push_line(&mut out, "Call Option Price", scaled.call_price, precision);
    push_line(&mut out, "Put Option Price", scaled.put_price, precision);
    push_greeks(&mut out, "", scaled.greeks(OptionType::Call), precision);
    if config.include_put_greeks {
        let prefix = format!("{} ", OptionType::Put.label());
        push_greeks(&mut out, &prefix, scaled.greeks(OptionType::Put), precision);
    }
    out
}

/// TOML document of the result with Greeks in the configured units.
#[cfg(feature = "serde")]
pub fn render_toml(result: &PricingResult, config: &ReportConfig) -> anyhow::Result<String> {
    use anyhow::Context;

    toml::to_string(&scaled_result(result, config)).context("Failed to serialize pricing result")
}

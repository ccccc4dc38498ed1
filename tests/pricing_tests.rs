
use approx::assert_abs_diff_eq;
use bs_greeks::{
    call_price, greeks, price_and_greeks, put_price, Field, MarketParams, OptionType,
    PricingError,
};
use test_utils::{params, reference_params};

/// Reference scenario values to three decimals.
#[test]
fn test_reference_scenario() {
    let result = price_and_greeks(&reference_params()).expect("pricing failed");

    assert_abs_diff_eq!(result.call_price, 10.4506, epsilon = 1e-3);
    assert_abs_diff_eq!(result.put_price, 5.5735, epsilon = 1e-3);
    assert_abs_diff_eq!(result.call_greeks.delta, 0.6368, epsilon = 1e-3);
    assert_abs_diff_eq!(result.call_greeks.gamma, 0.0188, epsilon = 1e-3);
    assert_abs_diff_eq!(result.call_greeks.vega, 37.524, epsilon = 1e-3);
    assert_abs_diff_eq!(result.call_greeks.theta, -6.414, epsilon = 1e-3);
    assert_abs_diff_eq!(result.call_greeks.rho, 53.232, epsilon = 1e-3);

    // Put side, derived from the same d1/d2
    assert_abs_diff_eq!(result.put_greeks.delta, -0.3632, epsilon = 1e-3);
    assert_abs_diff_eq!(result.put_greeks.theta, -1.6579, epsilon = 1e-3);
    assert_abs_diff_eq!(result.put_greeks.rho, -41.8905, epsilon = 1e-3);

    assert_abs_diff_eq!(result.d1.unwrap(), 0.35, epsilon = 1e-12);
    assert_abs_diff_eq!(result.d2.unwrap(), 0.15, epsilon = 1e-12);
}

/// Separate call/put/greeks entry points agree with the combined evaluation.
#[test]
fn test_single_side_functions_agree() {
    let p = params(250.0, 300.0, 0.5, 0.01, 0.45);
    let result = price_and_greeks(&p).unwrap();

    assert_eq!(call_price(&p).unwrap(), result.call_price);
    assert_eq!(put_price(&p).unwrap(), result.put_price);
    assert_eq!(greeks(&p, OptionType::Call).unwrap(), result.call_greeks);
    assert_eq!(greeks(&p, OptionType::Put).unwrap(), result.put_greeks);
}

/// strike = 0 is rejected with the strike field, never priced.
#[test]
fn test_zero_strike_is_invalid_input() {
    let err = MarketParams::new(100.0, 0.0, 1.0, 0.05, 0.2).unwrap_err();
    match err {
        PricingError::InvalidInput { field, value, .. } => {
            assert_eq!(field, Field::Strike);
            assert_eq!(value, 0.0);
        }
    }

    // Bypassing the constructor still hits validation in the pricer
    let literal = MarketParams {
        strike: 0.0,
        ..reference_params()
    };
    let err = price_and_greeks(&literal).unwrap_err();
    assert_eq!(err.field(), Field::Strike);
    assert!(err.to_string().contains("strike"));
}

/// Every precondition maps to its own field.
#[test]
fn test_invalid_input_fields() {
    let cases = [
        ((0.0, 100.0, 1.0, 0.05, 0.2), Field::Spot),
        ((-5.0, 100.0, 1.0, 0.05, 0.2), Field::Spot),
        ((100.0, -1.0, 1.0, 0.05, 0.2), Field::Strike),
        ((100.0, 100.0, -0.01, 0.05, 0.2), Field::TimeToExpiry),
        ((100.0, 100.0, 1.0, f64::INFINITY, 0.2), Field::RiskFreeRate),
        ((100.0, 100.0, 1.0, 0.05, 0.0), Field::Volatility),
        ((100.0, 100.0, 1.0, 0.05, -0.2), Field::Volatility),
        ((f64::NAN, 100.0, 1.0, 0.05, 0.2), Field::Spot),
    ];

    for ((s, k, t, r, v), expected) in cases {
        let err = MarketParams::new(s, k, t, r, v).unwrap_err();
        assert_eq!(err.field(), expected, "inputs ({s}, {k}, {t}, {r}, {v})");
    }
}

/// At expiry prices collapse to intrinsic value and Greeks follow the
/// boundary convention.
#[test]
fn test_expiry_boundary() {
    let itm = price_and_greeks(&params(110.0, 100.0, 0.0, 0.05, 0.2)).unwrap();
    assert_eq!(itm.call_price, 10.0);
    assert_eq!(itm.put_price, 0.0);
    assert_eq!(itm.call_greeks.delta, 1.0);
    assert_eq!(itm.put_greeks.delta, 0.0);

    let otm = price_and_greeks(&params(90.0, 100.0, 0.0, 0.05, 0.2)).unwrap();
    assert_eq!(otm.call_price, 0.0);
    assert_eq!(otm.put_price, 10.0);
    assert_eq!(otm.call_greeks.delta, 0.0);
    assert_eq!(otm.put_greeks.delta, -1.0);

    let atm = price_and_greeks(&params(100.0, 100.0, 0.0, 0.05, 0.2)).unwrap();
    assert_eq!(atm.call_greeks.delta, 0.5);
    assert_eq!(atm.put_greeks.delta, -0.5);

    for result in [itm, otm, atm] {
        for g in [result.call_greeks, result.put_greeks] {
            assert_eq!(g.gamma, 0.0);
            assert_eq!(g.theta, 0.0);
            assert_eq!(g.vega, 0.0);
            assert_eq!(g.rho, 0.0);
        }
        assert!(result.d1.is_none());
    }
}

/// A tiny positive expiry lands close to the boundary values.
#[test]
fn test_near_expiry_approaches_boundary() {
    let result = price_and_greeks(&params(110.0, 100.0, 1e-10, 0.05, 0.2)).unwrap();
    assert_abs_diff_eq!(result.call_price, 10.0, epsilon = 1e-6);
    assert_abs_diff_eq!(result.put_price, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(result.call_greeks.delta, 1.0, epsilon = 1e-9);
}

/// Deep out-of-the-money options price to (numerically) zero without NaN.
#[test]
fn test_far_wings_are_finite() {
    let deep_otm_call = price_and_greeks(&params(10.0, 1_000.0, 0.1, 0.05, 0.1)).unwrap();
    assert!(deep_otm_call.call_price.abs() < 1e-12);
    assert!(deep_otm_call.call_greeks.is_finite());
    assert!(deep_otm_call.put_greeks.is_finite());
    assert_eq!(deep_otm_call.call_greeks.delta, 0.0);
    assert_eq!(deep_otm_call.put_greeks.delta, -1.0);
}

/// Inputs that pass validation but leave the f64 range during evaluation
/// are rejected with a named field rather than returned as NaN or inf.
#[test]
fn test_unrepresentable_inputs_are_invalid() {
    // sigma * sqrt(T) underflows to zero: d1 would be 0/0
    let err = price_and_greeks(&params(100.0, 100.0, 1e-100, 0.0, 1e-300)).unwrap_err();
    assert_eq!(err.field(), Field::Volatility);

    // e^(-rT) overflows: K·e^(-rT) = inf, then inf * 0 in the put
    let err = price_and_greeks(&params(100.0, 100.0, 1e4, -0.1, 0.2)).unwrap_err();
    assert_eq!(err.field(), Field::TimeToExpiry);
    assert!(err.to_string().contains("overflows"));

    // Subnormal sigma * sqrt(T) would make gamma infinite
    let err = price_and_greeks(&params(100.0, 100.0, 1.0, 0.0, 1e-320)).unwrap_err();
    assert_eq!(err.field(), Field::Volatility);

    // Each factor of the gamma denominator is normal, the product is not
    let err = price_and_greeks(&params(1e-300, 1e-300, 1.0, 0.0, 1e-10)).unwrap_err();
    assert_eq!(err.field(), Field::Volatility);

    // Single-side entry points agree
    let overflow = params(100.0, 100.0, 1e4, -0.1, 0.2);
    assert_eq!(call_price(&overflow).unwrap_err().field(), Field::TimeToExpiry);
    assert_eq!(
        greeks(&overflow, OptionType::Put).unwrap_err().field(),
        Field::TimeToExpiry
    );
}

/// Across extreme magnitudes every call either fails or is fully finite.
#[test]
fn test_extreme_inputs_never_return_non_finite() {
    let levels = [1e-300, 1e-10, 1.0, 1e10, 1e300];
    let expiries = [1e-300, 1e-10, 1.0, 1e4];
    let rates = [-0.5, 0.0, 0.5];
    let vols = [1e-300, 1e-10, 0.2, 10.0];

    for &s in &levels {
        for &k in &levels {
            for &t in &expiries {
                for &r in &rates {
                    for &v in &vols {
                        let p = params(s, k, t, r, v);
                        if let Ok(result) = price_and_greeks(&p) {
                            assert!(result.is_finite(), "non-finite result for {:?}", p);
                            assert!(result.d1.map_or(true, f64::is_finite));
                        }
                    }
                }
            }
        }
    }
}

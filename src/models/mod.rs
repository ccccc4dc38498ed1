pub mod bs;

/// Which side of the call/put pair a quantity refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn label(self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// Standard normal distribution helpers shared by pricing and Greeks
pub mod utils {
    /// Beyond this many standard deviations the CDF is reported as exactly 0 or 1.
    pub const CDF_SATURATION: f64 = 8.0;

    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative
    /// precision in the lower tail (no `1 - erf` cancellation). Agrees with
    /// `statrs` to within 1e-12 on `[-8, 8]` and saturates outside it.
    pub fn normal_cdf(x: f64) -> f64 {
        if x < -CDF_SATURATION {
            return 0.0;
        }
        if x > CDF_SATURATION {
            return 1.0;
        }
        0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal probability density function
    pub fn normal_pdf(x: f64) -> f64 {
        INV_SQRT_2PI * (-0.5 * x * x).exp()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_normal_cdf_known_values() {
            assert_eq!(normal_cdf(0.0), 0.5);
            assert!((normal_cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-15);
            assert!((normal_cdf(-1.96) - 0.024_997_895_148_220_4).abs() < 1e-15);
            assert!((normal_cdf(0.35) - 0.636_830_651_175_619).abs() < 1e-12);
        }

        #[test]
        fn test_normal_cdf_saturates() {
            assert_eq!(normal_cdf(-8.5), 0.0);
            assert_eq!(normal_cdf(8.5), 1.0);
            assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
            assert_eq!(normal_cdf(f64::INFINITY), 1.0);
            assert!(normal_cdf(-8.0) > 0.0);
        }

        #[test]
        fn test_normal_cdf_symmetry() {
            for i in -80..=80 {
                let x = i as f64 * 0.1;
                assert!((normal_cdf(x) + normal_cdf(-x) - 1.0).abs() < 1e-15);
            }
        }

        #[test]
        fn test_normal_pdf() {
            assert!((normal_pdf(0.0) - INV_SQRT_2PI).abs() < 1e-16);
            assert!((normal_pdf(0.35) - 0.375_240_346_916_938).abs() < 1e-12);
            assert_eq!(normal_pdf(1.3), normal_pdf(-1.3));
        }
    }
}

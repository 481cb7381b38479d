use std::f64::consts::{FRAC_1_SQRT_2, PI};

use statrs::function::erf::erfc;

/// `ln(f64::MAX)`
pub(crate) const LN_MAX: f64 = 709.782_712_893_384;

/// Log-density of the standard normal distribution.
pub(crate) fn ln_norm_pdf(z: f64) -> f64 {
    -0.5 * z * z - 0.5 * (2.0 * PI).ln()
}

/// Standard normal distribution function, accurate in both tails.
pub(crate) fn norm_cdf(z: f64) -> f64 {
    0.5 * erfc(-z * FRAC_1_SQRT_2)
}

/// `k * ln(x)`, with `0 * ln(0) = 0`.
pub(crate) fn xlogy(k: f64, x: f64) -> f64 {
    if k == 0.0 { 0.0 } else { k * x.ln() }
}

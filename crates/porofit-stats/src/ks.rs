//! One-sample Kolmogorov–Smirnov test
//!
//! Compares the empirical CDF of a sample with a reference CDF. The statistic
//! is the largest vertical distance between the two; the p-value comes from
//! the asymptotic Kolmogorov distribution with Stephens' small-sample
//! correction, which is accurate to a few percent from `n = 5` upwards.
//!
//! # Examples
//!
//! ```
//! use porofit_stats::ks::KsTest;
//!
//! // Evenly spread points against the uniform CDF on [0, 1]
//! let sample: Vec<f64> = (1..=99).map(|i| f64::from(i) / 100.0).collect();
//! let test = KsTest::from_sorted(&sample, |x| x.clamp(0.0, 1.0));
//!
//! assert!(test.statistic < 0.02);
//! assert!(test.p_value > 0.99);
//! ```

/// Result of a one-sample K-S test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsTest {
    /// `sup |F_n(x) - F(x)|`, in `[0, 1]`.
    pub statistic: f64,
    /// Probability of a statistic at least this large under the null hypothesis.
    pub p_value: f64,
}

impl KsTest {
    /// Runs the test on a sample sorted in ascending order.
    ///
    /// An empty sample yields `statistic = 0` and `p_value = 1`.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted<F>(sorted_values: &[f64], cdf: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let statistic = statistic(sorted_values, cdf);
        let p_value = kolmogorov_p_value(statistic, sorted_values.len());
        Self { statistic, p_value }
    }
}

/// K-S statistic `D = max(D+, D-)` of sorted data against `cdf`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn statistic<F>(sorted_values: &[f64], cdf: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = sorted_values.len() as f64;
    sorted_values
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x).clamp(0.0, 1.0);
            let d_plus = (i + 1) as f64 / n - f;
            let d_minus = f - i as f64 / n;
            d_plus.max(d_minus)
        })
        .fold(0.0, f64::max)
}

/// Asymptotic p-value of a K-S statistic `d` for a sample of size `n`.
///
/// The result is clamped to `[0, 1]`; `n = 0` gives `1`.
///
/// # Examples
///
/// ```
/// use porofit_stats::ks::kolmogorov_p_value;
///
/// assert_eq!(kolmogorov_p_value(0.0, 100), 1.0);
/// assert!(kolmogorov_p_value(0.5, 100) < 1e-10);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn kolmogorov_p_value(d: f64, n: usize) -> f64 {
    if n == 0 || d.is_nan() {
        return 1.0;
    }
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    kolmogorov_sf(lambda).clamp(0.0, 1.0)
}

/// Survival function of the Kolmogorov distribution, `Q(λ) = P(K > λ)`.
fn kolmogorov_sf(lambda: f64) -> f64 {
    const MAX_TERMS: u32 = 100;
    const EPS: f64 = 1e-16;

    if lambda <= 0.0 {
        return 1.0;
    }
    if lambda < 1.18 {
        // Jacobi theta form of the CDF; converges fast for small lambda
        let factor = -std::f64::consts::PI.powi(2) / (8.0 * lambda * lambda);
        let mut sum = 0.0;
        for k in 1..=MAX_TERMS {
            let odd = f64::from(2 * k - 1);
            let term = (factor * odd * odd).exp();
            sum += term;
            if term < EPS * sum {
                break;
            }
        }
        1.0 - (2.0 * std::f64::consts::PI).sqrt() / lambda * sum
    } else {
        let mut sum = 0.0;
        let mut sign = 1.0;
        for k in 1..=MAX_TERMS {
            let k = f64::from(k);
            let term = (-2.0 * k * k * lambda * lambda).exp();
            sum += sign * term;
            if term < EPS {
                break;
            }
            sign = -sign;
        }
        2.0 * sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_cdf(x: f64) -> f64 {
        // Abramowitz-Stegun 7.1.26 is plenty for test purposes
        let t = 1.0 / (1.0 + 0.327_591_1 * x.abs() / std::f64::consts::SQRT_2);
        let inner = -1.453_152_027 + t * 1.061_405_429;
        let poly = t * (0.254_829_592 + t * (-0.284_496_736 + t * (1.421_413_741 + t * inner)));
        let erf = 1.0 - poly * (-(x * x) / 2.0).exp();
        if x >= 0.0 {
            0.5 * (1.0 + erf)
        } else {
            0.5 * (1.0 - erf)
        }
    }

    #[test]
    fn test_sf_known_values() {
        // Q(1.36) ~= 0.05 and Q(1.63) ~= 0.01 are the classic critical values
        assert!((kolmogorov_sf(1.358) - 0.05).abs() < 1e-3);
        assert!((kolmogorov_sf(1.628) - 0.01).abs() < 1e-3);
        // both series agree around the switch point
        let below = 1.0 - (2.0 * std::f64::consts::PI).sqrt() / 1.18
            * (1..=50)
                .map(|k| {
                    let odd = f64::from(2 * k - 1);
                    (-(std::f64::consts::PI.powi(2)) * odd * odd / (8.0 * 1.18 * 1.18)).exp()
                })
                .sum::<f64>();
        assert!((below - kolmogorov_sf(1.18)).abs() < 1e-9);
    }

    #[test]
    fn test_sf_monotone() {
        let mut previous = 1.0;
        for i in 1..300 {
            let q = kolmogorov_sf(f64::from(i) * 0.01);
            assert!(q <= previous + 1e-12, "not monotone at {i}");
            previous = q;
        }
    }

    #[test]
    fn test_statistic_bounds() {
        let sample = [0.1, 0.2, 0.3];
        // reference CDF that is 1 everywhere: D is 1 - 0 = 1 at the first point
        assert!((statistic(&sample, |_| 1.0) - 1.0).abs() < 1e-12);
        assert!((statistic(&sample, |_| 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normal_quantiles_against_normal_and_shifted() {
        // deterministic "sample": normal quantiles at (i - 0.5) / n
        let n = 500;
        let mut sample = (1..=n)
            .map(|i| {
                let p = (f64::from(i) - 0.5) / f64::from(n);
                // bisection inverse of normal_cdf
                let (mut lo, mut hi) = (-10.0, 10.0);
                for _ in 0..100 {
                    let mid = 0.5 * (lo + hi);
                    if normal_cdf(mid) < p {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                0.5 * (lo + hi)
            })
            .collect::<Vec<_>>();
        sample.sort_by(f64::total_cmp);

        let good = KsTest::from_sorted(&sample, normal_cdf);
        assert!(good.p_value > 0.9, "{good:?}");

        let shifted = KsTest::from_sorted(&sample, |x| normal_cdf(x - 0.5));
        assert!(shifted.p_value < 1e-6, "{shifted:?}");
        assert!((0.0..=1.0).contains(&shifted.statistic));
    }

    #[test]
    fn test_empty_sample() {
        let test = KsTest::from_sorted(&[], |x| x);
        assert_eq!(test.statistic, 0.0);
        assert_eq!(test.p_value, 1.0);
    }
}

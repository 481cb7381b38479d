/// Integrates sampled values `y` over abscissae `x` with the trapezoid rule.
///
/// Only the first `min(y.len(), x.len())` points are used; fewer than two
/// points integrate to zero.
///
/// # Examples
///
/// ```
/// use porofit_stats::integrate::trapezoid;
///
/// // Area under y = x on [0, 2]
/// assert_eq!(trapezoid(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]), 2.0);
/// ```
#[must_use]
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    y.windows(2)
        .zip(x.windows(2))
        .map(|(y, x)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input() {
        assert_eq!(trapezoid(&[], &[]), 0.0);
        assert_eq!(trapezoid(&[1.0], &[0.0]), 0.0);
    }

    #[test]
    fn test_uneven_spacing() {
        // constant 3 over [0, 0.5, 2] has area 6
        assert!((trapezoid(&[3.0, 3.0, 3.0], &[0.0, 0.5, 2.0]) - 6.0).abs() < 1e-12);
    }
}

//! Percentiles of sorted data
//!
//! Both functions expect data sorted in ascending order and interpolate
//! linearly between neighbouring ranks.

/// Value at percentile `p` (clamped to `[0, 100]`), found at fractional rank
/// `(n - 1) * p / 100`; `NaN` for empty input.
///
/// Infinite values are returned as is when they are hit exactly or on both
/// sides of the rank.
///
/// # Examples
///
/// ```
/// use porofit_stats::percentiles::compute_percentile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let last = sorted_values.len() - 1;
    let position = last as f64 * percentile.clamp(0.0, 100.0) / 100.0;
    let lower = (position.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    let (low, high) = (sorted_values[lower], sorted_values[upper]);
    // inf - inf and 0 * inf are NaN
    if fraction == 0.0 || low == high {
        return low;
    }
    low + fraction * (high - low)
}

/// Bin edges that split sorted data into `num_bins` equal-probability bins.
///
/// Returns `num_bins + 1` edges: the percentiles at `0, 100/num_bins, ..., 100`.
/// The first edge is the minimum and the last edge the maximum of the data.
///
/// # Examples
///
/// ```
/// use porofit_stats::percentiles::percentile_edges;
///
/// let values: Vec<f64> = (0..=100).map(f64::from).collect();
/// let edges = percentile_edges(&values, 4);
/// assert_eq!(edges, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn percentile_edges(sorted_values: &[f64], num_bins: usize) -> Vec<f64> {
    (0..=num_bins)
        .map(|i| compute_percentile(sorted_values, 100.0 * i as f64 / num_bins as f64))
        .collect()
}

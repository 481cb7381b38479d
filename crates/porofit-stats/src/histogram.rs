use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// Bins are half-open (`[start, end)`) except the last one, which also
/// contains its upper edge. Values outside the first and last edges are not
/// counted.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling within that range.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram over explicit, ascending bin edges.
    ///
    /// `edges` must contain at least two values; `edges.len() - 1` bins are
    /// created. Repeated edges produce empty zero-width bins, and a value equal
    /// to a repeated edge is counted in the last bin starting at that edge.
    ///
    /// # Panics
    ///
    /// Panics if `edges` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use porofit_stats::histogram::Histogram;
    /// let histogram = Histogram::from_edges([0.5, 1.0, 1.5, 2.0, 7.0], &[0.0, 1.0, 2.0]);
    /// assert_eq!(histogram.counts(), vec![1, 3]);
    /// ```
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn from_edges<I>(values: I, edges: &[f64]) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        assert!(
            edges.is_sorted_by(|a, b| a <= b),
            "edges must be sorted in ascending order"
        );

        if edges.len() < 2 {
            return Self { bins: vec![] };
        }

        let mut bins = edges
            .windows(2)
            .map(|w| HistogramBin {
                range: w[0]..w[1],
                count: 0,
            })
            .collect::<Vec<_>>();
        let first = edges[0];
        let last = edges[edges.len() - 1];

        for value in values {
            if !(first..=last).contains(&value) {
                continue;
            }
            let idx = if value == last {
                bins.len() - 1
            } else {
                // number of edges <= value, minus one
                edges.partition_point(|&e| e <= value) - 1
            };
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Creates a histogram with `num_bins` equal-width bins spanning `min..=max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use porofit_stats::histogram::Histogram;
    /// let values = [0.0, 0.1, 0.6, 0.9, 1.0];
    /// let histogram = Histogram::uniform(values, 0.0, 1.0, 2);
    /// assert_eq!(histogram.counts(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn uniform<I>(values: I, min: f64, max: f64, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        if num_bins == 0 || max < min {
            return Self { bins: vec![] };
        }
        Self::from_edges(values, &linspace(min, max, num_bins + 1))
    }

    /// Bin counts in ascending bin order.
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Running totals of the bin counts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use porofit_stats::histogram::Histogram;
    /// let histogram = Histogram::from_edges([0.5, 1.5, 1.6, 2.5], &[0.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(histogram.cumulative_counts(), vec![1, 3, 4]);
    /// ```
    #[must_use]
    pub fn cumulative_counts(&self) -> Vec<u64> {
        self.bins
            .iter()
            .scan(0, |acc, bin| {
                *acc += bin.count;
                Some(*acc)
            })
            .collect()
    }

    /// The `bins.len() + 1` bin edges.
    #[must_use]
    pub fn edges(&self) -> Vec<f64> {
        let mut edges = self
            .bins
            .iter()
            .map(|bin| bin.range.start)
            .collect::<Vec<_>>();
        if let Some(last) = self.bins.last() {
            edges.push(last.range.end);
        }
        edges
    }

    /// Total number of counted values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// `num` evenly spaced values from `start` to `end`, both included.
///
/// # Examples
///
/// ```
/// # use porofit_stats::histogram::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    // pin the last point to avoid accumulated rounding
                    if i == num - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_edges() {
        assert!(Histogram::from_edges([1.0], &[0.0]).bins.is_empty());
        assert!(Histogram::uniform([1.0], 0.0, 1.0, 0).bins.is_empty());
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let histogram = Histogram::uniform([0.0, 10.0], 0.0, 10.0, 10);
        let counts = histogram.counts();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[9], 1);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_out_of_range_values_are_ignored() {
        let histogram = Histogram::uniform([-1.0, 0.5, 2.0, f64::NAN], 0.0, 1.0, 4);
        assert_eq!(histogram.total(), 1);
    }

    #[test]
    fn test_infinite_edges() {
        let edges = [0.0, 2.0, f64::INFINITY];
        let histogram = Histogram::from_edges([1.0, 5.0, f64::INFINITY], &edges);
        assert_eq!(histogram.counts(), vec![1, 2]);
    }

    #[test]
    fn test_repeated_edges() {
        // edges from a sample with ties: 0, 1, 1, 2
        let histogram = Histogram::from_edges([0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(histogram.counts(), vec![1, 0, 3]);
    }

    #[test]
    fn test_edges_round_trip() {
        let edges = [0.0, 0.5, 2.0, 3.0];
        let histogram = Histogram::from_edges(std::iter::empty(), &edges);
        assert_eq!(histogram.edges(), edges.to_vec());
    }
}

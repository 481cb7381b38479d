/// Location, spread and shape of a sample.
///
/// `variance` and `std_dev` divide by `n`; see
/// [`DescriptiveStats::sample_variance`] for the `n - 1` estimate.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// `m3 / m2^1.5`; zero for a sample without spread.
    pub skewness: f64,
}

impl DescriptiveStats {
    /// Sorts `values` and summarizes them; `None` for an empty sample.
    ///
    /// ```
    /// # use porofit_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!((stats.min, stats.max), (1.0, 5.0));
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Same as [`DescriptiveStats::new`] for data already in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = if count % 2 == 0 {
            0.5 * (sorted_values[count / 2 - 1] + sorted_values[count / 2])
        } else {
            sorted_values[count / 2]
        };
        let (m2, m3) = sorted_values.iter().fold((0.0, 0.0), |(m2, m3), v| {
            let d = v - mean;
            (m2 + d * d, m3 + d * d * d)
        });
        let variance = m2 / n;
        let std_dev = variance.sqrt();
        let skewness = if variance > 0.0 {
            (m3 / n) / variance.powf(1.5)
        } else {
            0.0
        };

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
            skewness,
        })
    }

    /// Unbiased (`ddof = 1`) sample variance, or `None` for fewer than two values.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.variance * self.count as f64 / (self.count - 1) as f64)
    }
}

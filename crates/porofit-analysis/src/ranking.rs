//! Goodness-of-fit scoring and ranking of candidate distributions
//!
//! Every candidate family is fitted to the normalized sample and scored with
//! two statistics:
//!
//! - **Chi-square**: the sample is split into equal-probability bins at its
//!   own percentiles. Observed and expected bin counts are accumulated, and
//!   the statistic is
//!
//!   ```text
//!   Σ (cum_expected[i] - cum_observed[i])² / cum_observed[i]
//!   ```
//!
//!   Note the division by the *cumulative observed* count rather than the
//!   per-bin expected count of Pearson's test. The numbers are comparable
//!   between candidates of one sample but are not chi-square distributed.
//!   Terms whose cumulative observed count is zero are skipped.
//! - **Kolmogorov–Smirnov**: statistic and asymptotic p-value of the sample
//!   against the fitted CDF.
//!
//! Candidates are ranked by ascending chi-square. The sort is stable, so ties
//! keep the order in which the families were requested. Candidates that fail
//! to fit, or whose score is not finite, are reported separately as
//! [`FitFailure`]s and do not take part in the ranking.
//!
//! Fitting runs on the rayon thread pool; results are collected in request
//! order before sorting, so the outcome does not depend on scheduling.

use std::fmt;

use log::{debug, warn};
use porofit_distributions::{FamilyId, FitError, FittedDistribution};
use porofit_stats::{histogram::Histogram, ks::KsTest, percentiles::percentile_edges};
use rayon::prelude::*;
use serde::{Serialize, Serializer};

use crate::normalization::NormalizedSample;

/// Default number of equal-probability chi-square bins.
pub const DEFAULT_NUM_BINS: usize = 50;

/// Equal-probability bins of a sample with their cumulative observed counts.
///
/// # Examples
///
/// ```
/// use porofit_analysis::ranking::ChiSquareBins;
///
/// let sorted: Vec<f64> = (0..100).map(|i| f64::from(i) / 100.0).collect();
/// let bins = ChiSquareBins::new(&sorted, 10);
/// assert_eq!(bins.edges().len(), 11);
/// assert_eq!(bins.cumulative_observed().last(), Some(&100));
///
/// // The uniform CDF over the sample range fits almost perfectly
/// let chi_square = bins.statistic(|x| (x / 0.99).clamp(0.0, 1.0));
/// assert!(chi_square < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ChiSquareBins {
    edges: Vec<f64>,
    cumulative_observed: Vec<u64>,
    total: usize,
}

impl ChiSquareBins {
    /// Bins a sample sorted in ascending order.
    #[must_use]
    pub fn new(sorted_values: &[f64], num_bins: usize) -> Self {
        let edges = percentile_edges(sorted_values, num_bins);
        let histogram = Histogram::from_edges(sorted_values.iter().copied(), &edges);
        Self {
            cumulative_observed: histogram.cumulative_counts(),
            edges,
            total: sorted_values.len(),
        }
    }

    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    #[must_use]
    pub fn cumulative_observed(&self) -> &[u64] {
        &self.cumulative_observed
    }

    /// The chi-square statistic against a fitted CDF.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn statistic<F>(&self, cdf: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let n = self.total as f64;
        let cdf_at_edges = self.edges.iter().map(|&e| cdf(e)).collect::<Vec<_>>();
        let mut cum_expected = 0.0;
        let mut statistic = 0.0;
        for (window, &cum_observed) in cdf_at_edges.windows(2).zip(&self.cumulative_observed) {
            cum_expected += n * (window[1] - window[0]);
            if cum_observed == 0 {
                continue;
            }
            let cum_observed = cum_observed as f64;
            statistic += (cum_expected - cum_observed).powi(2) / cum_observed;
        }
        statistic
    }
}

/// Options of [`rank_distributions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    pub num_bins: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            num_bins: DEFAULT_NUM_BINS,
        }
    }
}

/// A fitted candidate with its goodness-of-fit scores.
#[derive(Debug, Clone, Serialize)]
pub struct FitResult {
    pub distribution: FittedDistribution,
    pub chi_square: f64,
    pub ks_statistic: f64,
    pub ks_p_value: f64,
}

impl FitResult {
    #[must_use]
    pub fn family(&self) -> FamilyId {
        self.distribution.family()
    }
}

/// Why a candidate was left out of the ranking.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CandidateError {
    #[display("{_0}")]
    Fit(FitError),
    #[display("{family}: goodness-of-fit score is not finite")]
    #[from(skip)]
    NonFiniteScore { family: FamilyId },
}

/// A candidate that could not be fitted or scored.
#[derive(Debug, Clone, Serialize)]
pub struct FitFailure {
    pub family: FamilyId,
    #[serde(serialize_with = "serialize_display")]
    pub error: CandidateError,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Candidates ordered by ascending chi-square, plus the failures.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ranking {
    pub results: Vec<FitResult>,
    pub failures: Vec<FitFailure>,
}

impl Ranking {
    #[must_use]
    pub fn best(&self) -> Option<&FitResult> {
        self.results.first()
    }

    /// The best `k` results (fewer if fewer candidates succeeded).
    #[must_use]
    pub fn top(&self, k: usize) -> &[FitResult] {
        &self.results[..k.min(self.results.len())]
    }

    /// Rank of `family` (0 is best), if it was fitted.
    #[must_use]
    pub fn position(&self, family: FamilyId) -> Option<usize> {
        self.results.iter().position(|r| r.family() == family)
    }
}

/// Fits and scores one candidate family.
pub fn score_candidate(
    sample: &NormalizedSample,
    bins: &ChiSquareBins,
    family: FamilyId,
) -> Result<FitResult, CandidateError> {
    let distribution = FittedDistribution::fit(family, sample.values())?;
    let chi_square = bins.statistic(|x| distribution.cdf(x));
    let ks = KsTest::from_sorted(sample.sorted(), |x| distribution.cdf(x));
    if !chi_square.is_finite() || !ks.p_value.is_finite() {
        return Err(CandidateError::NonFiniteScore { family });
    }
    debug!(
        "{distribution}: chi-square {chi_square:.3}, ks {:.4} (p={:.4})",
        ks.statistic, ks.p_value
    );
    Ok(FitResult {
        distribution,
        chi_square,
        ks_statistic: ks.statistic,
        ks_p_value: ks.p_value,
    })
}

/// Fits every family in `families` and ranks the results.
///
/// # Examples
///
/// ```
/// use porofit_analysis::{
///     normalization::NormalizedSample,
///     ranking::{RankingOptions, rank_distributions},
///     sample::Sample,
/// };
/// use porofit_distributions::FamilyId;
///
/// let values: Vec<f64> = (1..=200).map(|i| f64::from(i) / 200.0).collect();
/// let sample = Sample::from_curve(&values).unwrap();
/// let normalized = NormalizedSample::from_sample(&sample).unwrap();
///
/// let ranking = rank_distributions(
///     &normalized,
///     &[FamilyId::Norm, FamilyId::Uniform, FamilyId::Expon],
///     &RankingOptions::default(),
/// );
/// assert_eq!(ranking.best().unwrap().family(), FamilyId::Uniform);
/// ```
#[must_use]
pub fn rank_distributions(
    sample: &NormalizedSample,
    families: &[FamilyId],
    options: &RankingOptions,
) -> Ranking {
    let bins = ChiSquareBins::new(sample.sorted(), options.num_bins);
    let outcomes = families
        .par_iter()
        .map(|&family| (family, score_candidate(sample, &bins, family)))
        .collect::<Vec<_>>();

    let mut ranking = Ranking::default();
    for (family, outcome) in outcomes {
        match outcome {
            Ok(result) => ranking.results.push(result),
            Err(error) => {
                warn!("Skipping candidate: {error}");
                ranking.failures.push(FitFailure { family, error });
            }
        }
    }
    ranking
        .results
        .sort_by(|a, b| a.chi_square.total_cmp(&b.chi_square));
    ranking
}

#[cfg(test)]
mod tests {
    use porofit_distributions::Parameters;

    use super::*;
    use crate::sample::Sample;

    fn normalized(values: &[f64]) -> NormalizedSample {
        NormalizedSample::from_sample(&Sample::from_curve(values).unwrap()).unwrap()
    }

    #[test]
    fn test_statistic_formula() {
        // 4 values, 2 bins: edges [1, 2.5, 4], observed cumulative [2, 4]
        let bins = ChiSquareBins::new(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(bins.edges(), &[1.0, 2.5, 4.0]);
        assert_eq!(bins.cumulative_observed(), &[2, 4]);

        // cdf gives 0.25 below the middle edge: expected cumulative [1, 4]
        let cdf = |x: f64| {
            if x < 2.0 {
                0.0
            } else if x < 3.0 {
                0.25
            } else {
                1.0
            }
        };
        let expected = (1.0_f64 - 2.0).powi(2) / 2.0 + 0.0;
        assert!((bins.statistic(cdf) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_cumulative_observed_is_skipped() {
        let bins = ChiSquareBins {
            edges: vec![0.0, 1.0, 2.0],
            cumulative_observed: vec![0, 3],
            total: 3,
        };
        let chi = bins.statistic(|x| x / 2.0);
        // first term would divide by zero; second: (3 - 3)^2 / 3
        assert!(chi.abs() < 1e-12);
    }

    #[test]
    fn test_ranking_is_sorted_and_stable() {
        let values = (1..=300)
            .map(|i| (f64::from(i) / 301.0).powi(2))
            .collect::<Vec<_>>();
        let sample = normalized(&values);
        let ranking = rank_distributions(&sample, &FamilyId::ALL, &RankingOptions::default());
        assert_eq!(
            ranking.results.len() + ranking.failures.len(),
            FamilyId::ALL.len()
        );
        for pair in ranking.results.windows(2) {
            assert!(pair[0].chi_square <= pair[1].chi_square);
        }
        for result in &ranking.results {
            assert!(result.chi_square >= 0.0);
            assert!((0.0..=1.0).contains(&result.ks_p_value));
            assert!((0.0..=1.0).contains(&result.ks_statistic));
        }
    }

    #[test]
    fn test_duplicate_families_keep_request_order() {
        let values = (1..=100).map(f64::from).collect::<Vec<_>>();
        let sample = normalized(&values);
        let families = [FamilyId::Norm, FamilyId::Uniform, FamilyId::Norm];
        let ranking = rank_distributions(&sample, &families, &RankingOptions::default());
        let norms = ranking
            .results
            .iter()
            .filter(|r| r.family() == FamilyId::Norm)
            .collect::<Vec<_>>();
        assert_eq!(norms.len(), 2);
        assert_eq!(norms[0].chi_square, norms[1].chi_square);
    }

    #[test]
    fn test_insufficient_data_is_a_failure() {
        let sample = normalized(&[0.1, 0.3, 0.2]);
        let ranking = rank_distributions(
            &sample,
            &[FamilyId::Norm, FamilyId::JohnsonSu],
            &RankingOptions::default(),
        );
        assert_eq!(ranking.results.len(), 1);
        assert_eq!(ranking.failures.len(), 1);
        assert_eq!(ranking.failures[0].family, FamilyId::JohnsonSu);
        assert!(matches!(
            ranking.failures[0].error,
            CandidateError::Fit(FitError::InsufficientData { .. })
        ));
        assert_eq!(ranking.position(FamilyId::JohnsonSu), None);
    }

    #[test]
    fn test_perfect_fit_scores_better() {
        let sample = normalized(&(0..500).map(|i| f64::from(i) / 499.0).collect::<Vec<_>>());
        let bins = ChiSquareBins::new(sample.sorted(), DEFAULT_NUM_BINS);
        let stats = sample.sorted();
        let uniform = FittedDistribution::new(
            FamilyId::Uniform,
            Parameters::new(&[], stats[0], stats[stats.len() - 1] - stats[0]),
        )
        .unwrap();
        let shifted = FittedDistribution::new(
            FamilyId::Uniform,
            Parameters::new(&[], stats[0] + 0.5, stats[stats.len() - 1] - stats[0]),
        )
        .unwrap();
        assert!(bins.statistic(|x| uniform.cdf(x)) < bins.statistic(|x| shifted.cdf(x)));
    }

    #[test]
    fn test_failures_serialize_as_messages() {
        let failure = FitFailure {
            family: FamilyId::Beta,
            error: CandidateError::NonFiniteScore {
                family: FamilyId::Beta,
            },
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["family"], "beta");
        assert_eq!(json["error"], "beta: goodness-of-fit score is not finite");
    }
}

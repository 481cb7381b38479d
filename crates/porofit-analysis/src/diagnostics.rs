//! Plot data for the best-ranked candidates
//!
//! This module only computes coordinates; rendering lives in the plotting
//! crate.
//!
//! - [`QqPlot`]: sorted observations against sorted variates simulated from
//!   the fitted distribution.
//! - [`PpPlot`]: fitted CDF against the empirical cumulative fraction, both
//!   taken at percentiles of simulated variates. The fraction is relative to
//!   the observations inside the simulated range, so the last point is 1.
//! - [`DensityOverlay`]: histogram of the raw (unnormalized) sample with a
//!   kernel density estimate and the densities of the candidate families
//!   refitted on the raw sample, all scaled to the histogram area.

use log::warn;
use porofit_distributions::{FamilyId, FittedDistribution};
use porofit_stats::{
    histogram::{Histogram, linspace},
    integrate::trapezoid,
    kde::GaussianKde,
    percentiles::compute_percentile,
};
use rand::RngCore;

/// Number of equal-width bins of the density histogram.
pub const DENSITY_BINS: usize = 100;
/// Number of points at which density curves are evaluated.
pub const DENSITY_GRID_POINTS: usize = 200;
/// Upper percentile of the density plot range; the top 1 % is cut off.
pub const DENSITY_UPPER_PERCENTILE: f64 = 99.0;

/// Quantile–quantile plot data.
#[derive(Debug, Clone)]
pub struct QqPlot {
    pub distribution: FittedDistribution,
    /// `(simulated, observed)` pairs in ascending order.
    pub points: Vec<(f64, f64)>,
}

impl QqPlot {
    /// Pairs the sorted observations with as many sorted simulated variates.
    #[must_use]
    pub fn new(
        observed_sorted: &[f64],
        distribution: &FittedDistribution,
        rng: &mut dyn RngCore,
    ) -> Self {
        let mut simulated = distribution.sample(rng, observed_sorted.len());
        simulated.sort_by(f64::total_cmp);
        Self {
            distribution: distribution.clone(),
            points: simulated.into_iter().zip(observed_sorted.iter().copied()).collect(),
        }
    }
}

/// Probability–probability plot data.
#[derive(Debug, Clone)]
pub struct PpPlot {
    pub distribution: FittedDistribution,
    /// `(theoretical, empirical)` cumulative probabilities.
    pub points: Vec<(f64, f64)>,
}

impl PpPlot {
    /// Evaluates both distribution functions at the upper edges of 100 bins
    /// placed at the percentiles of simulated variates.
    ///
    /// Variates may overflow to infinity for extreme shapes; those edges are
    /// kept. NaN variates are dropped, and no points are produced when
    /// nothing is left.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(
        observed_sorted: &[f64],
        distribution: &FittedDistribution,
        rng: &mut dyn RngCore,
    ) -> Self {
        let mut simulated = distribution.sample(rng, observed_sorted.len());
        simulated.retain(|x| !x.is_nan());
        simulated.sort_by(f64::total_cmp);
        if simulated.is_empty() {
            return Self {
                distribution: distribution.clone(),
                points: vec![],
            };
        }

        let edges = (0..=100)
            .map(|p| compute_percentile(&simulated, f64::from(p)))
            .collect::<Vec<_>>();
        let histogram = Histogram::from_edges(observed_sorted.iter().copied(), &edges);
        let total = histogram.total().max(1) as f64;
        let points = edges[1..]
            .iter()
            .zip(histogram.cumulative_counts())
            .map(|(&edge, cum)| (distribution.cdf(edge), cum as f64 / total))
            .collect();
        Self {
            distribution: distribution.clone(),
            points,
        }
    }
}

/// A density curve scaled to the histogram area.
#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub label: String,
    /// Values at [`DensityOverlay::grid`].
    pub values: Vec<f64>,
}

/// Histogram of the raw sample with overlaid density curves.
#[derive(Debug, Clone)]
pub struct DensityOverlay {
    pub histogram: Histogram,
    pub grid: Vec<f64>,
    /// Kernel density estimate, absent when the sample is too small.
    pub kde: Option<DensityCurve>,
    /// Candidate densities refitted on the raw sample.
    pub fits: Vec<DensityCurve>,
}

impl DensityOverlay {
    /// Builds the overlay for a raw sample sorted in ascending order.
    ///
    /// Families that cannot be refitted on the raw sample are skipped with a
    /// warning.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(raw_sorted: &[f64], families: &[FamilyId]) -> Self {
        let lower = compute_percentile(raw_sorted, 0.0);
        let mut upper = compute_percentile(raw_sorted, DENSITY_UPPER_PERCENTILE);
        if upper <= lower {
            upper = compute_percentile(raw_sorted, 100.0);
        }

        let histogram = Histogram::uniform(raw_sorted.iter().copied(), lower, upper, DENSITY_BINS);
        let counts = histogram
            .counts()
            .into_iter()
            .map(|c| c as f64)
            .collect::<Vec<_>>();
        let left_edges = histogram
            .bins
            .iter()
            .map(|bin| bin.range.start)
            .collect::<Vec<_>>();
        let histogram_area = trapezoid(&counts, &left_edges);
        let grid = linspace(lower, upper, DENSITY_GRID_POINTS);

        let scaled = |label: String, density: &dyn Fn(f64) -> f64| {
            let mut values = grid.iter().map(|&x| density(x)).collect::<Vec<_>>();
            let area = trapezoid(&values, &grid);
            if area > 0.0 && area.is_finite() {
                let factor = histogram_area / area;
                for v in &mut values {
                    *v *= factor;
                }
            }
            DensityCurve { label, values }
        };

        let kde = GaussianKde::new(raw_sorted)
            .map(|kde| scaled("KDE".to_owned(), &|x| kde.evaluate(x)));

        let fits = families
            .iter()
            .filter_map(|&family| match FittedDistribution::fit(family, raw_sorted) {
                Ok(distribution) => Some(scaled(distribution.family().to_string(), &|x| {
                    distribution.pdf(x)
                })),
                Err(err) => {
                    warn!("Skipping density curve: {err}");
                    None
                }
            })
            .collect();

        Self {
            histogram,
            grid,
            kde,
            fits,
        }
    }
}

#[cfg(test)]
mod tests {
    use porofit_distributions::Parameters;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn standard_normal() -> FittedDistribution {
        FittedDistribution::new(FamilyId::Norm, Parameters::new(&[], 0.0, 1.0)).unwrap()
    }

    fn observed(n: usize) -> Vec<f64> {
        let mut rng = Pcg64::seed_from_u64(3);
        let mut values = standard_normal().sample(&mut rng, n);
        values.sort_by(f64::total_cmp);
        values
    }

    #[test]
    fn test_qq_points_are_sorted_pairs() {
        let observed = observed(300);
        let mut rng = Pcg64::seed_from_u64(0);
        let qq = QqPlot::new(&observed, &standard_normal(), &mut rng);
        assert_eq!(qq.points.len(), 300);
        assert!(qq.points.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 <= w[1].1));
        // same distribution: points hug the diagonal in the bulk
        let (sim, obs) = qq.points[150];
        assert!((sim - obs).abs() < 0.3);
    }

    #[test]
    fn test_qq_is_deterministic_for_a_seed() {
        let observed = observed(50);
        let a = QqPlot::new(&observed, &standard_normal(), &mut Pcg64::seed_from_u64(9));
        let b = QqPlot::new(&observed, &standard_normal(), &mut Pcg64::seed_from_u64(9));
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_pp_points_are_probabilities() {
        let observed = observed(500);
        let mut rng = Pcg64::seed_from_u64(1);
        let pp = PpPlot::new(&observed, &standard_normal(), &mut rng);
        assert_eq!(pp.points.len(), 100);
        for &(theoretical, empirical) in &pp.points {
            assert!((0.0..=1.0).contains(&theoretical));
            assert!((0.0..=1.0).contains(&empirical));
            assert!((theoretical - empirical).abs() < 0.15);
        }
        assert!(pp.points.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(pp.points[99].1, 1.0);
    }

    #[test]
    fn test_pp_empirical_fraction_ends_at_one() {
        // most observations lie above the simulated range
        let observed = observed(400)
            .into_iter()
            .map(|z| z + 3.0)
            .collect::<Vec<_>>();
        let mut rng = Pcg64::seed_from_u64(2);
        let pp = PpPlot::new(&observed, &standard_normal(), &mut rng);
        assert_eq!(pp.points.len(), 100);
        assert_eq!(pp.points[99].1, 1.0);
        assert!(pp.points.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_pp_handles_overflowing_variates() {
        // exp(400 z) overflows to infinity for most positive z
        let wide = FittedDistribution::new(FamilyId::Lognorm, Parameters::new(&[400.0], 0.0, 1.0))
            .unwrap();
        let mut observed = observed(500)
            .into_iter()
            .map(f64::abs)
            .collect::<Vec<_>>();
        observed.sort_by(f64::total_cmp);
        let mut rng = Pcg64::seed_from_u64(5);
        let pp = PpPlot::new(&observed, &wide, &mut rng);
        assert_eq!(pp.points.len(), 100);
        for &(theoretical, empirical) in &pp.points {
            assert!((0.0..=1.0).contains(&theoretical), "{theoretical}");
            assert!((0.0..=1.0).contains(&empirical), "{empirical}");
        }
    }

    #[test]
    fn test_pp_empty_sample() {
        let mut rng = Pcg64::seed_from_u64(0);
        let pp = PpPlot::new(&[], &standard_normal(), &mut rng);
        assert!(pp.points.is_empty());
    }

    #[test]
    fn test_density_curves_match_histogram_area() {
        let raw = observed(1000)
            .into_iter()
            .map(|z| 0.2 + 0.05 * z)
            .collect::<Vec<_>>();
        let overlay = DensityOverlay::new(&raw, &[FamilyId::Norm, FamilyId::Uniform]);
        assert_eq!(overlay.histogram.bins.len(), DENSITY_BINS);
        assert_eq!(overlay.grid.len(), DENSITY_GRID_POINTS);

        let counts = overlay
            .histogram
            .counts()
            .into_iter()
            .map(|c| c as f64)
            .collect::<Vec<_>>();
        let left = overlay
            .histogram
            .bins
            .iter()
            .map(|b| b.range.start)
            .collect::<Vec<_>>();
        let histogram_area = trapezoid(&counts, &left);

        let kde = overlay.kde.as_ref().unwrap();
        let kde_area = trapezoid(&kde.values, &overlay.grid);
        assert!((kde_area - histogram_area).abs() < 1e-6 * histogram_area);
        assert_eq!(overlay.fits.len(), 2);
        for curve in &overlay.fits {
            let area = trapezoid(&curve.values, &overlay.grid);
            assert!((area - histogram_area).abs() < 1e-6 * histogram_area, "{}", curve.label);
        }
        assert_eq!(overlay.fits[0].label, "norm");
    }

    #[test]
    fn test_density_skips_failed_refits() {
        let raw = [0.1, 0.2, 0.3];
        let overlay = DensityOverlay::new(&raw, &[FamilyId::Norm, FamilyId::JohnsonSu]);
        assert_eq!(overlay.fits.len(), 1);
        assert_eq!(overlay.fits[0].label, "norm");
    }
}

use std::f64::consts::PI;

use crate::descriptive::DescriptiveStats;

/// Gaussian kernel density estimate.
///
/// The bandwidth follows Scott's rule: `n^(-1/5)` times the unbiased sample
/// standard deviation.
///
/// # Examples
///
/// ```
/// use porofit_stats::kde::GaussianKde;
///
/// let kde = GaussianKde::new(&[-1.0, 0.0, 0.0, 1.0]).unwrap();
/// // Symmetric data gives a symmetric density
/// assert!((kde.evaluate(0.5) - kde.evaluate(-0.5)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianKde {
    points: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Builds a KDE from data points.
    ///
    /// Returns `None` for fewer than two points or when the points have no spread.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(points: &[f64]) -> Option<Self> {
        let stats = DescriptiveStats::new(points.iter().copied())?;
        let std_dev = stats.sample_variance()?.sqrt();
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return None;
        }
        let bandwidth = (points.len() as f64).powf(-0.2) * std_dev;
        Some(Self {
            points: points.to_vec(),
            bandwidth,
        })
    }

    /// Kernel bandwidth (standard deviation of each Gaussian kernel).
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density estimate at `x`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / ((2.0 * PI).sqrt() * h * self.points.len() as f64);
        self.points
            .iter()
            .map(|p| {
                let z = (x - p) / h;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }
}

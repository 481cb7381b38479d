//! Standardization of a cleaned sample to zero mean and unit variance

use porofit_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{AnalysisError, sample::Sample};

/// Constants used to standardize a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalization {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Normalization {
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    #[must_use]
    pub fn invert(&self, z: f64) -> f64 {
        z * self.std_dev + self.mean
    }
}

/// A [`Sample`] rescaled by `(x - mean) / std_dev`.
///
/// The result has mean 0 and population variance 1 up to rounding.
#[derive(Debug, Clone)]
pub struct NormalizedSample {
    values: Vec<f64>,
    sorted: Vec<f64>,
    normalization: Normalization,
}

impl NormalizedSample {
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateSample`] when all values are equal
    /// (or the spread overflows), since the rescaling would divide by zero.
    pub fn from_sample(sample: &Sample) -> Result<Self, AnalysisError> {
        let degenerate = AnalysisError::DegenerateSample {
            count: sample.len(),
        };
        let stats = DescriptiveStats::new(sample.values().iter().copied())
            .ok_or_else(|| degenerate.clone())?;
        if !stats.std_dev.is_finite() || stats.std_dev <= 0.0 {
            return Err(degenerate);
        }

        let normalization = Normalization {
            mean: stats.mean,
            std_dev: stats.std_dev,
        };
        let values = sample
            .values()
            .iter()
            .map(|&x| normalization.apply(x))
            .collect::<Vec<_>>();
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Ok(Self {
            values,
            sorted,
            normalization,
        })
    }

    /// Normalized values in the order of the original sample.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Normalized values in ascending order.
    #[must_use]
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    #[must_use]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mean_unit_variance() {
        let sample = Sample::from_curve(&[0.12, 0.3, 0.25, 0.08, 0.19, 0.4, 0.22]).unwrap();
        let normalized = NormalizedSample::from_sample(&sample).unwrap();
        let stats = DescriptiveStats::new(normalized.values().iter().copied()).unwrap();
        assert!(stats.mean.abs() < 1e-12);
        assert!((stats.variance - 1.0).abs() < 1e-12);
        assert!(normalized.sorted().is_sorted());
    }

    #[test]
    fn test_invert_round_trips() {
        let sample = Sample::from_curve(&[1.0, 2.0, 4.0]).unwrap();
        let normalized = NormalizedSample::from_sample(&sample).unwrap();
        let norm = normalized.normalization();
        for (&z, &x) in normalized.values().iter().zip(sample.values()) {
            assert!((norm.invert(z) - x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_sample_is_degenerate() {
        let sample = Sample::from_curve(&[0.2, 0.2, 0.2]).unwrap();
        let err = NormalizedSample::from_sample(&sample).unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateSample { count: 3 });
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let sample = Sample::from_curve(&[0.2]).unwrap();
        assert!(NormalizedSample::from_sample(&sample).is_err());
    }
}

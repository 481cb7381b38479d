//! Selection of usable readings from a well-log curve
//!
//! Missing readings (NaN, including the LAS `NULL` sentinel after loading,
//! and infinities) and negative readings are dropped. Negative values are
//! physically impossible for porosity-like curves. Both are dropped
//! silently; the counts are kept in a [`CleaningReport`] for display.

use log::debug;
use serde::Serialize;

use crate::AnalysisError;

/// What happened to the readings of a curve during cleaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub total: usize,
    pub missing: usize,
    pub negative: usize,
    pub kept: usize,
}

/// Cleaned readings of one curve, in depth order.
///
/// Never empty.
#[derive(Debug, Clone)]
pub struct Sample {
    values: Vec<f64>,
    report: CleaningReport,
}

impl Sample {
    /// Drops missing and negative readings.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySample`] when no reading survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use porofit_analysis::sample::Sample;
    ///
    /// let sample = Sample::from_curve(&[0.2, f64::NAN, -0.01, 0.3]).unwrap();
    /// assert_eq!(sample.values(), &[0.2, 0.3]);
    /// assert_eq!(sample.report().missing, 1);
    /// assert_eq!(sample.report().negative, 1);
    /// ```
    pub fn from_curve(values: &[f64]) -> Result<Self, AnalysisError> {
        let mut report = CleaningReport {
            total: values.len(),
            ..CleaningReport::default()
        };
        let mut kept = Vec::with_capacity(values.len());
        for &value in values {
            if !value.is_finite() {
                report.missing += 1;
            } else if value < 0.0 {
                report.negative += 1;
            } else {
                kept.push(value);
            }
        }
        report.kept = kept.len();
        debug!("cleaning: {report:?}");

        if kept.is_empty() {
            return Err(AnalysisError::EmptySample {
                total: report.total,
            });
        }
        Ok(Self {
            values: kept,
            report,
        })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn report(&self) -> CleaningReport {
        self.report
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

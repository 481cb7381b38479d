use std::fmt;

use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;

use crate::{FamilyId, FitError, Parameters, mle};

/// Interval `[lower, upper]` on which a standard density is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Support {
    pub lower: f64,
    pub upper: f64,
}

impl Support {
    pub const REAL_LINE: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };
    pub const NON_NEGATIVE: Self = Self {
        lower: 0.0,
        upper: f64::INFINITY,
    };
    pub const NON_POSITIVE: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: 0.0,
    };
    pub const UNIT: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }
}

/// A continuous distribution family in standard form (`loc = 0`, `scale = 1`).
///
/// Implementations are stateless; shape parameters are passed to every call
/// and have already been checked with [`ContinuousFamily::shapes_valid`] by
/// the callers in this crate.
pub trait ContinuousFamily: fmt::Debug + Send + Sync {
    fn id(&self) -> FamilyId;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    fn shape_names(&self) -> &'static [&'static str];

    /// Number of estimated parameters, including `loc` and `scale`.
    fn num_params(&self) -> usize {
        self.shape_names().len() + 2
    }

    fn shapes_valid(&self, shapes: &[f64]) -> bool {
        shapes.len() == self.shape_names().len() && shapes.iter().all(|s| s.is_finite() && *s > 0.0)
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::REAL_LINE
    }

    #[must_use]
    fn standard_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        self.standard_ln_pdf(x, shapes).exp()
    }

    /// Log-density; `-inf` outside the support.
    #[must_use]
    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64;

    #[must_use]
    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64;

    /// Draws one standard variate.
    #[must_use]
    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64;

    /// Starting point of the likelihood optimization.
    fn initial_guess(&self, data: &[f64], stats: &DescriptiveStats) -> Parameters;

    /// Estimates parameters from a finite sample with spread and more
    /// observations than parameters.
    ///
    /// The default maximizes the likelihood numerically from
    /// [`ContinuousFamily::initial_guess`].
    fn fit(&self, data: &[f64], stats: &DescriptiveStats) -> Result<Parameters, FitError> {
        let guess = self.initial_guess(data, stats);
        mle::maximize_likelihood(self, data, &guess)
    }
}

use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::{Distribution as _, Exp1};

use crate::{ContinuousFamily, FamilyId, FitError, Parameters, Support};

#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl ContinuousFamily for Exponential {
    fn id(&self) -> FamilyId {
        FamilyId::Expon
    }

    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::NON_NEGATIVE
    }

    fn standard_ln_pdf(&self, x: f64, _shapes: &[f64]) -> f64 {
        if x >= 0.0 { -x } else { f64::NEG_INFINITY }
    }

    fn standard_cdf(&self, x: f64, _shapes: &[f64]) -> f64 {
        if x <= 0.0 { 0.0 } else { -(-x).exp_m1() }
    }

    fn standard_sample(&self, _shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        Exp1.sample(rng)
    }

    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        Parameters::new(&[], stats.min, stats.mean - stats.min)
    }

    /// `loc` at the sample minimum and `scale` the mean excess over it.
    fn fit(&self, data: &[f64], stats: &DescriptiveStats) -> Result<Parameters, FitError> {
        Ok(self.initial_guess(data, stats))
    }
}

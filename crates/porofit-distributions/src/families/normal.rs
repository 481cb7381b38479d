use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::{Distribution as _, StandardNormal};

use crate::{
    ContinuousFamily, FamilyId, FitError, Parameters,
    special::{ln_norm_pdf, norm_cdf},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Normal;

impl ContinuousFamily for Normal {
    fn id(&self) -> FamilyId {
        FamilyId::Norm
    }

    fn name(&self) -> &'static str {
        "Normal"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn standard_ln_pdf(&self, x: f64, _shapes: &[f64]) -> f64 {
        ln_norm_pdf(x)
    }

    fn standard_cdf(&self, x: f64, _shapes: &[f64]) -> f64 {
        norm_cdf(x)
    }

    fn standard_sample(&self, _shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        StandardNormal.sample(rng)
    }

    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        Parameters::new(&[], stats.mean, stats.std_dev)
    }

    /// Sample mean and population standard deviation.
    fn fit(&self, data: &[f64], stats: &DescriptiveStats) -> Result<Parameters, FitError> {
        Ok(self.initial_guess(data, stats))
    }
}

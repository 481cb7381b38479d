use porofit_stats::descriptive::DescriptiveStats;
use rand::{Rng as _, RngCore};

use crate::{ContinuousFamily, FamilyId, FitError, Parameters, Support};

#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl ContinuousFamily for Uniform {
    fn id(&self) -> FamilyId {
        FamilyId::Uniform
    }

    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::UNIT
    }

    fn standard_ln_pdf(&self, x: f64, _shapes: &[f64]) -> f64 {
        if Support::UNIT.contains(x) {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }

    fn standard_cdf(&self, x: f64, _shapes: &[f64]) -> f64 {
        x.clamp(0.0, 1.0)
    }

    fn standard_sample(&self, _shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        rng.random::<f64>()
    }

    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        Parameters::new(&[], stats.min, stats.max - stats.min)
    }

    /// The sample range.
    fn fit(&self, data: &[f64], stats: &DescriptiveStats) -> Result<Parameters, FitError> {
        Ok(self.initial_guess(data, stats))
    }
}

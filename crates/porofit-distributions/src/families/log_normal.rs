use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::{Distribution as _, StandardNormal};

use crate::{
    ContinuousFamily, FamilyId, Parameters, Support,
    special::{ln_norm_pdf, norm_cdf},
};

use super::loc_below_min;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogNormal;

impl ContinuousFamily for LogNormal {
    fn id(&self) -> FamilyId {
        FamilyId::Lognorm
    }

    fn name(&self) -> &'static str {
        "Log-normal"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["s"]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::NON_NEGATIVE
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let s = shapes[0];
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let ln_x = x.ln();
        ln_norm_pdf(ln_x / s) - s.ln() - ln_x
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            norm_cdf(x.ln() / shapes[0])
        }
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        (shapes[0] * z).exp()
    }

    /// Moments of `ln(x - loc)` for a `loc` one standard deviation below the minimum.
    fn initial_guess(&self, data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let loc = loc_below_min(stats.min - stats.std_dev, stats);
        match DescriptiveStats::new(data.iter().map(|x| (x - loc).ln())) {
            Some(log_stats) if log_stats.std_dev > 0.0 => {
                Parameters::new(&[log_stats.std_dev], loc, log_stats.mean.exp())
            }
            _ => Parameters::new(&[1.0], loc, stats.std_dev),
        }
    }
}

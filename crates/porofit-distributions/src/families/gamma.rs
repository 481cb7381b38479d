use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::Distribution as _;
use statrs::function::gamma::{gamma_lr, ln_gamma};

use crate::{ContinuousFamily, FamilyId, Parameters, Support, special::xlogy};

use super::loc_below_min;

/// Upper bound on the moment estimate of the shape, reached by symmetric samples.
const MAX_INITIAL_SHAPE: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Gamma;

impl ContinuousFamily for Gamma {
    fn id(&self) -> FamilyId {
        FamilyId::Gamma
    }

    fn name(&self) -> &'static str {
        "Gamma"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["a"]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::NON_NEGATIVE
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let a = shapes[0];
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        xlogy(a - 1.0, x) - x - ln_gamma(a)
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x.is_infinite() {
            1.0
        } else {
            gamma_lr(shapes[0], x)
        }
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        rand_distr::Gamma::new(shapes[0], 1.0).map_or(f64::NAN, |d| d.sample(rng))
    }

    /// Method of moments: the skewness of a gamma distribution is `2 / sqrt(a)`.
    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let a = (4.0 / (stats.skewness * stats.skewness + 1e-8)).min(MAX_INITIAL_SHAPE);
        let scale = stats.std_dev / a.sqrt();
        let loc = loc_below_min(stats.mean - a * scale, stats);
        Parameters::new(&[a], loc, scale)
    }
}

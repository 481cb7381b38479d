use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::Distribution as _;
use statrs::function::beta::{beta_reg, ln_beta};

use crate::{ContinuousFamily, FamilyId, Parameters, Support, special::xlogy};

use super::padded_range;

#[derive(Debug, Clone, Copy, Default)]
pub struct Beta;

impl ContinuousFamily for Beta {
    fn id(&self) -> FamilyId {
        FamilyId::Beta
    }

    fn name(&self) -> &'static str {
        "Beta"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["a", "b"]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::UNIT
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let (a, b) = (shapes[0], shapes[1]);
        if !Support::UNIT.contains(x) {
            return f64::NEG_INFINITY;
        }
        xlogy(a - 1.0, x) + xlogy(b - 1.0, 1.0 - x) - ln_beta(a, b)
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            beta_reg(shapes[0], shapes[1], x)
        }
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        rand_distr::Beta::new(shapes[0], shapes[1]).map_or(f64::NAN, |d| d.sample(rng))
    }

    /// Method of moments on the sample rescaled into a slightly padded range.
    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let (loc, scale) = padded_range(stats);
        let m = (stats.mean - loc) / scale;
        let v = stats.variance / (scale * scale);
        let common = m * (1.0 - m) / v - 1.0;
        let (a, b) = if common.is_finite() && common > 0.0 {
            (m * common, (1.0 - m) * common)
        } else {
            (1.0, 1.0)
        };
        Parameters::new(&[a, b], loc, scale)
    }
}

use std::f64::consts::PI;

use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::{Distribution as _, InverseGaussian};

use crate::{ContinuousFamily, FamilyId, Parameters, Support, special::norm_cdf};

use super::loc_below_min;

/// Inverse Gaussian (Wald) distribution with mean `mu` and unit shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvGauss;

impl ContinuousFamily for InvGauss {
    fn id(&self) -> FamilyId {
        FamilyId::InvGauss
    }

    fn name(&self) -> &'static str {
        "Inverse Gaussian"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["mu"]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::NON_NEGATIVE
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let mu = shapes[0];
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        -0.5 * (2.0 * PI).ln() - 1.5 * x.ln() - (x - mu).powi(2) / (2.0 * x * mu * mu)
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let mu = shapes[0];
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        let sqrt_x = x.sqrt();
        let lower = norm_cdf((x / mu - 1.0) / sqrt_x);
        // exp(2 / mu) overflows for small mu while the tail underflows
        let upper = (2.0 / mu + norm_cdf(-(x / mu + 1.0) / sqrt_x).ln()).exp();
        (lower + upper).clamp(0.0, 1.0)
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        InverseGaussian::new(shapes[0], 1.0).map_or(f64::NAN, |d| d.sample(rng))
    }

    /// Method of moments: with unit shape, the skewness is `3 sqrt(mu)` and
    /// the variance `mu^3`.
    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let mu = (stats.skewness / 3.0).powi(2).clamp(0.01, 10.0);
        let scale = stats.std_dev / mu.powf(1.5);
        let loc = loc_below_min(stats.mean - mu * scale, stats);
        Parameters::new(&[mu], loc, scale)
    }
}

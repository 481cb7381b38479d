use std::f64::consts::E;

use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::{Distribution as _, StandardNormal};

use crate::{
    ContinuousFamily, FamilyId, Parameters,
    special::{ln_norm_pdf, norm_cdf},
};

/// Johnson's SU distribution: `a + b * asinh(x)` is standard normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct JohnsonSu;

impl ContinuousFamily for JohnsonSu {
    fn id(&self) -> FamilyId {
        FamilyId::JohnsonSu
    }

    fn name(&self) -> &'static str {
        "Johnson SU"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["a", "b"]
    }

    fn shapes_valid(&self, shapes: &[f64]) -> bool {
        matches!(shapes, [a, b] if a.is_finite() && b.is_finite() && *b > 0.0)
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let (a, b) = (shapes[0], shapes[1]);
        b.ln() - x.hypot(1.0).ln() + ln_norm_pdf(a + b * x.asinh())
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        norm_cdf(shapes[0] + shapes[1] * x.asinh())
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        ((z - shapes[0]) / shapes[1]).sinh()
    }

    /// Starts from `a = 0`, `b = 1`, whose variance is `(e^2 - 1) / 2`.
    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let standard_std_dev = ((E * E - 1.0) / 2.0).sqrt();
        Parameters::new(&[0.0, 1.0], stats.mean, stats.std_dev / standard_std_dev)
    }
}

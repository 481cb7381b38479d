use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::Distribution as _;

use crate::{ContinuousFamily, FamilyId, Parameters, Support};

use super::padded_range;

/// Triangular distribution on `[0, 1]` with mode `c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangular;

impl Triangular {
    fn pdf(x: f64, c: f64) -> f64 {
        if !Support::UNIT.contains(x) {
            0.0
        } else if x < c {
            2.0 * x / c
        } else if c < 1.0 {
            2.0 * (1.0 - x) / (1.0 - c)
        } else {
            2.0
        }
    }
}

impl ContinuousFamily for Triangular {
    fn id(&self) -> FamilyId {
        FamilyId::Triang
    }

    fn name(&self) -> &'static str {
        "Triangular"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["c"]
    }

    fn shapes_valid(&self, shapes: &[f64]) -> bool {
        matches!(shapes, [c] if (0.0..=1.0).contains(c))
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::UNIT
    }

    fn standard_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        Self::pdf(x, shapes[0])
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        Self::pdf(x, shapes[0]).ln()
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let c = shapes[0];
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else if x < c {
            x * x / c
        } else {
            1.0 - (1.0 - x).powi(2) / (1.0 - c)
        }
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        rand_distr::Triangular::new(0.0, 1.0, shapes[0]).map_or(f64::NAN, |d| d.sample(rng))
    }

    /// The mean of a triangular distribution is `(min + max + mode) / 3`.
    fn initial_guess(&self, _data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let (loc, scale) = padded_range(stats);
        let mode = 3.0 * stats.mean - stats.min - stats.max;
        let c = ((mode - loc) / scale).clamp(0.01, 0.99);
        Parameters::new(&[c], loc, scale)
    }
}

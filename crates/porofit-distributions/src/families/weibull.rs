use std::f64::consts::PI;

use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use rand_distr::{Distribution as _, Weibull};

use crate::{ContinuousFamily, FamilyId, Parameters, Support, special::xlogy};

use super::loc_below_min;

/// Euler–Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Weibull distribution of minima, supported on `[0, ∞)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeibullMin;

impl ContinuousFamily for WeibullMin {
    fn id(&self) -> FamilyId {
        FamilyId::WeibullMin
    }

    fn name(&self) -> &'static str {
        "Weibull (minimum)"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["c"]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::NON_NEGATIVE
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        let c = shapes[0];
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        c.ln() + xlogy(c - 1.0, x) - x.powf(c)
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            -(-x.powf(shapes[0])).exp_m1()
        }
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        Weibull::new(1.0, shapes[0]).map_or(f64::NAN, |d| d.sample(rng))
    }

    /// `ln(x - loc)` follows a Gumbel distribution of minima with standard
    /// deviation `pi / (sqrt(6) c)` and mean `ln(scale) - gamma / c`.
    fn initial_guess(&self, data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let loc = loc_below_min(stats.min - 0.1 * stats.std_dev, stats);
        match DescriptiveStats::new(data.iter().map(|x| (x - loc).ln())) {
            Some(log_stats) if log_stats.std_dev > 0.0 => {
                let c = (PI / (6.0_f64.sqrt() * log_stats.std_dev)).clamp(0.1, 50.0);
                let scale = (log_stats.mean + EULER_GAMMA / c).exp();
                Parameters::new(&[c], loc, scale)
            }
            _ => Parameters::new(&[1.0], loc, stats.std_dev),
        }
    }
}

/// Weibull distribution of maxima, the mirror image of [`WeibullMin`],
/// supported on `(-∞, 0]`.
///
/// Its likelihood for a sample equals the [`WeibullMin`] likelihood of the
/// negated sample with a negated `loc`; the starting point is derived that way.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeibullMax;

impl ContinuousFamily for WeibullMax {
    fn id(&self) -> FamilyId {
        FamilyId::WeibullMax
    }

    fn name(&self) -> &'static str {
        "Weibull (maximum)"
    }

    fn shape_names(&self) -> &'static [&'static str] {
        &["c"]
    }

    fn support(&self, _shapes: &[f64]) -> Support {
        Support::NON_POSITIVE
    }

    fn standard_ln_pdf(&self, x: f64, shapes: &[f64]) -> f64 {
        WeibullMin.standard_ln_pdf(-x, shapes)
    }

    fn standard_cdf(&self, x: f64, shapes: &[f64]) -> f64 {
        if x >= 0.0 {
            1.0
        } else {
            (-(-x).powf(shapes[0])).exp()
        }
    }

    fn standard_sample(&self, shapes: &[f64], rng: &mut dyn RngCore) -> f64 {
        -WeibullMin.standard_sample(shapes, rng)
    }

    fn initial_guess(&self, data: &[f64], stats: &DescriptiveStats) -> Parameters {
        let negated = data.iter().map(|x| -x).collect::<Vec<_>>();
        let negated_stats = DescriptiveStats {
            count: stats.count,
            min: -stats.max,
            max: -stats.min,
            mean: -stats.mean,
            median: -stats.median,
            variance: stats.variance,
            std_dev: stats.std_dev,
            skewness: -stats.skewness,
        };
        let guess = WeibullMin.initial_guess(&negated, &negated_stats);
        Parameters::new(&guess.shapes, -guess.loc, guess.scale)
    }
}

use std::fmt;

use log::debug;
use porofit_stats::descriptive::DescriptiveStats;
use rand::RngCore;
use serde::Serialize;

use crate::{ContinuousFamily, FamilyId, FitError, Parameters, Support};

/// A distribution family with concrete parameters.
///
/// Values are only constructed through [`FittedDistribution::fit`] or the
/// validating [`FittedDistribution::new`], so the parameters are always
/// admissible for the family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedDistribution {
    family: FamilyId,
    params: Parameters,
}

impl FittedDistribution {
    /// Wraps `params`, checking them against the family.
    pub fn new(family: FamilyId, params: Parameters) -> Result<Self, FitError> {
        let imp = family.family();
        let invalid = |reason: String| FitError::InvalidParameters { family, reason };
        if params.shapes.len() != imp.shape_names().len() {
            return Err(invalid(format!(
                "expected {} shape parameters, got {}",
                imp.shape_names().len(),
                params.shapes.len()
            )));
        }
        if !imp.shapes_valid(&params.shapes) {
            return Err(invalid(format!("shapes {:?} out of range", params.shapes)));
        }
        if !params.loc.is_finite() {
            return Err(invalid(format!("loc {} is not finite", params.loc)));
        }
        if !(params.scale.is_finite() && params.scale > 0.0) {
            return Err(invalid(format!("scale {} is not positive", params.scale)));
        }
        Ok(Self { family, params })
    }

    /// Estimates the parameters of `family` from `data`.
    ///
    /// The sample must be finite, have spread, and hold more observations
    /// than the family has parameters.
    pub fn fit(family: FamilyId, data: &[f64]) -> Result<Self, FitError> {
        let imp = family.family();
        if data.iter().any(|x| !x.is_finite()) {
            return Err(FitError::NonFiniteData { family });
        }
        let num_params = imp.num_params();
        if data.len() <= num_params {
            return Err(FitError::InsufficientData {
                family,
                num_params,
                actual: data.len(),
            });
        }
        let stats = DescriptiveStats::new(data.iter().copied())
            .ok_or(FitError::InsufficientData {
                family,
                num_params,
                actual: 0,
            })?;
        if !stats.std_dev.is_finite() || stats.std_dev <= 0.0 {
            return Err(FitError::DegenerateData { family });
        }

        let params = imp.fit(data, &stats)?;
        let fitted = Self::new(family, params)?;
        debug!("fitted {fitted}");
        Ok(fitted)
    }

    #[must_use]
    pub fn family(&self) -> FamilyId {
        self.family
    }

    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    fn imp(&self) -> &'static dyn ContinuousFamily {
        self.family.family()
    }

    /// Support in data coordinates.
    #[must_use]
    pub fn support(&self) -> Support {
        let standard = self.imp().support(&self.params.shapes);
        Support {
            lower: self.params.loc + self.params.scale * standard.lower,
            upper: self.params.loc + self.params.scale * standard.upper,
        }
    }

    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        let z = self.params.standardize(x);
        self.imp().standard_pdf(z, &self.params.shapes) / self.params.scale
    }

    #[must_use]
    pub fn ln_pdf(&self, x: f64) -> f64 {
        let z = self.params.standardize(x);
        self.imp().standard_ln_pdf(z, &self.params.shapes) - self.params.scale.ln()
    }

    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        let z = self.params.standardize(x);
        self.imp().standard_cdf(z, &self.params.shapes).clamp(0.0, 1.0)
    }

    /// Draws `n` random variates.
    pub fn sample(&self, rng: &mut dyn RngCore, n: usize) -> Vec<f64> {
        let imp = self.imp();
        let Parameters { shapes, loc, scale } = &self.params;
        (0..n)
            .map(|_| loc + scale * imp.standard_sample(shapes, rng))
            .collect()
    }

    /// Negative log-likelihood of `data`; `+inf` if any point lies outside
    /// the support.
    #[must_use]
    pub fn neg_log_likelihood(&self, data: &[f64]) -> f64 {
        -data.iter().map(|&x| self.ln_pdf(x)).sum::<f64>()
    }
}

impl fmt::Display for FittedDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.family)?;
        for (name, value) in self.imp().shape_names().iter().zip(&self.params.shapes) {
            write!(f, "{name}={value:.4}, ")?;
        }
        write!(
            f,
            "loc={:.4}, scale={:.4})",
            self.params.loc, self.params.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use porofit_stats::{histogram::linspace, integrate::trapezoid};
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, StandardNormal};
    use rand_pcg::Pcg64;

    use super::*;

    /// A representative parameter set for every family.
    fn reference(family: FamilyId) -> FittedDistribution {
        let (shapes, loc, scale): (&[f64], f64, f64) = match family {
            FamilyId::WeibullMin => (&[1.8], 0.5, 2.0),
            FamilyId::Norm => (&[], 1.0, 2.0),
            FamilyId::WeibullMax => (&[2.5], 3.0, 1.5),
            FamilyId::Beta => (&[2.0, 5.0], -1.0, 4.0),
            FamilyId::InvGauss => (&[0.7], 0.0, 2.0),
            FamilyId::Uniform => (&[], -2.0, 3.0),
            FamilyId::Gamma => (&[3.0], 1.0, 0.5),
            FamilyId::Expon => (&[], 0.0, 1.5),
            FamilyId::Lognorm => (&[0.6], -1.0, 2.0),
            FamilyId::Triang => (&[0.3], 0.0, 2.0),
            FamilyId::JohnsonSu => (&[0.5, 1.5], 0.0, 1.0),
        };
        FittedDistribution::new(family, Parameters::new(shapes, loc, scale)).unwrap()
    }

    fn grid(dist: &FittedDistribution) -> Vec<f64> {
        let support = dist.support();
        let lower = support.lower.max(-60.0);
        let upper = support.upper.min(60.0);
        linspace(lower, upper, 200_001)
    }

    #[test]
    fn test_cdf_monotone_and_bounded() {
        for family in FamilyId::ALL {
            let dist = reference(family);
            let mut prev = 0.0;
            for x in grid(&dist).into_iter().step_by(100) {
                let p = dist.cdf(x);
                assert!((0.0..=1.0).contains(&p), "{dist}: cdf({x}) = {p}");
                assert!(p >= prev - 1e-12, "{dist}: cdf decreases at {x}");
                prev = p;
            }
            assert!(dist.cdf(-1e6) < 1e-6, "{dist}");
            assert!(dist.cdf(1e6) > 1.0 - 1e-6, "{dist}");
        }
    }

    #[test]
    fn test_pdf_integrates_to_one() {
        for family in FamilyId::ALL {
            let dist = reference(family);
            let xs = grid(&dist);
            let ys = xs.iter().map(|&x| dist.pdf(x)).collect::<Vec<_>>();
            let area = trapezoid(&ys, &xs);
            assert!((area - 1.0).abs() < 1e-3, "{dist}: area {area}");
        }
    }

    #[test]
    fn test_pdf_matches_cdf_slope() {
        for family in FamilyId::ALL {
            let dist = reference(family);
            let x = dist.params().loc + 0.37 * dist.params().scale;
            let h = 1e-6;
            let slope = (dist.cdf(x + h) - dist.cdf(x - h)) / (2.0 * h);
            assert!((slope - dist.pdf(x)).abs() < 1e-4, "{dist}: {slope} vs {}", dist.pdf(x));
        }
    }

    #[test]
    fn test_samples_follow_cdf() {
        let mut rng = Pcg64::seed_from_u64(7);
        for family in FamilyId::ALL {
            let dist = reference(family);
            let mut samples = dist.sample(&mut rng, 2000);
            samples.sort_by(f64::total_cmp);
            let d = porofit_stats::ks::statistic(&samples, |x| dist.cdf(x));
            assert!(d < 0.05, "{dist}: ks statistic {d}");
        }
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        let cases = [
            (FamilyId::Norm, Parameters::new(&[], 0.0, 0.0)),
            (FamilyId::Norm, Parameters::new(&[], f64::NAN, 1.0)),
            (FamilyId::Gamma, Parameters::new(&[], 0.0, 1.0)),
            (FamilyId::Gamma, Parameters::new(&[-1.0], 0.0, 1.0)),
            (FamilyId::Triang, Parameters::new(&[1.5], 0.0, 1.0)),
            (FamilyId::JohnsonSu, Parameters::new(&[0.0, 0.0], 0.0, 1.0)),
        ];
        for (family, params) in cases {
            assert!(matches!(
                FittedDistribution::new(family, params),
                Err(FitError::InvalidParameters { .. })
            ));
        }
    }

    #[test]
    fn test_fit_norm_closed_form() {
        let mut rng = Pcg64::seed_from_u64(42);
        let data = (0..1000)
            .map(|_| 3.0 + 2.0 * rand_distr::Distribution::<f64>::sample(&StandardNormal, &mut rng))
            .collect::<Vec<f64>>();
        let fitted = FittedDistribution::fit(FamilyId::Norm, &data).unwrap();
        let stats = DescriptiveStats::new(data.iter().copied()).unwrap();
        assert_eq!(fitted.params().loc, stats.mean);
        assert_eq!(fitted.params().scale, stats.std_dev);
        assert!((fitted.params().loc - 3.0).abs() < 0.2);
        assert!((fitted.params().scale - 2.0).abs() < 0.2);
    }

    #[test]
    fn test_numeric_fits_recover_parameters() {
        let mut rng = Pcg64::seed_from_u64(1);
        let cases: [(FamilyId, &[f64], f64, f64); 4] = [
            (FamilyId::Gamma, &[4.0], 0.0, 1.0),
            (FamilyId::Lognorm, &[0.5], 0.0, 1.0),
            (FamilyId::WeibullMin, &[2.0], 0.0, 1.0),
            (FamilyId::JohnsonSu, &[0.0, 2.0], 0.0, 1.0),
        ];
        for (family, shapes, loc, scale) in cases {
            let params = Parameters::new(shapes, loc, scale);
            let truth = FittedDistribution::new(family, params).unwrap();
            let data = truth.sample(&mut rng, 3000);
            let fitted = FittedDistribution::fit(family, &data).unwrap();
            assert!(
                fitted.neg_log_likelihood(&data) <= truth.neg_log_likelihood(&data) + 1.0,
                "{fitted} is less likely than {truth}"
            );
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            let d = porofit_stats::ks::statistic(&sorted, |x| fitted.cdf(x));
            assert!(d < 0.03, "{fitted}: ks statistic {d}");
        }
    }

    #[test]
    fn test_skewed_families_fit_symmetric_sample() {
        let mut rng = Pcg64::seed_from_u64(0);
        let mut data = (0..1000)
            .map(|_| StandardNormal.sample(&mut rng))
            .collect::<Vec<f64>>();
        data.sort_by(f64::total_cmp);
        for family in [FamilyId::Gamma, FamilyId::Lognorm, FamilyId::InvGauss] {
            let fitted = FittedDistribution::fit(family, &data).unwrap();
            let d = porofit_stats::ks::statistic(&data, |x| fitted.cdf(x));
            assert!(d < 0.06, "{fitted}: ks statistic {d}");
        }
    }

    #[test]
    fn test_fit_preconditions() {
        assert_eq!(
            FittedDistribution::fit(FamilyId::JohnsonSu, &[0.1, 0.2]),
            Err(FitError::InsufficientData {
                family: FamilyId::JohnsonSu,
                num_params: 4,
                actual: 2
            })
        );
        assert_eq!(
            FittedDistribution::fit(FamilyId::Norm, &[1.0, f64::NAN, 2.0]),
            Err(FitError::NonFiniteData {
                family: FamilyId::Norm
            })
        );
        assert_eq!(
            FittedDistribution::fit(FamilyId::Gamma, &[1.0; 10]),
            Err(FitError::DegenerateData {
                family: FamilyId::Gamma
            })
        );
    }

    #[test]
    fn test_serializes_family_and_params() {
        let dist = reference(FamilyId::Beta);
        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "family": "beta",
                "params": { "shapes": [2.0, 5.0], "loc": -1.0, "scale": 4.0 },
            })
        );
    }

    #[test]
    fn test_display() {
        let dist = reference(FamilyId::Gamma);
        assert_eq!(dist.to_string(), "gamma(a=3.0000, loc=1.0000, scale=0.5000)");
    }
}

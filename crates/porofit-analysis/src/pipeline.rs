//! The full analysis of one curve: clean, normalize, rank, diagnose

use log::info;
use porofit_distributions::FamilyId;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use serde::Serialize;

use crate::{
    AnalysisError,
    diagnostics::{DensityOverlay, PpPlot, QqPlot},
    normalization::{Normalization, NormalizedSample},
    ranking::{DEFAULT_NUM_BINS, Ranking, RankingOptions, rank_distributions},
    sample::{CleaningReport, Sample},
};

/// Default number of best candidates that get diagnostic plots.
pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    /// Number of equal-probability chi-square bins.
    pub num_bins: usize,
    /// Number of best candidates to compute diagnostics for.
    pub top_k: usize,
    /// Seed of the random variates drawn for Q-Q and P-P plots.
    pub seed: u64,
    /// Candidate families, in reporting order for ties.
    pub families: Vec<FamilyId>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_bins: DEFAULT_NUM_BINS,
            top_k: DEFAULT_TOP_K,
            seed: 0,
            families: FamilyId::ALL.to_vec(),
        }
    }
}

/// Q-Q and P-P data of one ranked candidate.
#[derive(Debug, Clone)]
pub struct CandidateDiagnostics {
    pub qq: QqPlot,
    pub pp: PpPlot,
}

#[derive(Debug, Clone)]
pub struct Diagnostics {
    pub density: DensityOverlay,
    /// One entry per top-ranked candidate, best first.
    pub candidates: Vec<CandidateDiagnostics>,
}

/// Everything the pipeline produced for one curve.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub cleaning: CleaningReport,
    pub normalization: Normalization,
    pub ranking: Ranking,
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

/// Runs the pipeline on the raw values of one curve.
///
/// Candidates are fitted to the normalized sample. Candidate `i` of the
/// ranking draws its Q-Q and P-P variates from a generator seeded with
/// `seed + i`, so the outcome is reproducible for a given seed.
///
/// # Errors
///
/// Fails when the configuration is unusable, when cleaning leaves no values,
/// when the cleaned sample has no spread, or when no candidate could be
/// fitted.
///
/// # Examples
///
/// ```
/// use porofit_analysis::pipeline::{AnalysisConfig, run};
/// use porofit_distributions::FamilyId;
///
/// let values: Vec<f64> = (0..100).map(|i| 0.1 + f64::from(i % 17) / 100.0).collect();
/// let config = AnalysisConfig {
///     families: vec![FamilyId::Norm, FamilyId::Uniform],
///     ..AnalysisConfig::default()
/// };
/// let outcome = run(&values, &config).unwrap();
/// assert_eq!(outcome.ranking.results.len(), 2);
/// assert_eq!(outcome.diagnostics.candidates.len(), 2);
/// ```
pub fn run(values: &[f64], config: &AnalysisConfig) -> Result<AnalysisOutcome, AnalysisError> {
    if config.num_bins == 0 {
        return Err(AnalysisError::InvalidConfig {
            reason: "number of bins must be positive".to_owned(),
        });
    }
    if config.families.is_empty() {
        return Err(AnalysisError::InvalidConfig {
            reason: "no candidate families selected".to_owned(),
        });
    }

    let sample = Sample::from_curve(values)?;
    let cleaning = sample.report();
    info!(
        "Cleaned sample: kept {} of {} values ({} missing, {} negative)",
        cleaning.kept, cleaning.total, cleaning.missing, cleaning.negative
    );

    let normalized = NormalizedSample::from_sample(&sample)?;
    let normalization = normalized.normalization();
    info!(
        "Normalized with mean {:.6} and standard deviation {:.6}",
        normalization.mean, normalization.std_dev
    );

    info!("Fitting {} candidate distributions", config.families.len());
    let ranking = rank_distributions(
        &normalized,
        &config.families,
        &RankingOptions {
            num_bins: config.num_bins,
        },
    );
    if ranking.results.is_empty() {
        return Err(AnalysisError::NoSuccessfulFit {
            attempted: config.families.len(),
        });
    }
    info!(
        "Ranked {} candidates, {} failed",
        ranking.results.len(),
        ranking.failures.len()
    );

    let top = ranking.top(config.top_k);
    let candidates = top
        .iter()
        .zip(0_u64..)
        .map(|(result, index)| {
            let mut rng = Pcg64::seed_from_u64(config.seed.wrapping_add(index));
            let qq = QqPlot::new(normalized.sorted(), &result.distribution, &mut rng);
            let pp = PpPlot::new(normalized.sorted(), &result.distribution, &mut rng);
            CandidateDiagnostics { qq, pp }
        })
        .collect();
    let top_families = top.iter().map(|r| r.family()).collect::<Vec<_>>();
    let density = DensityOverlay::new(&sample.sorted(), &top_families);

    Ok(AnalysisOutcome {
        cleaning,
        normalization,
        ranking,
        diagnostics: Diagnostics {
            density,
            candidates,
        },
    })
}

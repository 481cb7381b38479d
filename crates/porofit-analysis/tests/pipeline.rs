use porofit_analysis::{
    AnalysisError,
    pipeline::{AnalysisConfig, run},
    ranking::CandidateError,
};
use porofit_distributions::{FamilyId, FitError};
use rand::SeedableRng as _;
use rand_distr::{Distribution as _, StandardNormal};
use rand_pcg::Pcg64;

/// Porosity-like readings drawn from `N(0.2, 0.03^2)`.
fn normal_porosity(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Pcg64::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut rng);
            0.2 + 0.03 * z
        })
        .collect()
}

#[test]
fn test_normal_sample_prefers_norm() {
    let values = normal_porosity(1000, 11);
    let outcome = run(&values, &AnalysisConfig::default()).unwrap();

    assert_eq!(outcome.cleaning.total, 1000);
    assert_eq!(outcome.cleaning.kept, 1000);
    assert!((outcome.normalization.mean - 0.2).abs() < 0.005);
    assert!((outcome.normalization.std_dev - 0.03).abs() < 0.003);

    let ranking = &outcome.ranking;
    assert!(ranking.failures.is_empty(), "{:?}", ranking.failures);
    assert_eq!(ranking.results.len(), FamilyId::ALL.len());

    let norm_rank = ranking.position(FamilyId::Norm).unwrap();
    let norm = &ranking.results[norm_rank];
    assert!(norm.distribution.params().loc.abs() < 1e-9);
    assert!((norm.distribution.params().scale - 1.0).abs() < 1e-9);
    assert!(norm.ks_p_value > 0.01);

    // families that cannot take a bell shape all rank below norm
    for worse in [FamilyId::Uniform, FamilyId::Expon, FamilyId::Triang] {
        let rank = ranking.position(worse).unwrap();
        assert!(rank > norm_rank, "{worse} ranked {rank}, norm ranked {norm_rank}");
    }
    assert!(
        ranking
            .results
            .windows(2)
            .all(|w| w[0].chi_square <= w[1].chi_square)
    );
    assert_eq!(
        ranking.results.len() + ranking.failures.len(),
        FamilyId::ALL.len()
    );

    let diagnostics = &outcome.diagnostics;
    assert_eq!(diagnostics.candidates.len(), 3);
    for (candidate, result) in diagnostics.candidates.iter().zip(&ranking.results) {
        assert_eq!(candidate.qq.distribution, result.distribution);
        assert_eq!(candidate.qq.points.len(), 1000);
        assert_eq!(candidate.pp.points.len(), 100);
    }
}

#[test]
fn test_skewed_families_rank_on_symmetric_samples() {
    for seed in 0..3 {
        let values = normal_porosity(1000, seed);
        let outcome = run(&values, &AnalysisConfig::default()).unwrap();
        let ranking = &outcome.ranking;
        assert!(ranking.failures.is_empty(), "seed {seed}: {:?}", ranking.failures);
        for family in [FamilyId::Gamma, FamilyId::Lognorm, FamilyId::InvGauss] {
            assert!(ranking.position(family).is_some(), "seed {seed}: {family} not ranked");
        }
    }
}

#[test]
fn test_all_negative_curve_is_empty() {
    let err = run(&[-0.1, -0.2, -999.25], &AnalysisConfig::default()).unwrap_err();
    assert_eq!(err, AnalysisError::EmptySample { total: 3 });
}

#[test]
fn test_small_sample_reports_failures() {
    let config = AnalysisConfig {
        families: vec![FamilyId::Norm, FamilyId::JohnsonSu],
        ..AnalysisConfig::default()
    };
    let outcome = run(&[0.1, 0.15, 0.3], &config).unwrap();
    assert_eq!(outcome.ranking.results.len(), 1);
    assert_eq!(outcome.ranking.results[0].family(), FamilyId::Norm);

    let failure = &outcome.ranking.failures[0];
    assert_eq!(failure.family, FamilyId::JohnsonSu);
    assert_eq!(
        failure.error,
        CandidateError::Fit(FitError::InsufficientData {
            family: FamilyId::JohnsonSu,
            num_params: 4,
            actual: 3,
        })
    );
}

#[test]
fn test_same_seed_same_outcome() {
    let values = normal_porosity(300, 5);
    let config = AnalysisConfig {
        seed: 17,
        families: vec![FamilyId::Norm, FamilyId::Gamma, FamilyId::Lognorm],
        ..AnalysisConfig::default()
    };
    let a = run(&values, &config).unwrap();
    let b = run(&values, &config).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    for (x, y) in a.diagnostics.candidates.iter().zip(&b.diagnostics.candidates) {
        assert_eq!(x.qq.points, y.qq.points);
        assert_eq!(x.pp.points, y.pp.points);
    }
}

#[test]
fn test_outcome_serializes_without_diagnostics() {
    let values = normal_porosity(200, 2);
    let config = AnalysisConfig {
        families: vec![FamilyId::Norm, FamilyId::Uniform],
        ..AnalysisConfig::default()
    };
    let outcome = run(&values, &config).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert!(json.get("diagnostics").is_none());
    assert_eq!(json["cleaning"]["kept"], 200);
    assert_eq!(json["ranking"]["results"][0]["distribution"]["family"], "norm");
}

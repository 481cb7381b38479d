//! Tabular display of the fit results

use porofit_analysis::{
    normalization::Normalization,
    ranking::{FitFailure, FitResult, Ranking},
    sample::CleaningReport,
};

pub(super) fn print_cleaning_summary(cleaning: &CleaningReport, normalization: &Normalization) {
    println!("Cleaning:");
    println!("  {:<12} {:>8}", "Total", cleaning.total);
    println!("  {:<12} {:>8}", "Missing", cleaning.missing);
    println!("  {:<12} {:>8}", "Negative", cleaning.negative);
    println!("  {:<12} {:>8}", "Kept", cleaning.kept);
    println!(
        "  Normalized with mean {:.6}, standard deviation {:.6}",
        normalization.mean, normalization.std_dev
    );
}

fn print_ranking_header() {
    println!(
        "  {:>4} {:<17} {:>12} {:>10} {:>10}  {}",
        "Rank", "Distribution", "Chi-square", "KS", "p-value", "Parameters"
    );
    // rank(4) + name(17) + chi-square(12) + ks(10) + p-value(10) + spaces(6) + parameters
    println!("  {}", "-".repeat(105));
}

fn print_ranking_row(rank: usize, result: &FitResult) {
    println!(
        "  {:>4} {:<17} {:>12.4} {:>10.4} {:>10.4}  {}",
        rank,
        result.family().name(),
        result.chi_square,
        result.ks_statistic,
        result.ks_p_value,
        result.distribution,
    );
}

/// Print the ranked candidates, best first, then the failed ones
pub(super) fn print_ranking(ranking: &Ranking) {
    print_ranking_header();
    for (i, result) in ranking.results.iter().enumerate() {
        print_ranking_row(i + 1, result);
    }
    if !ranking.failures.is_empty() {
        println!("  Not ranked:");
        for failure in &ranking.failures {
            println!("    {}", failure_line(failure));
        }
    }
}

fn failure_line(failure: &FitFailure) -> String {
    format!("{:<17} {}", failure.family.name(), failure.error)
}

pub(super) fn print_legend() {
    println!("Legend:");
    println!("  Chi-square : Cumulative chi-square over equal-probability bins (lower is better)");
    println!("  KS         : Kolmogorov-Smirnov statistic of the normalized sample");
    println!("  p-value    : Asymptotic Kolmogorov-Smirnov p-value");
    println!("  Parameters : Fitted on the normalized sample");
}

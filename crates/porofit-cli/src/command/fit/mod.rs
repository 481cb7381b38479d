//! Distribution fitting command
//!
//! Loads one curve of a LAS file, runs the analysis pipeline on it and
//! reports the ranking as a table, an optional JSON report and optional
//! diagnostic plots.

mod table;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::Utc;
use clap::Args;
use log::info;
use porofit_analysis::{
    pipeline::{self, AnalysisConfig, AnalysisOutcome, DEFAULT_TOP_K},
    ranking::DEFAULT_NUM_BINS,
};
use porofit_distributions::FamilyId;
use porofit_las::LasFile;
use porofit_plot::{Figure, PlotFormat};

use crate::{
    schema::report::{CurveInfo, FitReport},
    util::Output,
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum PlotFormatArg {
    #[default]
    Png,
    Svg,
}

impl From<PlotFormatArg> for PlotFormat {
    fn from(arg: PlotFormatArg) -> Self {
        match arg {
            PlotFormatArg::Png => PlotFormat::Png,
            PlotFormatArg::Svg => PlotFormat::Svg,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct FitArg {
    /// Path to the LAS file
    pub las: PathBuf,

    /// Mnemonic of the curve to analyze (case-insensitive)
    #[arg(long, default_value = "NEUT")]
    pub curve: String,

    /// Number of equal-probability bins of the chi-square statistic
    #[arg(long, default_value_t = DEFAULT_NUM_BINS)]
    pub bins: usize,

    /// Number of best candidates to plot
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Seed of the variates drawn for Q-Q and P-P plots
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Candidate families (comma-separated, default: all)
    #[arg(long, value_delimiter = ',')]
    pub families: Vec<FamilyId>,

    /// Output directory for diagnostic plots
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Image format of the plots (png or svg)
    #[arg(long, default_value = "png")]
    pub plot_format: PlotFormatArg,

    /// Write the JSON report to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the JSON report to stdout instead of the table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl FitArg {
    fn config(&self) -> AnalysisConfig {
        let families = if self.families.is_empty() {
            FamilyId::ALL.to_vec()
        } else {
            self.families.clone()
        };
        AnalysisConfig {
            num_bins: self.bins,
            top_k: self.top,
            seed: self.seed,
            families,
        }
    }
}

pub(crate) fn run(arg: &FitArg) -> anyhow::Result<()> {
    let las = LasFile::from_path(&arg.las)
        .with_context(|| format!("Failed to load LAS file: {}", arg.las.display()))?;
    let curve = las.curve(&arg.curve).with_context(|| {
        let available = las.curves().map(|c| c.mnemonic()).collect::<Vec<_>>();
        format!(
            "Curve {} not found in {} (available: {})",
            arg.curve,
            arg.las.display(),
            available.join(", ")
        )
    })?;
    info!(
        "Analyzing curve {} ({} values) from {}",
        curve.mnemonic(),
        curve.values().len(),
        arg.las.display()
    );

    let config = arg.config();
    let outcome = pipeline::run(curve.values(), &config)
        .with_context(|| format!("Failed to analyze curve {}", curve.mnemonic()))?;

    if !arg.json {
        println!("Distribution Fit Report: {} ({})", curve.mnemonic(), arg.las.display());
        println!("==========================================\n");
        table::print_cleaning_summary(&outcome.cleaning, &outcome.normalization);
        println!();
        table::print_legend();
        println!();
        table::print_ranking(&outcome.ranking);
    }

    if let Some(dir) = &arg.plot_dir {
        save_plots(dir, arg.plot_format.into(), curve.mnemonic(), &outcome)?;
    }

    if arg.json || arg.output.is_some() {
        let report = FitReport {
            generated_at: Utc::now(),
            source: arg.las.clone(),
            curve: CurveInfo {
                mnemonic: curve.mnemonic().to_owned(),
                unit: curve.unit().to_owned(),
                description: curve.description().to_owned(),
            },
            config: &config,
            outcome: &outcome,
        };
        Output::save_json(&report, arg.output.clone())?;
    }
    Ok(())
}

fn save_plots(
    dir: &Path,
    format: PlotFormat,
    mnemonic: &str,
    outcome: &AnalysisOutcome,
) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create plot directory: {}", dir.display()))?;
    let ext = format.extension();
    let stem = mnemonic.to_ascii_lowercase();
    let diagnostics = &outcome.diagnostics;

    let figure = Figure::new(dir.join(format!("{stem}_density.{ext}")));
    let title = format!("{mnemonic} distribution");
    porofit_plot::render_density(&figure, &diagnostics.density, &title)?;

    for (i, (candidate, result)) in diagnostics
        .candidates
        .iter()
        .zip(&outcome.ranking.results)
        .enumerate()
    {
        let rank = i + 1;
        let family = result.family();
        let figure = Figure::new(dir.join(format!("{stem}_{rank}_{family}_qq.{ext}")));
        let title = format!("Q-Q plot: {family} (rank {rank})");
        porofit_plot::render_qq(&figure, &candidate.qq, &title)?;
        let figure = Figure::new(dir.join(format!("{stem}_{rank}_{family}_pp.{ext}")));
        let title = format!("P-P plot: {family} (rank {rank})");
        porofit_plot::render_pp(&figure, &candidate.pp, &title)?;
    }
    Ok(())
}

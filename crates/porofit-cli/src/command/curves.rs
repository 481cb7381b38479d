use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use porofit_las::LasFile;

#[derive(Debug, Clone, Args)]
pub(crate) struct CurvesArg {
    /// Path to the LAS file
    pub las: PathBuf,
}

pub(crate) fn run(arg: &CurvesArg) -> anyhow::Result<()> {
    let las = LasFile::from_path(&arg.las)
        .with_context(|| format!("Failed to load LAS file: {}", arg.las.display()))?;

    println!(
        "{} ({} rows, NULL = {})",
        arg.las.display(),
        las.num_rows(),
        las.null_value()
    );
    println!();
    println!("  {:<10} {:<8} {:>8}  {}", "Curve", "Unit", "Values", "Description");
    println!("  {}", "-".repeat(60));
    for curve in las.curves() {
        println!(
            "  {:<10} {:<8} {:>8}  {}",
            curve.mnemonic(),
            curve.unit(),
            curve.count_present(),
            curve.description()
        );
    }
    Ok(())
}

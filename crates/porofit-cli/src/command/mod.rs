use std::cmp;

use clap::{Args, Parser, Subcommand};
use log::debug;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use self::{curves::CurvesArg, fit::FitArg};

mod curves;
mod fit;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    global: GlobalOpts,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, Args)]
struct GlobalOpts {
    /// Enable debug logging with timestamps and source locations
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Log level; raised to at least `debug` by `--debug`
    #[arg(global = true, long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Fit candidate distributions to a curve and rank them
    Fit(#[clap(flatten)] FitArg),
    /// List the curves of a LAS file
    Curves(#[clap(flatten)] CurvesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.global)?;
    debug!("Parsed arguments: {args:?}");

    match &args.mode {
        Mode::Fit(arg) => fit::run(arg)?,
        Mode::Curves(arg) => curves::run(arg)?,
    }
    Ok(())
}

fn init_logger(opts: GlobalOpts) -> anyhow::Result<()> {
    let level = if opts.debug {
        cmp::max(LevelFilter::Debug, opts.log_level)
    } else {
        opts.log_level
    };

    let mut config = ConfigBuilder::new();
    let detail = if opts.debug {
        LevelFilter::Error
    } else {
        LevelFilter::Off
    };
    config
        .set_time_level(detail)
        .set_thread_level(detail)
        .set_target_level(detail)
        .set_location_level(detail);

    TermLogger::init(level, config.build(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

//! The supported distribution families in standard form.

use porofit_stats::descriptive::DescriptiveStats;

pub use self::{
    beta::Beta,
    exponential::Exponential,
    gamma::Gamma,
    inv_gauss::InvGauss,
    johnson_su::JohnsonSu,
    log_normal::LogNormal,
    normal::Normal,
    triangular::Triangular,
    uniform::Uniform,
    weibull::{WeibullMax, WeibullMin},
};

mod beta;
mod exponential;
mod gamma;
mod inv_gauss;
mod johnson_su;
mod log_normal;
mod normal;
mod triangular;
mod uniform;
mod weibull;

/// Location strictly below the sample minimum, so a family bounded below
/// starts with every observation inside its support.
fn loc_below_min(loc: f64, stats: &DescriptiveStats) -> f64 {
    loc.min(stats.min - 0.05 * stats.std_dev)
}

/// `(loc, scale)` of an interval slightly wider than the sample range, for
/// families bounded on both sides.
fn padded_range(stats: &DescriptiveStats) -> (f64, f64) {
    let range = stats.max - stats.min;
    let pad = 0.01 * range;
    (stats.min - pad, range + 2.0 * pad)
}

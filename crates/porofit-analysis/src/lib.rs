//! Distribution analysis of well-log curves
//!
//! This crate answers which parametric distribution best describes the
//! readings of one well-log curve.
//!
//! # Workflow
//!
//! 1. **Clean** ([`sample::Sample`]): drop missing and negative readings
//! 2. **Normalize** ([`normalization::NormalizedSample`]): rescale to zero
//!    mean and unit variance
//! 3. **Fit and rank** ([`ranking::rank_distributions`]): fit every candidate
//!    family and order them by a cumulative chi-square statistic, with the
//!    Kolmogorov–Smirnov p-value alongside
//! 4. **Diagnose** ([`diagnostics`]): Q-Q, P-P and density-overlay data for
//!    the best candidates
//!
//! [`pipeline::run`] chains all four steps.
//!
//! # Examples
//!
//! ```
//! use porofit_analysis::pipeline::{AnalysisConfig, run};
//!
//! // Porosity readings with a missing value and an invalid negative one
//! let mut values: Vec<f64> = (0..200)
//!     .map(|i| 0.15 + 0.1 * (f64::from(i) * 0.37).sin().powi(3))
//!     .collect();
//! values.push(f64::NAN);
//! values.push(-0.05);
//!
//! let outcome = run(&values, &AnalysisConfig::default()).unwrap();
//! assert_eq!(outcome.cleaning.kept, 200);
//!
//! for result in &outcome.ranking.results {
//!     println!(
//!         "{:<12} chi-square {:>10.2}  p-value {:.4}",
//!         result.family(),
//!         result.chi_square,
//!         result.ks_p_value
//!     );
//! }
//! ```

pub use self::error::AnalysisError;

pub mod diagnostics;
mod error;
pub mod normalization;
pub mod pipeline;
pub mod ranking;
pub mod sample;

//! Statistical building blocks for the porofit project.
//!
//! This crate has no third-party dependencies and provides:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation, skewness
//! - **Percentiles**: interpolated percentiles and equal-probability bin edges
//! - **Histograms**: counts over explicit or equal-width bin edges
//! - **Kolmogorov–Smirnov test**: one-sample statistic and asymptotic p-value
//! - **Kernel density estimation**: Gaussian KDE with Scott's bandwidth
//! - **Optimization**: Nelder–Mead simplex minimizer
//! - **Integration**: trapezoid rule
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction
//! - [`ks`]: Kolmogorov–Smirnov goodness-of-fit test
//! - [`kde`]: Kernel density estimation
//! - [`optimize`]: Derivative-free minimization
//! - [`integrate`]: Numerical integration of sampled curves
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use porofit_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Equal-probability binning
//!
//! ```
//! use porofit_stats::{histogram::Histogram, percentiles::percentile_edges};
//!
//! let values: Vec<f64> = (0..100).map(f64::from).collect();
//! let edges = percentile_edges(&values, 4);
//! let histogram = Histogram::from_edges(values.iter().copied(), &edges);
//! assert_eq!(histogram.counts(), vec![25, 25, 25, 25]);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod integrate;
pub mod kde;
pub mod ks;
pub mod optimize;
pub mod percentiles;

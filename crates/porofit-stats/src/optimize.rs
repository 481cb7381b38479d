//! Derivative-free minimization with the Nelder–Mead simplex method
//!
//! The implementation uses the standard coefficients (reflection 1,
//! expansion 2, contraction ½, shrink ½) and an initial simplex built by
//! perturbing each coordinate of the starting point by 5 % (or by `0.00025`
//! for coordinates that are exactly zero).
//!
//! The objective may return `f64::INFINITY` (or NaN, treated the same) for
//! infeasible points; the simplex then contracts back towards feasible ones.
//!
//! A run that exhausts its budget while the objective spread is already
//! within `fatol` relative to the best value still counts as converged. This
//! happens on flat valleys (a likelihood that keeps improving in the 7th
//! digit as a shape parameter grows), where the simplex crawls without
//! changing the objective any more.
//!
//! # Examples
//!
//! ```
//! use porofit_stats::optimize::{NelderMeadOptions, nelder_mead};
//!
//! let minimum = nelder_mead(
//!     |x| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2),
//!     &[0.0, 0.0],
//!     &NelderMeadOptions::default(),
//! );
//! assert!(minimum.converged);
//! assert!((minimum.x[0] - 3.0).abs() < 1e-3);
//! assert!((minimum.x[1] + 1.0).abs() < 1e-3);
//! ```

use std::cell::Cell;

/// Stopping criteria for [`nelder_mead`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMeadOptions {
    /// Iteration budget per dimension; the total is `max_iterations_per_dim * n`.
    pub max_iterations_per_dim: usize,
    /// Absolute tolerance on the simplex extent.
    pub xatol: f64,
    /// Absolute tolerance on the spread of objective values.
    pub fatol: f64,
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            max_iterations_per_dim: 200,
            xatol: 1e-4,
            fatol: 1e-4,
        }
    }
}

/// Outcome of a minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    /// Best point found.
    pub x: Vec<f64>,
    /// Objective value at `x`.
    pub fun: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of objective evaluations.
    pub evaluations: usize,
    /// Largest difference between the objective at `x` and at the other
    /// simplex vertices.
    pub f_spread: f64,
    /// `false` when the budget ran out before the tolerances were met and
    /// the objective was still changing relative to its magnitude.
    pub converged: bool,
}

const RHO: f64 = 1.0;
const CHI: f64 = 2.0;
const PSI: f64 = 0.5;
const SIGMA: f64 = 0.5;
const NONZERO_DELTA: f64 = 0.05;
const ZERO_DELTA: f64 = 0.000_25;

/// Minimizes `f` starting from `x0`.
///
/// # Panics
///
/// Panics if `x0` is empty.
#[must_use]
pub fn nelder_mead<F>(f: F, x0: &[f64], options: &NelderMeadOptions) -> Minimum
where
    F: Fn(&[f64]) -> f64,
{
    assert!(!x0.is_empty(), "starting point must not be empty");

    let n = x0.len();
    let max_iterations = options.max_iterations_per_dim * n;
    let max_evaluations = max_iterations;
    let evaluations = Cell::new(0);
    let eval = |x: &[f64]| {
        evaluations.set(evaluations.get() + 1);
        let y = f(x);
        if y.is_nan() { f64::INFINITY } else { y }
    };

    let mut simplex = Vec::with_capacity(n + 1);
    simplex.push(x0.to_vec());
    for k in 0..n {
        let mut y = x0.to_vec();
        y[k] = if y[k] == 0.0 {
            ZERO_DELTA
        } else {
            (1.0 + NONZERO_DELTA) * y[k]
        };
        simplex.push(y);
    }
    let mut values = simplex.iter().map(|x| eval(x)).collect::<Vec<_>>();
    sort_simplex(&mut simplex, &mut values);

    let mut iterations = 0;
    let mut converged = false;
    while evaluations.get() < max_evaluations && iterations < max_iterations {
        let x_spread = simplex[1..]
            .iter()
            .flat_map(|x| x.iter().zip(&simplex[0]).map(|(a, b)| (a - b).abs()))
            .fold(0.0, f64::max);
        if x_spread <= options.xatol && objective_spread(&values) <= options.fatol {
            converged = true;
            break;
        }

        let worst = simplex[n].clone();
        let centroid = centroid(&simplex[..n]);
        let point = |coef: f64| -> Vec<f64> {
            centroid
                .iter()
                .zip(&worst)
                .map(|(c, w)| (1.0 + coef) * c - coef * w)
                .collect()
        };

        let xr = point(RHO);
        let fxr = eval(&xr);
        let mut shrink = false;

        if fxr < values[0] {
            let xe = point(RHO * CHI);
            let fxe = eval(&xe);
            if fxe < fxr {
                simplex[n] = xe;
                values[n] = fxe;
            } else {
                simplex[n] = xr;
                values[n] = fxr;
            }
        } else if fxr < values[n - 1] {
            simplex[n] = xr;
            values[n] = fxr;
        } else if fxr < values[n] {
            // outside contraction
            let xc = point(PSI * RHO);
            let fxc = eval(&xc);
            if fxc <= fxr {
                simplex[n] = xc;
                values[n] = fxc;
            } else {
                shrink = true;
            }
        } else {
            // inside contraction
            let xcc = point(-PSI);
            let fxcc = eval(&xcc);
            if fxcc < values[n] {
                simplex[n] = xcc;
                values[n] = fxcc;
            } else {
                shrink = true;
            }
        }

        if shrink {
            let best = simplex[0].clone();
            for j in 1..=n {
                for (x, b) in simplex[j].iter_mut().zip(&best) {
                    *x = b + SIGMA * (*x - b);
                }
                values[j] = eval(&simplex[j]);
            }
        }

        sort_simplex(&mut simplex, &mut values);
        iterations += 1;
    }

    let f_spread = objective_spread(&values);
    if !converged && values[0].is_finite() {
        converged = f_spread <= options.fatol * values[0].abs().max(1.0);
    }

    Minimum {
        x: simplex.swap_remove(0),
        fun: values[0],
        iterations,
        evaluations: evaluations.get(),
        f_spread,
        converged,
    }
}

fn objective_spread(values: &[f64]) -> f64 {
    values[1..]
        .iter()
        .map(|v| (v - values[0]).abs())
        .fold(0.0, f64::max)
}

#[expect(clippy::cast_precision_loss)]
fn centroid(points: &[Vec<f64>]) -> Vec<f64> {
    let dim = points[0].len();
    let count = points.len() as f64;
    (0..dim)
        .map(|k| points.iter().map(|p| p[k]).sum::<f64>() / count)
        .collect()
}

fn sort_simplex(simplex: &mut Vec<Vec<f64>>, values: &mut Vec<f64>) {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    *simplex = order.iter().map(|&i| simplex[i].clone()).collect();
    *values = order.iter().map(|&i| values[i]).collect();
}

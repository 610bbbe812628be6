use argmin::core::{CostFunction, Executor, State, TerminationReason};
use argmin::solver::neldermead::NelderMead;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::model::samples::Samples;
use crate::stats::likelihood::{LineParams, neg_log_likelihood};

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("need at least {needed} samples to fit a line, found {found}")]
    TooFewSamples { needed: usize, found: usize },
    #[error("need at least 2 distinct x values to fit a line, found {0}")]
    DegenerateX(usize),
    #[error("need at least {needed} distinct points to bootstrap, found {found}")]
    TooFewDistinctPoints { needed: usize, found: usize },
    #[error("no usable bootstrap resample after {0} draws")]
    DegenerateResample(usize),
    #[error("bootstrap needs at least one iteration")]
    NoIterations,
    #[error("invalid percentile bounds: lower={lower}, upper={upper}")]
    BadPercentiles { lower: f64, upper: f64 },
    #[error("invalid initial guess: {0}")]
    BadInitialGuess(String),
    #[error("optimizer failed: {0}")]
    Optimizer(String),
    #[error("optimizer produced a non-finite fit: {0:?}")]
    NonFinite(LineParams),
}

#[derive(Debug, Clone, Serialize)]
pub struct LineFit {
    #[serde(flatten)]
    pub params: LineParams,
    pub neg_log_likelihood: f64,
    pub iterations: u64,
    pub converged: bool,
}

impl LineFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.params.predict(x)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    pub max_iter: u64,
    /// Simplex stops once the standard deviation of its vertex costs drops below this.
    pub sd_tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iter: 5000,
            sd_tolerance: 1e-10,
        }
    }
}

/// Slope, intercept and sigma need three points and two distinct x values.
pub const MIN_FIT_SAMPLES: usize = 3;
pub const MIN_DISTINCT_X: usize = 2;

const NONZERO_DELTA: f64 = 0.05;
const ZERO_DELTA: f64 = 0.00025;

/// Negative log-likelihood over `(slope, intercept, ln sigma)`.
struct LineLikelihood<'a> {
    samples: &'a Samples,
}

impl CostFunction for LineLikelihood<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let params = LineParams {
            slope: p[0],
            intercept: p[1],
            sigma: p[2].exp(),
        };
        Ok(neg_log_likelihood(&params, self.samples))
    }
}

/// Maximum-likelihood fit of `y = slope * x + intercept + N(0, sigma)`.
///
/// The simplex runs over `(slope, intercept, ln sigma)` so every trial
/// sigma is positive. `initial_guess` is `(slope, intercept, sigma)`.
pub fn fit_line(samples: &Samples, initial_guess: [f64; 3]) -> Result<LineFit, FitError> {
    fit_line_with(samples, initial_guess, &FitOptions::default())
}

pub fn fit_line_with(
    samples: &Samples,
    initial_guess: [f64; 3],
    options: &FitOptions,
) -> Result<LineFit, FitError> {
    if samples.len() < MIN_FIT_SAMPLES {
        return Err(FitError::TooFewSamples {
            needed: MIN_FIT_SAMPLES,
            found: samples.len(),
        });
    }
    let distinct_x = samples.distinct_x();
    if distinct_x < MIN_DISTINCT_X {
        return Err(FitError::DegenerateX(distinct_x));
    }
    let [slope0, intercept0, sigma0] = initial_guess;
    if !(sigma0 > 0.0 && sigma0.is_finite()) || !slope0.is_finite() || !intercept0.is_finite() {
        return Err(FitError::BadInitialGuess(format!("{initial_guess:?}")));
    }

    let solver = NelderMead::new(initial_simplex(&[slope0, intercept0, sigma0.ln()]))
        .with_sd_tolerance(options.sd_tolerance)
        .map_err(|e| FitError::Optimizer(e.to_string()))?;
    let result = Executor::new(LineLikelihood { samples }, solver)
        .configure(|state| state.max_iters(options.max_iter))
        .run()
        .map_err(|e| FitError::Optimizer(e.to_string()))?;

    let state = result.state();
    let best = state
        .get_best_param()
        .ok_or_else(|| FitError::Optimizer("no best parameter recorded".to_string()))?;
    let params = LineParams {
        slope: best[0],
        intercept: best[1],
        sigma: best[2].exp(),
    };
    if !params.slope.is_finite()
        || !params.intercept.is_finite()
        || !params.sigma.is_finite()
        || params.sigma <= 0.0
    {
        return Err(FitError::NonFinite(params));
    }
    let converged = matches!(
        state.get_termination_reason(),
        Some(TerminationReason::SolverConverged)
    );
    let iterations = state.get_iter();

    debug!(
        slope = params.slope,
        intercept = params.intercept,
        sigma = params.sigma,
        iterations,
        converged,
        "line fit"
    );

    Ok(LineFit {
        params,
        neg_log_likelihood: state.get_best_cost(),
        iterations,
        converged,
    })
}

/// Start point plus one vertex per coordinate, each nudged by 5% (0.00025 when zero).
fn initial_simplex(x0: &[f64]) -> Vec<Vec<f64>> {
    let mut simplex = Vec::with_capacity(x0.len() + 1);
    simplex.push(x0.to_vec());
    for i in 0..x0.len() {
        let mut vertex = x0.to_vec();
        vertex[i] = if vertex[i] != 0.0 {
            vertex[i] * (1.0 + NONZERO_DELTA)
        } else {
            ZERO_DELTA
        };
        simplex.push(vertex);
    }
    simplex
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/fit.rs"]
mod tests;

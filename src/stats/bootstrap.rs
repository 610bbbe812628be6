use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;
use tracing::{info, warn};

use crate::model::params::BootstrapParams;
use crate::model::samples::{Band, Samples};
use crate::stats::fit::{FitError, LineFit, MIN_DISTINCT_X, fit_line};
use crate::stats::percentile_sorted;

#[derive(Debug, Clone)]
pub struct BootstrapOutput {
    /// Fit on the full sample set; drawn as the regression line.
    pub fit: LineFit,
    pub band: Band,
    /// One simulated curve per iteration, each aligned with the input x.
    pub curves: Vec<Vec<f64>>,
    pub unconverged: usize,
    /// Resamples discarded for having too few distinct points to fit.
    pub redrawn: usize,
}

/// A resample is refit only if it has two distinct x values and three
/// distinct points; otherwise sigma collapses or the slope is unidentified.
pub const MIN_DISTINCT_POINTS: usize = 3;
pub const MAX_DRAWS_PER_ITERATION: usize = 10_000;

fn fittable(samples: &Samples) -> bool {
    samples.distinct_x() >= MIN_DISTINCT_X && samples.distinct_points() >= MIN_DISTINCT_POINTS
}

pub fn validate_params(params: &BootstrapParams) -> Result<(), FitError> {
    if params.iterations == 0 {
        return Err(FitError::NoIterations);
    }
    let in_range = |p: f64| (0.0..=100.0).contains(&p);
    if !in_range(params.lower_pct)
        || !in_range(params.upper_pct)
        || params.lower_pct > params.upper_pct
    {
        return Err(FitError::BadPercentiles {
            lower: params.lower_pct,
            upper: params.upper_pct,
        });
    }
    Ok(())
}

/// Bootstrapped prediction band around a maximum-likelihood line fit.
///
/// Each iteration refits a same-size resample drawn with replacement,
/// evaluates the fit at every original x, and adds Gaussian noise with the
/// fitted sigma. The band is the per-position percentile envelope of the
/// simulated curves.
pub fn bootstrap_band(
    samples: &Samples,
    params: &BootstrapParams,
) -> Result<BootstrapOutput, FitError> {
    validate_params(params)?;
    let distinct = samples.distinct_points();
    if samples.len() >= MIN_DISTINCT_POINTS && distinct < MIN_DISTINCT_POINTS {
        return Err(FitError::TooFewDistinctPoints {
            needed: MIN_DISTINCT_POINTS,
            found: distinct,
        });
    }
    let fit = fit_line(samples, params.initial_guess)?;

    let n = samples.len();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut indices = vec![0usize; n];
    let mut curves = Vec::with_capacity(params.iterations);
    let mut unconverged = 0usize;
    let mut redrawn = 0usize;

    for _ in 0..params.iterations {
        let mut draws = 0usize;
        let resample = loop {
            for idx in indices.iter_mut() {
                *idx = rng.gen_range(0..n);
            }
            draws += 1;
            let resample = samples.select(&indices);
            if fittable(&resample) {
                break resample;
            }
            if draws >= MAX_DRAWS_PER_ITERATION {
                return Err(FitError::DegenerateResample(draws));
            }
        };
        redrawn += draws - 1;
        let boot = fit_line(&resample, params.initial_guess)?;
        if !boot.converged {
            unconverged += 1;
        }
        let noise = Normal::new(0.0, boot.params.sigma)
            .map_err(|_| FitError::NonFinite(boot.params))?;
        let curve: Vec<f64> = samples
            .x
            .iter()
            .map(|&x| boot.predict(x) + noise.sample(&mut rng))
            .collect();
        curves.push(curve);
    }

    if unconverged > 0 {
        warn!(
            "{unconverged} of {} bootstrap fits stopped at the iteration limit",
            params.iterations
        );
    }

    if redrawn > 0 {
        warn!("{redrawn} bootstrap resamples had too few distinct points and were redrawn");
    }

    let band = envelope(&curves, n, params.lower_pct, params.upper_pct);
    info!(
        iterations = params.iterations,
        n_samples = n,
        slope = fit.params.slope,
        intercept = fit.params.intercept,
        sigma = fit.params.sigma,
        "bootstrap band complete"
    );

    Ok(BootstrapOutput {
        fit,
        band,
        curves,
        unconverged,
        redrawn,
    })
}

/// Per-position percentiles across `curves`; each curve must have `n` points.
pub fn envelope(curves: &[Vec<f64>], n: usize, lower_pct: f64, upper_pct: f64) -> Band {
    let mut lo = Vec::with_capacity(n);
    let mut hi = Vec::with_capacity(n);
    let mut column = Vec::with_capacity(curves.len());
    for pos in 0..n {
        column.clear();
        column.extend(curves.iter().map(|c| c[pos]));
        if column.is_empty() {
            lo.push(f64::NAN);
            hi.push(f64::NAN);
            continue;
        }
        column.sort_by(f64::total_cmp);
        lo.push(percentile_sorted(&column, lower_pct));
        hi.push(percentile_sorted(&column, upper_pct));
    }
    Band { lo, hi }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/bootstrap.rs"]
mod tests;

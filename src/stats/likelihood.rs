use serde::Serialize;
use statrs::distribution::{Continuous, Normal};

use crate::model::samples::Samples;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
    pub sigma: f64,
}

impl LineParams {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Negative Gaussian log-likelihood of `samples` under the line model.
pub fn neg_log_likelihood(params: &LineParams, samples: &Samples) -> f64 {
    if !params.sigma.is_finite() || params.sigma <= 0.0 {
        return f64::INFINITY;
    }
    let Ok(noise) = Normal::new(0.0, params.sigma) else {
        return f64::INFINITY;
    };
    let mut nll = 0.0;
    for (&x, &y) in samples.x.iter().zip(samples.y.iter()) {
        nll -= noise.ln_pdf(y - params.predict(x));
    }
    if nll.is_nan() { f64::INFINITY } else { nll }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/likelihood.rs"]
mod tests;

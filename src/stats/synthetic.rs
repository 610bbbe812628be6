use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;

use crate::input::InputError;
use crate::model::params::SyntheticParams;
use crate::model::samples::Samples;
use crate::stats::fit::MIN_FIT_SAMPLES;

/// Draws `n` points with x uniform in `[x_min, x_max)` and
/// `y = slope * x + intercept + N(0, noise_sd)`. A zero `noise_sd` puts
/// every point on the line.
pub fn generate_samples(params: &SyntheticParams) -> Result<Samples, InputError> {
    if params.n < MIN_FIT_SAMPLES {
        return Err(InputError::InvalidInput(format!(
            "synthetic sample count must be at least {MIN_FIT_SAMPLES}, got {}",
            params.n
        )));
    }
    if !(params.x_min < params.x_max) {
        return Err(InputError::InvalidInput(format!(
            "empty x range [{}, {})",
            params.x_min, params.x_max
        )));
    }
    if !params.noise_sd.is_finite() || params.noise_sd < 0.0 {
        return Err(InputError::InvalidInput(format!(
            "noise sd must be finite and non-negative, got {}",
            params.noise_sd
        )));
    }
    let noise = if params.noise_sd > 0.0 {
        let normal = Normal::new(0.0, params.noise_sd).map_err(|e| {
            InputError::InvalidInput(format!("noise sd {}: {e}", params.noise_sd))
        })?;
        Some(normal)
    } else {
        None
    };

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut x = Vec::with_capacity(params.n);
    let mut y = Vec::with_capacity(params.n);
    for _ in 0..params.n {
        let xi = rng.gen_range(params.x_min..params.x_max);
        x.push(xi);
        let eps = noise.as_ref().map_or(0.0, |n| n.sample(&mut rng));
        y.push(params.slope * xi + params.intercept + eps);
    }
    Samples::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/synthetic.rs"]
mod tests;

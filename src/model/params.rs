#[derive(Debug, Clone)]
pub struct BootstrapParams {
    pub iterations: usize,
    pub lower_pct: f64,
    pub upper_pct: f64,
    pub seed: u64,
    /// Optimizer start as (slope, intercept, sigma).
    pub initial_guess: [f64; 3],
}

#[derive(Debug, Clone)]
pub struct SyntheticParams {
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub slope: f64,
    pub intercept: f64,
    pub noise_sd: f64,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct BulletParams {
    pub width: u32,
    pub bar_size: f64,
    pub tick_size: f64,
}

impl BootstrapParams {
    pub fn default_v1() -> Self {
        Self {
            iterations: 1000,
            lower_pct: 2.5,
            upper_pct: 97.5,
            seed: 42,
            initial_guess: [2.0, 2.0, 2.0],
        }
    }
}

impl SyntheticParams {
    pub fn default_v1() -> Self {
        Self {
            n: 100,
            x_min: 0.0,
            x_max: 10.0,
            slope: 2.0,
            intercept: 5.0,
            noise_sd: 1.5,
            seed: 42,
        }
    }
}

impl BulletParams {
    pub fn default_v1() -> Self {
        Self {
            width: 500,
            bar_size: 10.0,
            tick_size: 12.0,
        }
    }
}

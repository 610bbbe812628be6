use serde::Serialize;

use crate::model::params::BootstrapParams;
use crate::report::{ToolMeta, WidthStats};
use crate::stats::fit::LineFit;
use crate::stats::{mean, percentile};

#[derive(Debug, Clone, Serialize)]
pub struct BulletSummary {
    pub tool: ToolMeta,
    pub chart: &'static str,
    pub source: String,
    pub n_records: usize,
    pub n_layers: usize,
    pub width: u32,
    pub titles: Vec<String>,
    pub unsorted_thresholds: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BootstrapSummary {
    pub iterations: usize,
    pub curves: usize,
    pub lower_pct: f64,
    pub upper_pct: f64,
    pub seed: u64,
    pub unconverged: usize,
    pub redrawn: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandSummary {
    pub tool: ToolMeta,
    pub chart: &'static str,
    pub source: String,
    pub n_samples: usize,
    pub fit: LineFit,
    pub bootstrap: BootstrapSummary,
    pub band_width: Option<WidthStats>,
}

impl BootstrapSummary {
    pub fn new(
        params: &BootstrapParams,
        curves: usize,
        unconverged: usize,
        redrawn: usize,
    ) -> Self {
        Self {
            iterations: params.iterations,
            curves,
            lower_pct: params.lower_pct,
            upper_pct: params.upper_pct,
            seed: params.seed,
            unconverged,
            redrawn,
        }
    }
}

pub fn width_stats(widths: &[f64]) -> Option<WidthStats> {
    Some(WidthStats {
        min: percentile(widths, 0.0)?,
        median: percentile(widths, 50.0)?,
        max: percentile(widths, 100.0)?,
        mean: mean(widths),
    })
}

pub fn render_json<T: Serialize>(summary: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

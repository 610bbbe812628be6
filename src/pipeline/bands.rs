use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::band::{band_rows, band_spec};
use crate::error::AppError;
use crate::input::load_samples;
use crate::model::params::{BootstrapParams, SyntheticParams};
use crate::model::samples::Samples;
use crate::pipeline::{RunContext, WrittenOutputs};
use crate::report::html::render_html;
use crate::report::json::{BandSummary, BootstrapSummary, render_json, width_stats};
use crate::report::tsv::write_band_tsv;
use crate::report::write_text;
use crate::stats::bootstrap::bootstrap_band;
use crate::stats::synthetic::generate_samples;

pub const SPEC_FILE: &str = "bands.vl.json";
pub const HTML_FILE: &str = "bands.html";
pub const DATA_FILE: &str = "bands.tsv";
pub const SUMMARY_FILE: &str = "bands.summary.json";

#[derive(Debug, Clone)]
pub struct BandsConfig {
    pub samples_path: Option<PathBuf>,
    pub synthetic: SyntheticParams,
    pub bootstrap: BootstrapParams,
}

pub fn obtain_samples(
    samples_path: Option<&Path>,
    synthetic: &SyntheticParams,
) -> Result<(Samples, String), AppError> {
    match samples_path {
        Some(path) => Ok((load_samples(path)?, path.display().to_string())),
        None => {
            let samples = generate_samples(synthetic)?;
            info!(
                "generated {} synthetic samples (y = {}x + {} + N(0, {}), seed {})",
                samples.len(),
                synthetic.slope,
                synthetic.intercept,
                synthetic.noise_sd,
                synthetic.seed
            );
            Ok((samples, "synthetic".to_string()))
        }
    }
}

pub fn run_bands(config: &BandsConfig, ctx: &RunContext) -> Result<WrittenOutputs, AppError> {
    let (samples, source) = obtain_samples(config.samples_path.as_deref(), &config.synthetic)?;

    let output = bootstrap_band(&samples, &config.bootstrap)?;
    let rows = band_rows(&samples, &output);
    let title = format!(
        "Regression line with {}-{} percentile bootstrap band",
        config.bootstrap.lower_pct, config.bootstrap.upper_pct
    );
    let spec = band_spec(&rows, &title)?;

    fs::create_dir_all(&ctx.out_dir)?;

    let spec_path = ctx.out_dir.join(SPEC_FILE);
    write_text(&spec_path, &(spec.to_json_pretty()? + "\n"))?;
    info!("wrote {}", spec_path.display());

    let data_path = ctx.out_dir.join(DATA_FILE);
    write_band_tsv(&rows, &data_path)?;
    info!("wrote {}", data_path.display());

    let html_path = if ctx.write_html {
        let path = ctx.out_dir.join(HTML_FILE);
        write_text(&path, &render_html(&title, &spec)?)?;
        info!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    let summary = BandSummary {
        tool: ctx.tool.clone(),
        chart: "bands",
        source,
        n_samples: samples.len(),
        bootstrap: BootstrapSummary::new(
            &config.bootstrap,
            output.curves.len(),
            output.unconverged,
            output.redrawn,
        ),
        band_width: width_stats(&output.band.widths()),
        fit: output.fit,
    };
    let summary_path = ctx.out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render_json(&summary)?)?;

    Ok(WrittenOutputs {
        spec: spec_path,
        html: html_path,
        data: Some(data_path),
        summary: summary_path,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/bands.rs"]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::bullet::bullet_spec;
use crate::error::AppError;
use crate::input::load_kpi_records;
use crate::model::kpi::{KpiRecord, default_records};
use crate::model::params::BulletParams;
use crate::pipeline::{RunContext, WrittenOutputs};
use crate::report::html::render_html;
use crate::report::json::{BulletSummary, render_json};
use crate::report::write_text;

pub const SPEC_FILE: &str = "bullet.vl.json";
pub const HTML_FILE: &str = "bullet.html";
pub const SUMMARY_FILE: &str = "bullet.summary.json";

#[derive(Debug, Clone)]
pub struct BulletConfig {
    pub data_path: Option<PathBuf>,
    pub params: BulletParams,
}

pub fn load_records(data_path: Option<&Path>) -> Result<(Vec<KpiRecord>, String), AppError> {
    match data_path {
        Some(path) => Ok((load_kpi_records(path)?, path.display().to_string())),
        None => {
            info!("using built-in KPI table");
            Ok((default_records(), "built-in".to_string()))
        }
    }
}

pub fn run_bullet(config: &BulletConfig, ctx: &RunContext) -> Result<WrittenOutputs, AppError> {
    let (records, source) = load_records(config.data_path.as_deref())?;

    let unsorted_thresholds = records
        .iter()
        .filter(|r| !r.ranges_ascending())
        .map(|r| r.title.clone())
        .collect::<Vec<_>>();

    let spec = bullet_spec(&records, &config.params)?;
    let n_layers = spec.spec.as_ref().map_or(0, |s| s.layer.len());

    fs::create_dir_all(&ctx.out_dir)?;

    let spec_path = ctx.out_dir.join(SPEC_FILE);
    write_text(&spec_path, &(spec.to_json_pretty()? + "\n"))?;
    info!("wrote {}", spec_path.display());

    let html_path = if ctx.write_html {
        let path = ctx.out_dir.join(HTML_FILE);
        write_text(&path, &render_html("KPI bullet charts", &spec)?)?;
        info!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    let summary = BulletSummary {
        tool: ctx.tool.clone(),
        chart: "bullet",
        source,
        n_records: records.len(),
        n_layers,
        width: config.params.width,
        titles: records.iter().map(|r| r.title.clone()).collect(),
        unsorted_thresholds,
    };
    let summary_path = ctx.out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render_json(&summary)?)?;

    Ok(WrittenOutputs {
        spec: spec_path,
        html: html_path,
        data: None,
        summary: summary_path,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/bullet.rs"]
mod tests;

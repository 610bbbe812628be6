mod chart;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use crate::error::AppError;
use crate::model::params::{BootstrapParams, BulletParams, SyntheticParams};
use crate::pipeline::bands::{BandsConfig, run_bands};
use crate::pipeline::bullet::{BulletConfig, run_bullet};
use crate::pipeline::{RunContext, WrittenOutputs};
use crate::report::ToolMeta;

#[derive(Debug, Parser)]
#[command(name = "bulletband", version, about)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Faceted KPI bullet chart.
    Bullet(BulletArgs),
    /// Scatter plot with a maximum-likelihood line and bootstrapped band.
    Bands(BandsArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Skip the HTML page and write only the Vega-Lite JSON.
    #[arg(long)]
    no_html: bool,
}

#[derive(Debug, Args)]
struct BulletArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// KPI records as TSV or JSON; the built-in table is used when absent.
    #[arg(long)]
    data: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,
}

#[derive(Debug, Args)]
struct BandsArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// x/y samples as TSV or JSON; synthetic data is generated when absent.
    #[arg(long)]
    samples: Option<PathBuf>,

    /// Synthetic sample count.
    #[arg(long)]
    n: Option<usize>,
    #[arg(long)]
    data_seed: Option<u64>,
    #[arg(long, allow_hyphen_values = true)]
    slope: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    intercept: Option<f64>,
    #[arg(long)]
    noise_sd: Option<f64>,

    /// Bootstrap iterations.
    #[arg(long)]
    iterations: Option<usize>,
    /// Bootstrap RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Lower band percentile.
    #[arg(long)]
    lower: Option<f64>,
    /// Upper band percentile.
    #[arg(long)]
    upper: Option<f64>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let tool = tool_meta();
    let written = match cli.command {
        Command::Bullet(args) => {
            let ctx = run_context(&args.output, tool);
            run_bullet(&bullet_config(&args), &ctx)?
        }
        Command::Bands(args) => {
            let ctx = run_context(&args.output, tool);
            run_bands(&bands_config(&args), &ctx)?
        }
    };
    log_outputs(&written);
    Ok(())
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn run_context(output: &OutputArgs, tool: ToolMeta) -> RunContext {
    RunContext {
        out_dir: output.out.clone(),
        write_html: !output.no_html,
        tool,
    }
}

fn bullet_config(args: &BulletArgs) -> BulletConfig {
    let mut params = BulletParams::default_v1();
    if let Some(width) = args.width {
        params.width = width;
    }
    BulletConfig {
        data_path: args.data.clone(),
        params,
    }
}

fn bands_config(args: &BandsArgs) -> BandsConfig {
    let mut synthetic = SyntheticParams::default_v1();
    if let Some(n) = args.n {
        synthetic.n = n;
    }
    if let Some(seed) = args.data_seed {
        synthetic.seed = seed;
    }
    if let Some(slope) = args.slope {
        synthetic.slope = slope;
    }
    if let Some(intercept) = args.intercept {
        synthetic.intercept = intercept;
    }
    if let Some(sd) = args.noise_sd {
        synthetic.noise_sd = sd;
    }

    let mut bootstrap = BootstrapParams::default_v1();
    if let Some(iterations) = args.iterations {
        bootstrap.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        bootstrap.seed = seed;
    }
    if let Some(lower) = args.lower {
        bootstrap.lower_pct = lower;
    }
    if let Some(upper) = args.upper {
        bootstrap.upper_pct = upper;
    }

    BandsConfig {
        samples_path: args.samples.clone(),
        synthetic,
        bootstrap,
    }
}

fn log_outputs(written: &WrittenOutputs) {
    let mut files = vec![written.spec.display().to_string()];
    if let Some(html) = &written.html {
        files.push(html.display().to_string());
    }
    if let Some(data) = &written.data {
        files.push(data.display().to_string());
    }
    files.push(written.summary.display().to_string());
    info!("outputs: {}", files.join(", "));
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

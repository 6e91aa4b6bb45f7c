//! Heat map renderer for monthly global land-surface temperature.
//!
//! One-shot pipeline: fetch the variance dataset, build render
//! instructions, serialize to SVG, write to disk. A failed fetch skips
//! rendering and exits cleanly.

mod fetch;
mod marker;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Parser, Debug)]
#[command(name = "heatmap-cli")]
#[command(about = "Renders the monthly global land-surface temperature heat map")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "DATASET_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Output SVG path
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// Directory for the identification marker
    #[arg(long, default_value = ".heatmap")]
    state_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    marker::write_project_marker(&args.state_dir);

    // Silent no-render on fetch failure
    let Some(dataset) = fetch::fetch_dataset(&args.url).await else {
        return Ok(());
    };

    let layout = heatmap_common::Layout::default();
    let instructions = chart_builder::build(&dataset, &layout)
        .context("Failed to build chart from dataset")?;
    let svg = svg_renderer::render_svg(&instructions);

    tokio::fs::write(&args.output, &svg)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        cells = instructions.cells.len(),
        bytes = svg.len(),
        output = %args.output.display(),
        "Rendered heat map"
    );

    Ok(())
}

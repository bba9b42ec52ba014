use std::path::PathBuf;

use clap::Parser;
use scenplot_core::JobConfig;

use scenplot::{init_logging, load_config, run};

#[derive(Parser, Debug)]
#[command(name = "scenplot")]
#[command(about = "Render regional scenario time-series comparison figures")]
struct Args {
    /// Path to a YAML job config (default: the built-in CMIP6 surface
    /// ozone job)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the input data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the output plot directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => JobConfig::cmip6_surface_ozone(),
    };
    if let Some(dir) = args.data_dir {
        cfg.data_dir = dir;
    }
    if let Some(dir) = args.plot_dir {
        cfg.plot_dir = dir;
    }

    let out_path = run(&cfg)?;
    tracing::info!("figure written to {}", out_path.display());

    Ok(())
}

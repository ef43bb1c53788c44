// File: crates/chartkit-dashboard/src/main.rs
// Summary: CLI that renders a dashboard config (or the built-in sample) to PNG files.

use std::path::PathBuf;

use anyhow::Result;
use chartkit_dashboard::{logger, sample_config, Dashboard, DashboardConfig};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "chartkit-dashboard", about = "Render dashboard charts and widgets to PNG")]
struct Args {
    /// Dashboard TOML; the sample dashboard is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory (overrides the config).
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Theme preset name (overrides the config).
    #[arg(short, long)]
    theme: Option<String>,
    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    let mut cfg = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => {
            log::info!("No config given; rendering the sample dashboard");
            sample_config(&DashboardConfig::default().out_dir)
        }
    };
    if let Some(out) = args.out {
        cfg.out_dir = out;
    }
    if let Some(theme) = args.theme {
        cfg.theme = theme;
    }

    let written = Dashboard::new(&cfg).render_all()?;
    println!("Wrote {} files to {}", written.len(), cfg.out_dir.display());
    Ok(())
}

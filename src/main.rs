pub mod analysis;
pub mod config;
pub mod report;
pub mod shape;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::AnalysisConfig;
use log::{error, info};

use crate::{analysis::Analysis, report::make_report};


#[derive(Parser)]
pub struct Args {
    /// Path to the YAML file describing the circles.
    pub config: PathBuf,
}


fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}


fn run(args: Args) -> Result<()> {
    let file = std::fs::File::open(&args.config)
        .with_context(|| format!("Could not open {:?}", args.config))?;
    let config: AnalysisConfig = serde_norway::from_reader(file)?;

    let circles = config.circles()?;

    info!("Loaded {} circle(s) for {:?}", circles.len(), config.name);

    let analysis = Analysis::new(&circles);

    info!("Found {} collinear group(s)", analysis.groups.len());

    print!("{}", make_report(&config.name, &circles, &analysis));

    Ok(())
}

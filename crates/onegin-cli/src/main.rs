use anyhow::{Context, Result};
use clap::Parser;
use onegin_config::Config;
use onegin_engine::io;

mod cli;

use cli::{CliArgs, RunSettings};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    let settings = args.into_settings(config);

    run(&settings)?;

    println!("Asked versions written to {}", settings.output.display());
    Ok(())
}

/// Load the config named on the command line, or the default one if present
fn load_config(args: &CliArgs) -> Result<Config> {
    match &args.config {
        Some(path) => {
            log::info!("Config path: {}", path.display());
            Config::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

/// Read the input, write every selected view, return how many were written
fn run(settings: &RunSettings) -> Result<usize> {
    let mut table = io::read_line_table(&settings.input, settings.byte_order)
        .with_context(|| format!("Unable to read file: {}", settings.input.display()))?;
    log::info!("Loaded {} lines from {}", table.len(), settings.input.display());

    let written = io::write_output(
        &settings.output,
        &mut table,
        settings.views,
        settings.write_header,
    )
    .with_context(|| format!("Unable to write output file {}", settings.output.display()))?;
    log::info!("Wrote {written} views to {}", settings.output.display());

    Ok(written)
}

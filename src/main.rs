//! docsite - declarative configuration for VitePress documentation sites.

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{LoadOptions, SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?);
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Check => cli::check::check_config(&config),
        Commands::Show { json } => cli::show::show_config(&config, *json),
        Commands::Resolve { path } => cli::resolve::resolve_path(&config, path),
        Commands::Generate { watch } => {
            cli::generate::run_generate(&LoadOptions::from_cli(&cli), *watch)
        }
        Commands::Serve { no_generate, .. } => cli::serve::serve_site(&config, *no_generate),
    }
}

//! crypto-toolkit - certificate expiry scanning and PGP file decryption

use clap::Parser;
use console::style;
use crypto_toolkit::cli::{Cli, Commands};
use crypto_toolkit::config::Settings;
use crypto_toolkit::{commands, utils::ConfigError};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let settings = load_settings(&cli)?;

    match &cli.command {
        Commands::Scan(args) => commands::run_scan(args, &settings, cli.quiet),
        Commands::Decrypt(args) => commands::run_decrypt(args),
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    match &cli.config {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}

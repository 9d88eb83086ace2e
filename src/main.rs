// Hide console window on Windows release builds
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

//! QuickTerm - Entry Point
//!
//! Parses the command line, resolves the session configuration, and runs
//! the terminal window.

use anyhow::Result;
use clap::Parser;
use quickterm::core::{cli::Cli, config::resolve, settings::Settings};
use quickterm::window;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Structurally malformed flags exit here with a usage message.
    let cli = Cli::parse();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Using default settings: {:#}", e);
        Settings::default()
    });

    let partial = cli.into_partial_config()?;
    let config = resolve(partial, &settings);
    info!(
        "Starting session: {:?} in {:?}",
        config.command, config.working_directory
    );

    window::run(config)
}

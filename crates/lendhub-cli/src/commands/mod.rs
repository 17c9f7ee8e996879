//! CLI command definitions and dispatch.

pub mod demo;
pub mod status;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use lendhub_core::config::AppConfig;
use lendhub_core::error::LendError;

/// LendHub — Resource Lending Engine
#[derive(Debug, Parser)]
#[command(name = "lendhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a scripted lending scenario
    Demo(demo::DemoArgs),
    /// Show pool composition and occupancy for a configuration
    Status,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), LendError> {
        match &self.command {
            Commands::Demo(args) => demo::execute(args, self.format),
            Commands::Status => status::execute(&self.config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, LendError> {
    let path = config_path.trim_end_matches(".toml");
    AppConfig::from_file(path)
}

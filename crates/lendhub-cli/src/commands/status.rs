//! Pool status CLI command.

use crate::output::{self, OutputFormat};
use lendhub_core::error::LendError;
use lendhub_engine::LendingEngine;

/// Build an engine from the configuration file and print the pool's
/// composition and (initial) occupancy.
pub fn execute(config_path: &str, format: OutputFormat) -> Result<(), LendError> {
    let config = super::load_config(config_path)?;
    let engine = LendingEngine::from_config(&config)?;
    let status = engine.pool_status();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&status)
                .unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("Resource Pool Status:");
            output::print_kv("Total", &status.total.to_string());
            output::print_kv("Occupied", &status.occupied.to_string());
            output::print_kv("Available", &status.available.to_string());
            output::print_kv("Usage", &format!("{:.1}%", status.usage_percent));
            for slot in &config.pool.composition {
                output::print_kv(&format!("Kind '{}'", slot.kind), &slot.count.to_string());
            }
        }
    }

    Ok(())
}

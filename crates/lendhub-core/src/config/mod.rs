//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod ledger;
pub mod logging;
pub mod pool;
pub mod rates;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::ledger::LedgerConfig;
use self::logging::LoggingConfig;
use self::pool::PoolConfig;
use self::rates::RateConfig;

use crate::error::LendError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Resource pool composition.
    pub pool: PoolConfig,
    /// Loan ledger limits and term settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Rate table and charge model selection.
    pub rates: RateConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `LENDHUB_`.
    pub fn load(env: &str) -> Result<Self, LendError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("LENDHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| LendError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| LendError::configuration(format!("Failed to deserialize config: {e}")))?;

        debug!(env, total_slots = app.pool.total_slots(), "Configuration loaded");
        Ok(app)
    }

    /// Load configuration from a single named file, without overlays.
    pub fn from_file(path: &str) -> Result<Self, LendError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| LendError::configuration(format!("Failed to read '{path}': {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| LendError::configuration(format!("Failed to deserialize config: {e}")))?;

        debug!(path, total_slots = app.pool.total_slots(), "Configuration loaded");
        Ok(app)
    }
}

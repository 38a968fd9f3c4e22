//! Execution configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration for running the node outside a workflow host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Node name reported in errors
    pub node_name: String,

    /// Record per-item failures instead of aborting the run
    pub continue_on_fail: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            node_name: "Gorules Node".to_string(),
            continue_on_fail: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl ExecutionConfig {
    /// Load configuration from `.env`, `config/gorules.*` and `GORULES__*`
    /// environment variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/gorules").required(false))
            .add_source(
                config::Environment::with_prefix("GORULES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable configuration ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a single file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }
}

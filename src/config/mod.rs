// Configuration - Unified Meridian configuration
// Principle: One explicit value passed into every decision, no global state

pub mod fees;
pub mod upgrades;

pub use fees::{DynamicFeeConfig, StaticFeeConfig};
pub use upgrades::UpgradeConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration consumed by the decision core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Protocol upgrade timetable
    pub upgrades: UpgradeConfig,

    /// Flat fee schedule (pre-Etna)
    pub static_fees: StaticFeeConfig,

    /// Gas-priced fee parameters (post-Etna)
    pub dynamic_fees: DynamicFeeConfig,
}

impl Config {
    /// Unified mainnet configuration.
    /// This is the SINGLE SOURCE OF TRUTH for upgrade timing and fees.
    pub fn mainnet() -> Self {
        Self {
            upgrades: UpgradeConfig::mainnet(),
            static_fees: StaticFeeConfig::mainnet(),
            dynamic_fees: DynamicFeeConfig::mainnet(),
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }
}

/// Erreurs de configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to read config file: {0}")]
    ReadFailed(String),

    #[error("Failed to parse config file: {0}")]
    ParseFailed(String),
}

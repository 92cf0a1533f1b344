use config::{Config, File};
pub use config::ConfigError;
use serde::Deserialize;
use serde_json::Value;

use crate::order::{Address, Order};

/// Main configuration struct
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Quote configuration (strategy selection, order under quote)
    pub quote: QuoteConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct QuoteConfig {
    /// Name of the strategy to quote first (e.g., "FedEx"); when unset,
    /// only the all-strategies comparison runs
    pub strategy: Option<String>,
    /// The order to price
    pub order: OrderConfig,
    /// Reserved strategy-specific parameters
    #[serde(default)]
    pub params: std::collections::HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct OrderConfig {
    /// Declared value of the order
    pub cost: f64,
    /// Destination address
    pub destination: Address,
    /// Origin address (optional, unused by calculations)
    #[serde(default)]
    pub origin: Option<Address>,
}

impl OrderConfig {
    /// Build the order described by this config
    pub fn to_order(&self) -> Order {
        Order {
            cost: self.cost,
            destination: self.destination.clone(),
            origin: self.origin.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from a configuration file
    pub fn new(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Add configuration file
            .add_source(File::with_name(config_path))
            // Add environment variables (overrides file)
            // e.g. APP_QUOTE__STRATEGY=UPS
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

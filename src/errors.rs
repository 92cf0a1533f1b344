//! Error types for strategy lookup and configuration

use thiserror::Error;

/// Errors that can occur when resolving or configuring strategies
///
/// No variant is retried or silently recovered: callers either get the
/// requested strategy (or full list) or a failure.
#[derive(Error, Debug, Clone)]
pub enum RateError {
    /// The registration table is empty. This indicates a broken build or
    /// registration step, not a runtime condition to recover from.
    #[error("no strategies registered")]
    NoStrategiesRegistered,

    /// No strategy is registered under the requested name. Lookup is
    /// exact-match, so near-misses (e.g., case variants) land here too.
    #[error("strategy not found: {0}")]
    StrategyNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for RateError {
    fn from(err: config::ConfigError) -> Self {
        RateError::Config(err.to_string())
    }
}

/// Result type for strategy operations
pub type RateResult<T> = std::result::Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RateError::NoStrategiesRegistered.to_string(),
            "no strategies registered"
        );
        assert_eq!(
            RateError::StrategyNotFound("DHL".to_string()).to_string(),
            "strategy not found: DHL"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: RateError = config::ConfigError::Message("bad file".to_string()).into();
        assert_eq!(err.to_string(), "configuration error: bad file");
    }
}

/// Counter configuration - all settings for a demo run
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | CUSTOMER_NAME | Maria Silva | Customer the demo order is opened for |
/// | TRANSFER_KEY | counter@pay.example | Instant-transfer key used for payment |
/// | LOG_LEVEL | info | Tracing level |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// CUSTOMER_NAME="Ana Costa" LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Customer the demo order is opened for
    pub customer_name: String,
    /// Instant-transfer key used when paying the demo order
    pub transfer_key: String,
    /// Tracing level: trace | debug | info | warn | error
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            customer_name: std::env::var("CUSTOMER_NAME")
                .unwrap_or_else(|_| "Maria Silva".into()),
            transfer_key: std::env::var("TRANSFER_KEY")
                .unwrap_or_else(|_| "counter@pay.example".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Only assert fields no test environment is expected to override
        let config = Config {
            customer_name: "Maria Silva".into(),
            transfer_key: "counter@pay.example".into(),
            log_level: "info".into(),
            environment: "development".into(),
        };
        assert!(config.is_development());
        assert!(!config.is_production());
    }
}

use crate::core::{AppError, Result};
use std::env;

pub mod provider;
pub mod server;

pub use provider::ProviderCredentials;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub razorpay: ProviderCredentials,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` for machine-readable logs, anything else for plain text
    pub log_format: String,
}

impl AppConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            },
            server: ServerConfig::from_env()?,
            razorpay: ProviderCredentials::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        if self.razorpay.timeout_ms == 0 {
            return Err(AppError::Configuration(
                "Razorpay timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

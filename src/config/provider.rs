use std::env;

use crate::core::{AppError, Result};
use crate::modules::gateways::services::razorpay::{DEFAULT_TIMEOUT_MS, RAZORPAY_BASE_URL};
use crate::modules::gateways::{GatewayConfig, ProviderKind};

/// Live provider credentials, loaded once at startup and read-only afterwards
#[derive(Clone)]
pub struct ProviderCredentials {
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ProviderCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(ProviderCredentials {
            key_id: non_empty_var("RAZORPAY_KEY_ID"),
            key_secret: non_empty_var("RAZORPAY_KEY_SECRET"),
            base_url: env::var("RAZORPAY_BASE_URL")
                .unwrap_or_else(|_| RAZORPAY_BASE_URL.to_string()),
            timeout_ms: env::var("RAZORPAY_TIMEOUT_MS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid RAZORPAY_TIMEOUT_MS".to_string()))?,
        })
    }

    /// Credentials with nothing configured; the live provider will refuse to init
    pub fn unconfigured() -> Self {
        ProviderCredentials {
            key_id: None,
            key_secret: None,
            base_url: RAZORPAY_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.key_id.is_some() && self.key_secret.is_some()
    }

    /// Build the per-request gateway configuration for a provider
    ///
    /// Only the live provider receives credentials; every other provider
    /// gets an empty mapping.
    pub fn gateway_config(&self, kind: ProviderKind) -> GatewayConfig {
        let mut config = GatewayConfig::new();
        if !kind.is_live() {
            return config;
        }

        if let Some(key) = &self.key_id {
            config.insert("key".to_string(), key.clone());
        }
        if let Some(secret) = &self.key_secret {
            config.insert("secret".to_string(), secret.clone());
        }
        config.insert("base_url".to_string(), self.base_url.clone());
        config.insert("timeout_ms".to_string(), self.timeout_ms.to_string());
        config
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("key_id", &self.key_id.as_ref().map(|_| "<set>"))
            .field("key_secret", &self.key_secret.as_ref().map(|_| "<set>"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

//! Helius API configuration, loaded from environment variables.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Default base of the per-address transaction history endpoint.
pub const HELIUS_API_BASE: &str = "https://api.helius.xyz/v0/addresses";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Key, endpoint and request timeout for the Helius transaction history API.
#[derive(Debug, Clone)]
pub struct HeliusConfig {
    /// HELIUS_API_KEY
    pub api_key: String,
    /// HELIUS_API_URL; requests go to `{base_url}/{wallet}/transactions`
    pub base_url: String,
    /// HELIUS_TIMEOUT_SECS
    pub timeout_secs: u64,
}

impl HeliusConfig {
    /// Config with the default endpoint and timeout.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: HELIUS_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Points requests at another endpoint (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load from environment variables. HELIUS_API_KEY is required.
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("HELIUS_API_KEY").map_err(|_| anyhow::anyhow!("HELIUS_API_KEY not set"))?;
        let base_url = env::var("HELIUS_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| HELIUS_API_BASE.to_string());
        let timeout_secs = env::var("HELIUS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            api_key,
            base_url,
            timeout_secs,
        })
    }

    /// Validate config: non-empty key, parseable base URL, non-zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("HELIUS_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("HELIUS_API_URL is not a valid URL: {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("HELIUS_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

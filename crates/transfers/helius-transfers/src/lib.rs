//! # Helius transfer fetcher
//!
//! Implements [`TransferFetcher`] on top of the Helius enhanced transactions API.
//!
//! ## Request
//!
//! `GET {base_url}/{wallet}/transactions?api-key={key}` with no body. Only the first page the
//! endpoint returns is read; there is no pagination and no retry.
//!
//! ## Response
//!
//! A JSON array of transactions. Each may carry `tokenTransfers` (array, null or absent), and each
//! transfer may carry `mint` (string, null or absent). Every non-empty `mint` is collected.
//!
//! ## Failures
//!
//! Network errors, timeouts, non-2xx statuses and malformed bodies are logged and returned as
//! [`FetchOutcome::Failed`]; they never reach the caller as errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use helius_transfers::{HeliusConfig, HeliusTransfers};
//! use transfer_fetcher::TransferFetcher;
//!
//! async fn example() -> Result<(), anyhow::Error> {
//!     let client = HeliusTransfers::new(HeliusConfig::with_api_key("your-api-key"))?;
//!     let outcome = client.fetch_interacted_tokens("WalletAddress111").await;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

mod config;

pub use config::{HeliusConfig, HELIUS_API_BASE};

use async_trait::async_trait;
use anyhow::Context;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use transfer_fetcher::{FetchOutcome, InteractionSet, TransferFetcher};

/// Helius-backed transfer fetcher.
#[derive(Debug, Clone)]
pub struct HeliusTransfers {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl HeliusTransfers {
    /// Creates the client; the request timeout comes from `config`.
    pub fn new(config: HeliusConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid Helius base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Helius base URL cannot take path segments: {}", base_url);
        }

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{wallet}/transactions`, with the wallet percent-encoded as a single path segment.
    fn transactions_url(&self, wallet: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(wallet).push("transactions");
        }
        url
    }

    async fn try_fetch(&self, wallet: &str) -> anyhow::Result<InteractionSet> {
        let response = self
            .client
            .get(self.transactions_url(wallet))
            .query(&[("api-key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Helius API error ({}): {}", status, error_text));
        }

        let transactions: Vec<EnhancedTransaction> = response.json().await?;
        Ok(collect_mints(transactions))
    }
}

#[derive(Debug, Deserialize)]
struct EnhancedTransaction {
    #[serde(rename = "tokenTransfers", default)]
    token_transfers: Option<Vec<TokenTransfer>>,
}

#[derive(Debug, Deserialize)]
struct TokenTransfer {
    #[serde(default)]
    mint: Option<String>,
}

fn collect_mints(transactions: Vec<EnhancedTransaction>) -> InteractionSet {
    transactions
        .into_iter()
        .flat_map(|tx| tx.token_transfers.unwrap_or_default())
        .filter_map(|transfer| transfer.mint)
        .filter(|mint| !mint.is_empty())
        .collect()
}

#[async_trait]
impl TransferFetcher for HeliusTransfers {
    #[instrument(skip(self))]
    async fn fetch_interacted_tokens(&self, wallet: &str) -> FetchOutcome {
        info!(wallet = %wallet, "step: helius fetch transactions");

        match self.try_fetch(wallet).await {
            Ok(tokens) => {
                info!(wallet = %wallet, token_count = tokens.len(), "step: helius fetch done");
                FetchOutcome::Fetched(tokens)
            }
            Err(e) => {
                warn!(wallet = %wallet, error = %e, "Helius fetch failed, treating wallet as having no interactions");
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}

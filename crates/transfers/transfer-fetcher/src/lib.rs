//! # Transfer fetcher
//!
//! This crate defines the interface for looking up which tokens a wallet has transferred.
//!
//! ## TransferFetcher Trait
//!
//! #### `fetch_interacted_tokens(&self, wallet: &str) -> FetchOutcome`
//!
//! Looks up the wallet's transaction history and returns its [`InteractionSet`], or
//! [`FetchOutcome::Failed`] when the lookup could not be completed.
//!
//! ## Failure policy
//!
//! A failed lookup is a value, not an error. Callers that only care about interactions use
//! [`FetchOutcome::into_interaction_set`], which treats a failure as "no known interactions".
//!
//! ## Example Usage
//!
//! ```rust
//! use transfer_fetcher::TransferFetcher;
//!
//! async fn example(fetcher: &impl TransferFetcher) {
//!     let tokens = fetcher
//!         .fetch_interacted_tokens("WalletAddress111")
//!         .await
//!         .into_interaction_set();
//!     println!("wallet touched {} tokens", tokens.len());
//! }
//! ```

use std::collections::BTreeSet;

use async_trait::async_trait;

/// Unique token identifiers (mints) a wallet was seen transferring.
pub type InteractionSet = BTreeSet<String>;

/// Result of one wallet lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// History was fetched and parsed.
    Fetched(InteractionSet),
    /// The lookup failed (network, status, body); carries a human-readable reason for logs.
    Failed(String),
}

impl FetchOutcome {
    /// Interaction set of the wallet; a failed lookup counts as no interactions.
    pub fn into_interaction_set(self) -> InteractionSet {
        match self {
            FetchOutcome::Fetched(tokens) => tokens,
            FetchOutcome::Failed(_) => InteractionSet::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// Source of per-wallet token interactions.
#[async_trait]
pub trait TransferFetcher: Send + Sync {
    /// Fetches the wallet's transaction history and collects the tokens it transferred.
    /// Never errors: failures come back as [`FetchOutcome::Failed`].
    async fn fetch_interacted_tokens(&self, wallet: &str) -> FetchOutcome;
}

//! # Wallet filter
//!
//! Decides which wallets interacted with every token in a required set.
//!
//! Wallets are checked one at a time in input order, with one fetch per wallet (repeated wallets
//! are fetched again). A wallet qualifies when its interaction set is a superset of the required
//! tokens; a failed fetch counts as an empty interaction set, so it only qualifies when no tokens
//! are required.

use std::collections::BTreeSet;

use tracing::{info, instrument};
use transfer_fetcher::TransferFetcher;

/// Verdict for one input wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletVerdict {
    pub wallet: String,
    pub qualified: bool,
    /// The lookup failed and the wallet was judged on an empty interaction set.
    pub fetch_failed: bool,
}

/// Per-wallet verdicts, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub verdicts: Vec<WalletVerdict>,
}

impl FilterReport {
    /// Qualifying wallets in input order.
    pub fn qualifying(&self) -> Vec<String> {
        self.verdicts
            .iter()
            .filter(|v| v.qualified)
            .map(|v| v.wallet.clone())
            .collect()
    }

    pub fn failed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.fetch_failed).count()
    }
}

/// Checks every wallet against `required_tokens` and returns a verdict for each.
#[instrument(skip_all, fields(wallet_count = wallets.len(), required_count = required_tokens.len()))]
pub async fn check_wallets(
    fetcher: &dyn TransferFetcher,
    wallets: &[String],
    required_tokens: &[String],
) -> FilterReport {
    let required: BTreeSet<&str> = required_tokens.iter().map(String::as_str).collect();
    let mut verdicts = Vec::with_capacity(wallets.len());

    for wallet in wallets {
        let outcome = fetcher.fetch_interacted_tokens(wallet).await;
        let fetch_failed = outcome.is_failed();
        let interactions = outcome.into_interaction_set();
        let qualified = required
            .iter()
            .all(|token| interactions.contains(*token));

        verdicts.push(WalletVerdict {
            wallet: wallet.clone(),
            qualified,
            fetch_failed,
        });
    }

    let report = FilterReport { verdicts };
    info!(
        qualifying = report.qualifying().len(),
        failed = report.failed_count(),
        "step: wallet filter done"
    );
    report
}

/// Wallets (in input order) whose interaction set covers every required token.
pub async fn filter_qualifying(
    fetcher: &dyn TransferFetcher,
    wallets: &[String],
    required_tokens: &[String],
) -> Vec<String> {
    check_wallets(fetcher, wallets, required_tokens)
        .await
        .qualifying()
}

//! Test doubles shared by the wallet-bot integration tests.
//!
//! [`MockBot`] records every message sent instead of calling Telegram; [`StubFetcher`] answers
//! wallet lookups from a fixed table and counts calls.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use transfer_fetcher::{FetchOutcome, TransferFetcher};
use wallet_bot::{Bot, Chat, Message, User};

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Bot that records sent messages.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent to one chat, in order.
    pub fn texts_for(&self, chat_id: i64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|r| r.chat_id == chat_id)
            .map(|r| r.text)
            .collect()
    }

    pub fn last_text_for(&self, chat_id: i64) -> Option<String> {
        self.texts_for(chat_id).pop()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> wallet_bot::Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Fetcher answering from a fixed table; wallets missing from the table fail.
pub struct StubFetcher {
    table: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new(entries: &[(&str, &[&str])]) -> Arc<Self> {
        let table = entries
            .iter()
            .map(|(wallet, tokens)| {
                (
                    wallet.to_string(),
                    tokens.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        Arc::new(Self {
            table,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferFetcher for StubFetcher {
    async fn fetch_interacted_tokens(&self, wallet: &str) -> FetchOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.table.get(wallet) {
            Some(tokens) => FetchOutcome::Fetched(tokens.iter().cloned().collect()),
            None => FetchOutcome::Failed("HTTP 500".to_string()),
        }
    }
}

/// Text message from user `user_id` in private chat `chat_id`.
pub fn text_message(chat_id: i64, user_id: i64, content: &str) -> Message {
    Message::text(
        format!("{}-{}", chat_id, content.len()),
        User {
            id: user_id,
            username: Some(format!("user{}", user_id)),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content,
    )
}

//! Per-user conversation sessions.
//!
//! A session belongs to one user in one chat, so members of a group each run their own sequence.
//! A key with no entry is Initial/Terminal. `begin` creates a session in `AwaitingWallets`,
//! `advance` moves it to `AwaitingTokens` with the wallet list, and `finish` evicts it.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use dbot_core::{HandlerError, Message};
use tokio::sync::Mutex;
use tracing::debug;

/// Identifies whose session a message belongs to: the sender within the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub chat_id: i64,
    pub user_id: i64,
}

impl SessionKey {
    pub fn new(chat_id: i64, user_id: i64) -> Self {
        Self { chat_id, user_id }
    }

    pub fn of(message: &Message) -> Self {
        Self::new(message.chat.id, message.user.id)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chat_id, self.user_id)
    }
}

/// Where a user is in the two-step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationState {
    AwaitingWallets,
    AwaitingTokens { wallets: Vec<String> },
}

/// One user's session record.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: ConversationState,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Time since `/start`, in whole seconds.
    pub fn age_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

/// Sessions keyed by (chat, user). The lock is only held for map operations.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionKey, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh session in `AwaitingWallets`. Returns true if an older session was replaced.
    pub async fn begin(&self, key: SessionKey) -> bool {
        let session = Session {
            state: ConversationState::AwaitingWallets,
            started_at: Utc::now(),
        };
        let replaced = self.sessions.lock().await.insert(key, session).is_some();
        debug!(session = %key, replaced = replaced, "Session started");
        replaced
    }

    /// Current state for the key, or None when no session is active.
    pub async fn state(&self, key: SessionKey) -> Option<ConversationState> {
        self.sessions
            .lock()
            .await
            .get(&key)
            .map(|s| s.state.clone())
    }

    /// Stores the wallet list and moves the session to `AwaitingTokens`.
    pub async fn advance(&self, key: SessionKey, wallets: Vec<String>) -> Result<(), HandlerError> {
        let mut sessions = self.sessions.lock().await;
        match sessions.get_mut(&key) {
            Some(session) if session.state == ConversationState::AwaitingWallets => {
                session.state = ConversationState::AwaitingTokens { wallets };
                Ok(())
            }
            Some(session) => Err(HandlerError::State(format!(
                "session {} is not awaiting wallets (state: {:?})",
                key, session.state
            ))),
            None => Err(HandlerError::State(format!(
                "session {} is not active",
                key
            ))),
        }
    }

    /// Removes and returns the session.
    pub async fn finish(&self, key: SessionKey) -> Option<Session> {
        let session = self.sessions.lock().await.remove(&key);
        if let Some(s) = &session {
            debug!(session = %key, age_secs = s.age_secs(), "Session finished");
        }
        session
    }

    /// Number of active sessions.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

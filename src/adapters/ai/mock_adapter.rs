//! Mock completion adapter for tests and offline runs.
//!
//! Replies from a script without making API calls and records every transcript it receives.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::CompletionPort;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

/// One scripted outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    /// The endpoint answered without any text.
    Empty,
    Fail(String),
}

/// Mock completion adapter.
///
/// Pops scripted replies in order; once the script is exhausted it echoes the last user turn.
pub struct MockCompletionAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockCompletionAdapter {
    /// Create a new mock adapter with default delay (10ms) and an empty script.
    pub fn new() -> Self {
        Self::with_delay(10)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue scripted replies.
    pub fn scripted(self, replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            script: Mutex::new(replies.into_iter().collect()),
            ..self
        }
    }

    /// Every transcript received so far, in call order.
    pub async fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockCompletionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionPort for MockCompletionAdapter {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError> {
        info!(turns = messages.len(), "[MOCK] Simulating completion");
        self.requests.lock().await.push(messages.to_vec());

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let next = self.script.lock().await.pop_front();
        match next {
            Some(MockReply::Text(text)) => Ok(Some(text)),
            Some(MockReply::Empty) => Ok(None),
            Some(MockReply::Fail(reason)) => Err(DomainError::Completion(reason)),
            None => {
                let last = messages
                    .iter()
                    .rev()
                    .find(|m| m.role == crate::domain::Role::User)
                    .map(|m| m.content.as_str())
                    .unwrap_or_default();
                Ok(Some(format!("[MOCK] You asked: {}", last)))
            }
        }
    }
}

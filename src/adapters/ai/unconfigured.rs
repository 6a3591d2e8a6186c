//! Completion adapter used when no API key is configured.
//!
//! Every call fails, so the chat answers with its connection fallback.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::CompletionPort;

#[derive(Debug, Default)]
pub struct UnconfiguredCompletion;

#[async_trait::async_trait]
impl CompletionPort for UnconfiguredCompletion {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<Option<String>, DomainError> {
        Err(DomainError::Completion(
            "completion API key is not configured".to_string(),
        ))
    }
}

//! Chat session: an in-memory transcript forwarded to the completion endpoint each turn.
//!
//! - Blank input is ignored
//! - One request in flight per session; a second send is rejected with `ChatBusy`
//! - Every accepted send ends with exactly one assistant turn (reply or fallback)

use crate::domain::clinic::{
    CHAT_EMPTY_REPLY, CHAT_GREETING, assistant_system_prompt, chat_fallback_reply,
};
use crate::domain::{ChatMessage, DomainError};
use crate::ports::CompletionPort;
use std::sync::{Arc, Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Clears the in-flight flag when the send finishes or its future is dropped.
/// A send dropped before its reply still closes the user turn with the fallback.
struct PendingGuard<'a> {
    pending: &'a AtomicBool,
    transcript: &'a Mutex<Vec<ChatMessage>>,
    answered: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.answered {
            warn!("chat send dropped before a reply arrived");
            lock_transcript(self.transcript).push(ChatMessage::assistant(chat_fallback_reply()));
        }
        self.pending.store(false, Ordering::SeqCst);
    }
}

fn lock_transcript(transcript: &Mutex<Vec<ChatMessage>>) -> MutexGuard<'_, Vec<ChatMessage>> {
    match transcript.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("chat transcript mutex poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

/// One visitor's chat session.
pub struct ChatService {
    completion: Arc<dyn CompletionPort>,
    system_prompt: String,
    transcript: Mutex<Vec<ChatMessage>>,
    pending: AtomicBool,
}

impl ChatService {
    /// New session seeded with the assistant greeting.
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            completion,
            system_prompt: assistant_system_prompt(),
            transcript: Mutex::new(vec![ChatMessage::assistant(CHAT_GREETING)]),
            pending: AtomicBool::new(false),
        }
    }

    /// Snapshot of the visible turns (no system prompt).
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        lock_transcript(&self.transcript).clone()
    }

    /// True while a reply is outstanding; the UI disables input meanwhile.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Send one user turn and wait for the assistant turn.
    ///
    /// Returns `Ok(None)` for blank input, `Err(ChatBusy)` while another send is outstanding.
    /// Completion failures never surface as errors; they become the fallback reply.
    pub async fn send(&self, input: &str) -> Result<Option<ChatMessage>, DomainError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }

        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DomainError::ChatBusy);
        }
        let request = {
            let mut transcript = lock_transcript(&self.transcript);
            let mut request = Vec::with_capacity(transcript.len() + 2);
            request.push(ChatMessage::system(self.system_prompt.clone()));
            request.extend(transcript.iter().cloned());
            let user = ChatMessage::user(text);
            request.push(user.clone());
            transcript.push(user);
            request
        };
        let mut guard = PendingGuard {
            pending: &self.pending,
            transcript: &self.transcript,
            answered: false,
        };

        info!(turns = request.len(), "chat turn sent");
        let reply = match self.completion.complete(&request).await {
            Ok(Some(content)) => ChatMessage::assistant(content),
            Ok(None) => {
                warn!("completion returned no text");
                ChatMessage::assistant(CHAT_EMPTY_REPLY)
            }
            Err(e) => {
                warn!(error = %e, "chat completion failed");
                ChatMessage::assistant(chat_fallback_reply())
            }
        };

        lock_transcript(&self.transcript).push(reply.clone());
        guard.answered = true;
        Ok(Some(reply))
    }
}

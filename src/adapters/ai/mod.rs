//! Completion adapters. Implement CompletionPort for LLM chat.
//!
//! Provides the OpenAI-compatible adapter, a mock adapter for testing and a stand-in
//! for when no API key is configured.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod unconfigured;

pub use mock_adapter::{MockCompletionAdapter, MockReply};
pub use openai_adapter::OpenAiAdapter;
pub use unconfigured::UnconfiguredCompletion;

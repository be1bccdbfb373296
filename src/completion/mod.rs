//! Completion service collaborator.
//!
//! Wraps an OpenAI-compatible chat-completions endpoint behind the
//! [`CompletionService`] trait: one request per turn, structured output
//! constrained to the reply schema, bounded retry with backoff.

mod client;
/// Wire types for the chat-completions API.
pub mod types;

pub use client::{CompletionService, OpenAiClient};
pub use types::{ChatRequest, ChatResponse, Message, MessageRole};

//! Hosted completion model client
//!
//! The recommendation flow forwards a rendered prompt to an external
//! OpenAI-compatible chat-completions endpoint and returns the raw model
//! reply. There is deliberately no retry, caching or fallback here; a failed
//! call surfaces as a single error.

pub mod client;

pub use client::{CompletionError, CompletionModel, OpenAiCompatClient};

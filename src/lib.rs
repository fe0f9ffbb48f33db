//! Chatcall - a minimal blocking client for OpenAI-compatible chat completions.
//!
//! One call, one HTTPS exchange: [`ChatClient::send`] posts a single user
//! message and returns the raw response body as text, success and error
//! payloads alike. There is no retry, no streaming, and no conversation
//! state; interpreting the returned JSON is the caller's job.

mod client;
mod error;
mod types;

pub use client::{ChatClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use error::ChatError;
pub use types::{ChatRequest, Message, Role};

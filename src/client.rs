//! Blocking chat-completion client.

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ChatError;
use crate::types::{ChatRequest, Message, Role};

/// Default endpoint for the OpenAI chat completions API.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const MAX_TOKENS: u32 = 1024;

/// Blocking client for OpenAI-compatible chat completions.
///
/// Holds no mutable state; one instance can be shared across threads and
/// every call is an independent request/response exchange.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatClient {
    /// Create a client targeting the default OpenAI endpoint and model.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), DEFAULT_MODEL.to_string())
    }

    /// Create a client targeting a different endpoint and model.
    pub fn with_endpoint(endpoint: String, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
        }
    }

    /// Send `prompt` as a single user message and return the raw response
    /// body as text.
    ///
    /// The returned string is the HTTP body whether the call succeeded or
    /// failed at the API level; callers inspect the payload themselves to
    /// determine the outcome. Each line of the body is terminated by `\n`;
    /// an empty body yields an empty string.
    ///
    /// # Errors
    ///
    /// [`ChatError::InvalidArgument`] if `credential` is empty (no I/O is
    /// attempted), [`ChatError::Request`] on any transport failure.
    pub fn send(&self, credential: &str, prompt: &str) -> Result<String, ChatError> {
        if credential.is_empty() {
            return Err(ChatError::InvalidArgument("credential must be non-empty"));
        }

        let request = build_request(&self.model, prompt);

        debug!(model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {credential}"))
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json")
            .json(&request)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(status, bytes = body.len(), "chat completion response read");

        Ok(terminate_lines(&body))
    }
}

/// Build the fixed-shape request body. Carriage returns are stripped from
/// the prompt, so `\r\n` collapses to `\n`; all other escaping is serde's.
fn build_request(model: &str, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![Message {
            role: Role::User,
            content: prompt.replace('\r', ""),
        }],
        max_tokens: MAX_TOKENS,
    }
}

/// Re-assemble a body the way a line reader would: `\n`, `\r\n`, and lone
/// `\r` all terminate a line, and every line, including the last, comes
/// back followed by `\n`. An empty body stays empty.
fn terminate_lines(body: &str) -> String {
    let normalized = body.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len() + 1);
    for line in normalized.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

//! Provider-agnostic completion request and response.

use crate::Message;
use serde::{Deserialize, Serialize};

/// One call to a text-generation provider.
///
/// # Examples
///
/// ```
/// use newsroom_core::{CompletionRequest, Message};
///
/// let request = CompletionRequest::builder()
///     .messages(vec![Message::system("Eres editor"), Message::user("Titular: ...")])
///     .temperature(0.7f32)
///     .max_tokens(1500u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert!(request.model().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// System then user message
    messages: Vec<Message>,
    /// Sampling temperature
    temperature: f32,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Model override; the provider default applies when `None`
    #[builder(default, setter(strip_option))]
    model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Shorthand for the usual system + user pair.
    pub fn from_prompts(
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            messages: vec![Message::system(system_prompt), Message::user(user_prompt)],
            temperature,
            max_tokens,
            model: None,
        }
    }

    /// Returns the same request targeting `model`.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// Text returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionResponse {
    /// Generated text, trimmed
    text: String,
    /// Model that produced it
    model: String,
    /// Token usage when reported
    usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Create a response.
    pub fn new(text: impl Into<String>, model: impl Into<String>, usage: Option<TokenUsage>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            usage,
        }
    }

    /// Consume the response, keeping only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

//! Text-generation provider clients for the newsroom pipeline.
//!
//! The default backend is [`GatewayClient`], a client for any
//! OpenAI-compatible chat-completions endpoint. Every call is recorded in
//! [`LlmMetrics`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gateway;
mod metrics;
mod wire;

pub use gateway::GatewayClient;
pub use metrics::{LlmMetrics, classify_error};
pub use wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage, Usage};

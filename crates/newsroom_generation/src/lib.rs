//! Bounded validate-and-repair generation loop.
//!
//! [`GenerationOrchestrator`] runs the suitability gate, then up to
//! `max_attempts` provider calls, validating each draft and feeding its
//! failures into the next prompt. [`GenerationService`] wraps it with caller
//! authentication, request parsing, draft persistence and the response
//! envelope.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod batch;
mod memory;
mod metrics;
mod orchestrator;
mod response;
mod service;
mod state;

pub use auth::StaticKeyAuthenticator;
pub use batch::{BatchEntry, BatchOutcome, BatchResult};
pub use memory::{InMemoryCalendarRepository, InMemoryDraftRepository, InMemoryNewsRepository};
pub use metrics::GenerationMetrics;
pub use orchestrator::GenerationOrchestrator;
pub use response::{
    ErrorResponse, GeneratePostResponse, NotSuitableResponse, PostMetadata, ResponseBody,
    ServiceResponse,
};
pub use service::GenerationService;
pub use state::LoopState;

//! Core data types for newsroom post generation.
//!
//! This crate provides the foundation data types shared by the validator,
//! the suitability gate, the prompt composer, the generation loop and the
//! scheduler. Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attempt;
mod completion;
mod draft;
mod message;
mod outcome;
mod platform;
mod policy;
mod request;
mod role;
mod sanitize;
mod schedule;
mod validation;
mod variant;

pub use attempt::GenerationAttempt;
pub use completion::{CompletionRequest, CompletionRequestBuilder, CompletionResponse, TokenUsage};
pub use draft::{CalendarEvent, Draft, DraftStatus, NewsItem};
pub use message::Message;
pub use outcome::{GenerationOutcome, GenerationReport, SuitabilityVerdict};
pub use platform::Platform;
pub use policy::{PlatformPolicy, PlatformPolicyTable};
pub use request::{GenerationRequest, GenerationRequestBody, GenerationRequestBuilder, NewsFields};
pub use role::Role;
pub use sanitize::{sanitize_line, sanitize_multiline};
pub use schedule::ScheduleSlot;
pub use validation::{ValidationIssue, ValidationResult};
pub use variant::Variant;

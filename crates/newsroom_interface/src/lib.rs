//! Trait definitions for the newsroom generation pipeline.
//!
//! Core components take their collaborators through these traits: the text
//! generator, the suitability policy, the persistence collaborator and the
//! caller authenticator. Default implementations live in the crates that own
//! the concern.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod generator;
mod repository;
mod suitability;

pub use auth::{Authenticator, Caller};
pub use generator::TextGenerator;
pub use repository::{CalendarRepository, DraftRepository, NewsRepository};
pub use suitability::SuitabilityPolicy;

//! Newsroom post generation.
//!
//! Turns a news item into a social post that fits its platform, and proposes
//! when to publish it.
//!
//! # Pipeline
//!
//! 1. The [`KeywordSuitabilityGate`] refuses rumors and unconfirmed transfer
//!    or injury news before anything is generated.
//! 2. The [`PromptComposer`] writes system and user prompts from the news
//!    fields, the [`PlatformPolicy`] and the failures of the previous attempt.
//! 3. A [`TextGenerator`] (usually the [`GatewayClient`]) drafts the post.
//! 4. The [`ContentValidator`] checks length, hashtags, closing line and
//!    structure; the [`GenerationOrchestrator`] retries with corrective
//!    prompts up to three attempts and keeps the best draft.
//! 5. The [`ScheduleRules`] propose one slot per platform, never two on the
//!    same day.
//!
//! # Example
//!
//! ```no_run
//! use newsroom::{GenerationRequest, Newsroom, Platform};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let newsroom = Newsroom::load()?;
//! let orchestrator = newsroom.orchestrator(newsroom.gateway()?);
//!
//! let request = GenerationRequest::builder()
//!     .news_title("El Mundial 2026 arranca en junio")
//!     .news_source("EFE")
//!     .platform(Platform::Twitter)
//!     .build()?;
//!
//! let outcome = orchestrator.generate(&request).await?;
//! if let Some(report) = outcome.report() {
//!     println!("{}", report.content());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
pub mod telemetry;

pub use app::Newsroom;

pub use newsroom_config::*;
pub use newsroom_core::*;
pub use newsroom_editorial::*;
pub use newsroom_error::*;
pub use newsroom_generation::*;
pub use newsroom_interface::*;
pub use newsroom_models::*;
pub use newsroom_schedule::*;

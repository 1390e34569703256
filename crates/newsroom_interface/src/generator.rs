//! Text-generation backends.

use async_trait::async_trait;
use newsroom_core::{CompletionRequest, CompletionResponse};
use newsroom_error::NewsroomResult;

/// Core trait that every text-generation backend implements.
///
/// One call, one completion. Implementations never retry on their own; the
/// generation loop decides what happens after a failure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompts.
    async fn generate(&self, req: &CompletionRequest) -> NewsroomResult<CompletionResponse>;

    /// Provider name (e.g., "gateway", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "google/gemini-3-flash-preview").
    fn model_name(&self) -> &str;
}

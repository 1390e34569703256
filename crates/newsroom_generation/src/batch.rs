//! Several platform and variant drafts for one news item.

use crate::{GenerationMetrics, GenerationOrchestrator};
use futures::future::join_all;
use newsroom_core::{
    GenerationReport, GenerationRequest, NewsFields, Platform, SuitabilityVerdict, Variant,
};
use newsroom_error::ErrorCode;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Result for one platform and variant of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchResult {
    /// The loop produced a draft (accepted or best effort)
    Drafted(GenerationReport),
    /// The provider failed for this combination
    Failed {
        /// Stable error code
        code: ErrorCode,
        /// Error description
        message: String,
    },
}

/// One combination of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct BatchEntry {
    /// Target platform
    platform: Platform,
    /// Tone preset
    variant: Variant,
    /// What happened
    result: BatchResult,
}

impl BatchEntry {
    /// The draft, when this combination produced one.
    pub fn report(&self) -> Option<&GenerationReport> {
        match &self.result {
            BatchResult::Drafted(report) => Some(report),
            BatchResult::Failed { .. } => None,
        }
    }
}

/// Outcome of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// The gate refused the news item; no provider call was made
    Rejected(SuitabilityVerdict),
    /// One entry per requested combination, in request order
    Drafted {
        /// Per-combination results
        entries: Vec<BatchEntry>,
    },
}

impl BatchOutcome {
    /// Entries of a drafted batch; empty when rejected.
    pub fn entries(&self) -> &[BatchEntry] {
        match self {
            BatchOutcome::Rejected(_) => &[],
            BatchOutcome::Drafted { entries } => entries,
        }
    }
}

impl GenerationOrchestrator {
    /// Generate every `(platform, variant)` combination for one news item.
    ///
    /// The gate runs once. Combinations run concurrently, each with its own
    /// bounded loop; a provider failure is recorded against its combination
    /// and does not affect the others.
    #[instrument(skip(self, news, targets), fields(targets = targets.len()))]
    pub async fn generate_batch(
        &self,
        news: &NewsFields,
        targets: &[(Platform, Variant)],
    ) -> BatchOutcome {
        let verdict = self.gate().check(news);
        if !verdict.is_suitable() {
            info!(reason = ?verdict.reason(), "Batch refused by suitability gate");
            for (platform, _) in targets {
                GenerationMetrics::get().record_outcome(&platform.to_string(), "rejected");
            }
            return BatchOutcome::Rejected(verdict);
        }

        let runs = targets.iter().map(|&(platform, variant)| async move {
            let request = GenerationRequest::new(news.clone(), platform, variant);
            let result = match self.run_attempts(&request).await {
                Ok(report) => BatchResult::Drafted(report),
                Err(e) => BatchResult::Failed {
                    code: e.code(),
                    message: e.to_string(),
                },
            };
            BatchEntry {
                platform,
                variant,
                result,
            }
        });
        let entries = join_all(runs).await;
        info!(
            drafted = entries.iter().filter(|e| e.report().is_some()).count(),
            "Batch finished"
        );
        BatchOutcome::Drafted { entries }
    }
}

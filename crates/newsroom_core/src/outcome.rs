//! Results of a generation call.

use crate::{GenerationAttempt, ValidationResult};
use serde::{Deserialize, Serialize};

/// Verdict of the suitability gate.
///
/// # Examples
///
/// ```
/// use newsroom_core::SuitabilityVerdict;
///
/// let verdict = SuitabilityVerdict::suitable();
/// assert!(verdict.is_suitable());
/// assert!(verdict.reason().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SuitabilityVerdict {
    /// Whether generation may proceed
    #[getter(skip)]
    suitable: bool,
    /// Why the item was rejected
    reason: Option<String>,
    /// What the editor could do instead
    suggestion: Option<String>,
}

impl SuitabilityVerdict {
    /// The item may be turned into a post.
    pub fn suitable() -> Self {
        Self {
            suitable: true,
            reason: None,
            suggestion: None,
        }
    }

    /// The item must not be turned into a post.
    pub fn not_suitable(reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            suitable: false,
            reason: Some(reason.into()),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Whether generation may proceed.
    pub fn is_suitable(&self) -> bool {
        self.suitable
    }
}

/// Best candidate of a generation loop with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationReport {
    /// Chosen content
    content: String,
    /// Validation of the chosen content
    validation: ValidationResult,
    /// Provider calls made (1..=max attempts)
    attempts: u32,
    /// Whether the chosen content passed validation
    accepted: bool,
    /// Every attempt in order
    history: Vec<GenerationAttempt>,
}

impl GenerationReport {
    /// Build a report from the chosen attempt and the full history.
    pub fn new(best: &GenerationAttempt, history: Vec<GenerationAttempt>) -> Self {
        Self {
            content: best.content().clone(),
            validation: best.validation().clone(),
            attempts: history.len() as u32,
            accepted: best.is_valid(),
            history,
        }
    }
}

/// What a generation call produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Content was generated (accepted or best effort)
    Drafted(GenerationReport),
    /// The gate refused the item; no provider call was made
    Rejected(SuitabilityVerdict),
}

impl GenerationOutcome {
    /// The report, if content was generated.
    pub fn report(&self) -> Option<&GenerationReport> {
        match self {
            GenerationOutcome::Drafted(report) => Some(report),
            GenerationOutcome::Rejected(_) => None,
        }
    }

    /// Whether the gate refused the item.
    pub fn is_rejected(&self) -> bool {
        matches!(self, GenerationOutcome::Rejected(_))
    }
}

//! Record of one generation attempt.

use crate::ValidationResult;
use serde::{Deserialize, Serialize};

/// One provider call and how its output validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationAttempt {
    /// 1-based attempt index
    attempt_number: u32,
    /// Provider text, trimmed
    content: String,
    /// Validation of `content`
    validation: ValidationResult,
    /// Sampling temperature used for this call
    temperature: f32,
}

impl GenerationAttempt {
    /// Record an attempt.
    pub fn new(
        attempt_number: u32,
        content: impl Into<String>,
        validation: ValidationResult,
        temperature: f32,
    ) -> Self {
        Self {
            attempt_number,
            content: content.into(),
            validation,
            temperature,
        }
    }

    /// Number of blocking issues.
    pub fn error_count(&self) -> usize {
        self.validation.errors().len()
    }

    /// Whether the attempt passed validation.
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

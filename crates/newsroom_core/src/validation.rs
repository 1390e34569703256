//! Content validation diagnostics.

use serde::{Deserialize, Serialize};

/// One finding produced by the content validator.
///
/// Blocking issues land in [`ValidationResult::errors`], the rest in
/// [`ValidationResult::warnings`].
///
/// # Examples
///
/// ```
/// use newsroom_core::ValidationIssue;
///
/// let issue = ValidationIssue::TooManyHashtags { count: 5, max: 2 };
/// assert_eq!(issue.to_string(), "Too many hashtags: 5 (maximum 2)");
/// assert!(issue.is_blocking());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Fewer characters than the platform minimum
    #[display("Content too short: {} characters (minimum {})", count, min)]
    TooShort {
        /// Characters counted
        count: usize,
        /// Platform minimum
        min: usize,
    },
    /// More characters than the platform maximum
    #[display("Content too long: {} characters (maximum {})", count, max)]
    TooLong {
        /// Characters counted
        count: usize,
        /// Platform maximum
        max: usize,
    },
    /// More hashtags than allowed
    #[display("Too many hashtags: {} (maximum {})", count, max)]
    TooManyHashtags {
        /// Hashtags counted
        count: usize,
        /// Platform maximum
        max: usize,
    },
    /// Fewer hashtags than recommended
    #[display("Few hashtags: {} (recommended at least {})", count, min)]
    TooFewHashtags {
        /// Hashtags counted
        count: usize,
        /// Platform minimum
        min: usize,
    },
    /// No question or "what to watch" line near the end
    #[display("Missing closing question or \"what to watch\" line")]
    MissingClosing,
    /// Long-form post does not look like hook, context, keys, close
    #[display("Structure could be improved: expected hook, context, key points and closing")]
    WeakStructure,
}

impl ValidationIssue {
    /// Whether the issue prevents acceptance.
    pub fn is_blocking(&self) -> bool {
        !matches!(
            self,
            ValidationIssue::TooFewHashtags { .. } | ValidationIssue::WeakStructure
        )
    }
}

/// Outcome of validating one piece of content against one platform policy.
///
/// # Examples
///
/// ```
/// use newsroom_core::{ValidationIssue, ValidationResult};
///
/// let result = ValidationResult::new(
///     vec![ValidationIssue::MissingClosing],
///     vec![],
///     150,
///     1,
/// );
/// assert!(!result.is_valid());
/// assert_eq!(result.error_messages().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    #[getter(skip)]
    is_valid: bool,
    /// Blocking issues
    errors: Vec<ValidationIssue>,
    /// Soft issues
    warnings: Vec<ValidationIssue>,
    /// Unicode scalar values in the content
    char_count: usize,
    /// Hashtags found in the content
    hashtag_count: usize,
}

impl ValidationResult {
    /// Build a result; validity is derived from `errors`.
    pub fn new(
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
        char_count: usize,
        hashtag_count: usize,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            char_count,
            hashtag_count,
        }
    }

    /// Whether the content may be accepted.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Human-readable blocking issues.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Human-readable soft issues.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

//! Character-count badge for the editor UI.

use newsroom_core::PlatformPolicy;
use serde::{Deserialize, Serialize};

/// Where a length falls relative to the platform range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CharCountStatus {
    /// Within range
    #[display("ok")]
    Ok,
    /// Below the minimum
    #[display("short")]
    Short,
    /// Above the maximum
    #[display("long")]
    Long,
}

/// Status plus a display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CharacterCountEvaluation {
    /// Range status
    status: CharCountStatus,
    /// Badge text
    message: String,
    /// Characters counted
    count: usize,
}

/// Evaluate a draft's length against its platform range.
///
/// # Examples
///
/// ```
/// use newsroom_core::PlatformPolicy;
/// use newsroom_editorial::{CharCountStatus, evaluate_character_count};
///
/// let policy = PlatformPolicy::new(120, 280, 0, 2, vec![], false).unwrap();
/// let eval = evaluate_character_count("Demasiado breve", &policy);
/// assert_eq!(*eval.status(), CharCountStatus::Short);
/// assert_eq!(eval.message(), "Muy corto (15/120 mín.)");
/// ```
pub fn evaluate_character_count(content: &str, policy: &PlatformPolicy) -> CharacterCountEvaluation {
    let count = content.chars().count();
    let (status, message) = if count < *policy.char_min() {
        (
            CharCountStatus::Short,
            format!("Muy corto ({}/{} mín.)", count, policy.char_min()),
        )
    } else if count > *policy.char_max() {
        (
            CharCountStatus::Long,
            format!("Muy largo ({}/{} máx.)", count, policy.char_max()),
        )
    } else {
        (CharCountStatus::Ok, format!("{} caracteres ✓", count))
    };
    CharacterCountEvaluation {
        status,
        message,
        count,
    }
}

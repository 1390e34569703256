//! Tone presets requested per platform.

use newsroom_error::{InputError, InputErrorKind};
use serde::{Deserialize, Serialize};

/// One of three tone presets. Purely a prompt hint; validation ignores it.
///
/// # Examples
///
/// ```
/// use newsroom_core::Variant;
///
/// assert_eq!(Variant::try_from(2).unwrap(), Variant::Informative);
/// assert_eq!(Variant::Narrative.number(), 3);
/// assert!(Variant::try_from(4).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(try_from = "i64", into = "u8")]
pub enum Variant {
    /// Balanced, follows the template with rigor
    #[default]
    #[display("standard")]
    Standard,
    /// Data-forward: figures, dates, verifiable facts
    #[display("informative")]
    Informative,
    /// Narrative: storytelling and restrained emotion
    #[display("narrative")]
    Narrative,
}

impl Variant {
    /// Wire number (1..=3).
    pub fn number(&self) -> u8 {
        match self {
            Variant::Standard => 1,
            Variant::Informative => 2,
            Variant::Narrative => 3,
        }
    }
}

impl TryFrom<i64> for Variant {
    type Error = InputError;

    #[track_caller]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Variant::Standard),
            2 => Ok(Variant::Informative),
            3 => Ok(Variant::Narrative),
            other => Err(InputError::new(InputErrorKind::InvalidVariant(other))),
        }
    }
}

impl From<Variant> for u8 {
    fn from(variant: Variant) -> Self {
        variant.number()
    }
}

//! Social platforms a draft can target.

use serde::{Deserialize, Serialize};

/// Target social network.
///
/// Parsing accepts `x` as an alias for Twitter and ignores case.
///
/// # Examples
///
/// ```
/// use newsroom_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::from_str("X").unwrap(), Platform::Twitter);
/// assert_eq!(Platform::LinkedIn.to_string(), "linkedin");
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
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// LinkedIn
    #[display("linkedin")]
    #[strum(serialize = "linkedin")]
    #[serde(rename = "linkedin")]
    LinkedIn,
    /// X (Twitter)
    #[display("twitter")]
    #[strum(serialize = "twitter", serialize = "x")]
    #[serde(alias = "x")]
    Twitter,
    /// Instagram
    #[display("instagram")]
    #[strum(serialize = "instagram")]
    Instagram,
    /// Facebook
    #[display("facebook")]
    #[strum(serialize = "facebook")]
    Facebook,
}

impl Platform {
    /// Human label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "X (Twitter)",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }
}

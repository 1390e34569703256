//! Role types for prompt messages.

use serde::{Deserialize, Serialize};

/// Who a message is attributed to in a chat-completion prompt.
///
/// # Examples
///
/// ```
/// use newsroom_core::Role;
///
/// assert_eq!(Role::System.to_string(), "system");
/// assert_ne!(Role::User, Role::Assistant);
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
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Editorial instructions
    #[display("system")]
    System,
    /// News fields and the final instruction
    #[display("user")]
    User,
    /// Model output
    #[display("assistant")]
    Assistant,
}

//! Chat messages.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a completion request.
///
/// # Examples
///
/// ```
/// use newsroom_core::{Message, Role};
///
/// let message = Message::user("Genera ahora el post");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Plain-text content
    pub content: String,
}

impl Message {
    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

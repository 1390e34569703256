//! Caller authentication at the inbound boundary.

use newsroom_error::AuthError;
use serde::{Deserialize, Serialize};

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Caller {
    /// Stable caller identifier
    id: String,
}

impl Caller {
    /// Create a caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Checks caller credentials before any input is looked at.
pub trait Authenticator: Send + Sync {
    /// Verify the raw `Authorization` header value, if any.
    fn authenticate(&self, authorization: Option<&str>) -> Result<Caller, AuthError>;
}

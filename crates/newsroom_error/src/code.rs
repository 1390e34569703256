//! Stable error codes for the inbound response envelope.

use serde::{Deserialize, Serialize};

/// Wire-level error code with an HTTP-like status.
///
/// # Examples
///
/// ```
/// use newsroom_error::ErrorCode;
///
/// assert_eq!(ErrorCode::QuotaExhausted.status(), 402);
/// assert_eq!(ErrorCode::RateLimited.to_string(), "rate_limited");
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
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed or out-of-range request fields
    #[display("invalid_input")]
    InvalidInput,
    /// Missing or invalid caller credentials
    #[display("unauthenticated")]
    Unauthenticated,
    /// Provider rate limit; wait before retrying
    #[display("rate_limited")]
    RateLimited,
    /// Provider credits exhausted
    #[display("quota_exhausted")]
    QuotaExhausted,
    /// Provider failed; retry later
    #[display("provider_failure")]
    ProviderFailure,
    /// Provider did not answer in time
    #[display("provider_timeout")]
    ProviderTimeout,
    /// Referenced record does not exist
    #[display("not_found")]
    NotFound,
    /// Request conflicts with current state
    #[display("conflict")]
    Conflict,
    /// Server misconfiguration or unexpected failure
    #[display("internal")]
    Internal,
}

impl ErrorCode {
    /// HTTP status associated with this code.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::InvalidInput => 400,
            ErrorCode::Unauthenticated => 401,
            ErrorCode::QuotaExhausted => 402,
            ErrorCode::NotFound => 404,
            ErrorCode::Conflict => 409,
            ErrorCode::RateLimited => 429,
            ErrorCode::Internal => 500,
            ErrorCode::ProviderFailure => 502,
            ErrorCode::ProviderTimeout => 504,
        }
    }
}

//! Text-generation provider errors.
//!
//! Provider failures abort a generation call. They are classified into three
//! user-facing classes so callers can tell "wait", "add credits" and "try again
//! later" apart.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key environment variable not set
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Provider answered 429
    #[display("Provider rate limit reached: {}", _0)]
    RateLimited(String),
    /// Provider answered 402 (credits exhausted)
    #[display("Provider quota exhausted: {}", _0)]
    QuotaExhausted(String),
    /// Provider rejected our credentials
    #[display("Provider rejected credentials: {}", _0)]
    Unauthorized(String),
    /// Call did not finish within the configured bound
    #[display("Provider call timed out after {}s", _0)]
    Timeout(u64),
    /// Network-level failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Any other non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Response body or message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Malformed provider response: {}", _0)]
    MalformedResponse(String),
    /// Response decoded but carried no text
    #[display("Provider returned an empty completion")]
    EmptyCompletion,
}

/// Coarse classification of provider failures for caller messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderFailure {
    /// Too many requests; the caller should wait
    #[display("rate_limit")]
    RateLimit,
    /// Credits exhausted; the caller should top up
    #[display("quota")]
    Quota,
    /// Anything else; generation failed, retry later
    #[display("transport")]
    Transport,
}

impl ProviderErrorKind {
    /// Map an HTTP status from the provider to an error kind.
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            429 => ProviderErrorKind::RateLimited(message),
            402 => ProviderErrorKind::QuotaExhausted(message),
            401 | 403 => ProviderErrorKind::Unauthorized(message),
            _ => ProviderErrorKind::Api {
                status_code,
                message,
            },
        }
    }

    /// Classify this error for caller-facing messaging.
    pub fn failure(&self) -> ProviderFailure {
        match self {
            ProviderErrorKind::RateLimited(_) => ProviderFailure::RateLimit,
            ProviderErrorKind::QuotaExhausted(_) => ProviderFailure::Quota,
            _ => ProviderFailure::Transport,
        }
    }

    /// Whether this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderErrorKind::Timeout(_))
    }

    /// Whether the provider asked us to slow down.
    pub fn is_rate_limited(&self) -> bool {
        self.failure() == ProviderFailure::RateLimit
    }

    /// Whether the provider account ran out of credits.
    pub fn is_quota(&self) -> bool {
        self.failure() == ProviderFailure::Quota
    }

    /// Whether this is a transport-class failure (network, timeout, bad response, auth).
    pub fn is_transport(&self) -> bool {
        self.failure() == ProviderFailure::Transport
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use newsroom_error::{ProviderError, ProviderErrorKind, ProviderFailure};
///
/// let err = ProviderError::new(ProviderErrorKind::from_status(402, "no credits"));
/// assert_eq!(err.failure(), ProviderFailure::Quota);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Caller-facing classification of this error.
    pub fn failure(&self) -> ProviderFailure {
        self.kind.failure()
    }
}

//! Top-level error wrapper types.

use crate::{
    AuthError, ConfigError, ErrorCode, InputError, ProviderError, ProviderErrorKind,
    ProviderFailure, RepositoryError, RepositoryErrorKind,
};

/// The foundation error enum aggregating every domain error.
///
/// # Examples
///
/// ```
/// use newsroom_error::{NewsroomError, ConfigError};
///
/// let err: NewsroomError = ConfigError::new("missing [platforms]").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NewsroomErrorKind {
    /// Request rejected at the boundary
    #[from(InputError)]
    Input(InputError),
    /// Caller credentials missing or invalid
    #[from(AuthError)]
    Auth(AuthError),
    /// Text-generation provider failure
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Persistence collaborator error
    #[from(RepositoryError)]
    Repository(RepositoryError),
}

/// Newsroom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use newsroom_error::{NewsroomResult, ProviderError, ProviderErrorKind};
///
/// fn call_provider() -> NewsroomResult<String> {
///     Err(ProviderError::new(ProviderErrorKind::Timeout(30)))?
/// }
///
/// assert!(call_provider().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Newsroom Error: {}", _0)]
pub struct NewsroomError(Box<NewsroomErrorKind>);

impl NewsroomError {
    /// Create a new error from a kind.
    pub fn new(kind: NewsroomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NewsroomErrorKind {
        &self.0
    }

    /// The provider failure class, if this is a provider error.
    pub fn provider_failure(&self) -> Option<ProviderFailure> {
        match self.kind() {
            NewsroomErrorKind::Provider(e) => Some(e.failure()),
            _ => None,
        }
    }

    /// Stable code for the inbound response envelope.
    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            NewsroomErrorKind::Input(_) => ErrorCode::InvalidInput,
            NewsroomErrorKind::Auth(_) => ErrorCode::Unauthenticated,
            NewsroomErrorKind::Provider(e) => match &e.kind {
                ProviderErrorKind::RateLimited(_) => ErrorCode::RateLimited,
                ProviderErrorKind::QuotaExhausted(_) => ErrorCode::QuotaExhausted,
                ProviderErrorKind::Timeout(_) => ErrorCode::ProviderTimeout,
                _ => ErrorCode::ProviderFailure,
            },
            NewsroomErrorKind::Config(_) => ErrorCode::Internal,
            NewsroomErrorKind::Repository(e) => match &e.kind {
                RepositoryErrorKind::NotFound { .. } => ErrorCode::NotFound,
                RepositoryErrorKind::InvalidTransition { .. } => ErrorCode::Conflict,
                RepositoryErrorKind::Backend(_) => ErrorCode::Internal,
            },
        }
    }
}

// Generic From implementation for any type that converts to NewsroomErrorKind
impl<T> From<T> for NewsroomError
where
    T: Into<NewsroomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for newsroom operations.
pub type NewsroomResult<T> = std::result::Result<T, NewsroomError>;

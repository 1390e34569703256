//! Inbound request validation errors.

/// Specific reasons a generation request is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InputErrorKind {
    /// Title missing or only whitespace
    #[display("News title is required")]
    EmptyTitle,
    /// A free-text field exceeds its maximum length
    #[display("Field '{}' is too long: {} characters (max {})", field, actual, max)]
    TooLong {
        /// Field name as exposed on the wire
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
        /// Actual characters received
        actual: usize,
    },
    /// URL could not be parsed or is not http(s)
    #[display("Invalid news URL: {}", _0)]
    InvalidUrl(String),
    /// Too many topics attached to the request
    #[display("Too many topics: {} (max {})", actual, max)]
    TooManyTopics {
        /// Maximum allowed topics
        max: usize,
        /// Topics received
        actual: usize,
    },
    /// Platform name not present in the policy table
    #[display("Unknown platform: {}", _0)]
    UnknownPlatform(String),
    /// Variant outside 1..=3
    #[display("Invalid variant {} (expected 1, 2 or 3)", _0)]
    InvalidVariant(i64),
    /// Request body could not be decoded
    #[display("Malformed request body: {}", _0)]
    MalformedBody(String),
    /// Any other boundary rule
    #[display("Invalid input: {}", _0)]
    Other(String),
}

/// Error type for rejected inbound requests.
///
/// # Examples
///
/// ```
/// use newsroom_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::InvalidVariant(7));
/// assert!(format!("{}", err).contains("variant 7"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The specific error condition
    pub kind: InputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

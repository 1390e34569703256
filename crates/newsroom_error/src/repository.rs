//! Persistence collaborator errors.

/// Repository error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RepositoryErrorKind {
    /// Record not found
    #[display("{} not found: {}", entity, id)]
    NotFound {
        /// Entity type (news item, draft, ...)
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },
    /// Draft status change not allowed by the approval workflow
    #[display("Cannot move draft from {} to {}", from, to)]
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },
    /// Backend failure
    #[display("Repository backend error: {}", _0)]
    Backend(String),
}

/// Repository error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Repository Error: {} at line {} in {}", kind, line, file)]
pub struct RepositoryError {
    /// The specific error kind
    pub kind: RepositoryErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl RepositoryError {
    /// Create a new repository error.
    #[track_caller]
    pub fn new(kind: RepositoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Error types for the newsroom workspace.
//!
//! This crate provides the foundation error types used throughout the newsroom crates.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Suitability rejections and content-validation failures are deliberately
//! absent: they are outcomes of a generation call, not errors.
//!
//! # Examples
//!
//! ```
//! use newsroom_error::{ErrorCode, InputError, InputErrorKind, NewsroomResult};
//!
//! fn parse_title(raw: &str) -> NewsroomResult<String> {
//!     if raw.trim().is_empty() {
//!         Err(InputError::new(InputErrorKind::EmptyTitle))?
//!     }
//!     Ok(raw.to_string())
//! }
//!
//! let err = parse_title("   ").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidInput);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod code;
mod config;
mod error;
mod input;
mod provider;
mod repository;

pub use auth::{AuthError, AuthErrorKind};
pub use code::ErrorCode;
pub use config::ConfigError;
pub use error::{NewsroomError, NewsroomErrorKind, NewsroomResult};
pub use input::{InputError, InputErrorKind};
pub use provider::{ProviderError, ProviderErrorKind, ProviderFailure};
pub use repository::{RepositoryError, RepositoryErrorKind};

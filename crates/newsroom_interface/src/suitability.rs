//! Pre-generation suitability gate.

use newsroom_core::{NewsFields, SuitabilityVerdict};

/// Decides whether a news item may be turned into a post at all.
///
/// Implementations must be pure: same fields, same verdict.
pub trait SuitabilityPolicy: Send + Sync {
    /// Judge a news item.
    fn check(&self, news: &NewsFields) -> SuitabilityVerdict;
}

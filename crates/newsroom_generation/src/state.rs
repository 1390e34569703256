//! Retry loop states.

/// State of the generation loop.
///
/// ```text
/// Attempting(n) -> Accepted | Retrying(n + 1) | Exhausted
/// Retrying(n)   -> Attempting(n)
/// ```
///
/// # Examples
///
/// ```
/// use newsroom_generation::LoopState;
///
/// assert_eq!(LoopState::after_attempt(1, false, 3), LoopState::Retrying(2));
/// assert_eq!(LoopState::after_attempt(2, true, 3), LoopState::Accepted);
/// assert_eq!(LoopState::after_attempt(3, false, 3), LoopState::Exhausted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// About to call the provider for this 1-based attempt
    Attempting(u32),
    /// Previous attempt failed validation; the next attempt is pending
    Retrying(u32),
    /// The last attempt passed validation
    Accepted,
    /// Every attempt failed validation
    Exhausted,
}

impl LoopState {
    /// State after attempt `attempt_number` was validated.
    pub fn after_attempt(attempt_number: u32, valid: bool, max_attempts: u32) -> Self {
        if valid {
            LoopState::Accepted
        } else if attempt_number >= max_attempts {
            LoopState::Exhausted
        } else {
            LoopState::Retrying(attempt_number + 1)
        }
    }

    /// Whether the loop has stopped.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoopState::Accepted | LoopState::Exhausted)
    }
}

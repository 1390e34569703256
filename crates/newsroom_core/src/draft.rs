//! Persisted records exchanged with the persistence collaborator.

use crate::{NewsFields, Platform, ScheduleSlot, Variant};
use chrono::{DateTime, FixedOffset};
use newsroom_error::{InputError, RepositoryError, RepositoryErrorKind};
use serde::{Deserialize, Serialize};

/// A captured news item as stored by the newsroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Record identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Summary
    #[serde(default)]
    pub summary: String,
    /// Article URL
    #[serde(default)]
    pub url: String,
    /// Outlet name
    #[serde(default)]
    pub source: String,
    /// Related topics
    #[serde(default)]
    pub topics: Vec<String>,
}

impl NewsItem {
    /// Sanitize and validate the stored fields for generation.
    #[track_caller]
    pub fn to_fields(&self) -> Result<NewsFields, InputError> {
        NewsFields::new(
            &self.title,
            &self.summary,
            &self.url,
            &self.source,
            self.topics.clone(),
        )
    }
}

/// Approval workflow state of a draft.
///
/// # Examples
///
/// ```
/// use newsroom_core::DraftStatus;
///
/// assert!(DraftStatus::Pending.can_transition_to(DraftStatus::Reviewed));
/// assert!(!DraftStatus::Reviewed.can_transition_to(DraftStatus::Published));
/// assert!(DraftStatus::Approved.can_transition_to(DraftStatus::Published));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DraftStatus {
    /// Freshly generated
    #[default]
    #[display("pending")]
    Pending,
    /// Looked at by an editor
    #[display("reviewed")]
    Reviewed,
    /// Cleared for publication
    #[display("approved")]
    Approved,
    /// Has a calendar slot
    #[display("scheduled")]
    Scheduled,
    /// Discarded
    #[display("rejected")]
    Rejected,
    /// Live on the platform
    #[display("published")]
    Published,
}

impl DraftStatus {
    /// Whether the workflow allows moving from `self` to `target`.
    pub fn can_transition_to(self, target: DraftStatus) -> bool {
        use DraftStatus::*;
        match target {
            Pending => false,
            Reviewed => self == Pending,
            Approved => !matches!(self, Approved | Published),
            Scheduled => self != Published,
            Published => self == Approved,
            Rejected => self != Published,
        }
    }

    /// Move to `target`, or fail with an invalid-transition error.
    #[track_caller]
    pub fn transition(self, target: DraftStatus) -> Result<DraftStatus, RepositoryError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(RepositoryError::new(RepositoryErrorKind::InvalidTransition {
                from: self.to_string(),
                to: target.to_string(),
            }))
        }
    }
}

/// A generated post awaiting editorial decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Draft {
    /// Record identifier
    id: String,
    /// News item the draft was generated from
    news_id: Option<String>,
    /// Target platform
    platform: Platform,
    /// Tone preset used
    variant: Variant,
    /// Post text
    content: String,
    /// Workflow state
    status: DraftStatus,
    /// Whether the content passed validation when generated
    is_valid: bool,
    /// Provider calls needed
    attempts: u32,
    /// Scheduled publication time, once scheduled
    scheduled_at: Option<DateTime<FixedOffset>>,
}

impl Draft {
    /// A new pending draft.
    pub fn new(
        id: impl Into<String>,
        news_id: Option<String>,
        platform: Platform,
        variant: Variant,
        content: impl Into<String>,
        is_valid: bool,
        attempts: u32,
    ) -> Self {
        Self {
            id: id.into(),
            news_id,
            platform,
            variant,
            content: content.into(),
            status: DraftStatus::Pending,
            is_valid,
            attempts,
            scheduled_at: None,
        }
    }

    /// Same draft under a repository-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Apply a workflow transition.
    #[track_caller]
    pub fn transition(&mut self, target: DraftStatus) -> Result<(), RepositoryError> {
        self.status = self.status.transition(target)?;
        Ok(())
    }

    /// Schedule the draft at `at`.
    #[track_caller]
    pub fn schedule(&mut self, at: DateTime<FixedOffset>) -> Result<(), RepositoryError> {
        self.status = self.status.transition(DraftStatus::Scheduled)?;
        self.scheduled_at = Some(at);
        Ok(())
    }
}

/// A calendar entry created from a schedule slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CalendarEvent {
    /// Record identifier
    id: String,
    /// Draft being scheduled, if any
    draft_id: Option<String>,
    /// Topic or news title
    title: String,
    /// Target platform
    platform: Platform,
    /// Publication time
    scheduled_at: DateTime<FixedOffset>,
    /// Justification carried from the slot
    notes: String,
}

impl CalendarEvent {
    /// Create an event from a slot.
    pub fn from_slot(
        id: impl Into<String>,
        title: impl Into<String>,
        draft_id: Option<String>,
        slot: &ScheduleSlot,
    ) -> Self {
        Self {
            id: id.into(),
            draft_id,
            title: title.into(),
            platform: *slot.platform(),
            scheduled_at: *slot.date(),
            notes: slot.justification().clone(),
        }
    }

    /// Same event under a repository-assigned identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

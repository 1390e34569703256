//! Persistence collaborator.
//!
//! The relational store behind the newsroom UI is out of scope; these traits
//! are the only way the pipeline reaches it.

use async_trait::async_trait;
use newsroom_core::{CalendarEvent, Draft, DraftStatus, NewsItem};
use newsroom_error::NewsroomResult;

/// Read access to captured news items.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Load one news item.
    async fn get_news(&self, id: &str) -> NewsroomResult<NewsItem>;
}

/// Storage for generated drafts and their workflow state.
#[async_trait]
pub trait DraftRepository: Send + Sync {
    /// Store a new draft. The repository assigns the identifier.
    async fn create_draft(&self, draft: Draft) -> NewsroomResult<Draft>;

    /// Load one draft.
    async fn get_draft(&self, id: &str) -> NewsroomResult<Draft>;

    /// Move a draft through the approval workflow.
    async fn update_status(&self, id: &str, status: DraftStatus) -> NewsroomResult<Draft>;

    /// List drafts, optionally filtered by status.
    async fn list_drafts(&self, status: Option<DraftStatus>) -> NewsroomResult<Vec<Draft>>;
}

/// Storage for calendar entries.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Store a new event. The repository assigns the identifier.
    async fn create_event(&self, event: CalendarEvent) -> NewsroomResult<CalendarEvent>;

    /// List events ordered by publication time.
    async fn list_events(&self) -> NewsroomResult<Vec<CalendarEvent>>;
}

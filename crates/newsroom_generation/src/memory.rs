//! In-memory persistence collaborators for tests and the CLI.
//!
//! Each repository keeps its records in a map behind a tokio `RwLock` and
//! assigns sequential identifiers. All data is lost when dropped.

use async_trait::async_trait;
use newsroom_core::{CalendarEvent, Draft, DraftStatus, NewsItem};
use newsroom_error::{NewsroomResult, RepositoryError, RepositoryErrorKind};
use newsroom_interface::{CalendarRepository, DraftRepository, NewsRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

fn not_found(entity: &'static str, id: &str) -> RepositoryError {
    RepositoryError::new(RepositoryErrorKind::NotFound {
        entity,
        id: id.to_string(),
    })
}

/// News items keyed by their own identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNewsRepository {
    items: Arc<RwLock<BTreeMap<String, NewsItem>>>,
}

impl InMemoryNewsRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace a news item.
    pub async fn insert(&self, item: NewsItem) {
        self.items.write().await.insert(item.id.clone(), item);
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn get_news(&self, id: &str) -> NewsroomResult<NewsItem> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned().ok_or_else(|| not_found("news item", id))?)
    }
}

/// Drafts with `draft-N` identifiers.
#[derive(Debug, Clone)]
pub struct InMemoryDraftRepository {
    drafts: Arc<RwLock<BTreeMap<u64, Draft>>>,
    next_id: Arc<RwLock<u64>>,
}

impl InMemoryDraftRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            drafts: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Number of stored drafts.
    pub async fn len(&self) -> usize {
        self.drafts.read().await.len()
    }

    /// Whether no draft is stored.
    pub async fn is_empty(&self) -> bool {
        self.drafts.read().await.is_empty()
    }

    fn key(id: &str) -> Option<u64> {
        id.strip_prefix("draft-")?.parse().ok()
    }
}

impl Default for InMemoryDraftRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn create_draft(&self, draft: Draft) -> NewsroomResult<Draft> {
        let mut next_id = self.next_id.write().await;
        let key = *next_id;
        *next_id += 1;
        drop(next_id);

        let draft = draft.with_id(format!("draft-{}", key));
        debug!(id = %draft.id(), platform = %draft.platform(), "Stored draft");
        self.drafts.write().await.insert(key, draft.clone());
        Ok(draft)
    }

    async fn get_draft(&self, id: &str) -> NewsroomResult<Draft> {
        let drafts = self.drafts.read().await;
        Ok(Self::key(id)
            .and_then(|key| drafts.get(&key))
            .cloned()
            .ok_or_else(|| not_found("draft", id))?)
    }

    async fn update_status(&self, id: &str, status: DraftStatus) -> NewsroomResult<Draft> {
        let mut drafts = self.drafts.write().await;
        let draft = Self::key(id)
            .and_then(|key| drafts.get_mut(&key))
            .ok_or_else(|| not_found("draft", id))?;
        draft.transition(status)?;
        debug!(id, status = %status, "Draft status updated");
        Ok(draft.clone())
    }

    async fn list_drafts(&self, status: Option<DraftStatus>) -> NewsroomResult<Vec<Draft>> {
        let drafts = self.drafts.read().await;
        Ok(drafts
            .values()
            .filter(|draft| status.is_none_or(|s| *draft.status() == s))
            .cloned()
            .collect())
    }
}

/// Calendar events with `event-N` identifiers, listed by publication time.
#[derive(Debug, Clone)]
pub struct InMemoryCalendarRepository {
    events: Arc<RwLock<Vec<CalendarEvent>>>,
    next_id: Arc<RwLock<u64>>,
}

impl InMemoryCalendarRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for InMemoryCalendarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalendarRepository for InMemoryCalendarRepository {
    async fn create_event(&self, event: CalendarEvent) -> NewsroomResult<CalendarEvent> {
        let mut next_id = self.next_id.write().await;
        let event = event.with_id(format!("event-{}", *next_id));
        *next_id += 1;
        drop(next_id);

        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn list_events(&self) -> NewsroomResult<Vec<CalendarEvent>> {
        let mut events = self.events.read().await.clone();
        events.sort_by_key(|event| *event.scheduled_at());
        Ok(events)
    }
}

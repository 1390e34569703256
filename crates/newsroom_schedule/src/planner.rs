//! Writes suggested slots to the calendar.

use crate::ScheduleRules;
use chrono::{DateTime, FixedOffset};
use newsroom_core::{CalendarEvent, DraftStatus, Platform};
use newsroom_error::{InputError, InputErrorKind, NewsroomResult};
use newsroom_interface::{CalendarRepository, DraftRepository};
use std::sync::Arc;
use tracing::{info, instrument};

/// Turns slot suggestions into calendar events.
pub struct CalendarPlanner {
    rules: Arc<ScheduleRules>,
    calendar: Arc<dyn CalendarRepository>,
}

impl CalendarPlanner {
    /// Create a planner.
    pub fn new(rules: Arc<ScheduleRules>, calendar: Arc<dyn CalendarRepository>) -> Self {
        Self { rules, calendar }
    }

    /// The rules slots are chosen by.
    pub fn rules(&self) -> &Arc<ScheduleRules> {
        &self.rules
    }

    /// Suggest slots for `topic` and store one event per slot.
    #[instrument(skip(self, platforms), fields(platforms = platforms.len()))]
    pub async fn plan_topic(
        &self,
        topic: &str,
        platforms: &[Platform],
        from: DateTime<FixedOffset>,
    ) -> NewsroomResult<Vec<CalendarEvent>> {
        let slots = self.rules.suggest_slots(topic, platforms, from)?;
        let mut events = Vec::with_capacity(slots.len());
        for slot in &slots {
            let event = CalendarEvent::from_slot(String::new(), topic, None, slot);
            events.push(self.calendar.create_event(event).await?);
        }
        info!(events = events.len(), "Topic planned");
        Ok(events)
    }

    /// Move a draft to scheduled and put it on the calendar at its platform's
    /// next slot.
    ///
    /// The status change goes first, so a draft that cannot be scheduled
    /// never reaches the calendar.
    #[instrument(skip(self, drafts))]
    pub async fn schedule_draft(
        &self,
        drafts: &dyn DraftRepository,
        draft_id: &str,
        title: &str,
        from: DateTime<FixedOffset>,
    ) -> NewsroomResult<CalendarEvent> {
        let draft = drafts.get_draft(draft_id).await?;
        let slot = self
            .rules
            .suggest_slots(title, &[*draft.platform()], from)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                InputError::new(InputErrorKind::UnknownPlatform(draft.platform().to_string()))
            })?;

        drafts.update_status(draft_id, DraftStatus::Scheduled).await?;
        let event =
            CalendarEvent::from_slot(String::new(), title, Some(draft.id().clone()), &slot);
        let event = self.calendar.create_event(event).await?;
        info!(draft_id, event_id = %event.id(), at = %event.scheduled_at(), "Draft scheduled");
        Ok(event)
    }
}

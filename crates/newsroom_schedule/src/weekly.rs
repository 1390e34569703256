//! Multi-theme weekly calendar.

use crate::ScheduleRules;
use chrono::{DateTime, Days, FixedOffset};
use newsroom_core::ScheduleSlot;
use newsroom_error::InputError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A topic to place on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Theme {
    /// Caller's identifier
    id: String,
    /// Topic title
    title: String,
}

impl Theme {
    /// Create a theme.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Slots chosen for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ThemeSchedule {
    /// The theme
    theme: Theme,
    /// One slot per weekly platform
    slots: Vec<ScheduleSlot>,
}

impl ScheduleRules {
    /// Schedule each theme on the weekly platforms, one after another.
    ///
    /// The first theme is placed from `from`; each following theme is placed
    /// from the day after the latest slot of the previous one, so themes never
    /// share a day.
    #[instrument(skip(self, themes), fields(themes = themes.len()))]
    pub fn weekly_calendar(
        &self,
        themes: &[Theme],
        from: DateTime<FixedOffset>,
    ) -> Result<Vec<ThemeSchedule>, InputError> {
        let mut cursor = from;
        let mut calendar = Vec::with_capacity(themes.len());
        for theme in themes {
            let slots = self.suggest_slots(theme.title(), self.weekly_platforms(), cursor)?;
            if let Some(latest) = slots.iter().map(|slot| *slot.date()).max() {
                cursor = latest + Days::new(1);
            }
            calendar.push(ThemeSchedule {
                theme: theme.clone(),
                slots,
            });
        }
        Ok(calendar)
    }
}

//! Calendar slots proposed by the scheduler.

use crate::Platform;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A proposed publication time for one platform.
///
/// `time` is always the `HH:MM` rendering of `date` in its own offset.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use newsroom_core::{Platform, ScheduleSlot};
///
/// let date = DateTime::parse_from_rfc3339("2026-01-21T08:30:00+01:00").unwrap();
/// let slot = ScheduleSlot::new(Platform::LinkedIn, date, "Pico profesional");
/// assert_eq!(slot.time(), "08:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ScheduleSlot {
    /// Platform the slot is for
    platform: Platform,
    /// Absolute publication timestamp
    date: DateTime<FixedOffset>,
    /// Wall-clock `HH:MM`
    time: String,
    /// Why this slot was chosen
    justification: String,
}

impl ScheduleSlot {
    /// Create a slot; `time` is derived from `date`.
    pub fn new(
        platform: Platform,
        date: DateTime<FixedOffset>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            time: date.format("%H:%M").to_string(),
            date,
            justification: justification.into(),
        }
    }
}

//! Publication slot suggestions for newsroom posts.
//!
//! [`ScheduleRules`] holds the preferred weekdays and times per platform and
//! turns a topic and a platform list into one [`ScheduleSlot`] per platform,
//! never two on the same day. [`CalendarPlanner`] writes the slots to the
//! calendar and moves drafts into the scheduled state.
//!
//! [`ScheduleSlot`]: newsroom_core::ScheduleSlot

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod planner;
mod rules;
mod weekly;

pub use planner::CalendarPlanner;
pub use rules::{PlatformRule, ScheduleRules};
pub use weekly::{Theme, ThemeSchedule};

//! Per-platform posting rules and slot suggestion.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, Weekday};
use newsroom_config::ScheduleConfig;
use newsroom_core::{Platform, ScheduleSlot};
use newsroom_error::{ConfigError, InputError, InputErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use tracing::{debug, instrument};

/// When a platform's audience is most receptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PlatformRule {
    /// Preferred weekdays
    days: Vec<Weekday>,
    /// Preferred wall-clock times, in preference order
    times: Vec<NaiveTime>,
    /// Why these slots work
    justification: String,
}

impl PlatformRule {
    /// Create a rule. Needs at least one day and one time.
    pub fn new(
        days: Vec<Weekday>,
        times: Vec<NaiveTime>,
        justification: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if days.is_empty() || times.is_empty() {
            return Err(ConfigError::new(
                "A schedule rule needs at least one day and one time",
            ));
        }
        Ok(Self {
            days,
            times,
            justification: justification.into(),
        })
    }

    /// Time used for the platform at `index` in a request.
    pub fn time_for(&self, index: usize) -> NaiveTime {
        self.times[index % self.times.len()]
    }

    /// First preferred day on or after `start`, looking `horizon` days ahead.
    ///
    /// When no preferred day falls inside the horizon, the day right after it
    /// is returned.
    pub fn next_preferred_day(&self, start: NaiveDate, horizon: u32) -> NaiveDate {
        let mut candidate = start;
        for _ in 0..horizon {
            if self.days.contains(&candidate.weekday()) {
                return candidate;
            }
            candidate = candidate + Days::new(1);
        }
        candidate
    }
}

/// Scheduling rules for every platform.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Datelike, Weekday};
/// use newsroom_core::Platform;
/// use newsroom_schedule::ScheduleRules;
///
/// let rules = ScheduleRules::editorial_defaults();
/// let from = DateTime::parse_from_rfc3339("2026-01-20T10:00:00+01:00").unwrap();
/// let slots = rules
///     .suggest_slots("Mundial 2026", &[Platform::LinkedIn, Platform::Twitter], from)
///     .unwrap();
///
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].date().weekday(), Weekday::Wed);
/// assert_eq!(slots[0].time(), "08:30");
/// assert_eq!(slots[1].date().weekday(), Weekday::Thu);
/// assert_eq!(slots[1].time(), "21:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRules {
    rules: BTreeMap<Platform, PlatformRule>,
    horizon_days: u32,
    weekly_platforms: Vec<Platform>,
}

impl ScheduleRules {
    /// Create rules from explicit entries.
    pub fn new(
        rules: impl IntoIterator<Item = (Platform, PlatformRule)>,
        horizon_days: u32,
        weekly_platforms: Vec<Platform>,
    ) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            horizon_days: horizon_days.max(1),
            weekly_platforms,
        }
    }

    /// Build rules from the `[schedule]` configuration section.
    #[instrument(skip(config), fields(rules = config.rules.len()))]
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ConfigError> {
        let mut rules = BTreeMap::new();
        for (name, rule) in &config.rules {
            let platform = Platform::from_str(name)
                .map_err(|_| ConfigError::new(format!("Unknown platform '{}'", name)))?;
            let rule = PlatformRule::new(rule.weekdays()?, rule.parsed_times()?, &rule.justification)
                .map_err(|e| ConfigError::new(format!("schedule.rules.{}: {}", name, e.message)))?;
            rules.insert(platform, rule);
        }
        debug!(platforms = rules.len(), "Loaded schedule rules");
        Ok(Self::new(
            rules,
            config.horizon_days,
            config.calendar_platforms()?,
        ))
    }

    /// Built-in rules (Madrid wall clock).
    pub fn editorial_defaults() -> Self {
        fn rule(days: &[Weekday], times: &[(u32, u32)], justification: &str) -> PlatformRule {
            PlatformRule {
                days: days.to_vec(),
                times: times
                    .iter()
                    .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
                    .collect(),
                justification: justification.to_string(),
            }
        }
        use Weekday::*;
        Self::new(
            [
                (
                    Platform::LinkedIn,
                    rule(
                        &[Tue, Wed],
                        &[(8, 30), (17, 30)],
                        "Pico de consumo profesional antes/después del trabajo",
                    ),
                ),
                (
                    Platform::Twitter,
                    rule(
                        &[Mon, Tue, Wed, Thu, Fri],
                        &[(13, 0), (21, 30)],
                        "Picos de consumo móvil en pausa mediodía y prime time nocturno",
                    ),
                ),
                (
                    Platform::Instagram,
                    rule(
                        &[Tue, Thu, Sat],
                        &[(12, 0), (19, 0)],
                        "Mayor engagement en horario de almuerzo y tarde-noche",
                    ),
                ),
                (
                    Platform::Facebook,
                    rule(
                        &[Wed, Thu, Fri],
                        &[(13, 0), (15, 0)],
                        "Mayor engagement entre 13:00-16:00 en días laborables",
                    ),
                ),
            ],
            14,
            vec![Platform::LinkedIn, Platform::Twitter, Platform::Facebook],
        )
    }

    /// Rule for a platform.
    pub fn get(&self, platform: Platform) -> Option<&PlatformRule> {
        self.rules.get(&platform)
    }

    /// Days a weekday search may look ahead.
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Platforms covered by the weekly calendar, in order.
    pub fn weekly_platforms(&self) -> &[Platform] {
        &self.weekly_platforms
    }

    /// One slot per platform, in input order, no two on the same date.
    ///
    /// Each platform gets the first preferred weekday from the day after
    /// `from`. When that date is taken, the search restarts from the next day.
    /// The time is the platform's preferred time at its position in
    /// `platforms`, cycling through the list. Dates use the offset of `from`.
    ///
    /// Fails when a platform has no rule.
    #[instrument(skip(self, platforms), fields(platforms = platforms.len()))]
    pub fn suggest_slots(
        &self,
        topic: &str,
        platforms: &[Platform],
        from: DateTime<FixedOffset>,
    ) -> Result<Vec<ScheduleSlot>, InputError> {
        let offset = *from.offset();
        let start = from.date_naive() + Days::new(1);
        let mut used = BTreeSet::new();
        let mut slots = Vec::with_capacity(platforms.len());

        for (index, &platform) in platforms.iter().enumerate() {
            let rule = self.get(platform).ok_or_else(|| {
                InputError::new(InputErrorKind::UnknownPlatform(platform.to_string()))
            })?;

            let mut day = rule.next_preferred_day(start, self.horizon_days);
            while used.contains(&day) {
                day = rule.next_preferred_day(day + Days::new(1), self.horizon_days);
            }
            used.insert(day);

            let local = day.and_time(rule.time_for(index));
            let date = local.and_local_timezone(offset).single().ok_or_else(|| {
                InputError::new(InputErrorKind::Other(format!(
                    "{} does not exist at offset {}",
                    local, offset
                )))
            })?;
            debug!(%platform, %date, "Slot suggested");
            slots.push(ScheduleSlot::new(platform, date, rule.justification()));
        }
        Ok(slots)
    }
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self::editorial_defaults()
    }
}

//! Slot suggestion tests.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Weekday};
use newsroom_config::NewsroomConfig;
use newsroom_core::Platform;
use newsroom_error::InputErrorKind;
use newsroom_schedule::{PlatformRule, ScheduleRules};
use proptest::prelude::*;
use std::collections::HashSet;

fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap()
}

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn test_mundial_linkedin_and_twitter() {
    let rules = ScheduleRules::editorial_defaults();
    let slots = rules
        .suggest_slots(
            "Mundial 2026",
            &[Platform::LinkedIn, Platform::Twitter],
            at("2026-01-20T09:00:00+01:00"),
        )
        .unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(*slots[0].platform(), Platform::LinkedIn);
    assert_eq!(*slots[1].platform(), Platform::Twitter);
    assert_ne!(slots[0].date().date_naive(), slots[1].date().date_naive());
    assert!(matches!(slots[0].date().weekday(), Weekday::Tue | Weekday::Wed));
    assert!(!matches!(slots[1].date().weekday(), Weekday::Sat | Weekday::Sun));

    assert_eq!(*slots[0].date(), at("2026-01-21T08:30:00+01:00"));
    assert_eq!(*slots[1].date(), at("2026-01-22T21:30:00+01:00"));
    assert_eq!(slots[1].time(), "21:30");
    assert_eq!(
        slots[0].justification(),
        "Pico de consumo profesional antes/después del trabajo"
    );
}

#[test]
fn test_search_starts_the_day_after() {
    let rules = ScheduleRules::editorial_defaults();
    // Wednesday: LinkedIn posts on Wednesdays, but not on the start day itself.
    let slots = rules
        .suggest_slots("Tema", &[Platform::LinkedIn], at("2026-01-21T07:00:00+01:00"))
        .unwrap();
    assert_eq!(slots[0].date().date_naive(), NaiveDate::from_ymd_opt(2026, 1, 27).unwrap());
}

#[test]
fn test_collision_redoes_weekday_search() {
    let rules = ScheduleRules::editorial_defaults();
    // Sunday: LinkedIn takes Tuesday, Instagram would too and moves to Thursday.
    let slots = rules
        .suggest_slots(
            "Tema",
            &[Platform::LinkedIn, Platform::Instagram],
            at("2026-01-18T12:00:00+01:00"),
        )
        .unwrap();
    assert_eq!(slots[0].date().weekday(), Weekday::Tue);
    assert_eq!(slots[1].date().weekday(), Weekday::Thu);
    assert_eq!(slots[1].time(), "19:00");
}

#[test]
fn test_times_cycle_by_position() {
    let rules = ScheduleRules::editorial_defaults();
    let slots = rules
        .suggest_slots(
            "Tema",
            &[Platform::Twitter, Platform::Twitter, Platform::Twitter],
            at("2026-01-18T12:00:00+01:00"),
        )
        .unwrap();
    let times: Vec<&str> = slots.iter().map(|s| s.time().as_str()).collect();
    assert_eq!(times, vec!["13:00", "21:30", "13:00"]);
}

#[test]
fn test_offset_of_start_is_kept() {
    let rules = ScheduleRules::editorial_defaults();
    let from = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 6, 1, 10, 0, 0)
        .unwrap();
    let slots = rules.suggest_slots("Tema", &[Platform::Facebook], from).unwrap();
    assert_eq!(slots[0].date().offset().local_minus_utc(), 2 * 3600);
    assert_eq!(slots[0].time(), "13:00");
}

#[test]
fn test_empty_platform_list() {
    let rules = ScheduleRules::editorial_defaults();
    let slots = rules.suggest_slots("Tema", &[], at("2026-01-20T09:00:00+01:00")).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn test_platform_without_rule() {
    let rules = ScheduleRules::new(
        [(
            Platform::Twitter,
            PlatformRule::new(
                vec![Weekday::Mon],
                vec![NaiveTime::from_hms_opt(9, 0, 0).unwrap()],
                "",
            )
            .unwrap(),
        )],
        14,
        vec![],
    );
    let err = rules
        .suggest_slots("Tema", &[Platform::Facebook], at("2026-01-20T09:00:00+01:00"))
        .unwrap_err();
    assert_eq!(err.kind, InputErrorKind::UnknownPlatform("facebook".to_string()));
}

#[test]
fn test_rule_needs_days_and_times() {
    assert!(PlatformRule::new(vec![], vec![midnight()], "").is_err());
    assert!(PlatformRule::new(vec![Weekday::Mon], vec![], "").is_err());
}

#[test]
fn test_horizon_exceeded_returns_day_after_scan() {
    let rule = PlatformRule::new(vec![Weekday::Sun], vec![midnight()], "").unwrap();
    let monday = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap();
    assert_eq!(
        rule.next_preferred_day(monday, 3),
        NaiveDate::from_ymd_opt(2026, 1, 22).unwrap()
    );
    assert_eq!(
        rule.next_preferred_day(monday, 14),
        NaiveDate::from_ymd_opt(2026, 1, 25).unwrap()
    );
}

#[test]
fn test_bundled_config_matches_defaults() {
    let config = NewsroomConfig::bundled().unwrap();
    let rules = ScheduleRules::from_config(&config.schedule).unwrap();
    assert_eq!(rules, ScheduleRules::editorial_defaults());
}

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::LinkedIn),
        Just(Platform::Twitter),
        Just(Platform::Instagram),
        Just(Platform::Facebook),
    ]
}

proptest! {
    #[test]
    fn test_prop_no_two_slots_share_a_date(
        platforms in prop::collection::vec(platform_strategy(), 0..8),
        day in 0i64..3650,
        hour in 0u32..24,
    ) {
        let from = at("2026-01-01T00:00:00+01:00")
            + chrono::TimeDelta::days(day)
            + chrono::TimeDelta::hours(i64::from(hour));
        let slots = ScheduleRules::editorial_defaults()
            .suggest_slots("Tema", &platforms, from)
            .unwrap();

        prop_assert_eq!(slots.len(), platforms.len());
        let dates: HashSet<NaiveDate> = slots.iter().map(|s| s.date().date_naive()).collect();
        prop_assert_eq!(dates.len(), slots.len());
        for (slot, platform) in slots.iter().zip(&platforms) {
            prop_assert_eq!(slot.platform(), platform);
            prop_assert!(slot.date().date_naive() > from.date_naive());
        }
    }

    #[test]
    fn test_prop_suggestions_are_deterministic(
        platforms in prop::collection::vec(platform_strategy(), 0..6),
        day in 0i64..3650,
    ) {
        let from = at("2026-01-01T10:00:00+01:00") + chrono::TimeDelta::days(day);
        let rules = ScheduleRules::editorial_defaults();
        let first = rules.suggest_slots("Tema", &platforms, from).unwrap();
        let second = rules.suggest_slots("Tema", &platforms, from).unwrap();
        prop_assert_eq!(first, second);
    }
}

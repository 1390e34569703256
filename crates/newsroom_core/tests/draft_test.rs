use newsroom_core::{CalendarEvent, Draft, DraftStatus, NewsItem, Platform, ScheduleSlot, Variant};
use newsroom_error::RepositoryErrorKind;
use strum::IntoEnumIterator;

#[test]
fn test_review_only_from_pending() {
    for status in DraftStatus::iter() {
        assert_eq!(
            status.can_transition_to(DraftStatus::Reviewed),
            status == DraftStatus::Pending,
            "{} -> reviewed",
            status
        );
    }
}

#[test]
fn test_publish_only_from_approved() {
    for status in DraftStatus::iter() {
        assert_eq!(
            status.can_transition_to(DraftStatus::Published),
            status == DraftStatus::Approved,
            "{} -> published",
            status
        );
    }
}

#[test]
fn test_published_is_terminal() {
    for target in DraftStatus::iter() {
        assert!(!DraftStatus::Published.can_transition_to(target));
    }
}

#[test]
fn test_approve_not_from_approved() {
    assert!(DraftStatus::Pending.can_transition_to(DraftStatus::Approved));
    assert!(DraftStatus::Rejected.can_transition_to(DraftStatus::Approved));
    assert!(!DraftStatus::Approved.can_transition_to(DraftStatus::Approved));
}

#[test]
fn test_invalid_transition_reports_states() {
    let err = DraftStatus::Pending
        .transition(DraftStatus::Published)
        .unwrap_err();
    assert_eq!(
        err.kind,
        RepositoryErrorKind::InvalidTransition {
            from: "pending".to_string(),
            to: "published".to_string(),
        }
    );
}

#[test]
fn test_draft_walks_the_happy_path() {
    let mut draft = Draft::new(
        "d1",
        Some("n1".to_string()),
        Platform::LinkedIn,
        Variant::Standard,
        "Contenido",
        true,
        1,
    );
    assert_eq!(*draft.status(), DraftStatus::Pending);
    draft.transition(DraftStatus::Reviewed).unwrap();
    draft.transition(DraftStatus::Approved).unwrap();
    let at = chrono::DateTime::parse_from_rfc3339("2026-01-21T08:30:00+01:00").unwrap();
    draft.schedule(at).unwrap();
    assert_eq!(*draft.status(), DraftStatus::Scheduled);
    assert_eq!(*draft.scheduled_at(), Some(at));
    assert!(draft.transition(DraftStatus::Published).is_err());
}

#[test]
fn test_status_parses_case_insensitively() {
    use std::str::FromStr;
    assert_eq!(DraftStatus::from_str("Approved").unwrap(), DraftStatus::Approved);
    assert!(DraftStatus::from_str("archived").is_err());
}

#[test]
fn test_calendar_event_copies_slot() {
    let date = chrono::DateTime::parse_from_rfc3339("2026-01-22T13:00:00+01:00").unwrap();
    let slot = ScheduleSlot::new(Platform::Twitter, date, "Pausa de mediodía");
    let event = CalendarEvent::from_slot("e1", "Mundial 2026", None, &slot);
    assert_eq!(*event.platform(), Platform::Twitter);
    assert_eq!(*event.scheduled_at(), date);
    assert_eq!(event.notes(), "Pausa de mediodía");
}

#[test]
fn test_news_item_validates_on_conversion() {
    let item = NewsItem {
        id: "n1".to_string(),
        title: String::new(),
        summary: String::new(),
        url: String::new(),
        source: String::new(),
        topics: vec![],
    };
    assert!(item.to_fields().is_err());
}

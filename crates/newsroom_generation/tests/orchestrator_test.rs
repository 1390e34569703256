//! Generation loop tests with a scripted generator.

mod test_utils;

use newsroom_config::GenerationConfig;
use newsroom_core::{GenerationOutcome, GenerationRequest, Platform, ValidationIssue, Variant};
use newsroom_error::{ErrorCode, NewsroomErrorKind, ProviderErrorKind, ProviderFailure};
use newsroom_generation::LoopState;
use std::time::Duration;
use test_utils::{
    LONG_TWEET, LONG_TWEET_2, MockBehavior, MockGenerator, MockResponse, SHORT_TWEET, VALID_TWEET,
    orchestrator, orchestrator_with, rumor_news, twitter_request,
};

#[tokio::test]
async fn test_first_attempt_accepted() -> anyhow::Result<()> {
    let mock = MockGenerator::success(VALID_TWEET);
    let outcome = orchestrator(mock.clone()).generate(&twitter_request()).await?;

    let report = outcome.report().expect("drafted");
    assert!(*report.accepted());
    assert_eq!(*report.attempts(), 1);
    assert_eq!(report.content(), VALID_TWEET);
    assert!(report.validation().is_valid());
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_second_attempt_wins() -> anyhow::Result<()> {
    let mock = MockGenerator::texts(&[SHORT_TWEET, VALID_TWEET, LONG_TWEET]);
    let outcome = orchestrator(mock.clone()).generate(&twitter_request()).await?;

    let report = outcome.report().expect("drafted");
    assert!(*report.accepted());
    assert_eq!(*report.attempts(), 2);
    assert_eq!(report.content(), VALID_TWEET);
    assert_eq!(report.history().len(), 2);
    assert_eq!(mock.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_never_more_than_max_attempts() -> anyhow::Result<()> {
    let mock = MockGenerator::success(SHORT_TWEET);
    let outcome = orchestrator(mock.clone()).generate(&twitter_request()).await?;

    let report = outcome.report().expect("drafted");
    assert!(!*report.accepted());
    assert_eq!(*report.attempts(), 3);
    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_exhausted_returns_fewest_errors() -> anyhow::Result<()> {
    let mock = MockGenerator::texts(&[SHORT_TWEET, LONG_TWEET, SHORT_TWEET]);
    let outcome = orchestrator(mock.clone()).generate(&twitter_request()).await?;

    let report = outcome.report().expect("drafted");
    assert!(!*report.accepted());
    assert_eq!(report.content(), LONG_TWEET);
    assert_eq!(report.validation().errors().len(), 1);
    assert_eq!(report.history().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_ties_keep_earlier_attempt() -> anyhow::Result<()> {
    let mock = MockGenerator::texts(&[LONG_TWEET, LONG_TWEET_2, SHORT_TWEET]);
    let outcome = orchestrator(mock).generate(&twitter_request()).await?;

    assert_eq!(outcome.report().expect("drafted").content(), LONG_TWEET);
    Ok(())
}

#[tokio::test]
async fn test_gate_rejection_makes_no_provider_call() -> anyhow::Result<()> {
    let mock = MockGenerator::success(VALID_TWEET);
    let request = GenerationRequest::new(rumor_news(), Platform::Twitter, Variant::Standard);
    let outcome = orchestrator(mock.clone()).generate(&request).await?;

    assert!(outcome.is_rejected());
    let GenerationOutcome::Rejected(verdict) = outcome else {
        panic!("expected rejection");
    };
    assert!(verdict.reason().is_some());
    assert!(verdict.suggestion().is_some());
    assert_eq!(mock.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let mock = MockGenerator::error(ProviderErrorKind::RateLimited("slow down".into()));
    let err = orchestrator(mock.clone())
        .generate(&twitter_request())
        .await
        .unwrap_err();

    assert_eq!(err.provider_failure(), Some(ProviderFailure::RateLimit));
    assert_eq!(err.code(), ErrorCode::RateLimited);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_provider_error_after_invalid_draft_aborts() {
    let mock = MockGenerator::new(MockBehavior::Sequence(vec![
        MockResponse::Success(SHORT_TWEET.to_string()),
        MockResponse::Error(ProviderErrorKind::QuotaExhausted("no credits".into())),
        MockResponse::Success(VALID_TWEET.to_string()),
    ]));
    let err = orchestrator(mock.clone())
        .generate(&twitter_request())
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::QuotaExhausted);
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let mock = MockGenerator::new(MockBehavior::Delayed(
        Duration::from_secs(3),
        VALID_TWEET.to_string(),
    ));
    let config = GenerationConfig {
        timeout_secs: 1,
        ..GenerationConfig::default()
    };
    let err = orchestrator_with(mock.clone(), &config)
        .generate(&twitter_request())
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::ProviderTimeout);
    match err.kind() {
        NewsroomErrorKind::Provider(e) => assert_eq!(e.kind, ProviderErrorKind::Timeout(1)),
        other => panic!("expected provider error, got {}", other),
    }
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_temperature_lowers_on_retry() -> anyhow::Result<()> {
    let mock = MockGenerator::success(SHORT_TWEET);
    orchestrator(mock.clone()).generate(&twitter_request()).await?;

    let temperatures: Vec<f32> = mock.requests().iter().map(|r| *r.temperature()).collect();
    assert_eq!(temperatures, vec![0.7, 0.5, 0.5]);
    assert!(mock.requests().iter().all(|r| *r.max_tokens() == 1500));
    Ok(())
}

#[tokio::test]
async fn test_retry_prompt_carries_prior_errors() -> anyhow::Result<()> {
    let mock = MockGenerator::texts(&[LONG_TWEET, VALID_TWEET]);
    orchestrator(mock.clone()).generate(&twitter_request()).await?;

    let requests = mock.requests();
    let first_system = &requests[0].messages()[0].content;
    let second_system = &requests[1].messages()[0].content;
    assert!(!first_system.contains("CORRECCIÓN"));
    assert!(second_system.contains("CORRECCIÓN (intento 2)"));
    assert!(second_system.contains("334 caracteres"));
    assert!(second_system.contains("entre 120 y 280 caracteres"));
    Ok(())
}

#[tokio::test]
async fn test_history_records_each_attempt() -> anyhow::Result<()> {
    let mock = MockGenerator::texts(&[SHORT_TWEET, LONG_TWEET, VALID_TWEET]);
    let outcome = orchestrator(mock).generate(&twitter_request()).await?;

    let history = outcome.report().expect("drafted").history();
    let numbers: Vec<u32> = history.iter().map(|a| *a.attempt_number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(history[0].error_count(), 2);
    assert!(
        history[0]
            .validation()
            .errors()
            .contains(&ValidationIssue::MissingClosing)
    );
    assert_eq!(*history[0].temperature(), 0.7);
    assert_eq!(*history[2].temperature(), 0.5);
    Ok(())
}

#[tokio::test]
async fn test_configured_attempt_limit() -> anyhow::Result<()> {
    let mock = MockGenerator::success(SHORT_TWEET);
    let config = GenerationConfig {
        max_attempts: 1,
        ..GenerationConfig::default()
    };
    let outcome = orchestrator_with(mock.clone(), &config)
        .generate(&twitter_request())
        .await?;

    assert_eq!(*outcome.report().expect("drafted").attempts(), 1);
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_completion_surfaces_as_error() {
    let mock = MockGenerator::error(ProviderErrorKind::EmptyCompletion);
    let err = orchestrator(mock.clone())
        .generate(&twitter_request())
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::ProviderFailure);
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_loop_state_transitions() {
    assert_eq!(LoopState::after_attempt(1, true, 3), LoopState::Accepted);
    assert_eq!(LoopState::after_attempt(1, false, 3), LoopState::Retrying(2));
    assert_eq!(LoopState::after_attempt(2, false, 3), LoopState::Retrying(3));
    assert_eq!(LoopState::after_attempt(3, false, 3), LoopState::Exhausted);
    assert_eq!(LoopState::after_attempt(1, false, 1), LoopState::Exhausted);
    assert!(LoopState::Accepted.is_terminal());
    assert!(LoopState::Exhausted.is_terminal());
    assert!(!LoopState::Retrying(2).is_terminal());
    assert!(!LoopState::Attempting(1).is_terminal());
}

//! Inbound boundary tests.

mod test_utils;

use async_trait::async_trait;
use newsroom_core::{Draft, DraftStatus, NewsItem, Platform, Variant};
use newsroom_error::{
    ErrorCode, NewsroomResult, ProviderErrorKind, RepositoryError, RepositoryErrorKind,
};
use newsroom_generation::{
    GenerationService, InMemoryDraftRepository, InMemoryNewsRepository, ResponseBody,
    StaticKeyAuthenticator,
};
use newsroom_interface::DraftRepository;
use serde_json::json;
use std::sync::Arc;
use test_utils::{LONG_TWEET, MockGenerator, VALID_TWEET, orchestrator};

const AUTH: Option<&str> = Some("Bearer secret");

fn service(mock: Arc<MockGenerator>) -> GenerationService {
    GenerationService::new(
        Arc::new(StaticKeyAuthenticator::new(["secret"])),
        Arc::new(orchestrator(mock)),
    )
}

/// Draft storage whose writes always fail.
struct BrokenDrafts;

#[async_trait]
impl DraftRepository for BrokenDrafts {
    async fn create_draft(&self, _draft: Draft) -> NewsroomResult<Draft> {
        Err(RepositoryError::new(RepositoryErrorKind::Backend("disk full".to_string())).into())
    }

    async fn get_draft(&self, id: &str) -> NewsroomResult<Draft> {
        Err(RepositoryError::new(RepositoryErrorKind::NotFound {
            entity: "draft",
            id: id.to_string(),
        })
        .into())
    }

    async fn update_status(&self, id: &str, _status: DraftStatus) -> NewsroomResult<Draft> {
        self.get_draft(id).await
    }

    async fn list_drafts(&self, _status: Option<DraftStatus>) -> NewsroomResult<Vec<Draft>> {
        Ok(Vec::new())
    }
}

fn body() -> String {
    json!({
        "newsTitle": "El Mundial 2026 arranca en junio",
        "newsSummary": "La FIFA confirma el calendario del torneo.",
        "newsUrl": "https://example.com/mundial",
        "newsSource": "EFE",
        "topics": ["fútbol"],
        "platform": "twitter",
        "variant": 2
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_generation_envelope() -> anyhow::Result<()> {
    let mock = MockGenerator::success(VALID_TWEET);
    let response = service(mock).handle(AUTH, &body()).await;

    assert_eq!(response.status, 200);
    let json: serde_json::Value = serde_json::from_str(&response.body_json()?)?;
    assert_eq!(json["content"], VALID_TWEET);
    assert_eq!(json["platform"], "twitter");
    assert_eq!(json["variant"], 2);
    assert_eq!(json["metadata"]["source"], "EFE");
    assert_eq!(json["metadata"]["sourceTitle"], "El Mundial 2026 arranca en junio");
    assert_eq!(json["metadata"]["url"], "https://example.com/mundial");
    assert_eq!(json["metadata"]["charCount"], 175);
    assert_eq!(json["metadata"]["hashtagCount"], 1);
    assert_eq!(json["metadata"]["isValid"], true);
    assert_eq!(json["metadata"]["attemptsNeeded"], 1);
    assert!(json.get("draftId").is_none());
    Ok(())
}

#[tokio::test]
async fn test_best_effort_draft_reports_errors() -> anyhow::Result<()> {
    let mock = MockGenerator::success(LONG_TWEET);
    let response = service(mock).handle(AUTH, &body()).await;

    assert_eq!(response.status, 200);
    let ResponseBody::Post(post) = response.body else {
        panic!("expected a post");
    };
    assert!(!post.metadata.is_valid);
    assert_eq!(post.metadata.attempts_needed, 3);
    assert_eq!(post.metadata.errors.len(), 1);
    assert!(post.metadata.errors[0].contains("334"));
    Ok(())
}

#[tokio::test]
async fn test_missing_credentials_rejected_before_parsing() {
    let mock = MockGenerator::success(VALID_TWEET);
    let response = service(mock.clone()).handle(None, "not json").await;

    assert_eq!(response.status, 401);
    assert!(matches!(
        response.body,
        ResponseBody::Error(ref e) if e.code == ErrorCode::Unauthenticated
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_wrong_key_rejected() {
    let mock = MockGenerator::success(VALID_TWEET);
    let response = service(mock.clone())
        .handle(Some("Bearer nope"), &body())
        .await;

    assert_eq!(response.status, 401);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_input_is_400_without_calls() {
    let mock = MockGenerator::success(VALID_TWEET);
    let bad = json!({ "newsTitle": "", "platform": "twitter", "variant": 1 }).to_string();
    let response = service(mock.clone()).handle(AUTH, &bad).await;

    assert_eq!(response.status, 400);
    assert_eq!(mock.call_count(), 0);

    let response = service(mock.clone()).handle(AUTH, "{").await;
    assert_eq!(response.status, 400);

    let unknown = json!({ "newsTitle": "Hola", "platform": "tiktok", "variant": 1 }).to_string();
    let response = service(mock.clone()).handle(AUTH, &unknown).await;
    assert_eq!(response.status, 400);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_rejection_envelope() -> anyhow::Result<()> {
    let mock = MockGenerator::success(VALID_TWEET);
    let rumor = json!({
        "newsTitle": "Fichaje inminente según fuentes cercanas",
        "newsSource": "Blog desconocido",
        "platform": "twitter",
        "variant": 1
    })
    .to_string();
    let response = service(mock.clone()).handle(AUTH, &rumor).await;

    assert_eq!(response.status, 200);
    let json: serde_json::Value = serde_json::from_str(&response.body_json()?)?;
    assert_eq!(json["isNotSuitable"], true);
    assert!(json["reason"].as_str().is_some_and(|r| !r.is_empty()));
    assert!(json["suggestion"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(mock.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_and_quota_messages() {
    let mock = MockGenerator::error(ProviderErrorKind::RateLimited("429".into()));
    let response = service(mock).handle(AUTH, &body()).await;
    assert_eq!(response.status, 429);
    let ResponseBody::Error(error) = response.body else {
        panic!("expected an error");
    };
    assert!(error.error.starts_with("Demasiadas solicitudes"));

    let mock = MockGenerator::error(ProviderErrorKind::QuotaExhausted("402".into()));
    let response = service(mock).handle(AUTH, &body()).await;
    assert_eq!(response.status, 402);
    let ResponseBody::Error(error) = response.body else {
        panic!("expected an error");
    };
    assert!(error.error.starts_with("Créditos agotados"));
}

#[tokio::test]
async fn test_transport_failure_is_502() {
    let mock = MockGenerator::error(ProviderErrorKind::Http("connection reset".into()));
    let response = service(mock).handle(AUTH, &body()).await;
    assert_eq!(response.status, 502);
}

#[tokio::test]
async fn test_generated_draft_is_stored_pending() -> anyhow::Result<()> {
    let drafts = Arc::new(InMemoryDraftRepository::new());
    let mock = MockGenerator::success(VALID_TWEET);
    let service = service(mock).with_drafts(drafts.clone());

    let response = service.generate_post(AUTH, &body()).await?;
    let ResponseBody::Post(post) = response.body else {
        panic!("expected a post");
    };
    let id = post.draft_id.expect("draft id");

    let draft = drafts.get_draft(&id).await?;
    assert_eq!(*draft.status(), DraftStatus::Pending);
    assert_eq!(draft.content(), VALID_TWEET);
    assert_eq!(*draft.platform(), Platform::Twitter);
    assert_eq!(*draft.variant(), Variant::Informative);
    assert!(*draft.is_valid());
    assert_eq!(*draft.attempts(), 1);
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_still_returns_the_post() -> anyhow::Result<()> {
    let mock = MockGenerator::success(VALID_TWEET);
    let service = service(mock.clone()).with_drafts(Arc::new(BrokenDrafts));

    let response = service.handle(AUTH, &body()).await;

    assert_eq!(response.status, 200);
    let ResponseBody::Post(post) = &response.body else {
        panic!("expected a post, got {:?}", response.body);
    };
    assert_eq!(post.content, VALID_TWEET);
    assert!(post.metadata.is_valid);
    assert!(post.draft_id.is_none());
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_generate_from_stored_news() -> anyhow::Result<()> {
    let news = Arc::new(InMemoryNewsRepository::new());
    news.insert(NewsItem {
        id: "news-7".to_string(),
        title: "El Mundial 2026 arranca en junio".to_string(),
        summary: String::new(),
        url: String::new(),
        source: "Marca".to_string(),
        topics: vec![],
    })
    .await;
    let drafts = Arc::new(InMemoryDraftRepository::new());
    let mock = MockGenerator::success(VALID_TWEET);
    let service = service(mock)
        .with_news(news)
        .with_drafts(drafts.clone());

    let response = service
        .generate_for_news(AUTH, "news-7", Platform::Twitter, Variant::Standard)
        .await?;
    assert!(response.is_success());

    let stored = drafts.list_drafts(None).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].news_id().as_deref(), Some("news-7"));

    let err = service
        .generate_for_news(AUTH, "missing", Platform::Twitter, Variant::Standard)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    Ok(())
}

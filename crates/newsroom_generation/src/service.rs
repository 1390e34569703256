//! Inbound generation boundary.

use crate::{GenerationOrchestrator, GeneratePostResponse, ServiceResponse};
use newsroom_core::{Draft, GenerationOutcome, GenerationReport, GenerationRequest, Platform, Variant};
use newsroom_error::{NewsroomResult, RepositoryError, RepositoryErrorKind};
use newsroom_interface::{Authenticator, Caller, DraftRepository, NewsRepository};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Authenticates callers, parses requests, runs the orchestrator and stores
/// drafts.
///
/// Order per call: authentication, input validation, gate, attempt loop,
/// draft hand-off. Authentication failures never reach input parsing, and
/// invalid input never reaches the provider.
pub struct GenerationService {
    authenticator: Arc<dyn Authenticator>,
    orchestrator: Arc<GenerationOrchestrator>,
    drafts: Option<Arc<dyn DraftRepository>>,
    news: Option<Arc<dyn NewsRepository>>,
}

impl GenerationService {
    /// Create a service that does not persist drafts.
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        orchestrator: Arc<GenerationOrchestrator>,
    ) -> Self {
        Self {
            authenticator,
            orchestrator,
            drafts: None,
            news: None,
        }
    }

    /// Store every generated draft (status pending) in `drafts`.
    pub fn with_drafts(mut self, drafts: Arc<dyn DraftRepository>) -> Self {
        self.drafts = Some(drafts);
        self
    }

    /// Read news items from `news` for [`GenerationService::generate_for_news`].
    pub fn with_news(mut self, news: Arc<dyn NewsRepository>) -> Self {
        self.news = Some(news);
        self
    }

    /// The orchestrator behind this service.
    pub fn orchestrator(&self) -> &Arc<GenerationOrchestrator> {
        &self.orchestrator
    }

    /// Handle a raw request: `Authorization` header value and JSON body.
    ///
    /// Every error becomes an error response with its status.
    #[instrument(skip_all)]
    pub async fn handle(&self, authorization: Option<&str>, body: &str) -> ServiceResponse {
        match self.generate_post(authorization, body).await {
            Ok(response) => response,
            Err(e) => {
                error!(code = %e.code(), error = %e, "Generation request failed");
                ServiceResponse::error(&e)
            }
        }
    }

    /// Like [`GenerationService::handle`], but returns errors to the caller.
    pub async fn generate_post(
        &self,
        authorization: Option<&str>,
        body: &str,
    ) -> NewsroomResult<ServiceResponse> {
        let caller = self.authenticator.authenticate(authorization)?;
        let request = GenerationRequest::from_json(body)?;
        self.respond(&caller, &request, None).await
    }

    /// Generate from a stored news item.
    #[instrument(skip(self, authorization, platform, variant), fields(platform = %platform, variant = %variant))]
    pub async fn generate_for_news(
        &self,
        authorization: Option<&str>,
        news_id: &str,
        platform: Platform,
        variant: Variant,
    ) -> NewsroomResult<ServiceResponse> {
        let caller = self.authenticator.authenticate(authorization)?;
        let repository = self.news.as_ref().ok_or_else(|| {
            RepositoryError::new(RepositoryErrorKind::Backend(
                "no news repository configured".to_string(),
            ))
        })?;
        let item = repository.get_news(news_id).await?;
        let request = GenerationRequest::new(item.to_fields()?, platform, variant);
        self.respond(&caller, &request, Some(item.id.clone())).await
    }

    async fn respond(
        &self,
        caller: &Caller,
        request: &GenerationRequest,
        news_id: Option<String>,
    ) -> NewsroomResult<ServiceResponse> {
        info!(
            caller = %caller.id(),
            platform = %request.platform(),
            variant = %request.variant(),
            "Generating post"
        );
        match self.orchestrator.generate(request).await? {
            GenerationOutcome::Rejected(verdict) => Ok(ServiceResponse::not_suitable(&verdict)),
            GenerationOutcome::Drafted(report) => {
                let mut post = GeneratePostResponse::new(request, &report);
                if let Some(draft) = self.persist(request, &report, news_id).await {
                    post = post.with_draft_id(draft.id().clone());
                }
                Ok(ServiceResponse::post(post))
            }
        }
    }

    /// Hand the draft to the repository. A storage failure is logged and the
    /// post is still returned, without a draft id.
    async fn persist(
        &self,
        request: &GenerationRequest,
        report: &GenerationReport,
        news_id: Option<String>,
    ) -> Option<Draft> {
        let drafts = self.drafts.as_ref()?;
        let draft = Draft::new(
            String::new(),
            news_id,
            *request.platform(),
            *request.variant(),
            report.content().clone(),
            *report.accepted(),
            *report.attempts(),
        );
        match drafts.create_draft(draft).await {
            Ok(stored) => {
                info!(draft_id = %stored.id(), "Draft stored as pending");
                Some(stored)
            }
            Err(e) => {
                error!(error = %e, platform = %request.platform(), "Failed to store draft");
                None
            }
        }
    }
}

//! Client for an OpenAI-compatible chat-completions gateway.

use crate::{ChatCompletionRequest, ChatCompletionResponse, LlmMetrics, classify_error};
use async_trait::async_trait;
use newsroom_config::ProviderConfig;
use newsroom_core::{CompletionRequest, CompletionResponse, TokenUsage};
use newsroom_error::{NewsroomResult, ProviderError, ProviderErrorKind};
use newsroom_interface::TextGenerator;
use std::time::{Duration, Instant};
use tracing::instrument;

/// Text generator backed by an OpenAI-compatible gateway.
///
/// Sends a single `POST {base_url}/chat/completions` per call with a bearer
/// key. HTTP 429 and 402 map to rate-limit and quota errors; any other
/// non-success status, network failure or unusable body is a transport
/// failure. The client never retries.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    model: String,
    api_key: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl GatewayClient {
    /// Create a client with an explicit key.
    ///
    /// With `timeout`, requests that take longer fail with
    /// [`ProviderErrorKind::Timeout`].
    #[instrument(skip(config, api_key), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(
        config: &ProviderConfig,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        tracing::debug!("Creating gateway client");
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            ProviderError::new(ProviderErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
            timeout,
            client,
        })
    }

    /// Create a client reading the key from the environment variable named
    /// by `config.api_key_env`.
    pub fn from_env(config: &ProviderConfig, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::MissingApiKey(config.api_key_env.clone()))
            })?;
        Self::new(config, api_key, timeout)
    }

    /// Gateway root URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Gateway returned error: {}", body);
            return Err(ProviderError::new(ProviderErrorKind::from_status(
                status.as_u16(),
                body,
            )));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse gateway response: {}", e);
            ProviderError::new(ProviderErrorKind::MalformedResponse(e.to_string()))
        })?;

        tracing::debug!(choices = completion.choices.len(), "Received chat completion");
        Ok(completion)
    }

    fn transport_error(&self, e: reqwest::Error) -> ProviderError {
        tracing::error!("Gateway request failed: {}", e);
        match self.timeout {
            Some(timeout) if e.is_timeout() => {
                ProviderError::new(ProviderErrorKind::Timeout(timeout.as_secs()))
            }
            _ => ProviderError::new(ProviderErrorKind::Http(e.to_string())),
        }
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let request = ChatCompletionRequest::from_completion(req, &self.model);
        let response = self.chat_completion(&request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyCompletion))?;
        let model = response.model.clone().unwrap_or(request.model);
        Ok(CompletionResponse::new(
            text,
            model,
            response.usage.map(TokenUsage::from),
        ))
    }
}

#[async_trait]
impl TextGenerator for GatewayClient {
    #[instrument(skip(self, req), fields(provider = "gateway", temperature = *req.temperature()))]
    async fn generate(&self, req: &CompletionRequest) -> NewsroomResult<CompletionResponse> {
        let metrics = LlmMetrics::get();
        let model = req.model().clone().unwrap_or_else(|| self.model.clone());
        let start = Instant::now();

        match self.complete(req).await {
            Ok(response) => {
                metrics.record_request(self.provider_name(), &model, start.elapsed().as_secs_f64());
                if let Some(usage) = response.usage() {
                    metrics.record_tokens(&model, u64::from(usage.total_tokens));
                }
                Ok(response)
            }
            Err(e) => {
                metrics.record_error(self.provider_name(), &model, classify_error(&e.kind));
                Err(e.into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gateway"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

//! The validate-and-repair loop.

use crate::{GenerationMetrics, LoopState};
use newsroom_config::GenerationConfig;
use newsroom_core::{
    CompletionRequest, CompletionResponse, GenerationAttempt, GenerationOutcome, GenerationReport,
    GenerationRequest, ValidationIssue,
};
use newsroom_editorial::{ContentValidator, PromptComposer, TemperatureSchedule};
use newsroom_error::{
    ConfigError, InputError, InputErrorKind, NewsroomResult, ProviderError, ProviderErrorKind,
};
use newsroom_interface::{SuitabilityPolicy, TextGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Drives gate, prompt, provider and validator for one post.
///
/// Holds no mutable state; one orchestrator serves any number of concurrent
/// calls. Each call makes at most `max_attempts` provider calls, strictly in
/// sequence, and stops at the first draft that passes validation. When none
/// passes, the draft with the fewest errors is returned with
/// `accepted = false` (ties keep the earlier attempt).
///
/// Provider errors end the call immediately and are never retried here.
pub struct GenerationOrchestrator {
    generator: Arc<dyn TextGenerator>,
    gate: Arc<dyn SuitabilityPolicy>,
    validator: Arc<ContentValidator>,
    composer: PromptComposer,
    temperatures: TemperatureSchedule,
    max_attempts: u32,
    max_tokens: u32,
    timeout: Duration,
}

impl GenerationOrchestrator {
    /// Create an orchestrator from its collaborators and loop parameters.
    #[instrument(skip_all, fields(provider = generator.provider_name(), max_attempts = config.max_attempts))]
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        gate: Arc<dyn SuitabilityPolicy>,
        validator: Arc<ContentValidator>,
        config: &GenerationConfig,
    ) -> Self {
        debug!("Creating generation orchestrator");
        Self {
            generator,
            gate,
            validator,
            composer: PromptComposer::default(),
            temperatures: TemperatureSchedule::from(config),
            max_attempts: config.max_attempts.max(1),
            max_tokens: config.max_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Use a different prompt composer.
    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Upper bound on provider calls per generation.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The validator drafts are judged by.
    pub fn validator(&self) -> &Arc<ContentValidator> {
        &self.validator
    }

    /// The suitability policy run before any provider call.
    pub fn gate(&self) -> &Arc<dyn SuitabilityPolicy> {
        &self.gate
    }

    /// Gate the news item, then run the attempt loop.
    #[instrument(
        skip(self, request),
        fields(platform = %request.platform(), variant = %request.variant())
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> NewsroomResult<GenerationOutcome> {
        let verdict = self.gate.check(request.news());
        if !verdict.is_suitable() {
            info!(reason = ?verdict.reason(), "News item refused by suitability gate");
            GenerationMetrics::get().record_outcome(&request.platform().to_string(), "rejected");
            return Ok(GenerationOutcome::Rejected(verdict));
        }
        let report = self.run_attempts(request).await?;
        Ok(GenerationOutcome::Drafted(report))
    }

    /// Run the attempt loop without consulting the gate.
    ///
    /// For callers that already hold a suitable verdict for this news item.
    #[instrument(
        skip(self, request),
        fields(platform = %request.platform(), variant = %request.variant())
    )]
    pub async fn run_attempts(&self, request: &GenerationRequest) -> NewsroomResult<GenerationReport> {
        let platform = request.platform().to_string();
        let policy = self
            .validator
            .policies()
            .get(*request.platform())
            .ok_or_else(|| InputError::new(InputErrorKind::UnknownPlatform(platform.clone())))?;

        let mut history: Vec<GenerationAttempt> = Vec::with_capacity(self.max_attempts as usize);
        let mut best = 0usize;
        let mut state = LoopState::Attempting(1);

        while !state.is_terminal() {
            state = match state {
                LoopState::Attempting(number) => {
                    let prior: &[ValidationIssue] = history
                        .last()
                        .map(|a| a.validation().errors().as_slice())
                        .unwrap_or(&[]);
                    let prompt = self.composer.compose(request, policy, number, prior);
                    let temperature = self.temperatures.for_attempt(number);
                    let completion = CompletionRequest::from_prompts(
                        prompt.system_prompt().clone(),
                        prompt.user_prompt().clone(),
                        temperature,
                        self.max_tokens,
                    );

                    let response = match self.call_provider(&completion).await {
                        Ok(response) => response,
                        Err(e) => {
                            GenerationMetrics::get().record_outcome(&platform, "failed");
                            return Err(e);
                        }
                    };
                    let validation = self.validator.validate_with_policy(response.text(), policy);
                    let attempt =
                        GenerationAttempt::new(number, response.into_text(), validation, temperature);

                    if attempt.is_valid() {
                        debug!(attempt = number, "Draft passed validation");
                    } else {
                        warn!(
                            attempt = number,
                            errors = ?attempt.validation().error_messages(),
                            "Draft failed validation"
                        );
                    }
                    if let Some(current) = history.get(best)
                        && attempt.error_count() < current.error_count()
                    {
                        best = history.len();
                    }
                    let next = LoopState::after_attempt(number, attempt.is_valid(), self.max_attempts);
                    history.push(attempt);
                    next
                }
                LoopState::Retrying(number) => {
                    debug!(attempt = number, "Retrying with correction directives");
                    LoopState::Attempting(number)
                }
                terminal => terminal,
            };
        }

        let chosen = history
            .get(best)
            .cloned()
            .ok_or_else(|| ConfigError::new("generation.max_attempts must be at least 1"))?;
        let report = GenerationReport::new(&chosen, history);

        let metrics = GenerationMetrics::get();
        metrics.record_attempts(&platform, *report.attempts(), *report.accepted());
        if *report.accepted() {
            info!(attempts = report.attempts(), "Draft accepted");
            metrics.record_outcome(&platform, "accepted");
        } else {
            warn!(
                attempts = report.attempts(),
                errors = report.validation().errors().len(),
                "No draft passed validation, returning best candidate"
            );
            metrics.record_outcome(&platform, "exhausted");
        }
        Ok(report)
    }

    async fn call_provider(&self, request: &CompletionRequest) -> NewsroomResult<CompletionResponse> {
        match tokio::time::timeout(self.timeout, self.generator.generate(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => {
                error!(provider = self.generator.provider_name(), error = %e, "Provider call failed");
                Err(e)
            }
            Err(_) => {
                error!(
                    provider = self.generator.provider_name(),
                    timeout_secs = self.timeout.as_secs(),
                    "Provider call timed out"
                );
                Err(ProviderError::new(ProviderErrorKind::Timeout(self.timeout.as_secs())).into())
            }
        }
    }
}

//! Wiring of the pipeline from configuration.

use chrono::{DateTime, FixedOffset, Utc};
use newsroom_config::NewsroomConfig;
use newsroom_editorial::{ContentValidator, KeywordSuitabilityGate};
use newsroom_error::NewsroomResult;
use newsroom_generation::{GenerationOrchestrator, GenerationService, StaticKeyAuthenticator};
use newsroom_interface::{Authenticator, CalendarRepository, TextGenerator};
use newsroom_models::GatewayClient;
use newsroom_schedule::{CalendarPlanner, ScheduleRules};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Configured pipeline components.
///
/// Holds everything that is pure and shared: the validator over the policy
/// table, the suitability gate and the scheduling rules. Components with
/// outside dependencies (provider, authenticator, calendar) are built on
/// demand so callers can swap them.
///
/// # Examples
///
/// ```
/// use newsroom::{Newsroom, Platform};
///
/// let newsroom = Newsroom::bundled().unwrap();
/// let result = newsroom
///     .validator()
///     .validate("Demasiado breve", Platform::Twitter)
///     .unwrap();
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Newsroom {
    config: NewsroomConfig,
    validator: Arc<ContentValidator>,
    gate: Arc<KeywordSuitabilityGate>,
    schedule: Arc<ScheduleRules>,
    offset: FixedOffset,
}

impl Newsroom {
    /// Build every pure component from a validated configuration.
    #[instrument(skip_all)]
    pub fn new(config: NewsroomConfig) -> NewsroomResult<Self> {
        let policies = Arc::new(config.policy_table()?);
        let validator = Arc::new(ContentValidator::new(policies, &config.validation)?);
        let gate = Arc::new(KeywordSuitabilityGate::new(&config.suitability));
        let schedule = Arc::new(ScheduleRules::from_config(&config.schedule)?);
        let offset = config.schedule_offset()?;
        debug!(
            platforms = config.platforms.len(),
            max_attempts = config.generation.max_attempts,
            %offset,
            "Newsroom assembled"
        );
        Ok(Self {
            config,
            validator,
            gate,
            schedule,
            offset,
        })
    }

    /// Layered configuration: `./newsroom.toml` over
    /// `~/.config/newsroom/newsroom.toml` over the bundled defaults.
    pub fn load() -> NewsroomResult<Self> {
        Self::new(NewsroomConfig::load()?)
    }

    /// Configuration from one file only.
    pub fn from_file(path: impl AsRef<Path>) -> NewsroomResult<Self> {
        Self::new(NewsroomConfig::from_file(path)?)
    }

    /// The bundled defaults only.
    pub fn bundled() -> NewsroomResult<Self> {
        Self::new(NewsroomConfig::bundled()?)
    }

    /// The configuration this newsroom was built from.
    pub fn config(&self) -> &NewsroomConfig {
        &self.config
    }

    /// Shared content validator.
    pub fn validator(&self) -> &Arc<ContentValidator> {
        &self.validator
    }

    /// Shared suitability gate.
    pub fn gate(&self) -> &Arc<KeywordSuitabilityGate> {
        &self.gate
    }

    /// Shared scheduling rules.
    pub fn schedule(&self) -> &Arc<ScheduleRules> {
        &self.schedule
    }

    /// Offset used when the caller gives no reference time.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Current time in the configured offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Gateway client keyed from the configured environment variable.
    pub fn gateway(&self) -> NewsroomResult<Arc<dyn TextGenerator>> {
        let timeout = Duration::from_secs(self.config.generation.timeout_secs);
        let client = GatewayClient::from_env(&self.config.provider, Some(timeout))?;
        Ok(Arc::new(client))
    }

    /// Orchestrator over `generator` with the shared gate and validator.
    pub fn orchestrator(&self, generator: Arc<dyn TextGenerator>) -> GenerationOrchestrator {
        GenerationOrchestrator::new(
            generator,
            self.gate.clone(),
            self.validator.clone(),
            &self.config.generation,
        )
    }

    /// Authenticator over the keys in the configured environment variable.
    pub fn authenticator(&self) -> NewsroomResult<Arc<dyn Authenticator>> {
        Ok(Arc::new(StaticKeyAuthenticator::from_env(&self.config.auth)?))
    }

    /// Inbound service over `generator`, authenticating with `authenticator`.
    pub fn service(
        &self,
        generator: Arc<dyn TextGenerator>,
        authenticator: Arc<dyn Authenticator>,
    ) -> GenerationService {
        GenerationService::new(authenticator, Arc::new(self.orchestrator(generator)))
    }

    /// Planner writing to `calendar`.
    pub fn planner(&self, calendar: Arc<dyn CalendarRepository>) -> CalendarPlanner {
        CalendarPlanner::new(self.schedule.clone(), calendar)
    }
}

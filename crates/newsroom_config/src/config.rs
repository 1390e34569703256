//! Top-level configuration and loading.

use crate::{
    AuthConfig, GenerationConfig, PlatformConfig, ProviderConfig, ScheduleConfig,
    SuitabilityConfig, ValidationConfig,
};
use chrono::{FixedOffset, NaiveTime, Weekday};
use config::{Config, File, FileFormat};
use newsroom_core::{Platform, PlatformPolicy, PlatformPolicyTable};
use newsroom_error::{ConfigError, NewsroomResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../newsroom.toml");

/// Complete newsroom configuration.
///
/// # Example
///
/// ```no_run
/// use newsroom_config::NewsroomConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = NewsroomConfig::load()?;
/// let table = config.policy_table()?;
/// println!("{} platforms configured", table.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsroomConfig {
    /// Policies keyed by platform name
    pub platforms: BTreeMap<String, PlatformConfig>,
    /// Validator tuning
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Gate keyword lists
    #[serde(default)]
    pub suitability: SuitabilityConfig,
    /// Generation loop parameters
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Caller authentication
    #[serde(default)]
    pub auth: AuthConfig,
    /// Scheduling rules
    pub schedule: ScheduleConfig,
}

impl NewsroomConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> NewsroomResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/newsroom/newsroom.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("newsroom").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled defaults alone, ignoring user files.
    pub fn bundled() -> NewsroomResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Load configuration from a single file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> NewsroomResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> NewsroomResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.platforms.is_empty() {
            return Err(ConfigError::new("No platforms configured"));
        }
        self.policy_table()?;

        let generation = &self.generation;
        if generation.max_attempts == 0 {
            return Err(ConfigError::new("generation.max_attempts must be at least 1"));
        }
        for (name, value) in [
            ("initial_temperature", generation.initial_temperature),
            ("retry_temperature", generation.retry_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "generation.{} must be within 0.0..=2.0, got {}",
                    name, value
                )));
            }
        }
        if generation.max_tokens == 0 {
            return Err(ConfigError::new("generation.max_tokens must be positive"));
        }
        if generation.timeout_secs == 0 {
            return Err(ConfigError::new("generation.timeout_secs must be positive"));
        }

        if self.validation.closing_window == 0 {
            return Err(ConfigError::new("validation.closing_window must be at least 1"));
        }

        self.schedule_offset()?;
        if self.schedule.horizon_days == 0 {
            return Err(ConfigError::new("schedule.horizon_days must be at least 1"));
        }
        for name in &self.schedule.weekly_platforms {
            parse_platform(name)?;
        }
        for (name, rule) in &self.schedule.rules {
            parse_platform(name)?;
            if rule.days.is_empty() || rule.times.is_empty() {
                return Err(ConfigError::new(format!(
                    "schedule.rules.{} needs at least one day and one time",
                    name
                )));
            }
            for day in &rule.days {
                parse_weekday(day)?;
            }
            for time in &rule.times {
                parse_time(time)?;
            }
        }
        Ok(())
    }

    /// Build the immutable policy table.
    pub fn policy_table(&self) -> Result<PlatformPolicyTable, ConfigError> {
        let mut entries = Vec::with_capacity(self.platforms.len());
        for (name, platform) in &self.platforms {
            let key = parse_platform(name)?;
            let policy = PlatformPolicy::new(
                platform.char_min,
                platform.char_max,
                platform.hashtag_min,
                platform.hashtag_max,
                platform.tone_directives.clone(),
                platform.long_form,
            )
            .map_err(|e| ConfigError::new(format!("platforms.{}: {}", name, e.message)))?;
            entries.push((key, policy));
        }
        Ok(PlatformPolicyTable::new(entries))
    }

    /// Offset applied to scheduling when the caller gives none.
    pub fn schedule_offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::from_str(&self.schedule.utc_offset).map_err(|e| {
            ConfigError::new(format!(
                "schedule.utc_offset '{}' is not a valid offset: {}",
                self.schedule.utc_offset, e
            ))
        })
    }
}

/// Parse a platform key.
pub(crate) fn parse_platform(name: &str) -> Result<Platform, ConfigError> {
    Platform::from_str(name).map_err(|_| ConfigError::new(format!("Unknown platform '{}'", name)))
}

/// Parse a weekday (`mon`, `Tuesday`, ...).
pub(crate) fn parse_weekday(day: &str) -> Result<Weekday, ConfigError> {
    Weekday::from_str(day).map_err(|_| ConfigError::new(format!("Invalid weekday '{}'", day)))
}

/// Parse an `HH:MM` time.
pub(crate) fn parse_time(time: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ConfigError::new(format!("Invalid time '{}' (expected HH:MM)", time)))
}

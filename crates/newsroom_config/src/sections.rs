//! Configuration sections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy for one platform.
///
/// ```toml
/// [platforms.twitter]
/// char_min = 120
/// char_max = 280
/// hashtag_min = 0
/// hashtag_max = 2
/// long_form = false
/// tone_directives = ["Conciso y directo"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformConfig {
    /// Minimum characters (inclusive)
    pub char_min: usize,
    /// Maximum characters (inclusive)
    pub char_max: usize,
    /// Minimum hashtags (inclusive, soft)
    #[serde(default)]
    pub hashtag_min: usize,
    /// Maximum hashtags (inclusive)
    pub hashtag_max: usize,
    /// Whether the structure heuristic applies
    #[serde(default)]
    pub long_form: bool,
    /// Style rules injected into prompts
    #[serde(default)]
    pub tone_directives: Vec<String>,
}

/// Content validator tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// How many trailing non-empty lines may carry the closing
    #[serde(default = "default_closing_window")]
    pub closing_window: usize,
    /// Phrases accepted as a "what to watch" closing (lowercase)
    #[serde(default)]
    pub closing_phrases: Vec<String>,
    /// Distinct non-empty lines a long-form post should have
    #[serde(default = "default_structure_min_lines")]
    pub structure_min_lines: usize,
    /// Line breaks that imply a sectioned post when there are no bullets
    #[serde(default = "default_structure_min_breaks")]
    pub structure_min_breaks: usize,
}

fn default_closing_window() -> usize {
    3
}

fn default_structure_min_lines() -> usize {
    4
}

fn default_structure_min_breaks() -> usize {
    6
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            closing_window: default_closing_window(),
            closing_phrases: Vec::new(),
            structure_min_lines: default_structure_min_lines(),
            structure_min_breaks: default_structure_min_breaks(),
        }
    }
}

/// Keyword lists for the default suitability gate (lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SuitabilityConfig {
    /// Outlets trusted without further confirmation
    #[serde(default)]
    pub reliable_sources: Vec<String>,
    /// Phrases that mark speculative reporting
    #[serde(default)]
    pub rumor_indicators: Vec<String>,
    /// Transfer and injury vocabulary
    #[serde(default)]
    pub sensitive_terms: Vec<String>,
    /// Official-confirmation vocabulary
    #[serde(default)]
    pub confirmation_terms: Vec<String>,
}

/// Generation loop parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Provider calls per request
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Temperature of the first attempt
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f32,
    /// Temperature of every later attempt
    #[serde(default = "default_retry_temperature")]
    pub retry_temperature: f32,
    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Per-call timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_temperature() -> f32 {
    0.7
}

fn default_retry_temperature() -> f32 {
    0.5
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_temperature: default_initial_temperature(),
            retry_temperature: default_retry_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// OpenAI-compatible gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ai.gateway.lovable.dev/v1".to_string(),
            model: "google/gemini-3-flash-preview".to_string(),
            api_key_env: "LOVABLE_API_KEY".to_string(),
        }
    }
}

/// Inbound caller authentication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Environment variable holding comma-separated accepted keys
    pub api_keys_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_keys_env: "NEWSROOM_API_KEYS".to_string(),
        }
    }
}

/// Posting rule for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleRuleConfig {
    /// Preferred weekdays (`mon`..`sun`)
    pub days: Vec<String>,
    /// Preferred wall-clock times (`HH:MM`), in preference order
    pub times: Vec<String>,
    /// Why these slots work
    pub justification: String,
}

/// Scheduling engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// How many days ahead a weekday search may look
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Offset used when no start date is supplied
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    /// Platforms covered by the weekly calendar, in order
    #[serde(default)]
    pub weekly_platforms: Vec<String>,
    /// Rules keyed by platform name
    #[serde(default)]
    pub rules: BTreeMap<String, ScheduleRuleConfig>,
}

fn default_horizon_days() -> u32 {
    14
}

fn default_utc_offset() -> String {
    "+01:00".to_string()
}

impl ScheduleRuleConfig {
    /// Preferred weekdays, parsed.
    pub fn weekdays(&self) -> Result<Vec<chrono::Weekday>, newsroom_error::ConfigError> {
        self.days.iter().map(|d| crate::config::parse_weekday(d)).collect()
    }

    /// Preferred times, parsed.
    pub fn parsed_times(&self) -> Result<Vec<chrono::NaiveTime>, newsroom_error::ConfigError> {
        self.times.iter().map(|t| crate::config::parse_time(t)).collect()
    }
}

impl ScheduleConfig {
    /// Weekly-calendar platforms, parsed.
    pub fn calendar_platforms(
        &self,
    ) -> Result<Vec<newsroom_core::Platform>, newsroom_error::ConfigError> {
        self.weekly_platforms
            .iter()
            .map(|p| crate::config::parse_platform(p))
            .collect()
    }
}

//! Metrics for provider calls.
//!
//! OpenTelemetry instruments for request counts, failures, latency and
//! token usage, labeled with provider and model.

use newsroom_error::ProviderErrorKind;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Metrics for text-generation provider calls.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total provider requests
    pub requests: Counter<u64>,
    /// Failed provider requests
    pub errors: Counter<u64>,
    /// Provider call duration in seconds
    pub duration: Histogram<f64>,
    /// Total tokens used (prompt + completion)
    pub tokens_used: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("newsroom_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("newsroom.llm.requests")
                .with_description("Total provider requests")
                .build(),
            errors: meter
                .u64_counter("newsroom.llm.errors")
                .with_description("Failed provider requests")
                .build(),
            duration: meter
                .f64_histogram("newsroom.llm.duration")
                .with_unit("seconds")
                .with_description("Provider call duration")
                .build(),
            tokens_used: meter
                .u64_counter("newsroom.llm.tokens")
                .with_description("Total tokens used (prompt + completion)")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record token usage.
    pub fn record_tokens(&self, model: &str, total_tokens: u64) {
        self.tokens_used
            .add(total_tokens, &[KeyValue::new("model", model.to_string())]);
    }
}

impl Default for LlmMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify a provider error for metrics labeling.
///
/// Returns one of: "rate_limit", "quota", "auth", "timeout", "network",
/// "invalid_response", "api", "config".
pub fn classify_error(kind: &ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::RateLimited(_) => "rate_limit",
        ProviderErrorKind::QuotaExhausted(_) => "quota",
        ProviderErrorKind::Unauthorized(_) => "auth",
        ProviderErrorKind::Timeout(_) => "timeout",
        ProviderErrorKind::Http(_) => "network",
        ProviderErrorKind::MalformedResponse(_) | ProviderErrorKind::EmptyCompletion => {
            "invalid_response"
        }
        ProviderErrorKind::Api { .. } => "api",
        ProviderErrorKind::MissingApiKey(_) => "config",
    }
}

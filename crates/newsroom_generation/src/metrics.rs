//! Generation loop metrics.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<GenerationMetrics> = OnceLock::new();

/// Metrics for the generation loop.
#[derive(Clone)]
pub struct GenerationMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Provider calls needed per generation
    pub attempts: Histogram<u64>,
    /// Generations by outcome (accepted, exhausted, rejected, failed)
    pub outcomes: Counter<u64>,
}

impl GenerationMetrics {
    fn init() -> Self {
        let meter = global::meter("newsroom_generation");

        Self {
            _meter: meter.clone(),
            attempts: meter
                .u64_histogram("newsroom.generation.attempts")
                .with_description("Provider calls needed per generation")
                .build(),
            outcomes: meter
                .u64_counter("newsroom.generation.outcomes")
                .with_description("Generations by outcome")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a finished loop.
    pub fn record_attempts(&self, platform: &str, attempts: u32, accepted: bool) {
        let labels = &[
            KeyValue::new("platform", platform.to_string()),
            KeyValue::new("accepted", accepted),
        ];
        self.attempts.record(u64::from(attempts), labels);
    }

    /// Record the outcome of a generation call.
    pub fn record_outcome(&self, platform: &str, outcome: &'static str) {
        self.outcomes.add(
            1,
            &[
                KeyValue::new("platform", platform.to_string()),
                KeyValue::new("outcome", outcome),
            ],
        );
    }
}

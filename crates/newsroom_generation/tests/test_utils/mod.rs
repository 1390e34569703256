//! Test utilities for generation tests.
//!
//! This module provides a scripted text generator and fixture builders.

#![allow(dead_code)]

pub mod mock_generator;

pub use mock_generator::{MockBehavior, MockGenerator, MockResponse};

use newsroom_config::{GenerationConfig, NewsroomConfig};
use newsroom_core::{GenerationRequest, NewsFields, Platform, Variant};
use newsroom_editorial::{ContentValidator, KeywordSuitabilityGate};
use newsroom_generation::GenerationOrchestrator;
use std::sync::Arc;

/// Valid Twitter post: 175 characters, one hashtag, closing question.
pub const VALID_TWEET: &str = "El Mundial 2026 arranca en junio con 48 selecciones y un calendario más exigente que nunca para los clubes europeos.\n¿Estamos preparados para un torneo tan largo?\n#Mundial2026";

/// Twitter post with one error: 334 characters.
pub const LONG_TWEET: &str = "El Mundial 2026 arranca en junio con 48 selecciones, tres países anfitriones y un calendario que pondrá a prueba a jugadores, cuerpos técnicos y clubes europeos durante todo el verano. La FIFA defiende el nuevo formato por su alcance global, pero las ligas temen el desgaste acumulado de sus plantillas.\n¿Compensa un torneo tan largo?";

/// Another one-error Twitter post, distinguishable from [`LONG_TWEET`].
pub const LONG_TWEET_2: &str = "El Mundial 2026 arranca en junio con 48 selecciones, tres países anfitriones y un calendario que pondrá a prueba a jugadores, cuerpos técnicos y clubes europeos durante todo el verano. La FIFA defiende el nuevo formato por su alcance global, pero las ligas temen el desgaste acumulado de sus plantillas.\n¿Compensa un torneo tan largo a todos?";

/// Twitter post with two errors: too short and no closing.
pub const SHORT_TWEET: &str = "Arranca el Mundial.";

/// News that passes the gate.
pub fn suitable_news() -> NewsFields {
    NewsFields::new(
        "El Mundial 2026 arranca en junio",
        "La FIFA confirma el calendario del torneo con 48 selecciones.",
        "https://example.com/mundial",
        "EFE",
        vec!["fútbol".to_string()],
    )
    .unwrap()
}

/// News the gate refuses.
pub fn rumor_news() -> NewsFields {
    NewsFields::new(
        "Fichaje inminente según fuentes cercanas",
        "",
        "",
        "Blog desconocido",
        vec![],
    )
    .unwrap()
}

/// Twitter request over [`suitable_news`].
pub fn twitter_request() -> GenerationRequest {
    GenerationRequest::new(suitable_news(), Platform::Twitter, Variant::Standard)
}

/// Orchestrator over the bundled editorial configuration.
pub fn orchestrator(generator: Arc<MockGenerator>) -> GenerationOrchestrator {
    orchestrator_with(generator, &GenerationConfig::default())
}

/// Orchestrator with explicit loop parameters.
pub fn orchestrator_with(
    generator: Arc<MockGenerator>,
    generation: &GenerationConfig,
) -> GenerationOrchestrator {
    let config = NewsroomConfig::bundled().expect("bundled config");
    let gate = KeywordSuitabilityGate::new(&config.suitability);
    let validator = ContentValidator::editorial_defaults().expect("validator");
    GenerationOrchestrator::new(generator, Arc::new(gate), Arc::new(validator), generation)
}

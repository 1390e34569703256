//! Per-platform length, hashtag and tone policy.

use crate::Platform;
use newsroom_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hard constraints and tone rules for one platform.
///
/// Bounds are inclusive. Construct through [`PlatformPolicy::new`] so the
/// `min <= max` invariants always hold.
///
/// # Examples
///
/// ```
/// use newsroom_core::PlatformPolicy;
///
/// let policy = PlatformPolicy::new(120, 280, 0, 2, vec![], false).unwrap();
/// assert!(policy.chars_in_range(200));
/// assert!(!policy.chars_in_range(300));
///
/// assert!(PlatformPolicy::new(300, 120, 0, 2, vec![], false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PlatformPolicy {
    /// Minimum characters (inclusive)
    char_min: usize,
    /// Maximum characters (inclusive)
    char_max: usize,
    /// Minimum hashtags (inclusive, soft)
    hashtag_min: usize,
    /// Maximum hashtags (inclusive, hard)
    hashtag_max: usize,
    /// Ordered style rules injected into the prompt
    tone_directives: Vec<String>,
    /// Whether the multi-paragraph structure heuristic applies
    long_form: bool,
}

impl PlatformPolicy {
    /// Create a policy, rejecting inverted ranges.
    pub fn new(
        char_min: usize,
        char_max: usize,
        hashtag_min: usize,
        hashtag_max: usize,
        tone_directives: Vec<String>,
        long_form: bool,
    ) -> Result<Self, ConfigError> {
        if char_min > char_max {
            return Err(ConfigError::new(format!(
                "char_min ({}) must not exceed char_max ({})",
                char_min, char_max
            )));
        }
        if hashtag_min > hashtag_max {
            return Err(ConfigError::new(format!(
                "hashtag_min ({}) must not exceed hashtag_max ({})",
                hashtag_min, hashtag_max
            )));
        }
        Ok(Self {
            char_min,
            char_max,
            hashtag_min,
            hashtag_max,
            tone_directives,
            long_form,
        })
    }

    /// Whether `count` characters fits the budget.
    pub fn chars_in_range(&self, count: usize) -> bool {
        (self.char_min..=self.char_max).contains(&count)
    }

    /// Whether `count` hashtags fits the budget.
    pub fn hashtags_in_range(&self, count: usize) -> bool {
        (self.hashtag_min..=self.hashtag_max).contains(&count)
    }
}

/// Immutable lookup of policies by platform.
///
/// Built once at start-up and shared read-only (wrap it in an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformPolicyTable {
    policies: BTreeMap<Platform, PlatformPolicy>,
}

impl PlatformPolicyTable {
    /// Build a table from `(platform, policy)` pairs. Later entries replace earlier ones.
    pub fn new(policies: impl IntoIterator<Item = (Platform, PlatformPolicy)>) -> Self {
        Self {
            policies: policies.into_iter().collect(),
        }
    }

    /// Policy for a platform, if configured.
    pub fn get(&self, platform: Platform) -> Option<&PlatformPolicy> {
        self.policies.get(&platform)
    }

    /// Configured platforms in stable order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.policies.keys().copied()
    }

    /// Number of configured platforms.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether no platform is configured.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// The editorial defaults for the four supported platforms.
    pub fn editorial_defaults() -> Self {
        fn directives(lines: &[&str]) -> Vec<String> {
            lines.iter().map(|s| s.to_string()).collect()
        }

        // Bounds are literals that satisfy the invariants; build directly.
        fn entry(
            char_min: usize,
            char_max: usize,
            hashtag_min: usize,
            hashtag_max: usize,
            tone_directives: Vec<String>,
            long_form: bool,
        ) -> PlatformPolicy {
            PlatformPolicy {
                char_min,
                char_max,
                hashtag_min,
                hashtag_max,
                tone_directives,
                long_form,
            }
        }

        Self::new([
            (
                Platform::LinkedIn,
                entry(
                    800,
                    1400,
                    2,
                    4,
                    directives(&[
                        "Tono más reflexivo y profesional",
                        "Incluir siempre 1 aprendizaje o reflexión de valor",
                        "Formato: 2-3 párrafos cortos + bullets para las claves",
                        "Sin emojis o muy puntuales (máximo 1-2)",
                        "Visión personal sobre el periodismo deportivo y la industria",
                    ]),
                    true,
                ),
            ),
            (
                Platform::Twitter,
                entry(
                    120,
                    280,
                    0,
                    2,
                    directives(&[
                        "Estructura: 1 idea principal + 1 dato/contexto + pregunta final",
                        "Conciso y directo",
                        "Tono de opinión personal, como quien observa con experiencia",
                        "Sin emojis",
                        "Invitar a la reflexión sin polarizar",
                    ]),
                    false,
                ),
            ),
            (
                Platform::Instagram,
                entry(
                    150,
                    300,
                    0,
                    5,
                    directives(&[
                        "Primera línea con gancho visual",
                        "Mensajes más atemporales",
                        "Reconocimiento a momentos y personas del deporte",
                        "Emojis muy puntuales si procede",
                    ]),
                    false,
                ),
            ),
            (
                Platform::Facebook,
                entry(
                    250,
                    600,
                    0,
                    2,
                    directives(&[
                        "Tono narrativo y directo, sin perder rigor",
                        "Más conversacional pero con gravitas",
                        "Visibilidad de actos, reconocimientos y trayectorias",
                        "Sin emojis o muy puntuales",
                    ]),
                    true,
                ),
            ),
        ])
    }
}

//! Keyword-based suitability gate.

use newsroom_config::SuitabilityConfig;
use newsroom_core::{NewsFields, SuitabilityVerdict};
use newsroom_interface::SuitabilityPolicy;
use tracing::debug;

/// Default [`SuitabilityPolicy`]: keyword lists from configuration.
///
/// An item is refused when it reads like a rumor and the source is not on the
/// allow-list, or when it talks about transfers or injuries without official
/// confirmation and the source is not on the allow-list.
///
/// Sources match on word boundaries ("as" matches "AS" but not "Atlas").
/// Keywords match at the start of a word so "rumor" also finds "rumores".
/// Confirmation words preceded by "no" or "sin" do not count.
///
/// # Examples
///
/// ```
/// use newsroom_config::NewsroomConfig;
/// use newsroom_core::NewsFields;
/// use newsroom_editorial::KeywordSuitabilityGate;
/// use newsroom_interface::SuitabilityPolicy;
///
/// let config = NewsroomConfig::bundled().unwrap();
/// let gate = KeywordSuitabilityGate::new(&config.suitability);
///
/// let news = NewsFields::new(
///     "Fichaje inminente según fuentes cercanas",
///     "",
///     "",
///     "Blog desconocido",
///     vec![],
/// )
/// .unwrap();
/// assert!(!gate.check(&news).is_suitable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordSuitabilityGate {
    reliable_sources: Vec<String>,
    rumor_indicators: Vec<String>,
    sensitive_terms: Vec<String>,
    confirmation_terms: Vec<String>,
}

impl KeywordSuitabilityGate {
    /// Build a gate from configured lists. Entries are lowercased.
    pub fn new(config: &SuitabilityConfig) -> Self {
        fn lower(list: &[String]) -> Vec<String> {
            list.iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        }
        Self {
            reliable_sources: lower(&config.reliable_sources),
            rumor_indicators: lower(&config.rumor_indicators),
            sensitive_terms: lower(&config.sensitive_terms),
            confirmation_terms: lower(&config.confirmation_terms),
        }
    }

    /// Whether the source is on the allow-list.
    pub fn is_reliable_source(&self, source: &str) -> bool {
        let source = source.to_lowercase();
        self.reliable_sources
            .iter()
            .any(|name| find_term(&source, name, true).next().is_some())
    }

    fn mentions_any(&self, text: &str, terms: &[String]) -> bool {
        terms.iter().any(|t| find_term(text, t, false).next().is_some())
    }

    fn is_confirmed(&self, text: &str) -> bool {
        self.confirmation_terms.iter().any(|term| {
            find_term(text, term, false).any(|start| !is_negated(&text[..start]))
        })
    }
}

impl SuitabilityPolicy for KeywordSuitabilityGate {
    fn check(&self, news: &NewsFields) -> SuitabilityVerdict {
        let text = format!("{} {}", news.title(), news.summary()).to_lowercase();
        let reliable = self.is_reliable_source(news.source());
        let rumor = self.mentions_any(&text, &self.rumor_indicators);
        let sensitive = self.mentions_any(&text, &self.sensitive_terms);
        let confirmed = self.is_confirmed(&text);
        debug!(reliable, rumor, sensitive, confirmed, "Suitability signals");

        let source = if news.source().is_empty() {
            "sin fuente".to_string()
        } else {
            format!("\"{}\"", news.source())
        };

        if rumor && !reliable {
            return SuitabilityVerdict::not_suitable(
                format!(
                    "La noticia contiene indicadores de rumor y la fuente ({}) no está entre los medios fiables.",
                    source
                ),
                "Espera a una confirmación oficial o a la cobertura de un medio fiable antes de generar el post.",
            );
        }
        if sensitive && !confirmed && !reliable {
            return SuitabilityVerdict::not_suitable(
                format!(
                    "Fichaje o lesión sin confirmación oficial y la fuente ({}) no está verificada.",
                    source
                ),
                "Trátalo como posibilidad solo cuando un comunicado oficial o un medio fiable lo confirme.",
            );
        }
        SuitabilityVerdict::suitable()
    }
}

/// Byte offsets where `term` occurs in `haystack` starting at a word boundary.
/// With `whole_word`, the match must also end at a word boundary.
fn find_term<'a>(
    haystack: &'a str,
    term: &'a str,
    whole_word: bool,
) -> impl Iterator<Item = usize> + 'a {
    haystack.match_indices(term).filter_map(move |(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        let starts_word = before.is_none_or(|c| !c.is_alphanumeric());
        let ends_word = !whole_word || after.is_none_or(|c| !c.is_alphanumeric());
        (starts_word && ends_word).then_some(start)
    })
}

/// Whether the text right before a match negates it ("no confirmado").
fn is_negated(prefix: &str) -> bool {
    let previous = prefix
        .trim_end()
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    matches!(previous, "no" | "sin" | "not")
}

//! Rule-based content validator.

use newsroom_config::ValidationConfig;
use newsroom_core::{Platform, PlatformPolicy, PlatformPolicyTable, ValidationIssue, ValidationResult};
use newsroom_error::{ConfigError, InputError, InputErrorKind};
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Closing phrasings accepted in place of a question.
pub const DEFAULT_CLOSING_PHRASES: &[&str] = &[
    "qué observar",
    "a partir de ahora",
    "habrá que ver",
    "atentos a",
    "seguiremos",
    "lo que viene",
    "próximos",
    "what to watch",
    "keep an eye",
];

// A hashtag starts a word: "#" right after a letter, digit, "/", "&" or "#" is
// part of something else (anchor, entity, repeated marks).
const HASHTAG_PATTERN: &str = r"(?:^|[^\p{L}\p{N}_/&#])#[\p{L}\p{N}_]+";
const URL_PATTERN: &str = r"(?i)\b(?:https?://|www\.)\S+";

/// Judges post text against the platform policy table.
///
/// Every check runs on every call; none short-circuits. Results depend only
/// on the content and the policy. Links are blanked out before hashtags and
/// the closing line are inspected, so `#fragment` anchors and `?query`
/// strings count as neither.
///
/// # Examples
///
/// ```
/// use newsroom_core::Platform;
/// use newsroom_editorial::ContentValidator;
///
/// let validator = ContentValidator::editorial_defaults().unwrap();
/// let result = validator.validate("short text #x #y #z #w #v", Platform::Twitter).unwrap();
/// assert!(!result.is_valid());
/// assert_eq!(*result.hashtag_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ContentValidator {
    policies: Arc<PlatformPolicyTable>,
    closing_phrases: Vec<String>,
    closing_window: usize,
    structure_min_lines: usize,
    structure_min_breaks: usize,
    hashtag: Regex,
    url: Regex,
}

impl ContentValidator {
    /// Create a validator over a shared policy table.
    pub fn new(
        policies: Arc<PlatformPolicyTable>,
        config: &ValidationConfig,
    ) -> Result<Self, ConfigError> {
        if config.closing_window == 0 {
            return Err(ConfigError::new("closing_window must be at least 1"));
        }
        let hashtag = Regex::new(HASHTAG_PATTERN)
            .map_err(|e| ConfigError::new(format!("Invalid hashtag pattern: {}", e)))?;
        let url = Regex::new(URL_PATTERN)
            .map_err(|e| ConfigError::new(format!("Invalid link pattern: {}", e)))?;
        let closing_phrases = if config.closing_phrases.is_empty() {
            DEFAULT_CLOSING_PHRASES.iter().map(|s| s.to_string()).collect()
        } else {
            config
                .closing_phrases
                .iter()
                .map(|p| p.to_lowercase())
                .collect()
        };
        Ok(Self {
            policies,
            closing_phrases,
            closing_window: config.closing_window,
            structure_min_lines: config.structure_min_lines,
            structure_min_breaks: config.structure_min_breaks,
            hashtag,
            url,
        })
    }

    /// Validator over the built-in editorial policies.
    pub fn editorial_defaults() -> Result<Self, ConfigError> {
        Self::new(
            Arc::new(PlatformPolicyTable::editorial_defaults()),
            &ValidationConfig::default(),
        )
    }

    /// The policy table this validator checks against.
    pub fn policies(&self) -> &Arc<PlatformPolicyTable> {
        &self.policies
    }

    /// Validate content for a platform.
    ///
    /// Fails only when the platform has no configured policy.
    #[instrument(skip(self, content), fields(platform = %platform, len = content.len()))]
    pub fn validate(&self, content: &str, platform: Platform) -> Result<ValidationResult, InputError> {
        let policy = self
            .policies
            .get(platform)
            .ok_or_else(|| InputError::new(InputErrorKind::UnknownPlatform(platform.to_string())))?;
        Ok(self.validate_with_policy(content, policy))
    }

    /// Validate content against an explicit policy.
    pub fn validate_with_policy(&self, content: &str, policy: &PlatformPolicy) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let char_count = content.chars().count();
        if char_count < *policy.char_min() {
            errors.push(ValidationIssue::TooShort {
                count: char_count,
                min: *policy.char_min(),
            });
        } else if char_count > *policy.char_max() {
            errors.push(ValidationIssue::TooLong {
                count: char_count,
                max: *policy.char_max(),
            });
        }

        let hashtag_count = self.count_hashtags(content);
        if hashtag_count > *policy.hashtag_max() {
            errors.push(ValidationIssue::TooManyHashtags {
                count: hashtag_count,
                max: *policy.hashtag_max(),
            });
        } else if hashtag_count < *policy.hashtag_min() {
            warnings.push(ValidationIssue::TooFewHashtags {
                count: hashtag_count,
                min: *policy.hashtag_min(),
            });
        }

        if !self.has_closing(content) {
            errors.push(ValidationIssue::MissingClosing);
        }

        if *policy.long_form() && !self.has_structure(content) {
            warnings.push(ValidationIssue::WeakStructure);
        }

        debug!(
            char_count,
            hashtag_count,
            errors = errors.len(),
            warnings = warnings.len(),
            "Content validated"
        );
        ValidationResult::new(errors, warnings, char_count, hashtag_count)
    }

    /// Number of hashtags in `content`.
    pub fn count_hashtags(&self, content: &str) -> usize {
        self.hashtag.find_iter(&self.without_links(content)).count()
    }

    /// Whether one of the last non-empty lines asks a question or says what to watch.
    pub fn has_closing(&self, content: &str) -> bool {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .rev()
            .take(self.closing_window)
            .any(|line| {
                let line = self.without_links(line);
                if line.contains('?') {
                    return true;
                }
                let lower = line.to_lowercase();
                self.closing_phrases.iter().any(|p| lower.contains(p.as_str()))
            })
    }

    fn without_links<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.url.replace_all(text, " ")
    }

    /// Whether a long-form post reads as hook, context, key points and close.
    pub fn has_structure(&self, content: &str) -> bool {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let distinct: HashSet<&str> = lines.iter().copied().collect();
        if distinct.len() < self.structure_min_lines {
            return false;
        }
        let bullets = lines.iter().any(|line| is_bullet(line));
        let breaks = content.matches('\n').count();
        bullets || breaks >= self.structure_min_breaks
    }
}

fn is_bullet(line: &str) -> bool {
    const MARKERS: &[&str] = &["- ", "• ", "* ", "– ", "· ", "▪", "✔", "✅", "→", "👉"];
    if MARKERS.iter().any(|m| line.starts_with(m)) {
        return true;
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && matches!(line[digits..].chars().next(), Some('.') | Some(')'))
}

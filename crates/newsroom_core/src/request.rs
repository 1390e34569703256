//! Validated generation requests.
//!
//! Requests arrive as loosely typed bodies ([`GenerationRequestBody`]) and are
//! converted once, at the boundary, into a [`GenerationRequest`] whose fields are
//! sanitized and range-checked. Downstream code never sees raw input.

use crate::{Platform, Variant, sanitize_line, sanitize_multiline};
use newsroom_error::{InputError, InputErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const TITLE_MAX: usize = 500;
const SUMMARY_MAX: usize = 5000;
const URL_MAX: usize = 2000;
const SOURCE_MAX: usize = 200;
const TOPICS_MAX: usize = 20;
const TOPIC_MAX: usize = 100;

/// Wire form of a generation request, as posted by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequestBody {
    /// Headline
    pub news_title: String,
    /// Summary (optional)
    #[serde(default)]
    pub news_summary: String,
    /// Link to the original article (optional)
    #[serde(default)]
    pub news_url: String,
    /// Outlet name (optional)
    #[serde(default)]
    pub news_source: String,
    /// Related topics
    #[serde(default)]
    pub topics: Vec<String>,
    /// Platform name
    pub platform: String,
    /// Variant number (1..=3)
    pub variant: i64,
}

/// Sanitized news metadata shared by the gate, the composer and batch calls.
///
/// # Examples
///
/// ```
/// use newsroom_core::NewsFields;
///
/// let news = NewsFields::new(
///     "Alcaraz gana\r\nen Roland Garros",
///     "Resumen",
///     "https://as.com/tenis/alcaraz",
///     "AS",
///     vec!["Tenis".to_string()],
/// )
/// .unwrap();
/// assert_eq!(news.title(), "Alcaraz gana en Roland Garros");
///
/// assert!(NewsFields::new("  ", "", "", "", vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct NewsFields {
    /// Headline (1..=500 chars)
    title: String,
    /// Summary (0..=5000 chars)
    summary: String,
    /// Article URL, empty when unknown
    url: String,
    /// Outlet name, empty when unknown
    source: String,
    /// Related topics (0..=20, each <= 100 chars)
    topics: Vec<String>,
}

impl NewsFields {
    /// Sanitize and validate raw news fields.
    #[track_caller]
    pub fn new(
        title: &str,
        summary: &str,
        url: &str,
        source: &str,
        topics: Vec<String>,
    ) -> Result<Self, InputError> {
        let title = sanitize_line(title);
        if title.is_empty() {
            return Err(InputError::new(InputErrorKind::EmptyTitle));
        }
        check_len("newsTitle", &title, TITLE_MAX)?;

        let summary = sanitize_multiline(summary);
        check_len("newsSummary", &summary, SUMMARY_MAX)?;

        let url = sanitize_line(url);
        check_len("newsUrl", &url, URL_MAX)?;
        if !url.is_empty() {
            let parsed = url::Url::parse(&url)
                .map_err(|e| InputError::new(InputErrorKind::InvalidUrl(format!("{}: {}", url, e))))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(InputError::new(InputErrorKind::InvalidUrl(format!(
                    "unsupported scheme '{}'",
                    parsed.scheme()
                ))));
            }
        }

        let source = sanitize_line(source);
        check_len("newsSource", &source, SOURCE_MAX)?;

        if topics.len() > TOPICS_MAX {
            return Err(InputError::new(InputErrorKind::TooManyTopics {
                max: TOPICS_MAX,
                actual: topics.len(),
            }));
        }
        let mut clean_topics = Vec::with_capacity(topics.len());
        for topic in &topics {
            let topic = sanitize_line(topic);
            check_len("topics", &topic, TOPIC_MAX)?;
            if !topic.is_empty() {
                clean_topics.push(topic);
            }
        }

        Ok(Self {
            title,
            summary,
            url,
            source,
            topics: clean_topics,
        })
    }
}

#[track_caller]
fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), InputError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(InputError::new(InputErrorKind::TooLong { field, max, actual }));
    }
    Ok(())
}

/// A validated request for one draft: news item x platform x variant.
///
/// # Examples
///
/// ```
/// use newsroom_core::{GenerationRequest, Platform, Variant};
///
/// let request = GenerationRequest::builder()
///     .news_title("El Mundial 2026 bate récords de audiencia")
///     .news_source("RTVE")
///     .platform(Platform::LinkedIn)
///     .variant(Variant::Standard)
///     .build()
///     .unwrap();
/// assert_eq!(request.platform(), &Platform::LinkedIn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRequest {
    /// Sanitized news fields
    news: NewsFields,
    /// Target platform
    platform: Platform,
    /// Tone preset
    variant: Variant,
}

impl GenerationRequest {
    /// Combine already-validated news fields with a target.
    pub fn new(news: NewsFields, platform: Platform, variant: Variant) -> Self {
        Self {
            news,
            platform,
            variant,
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Validate a wire body.
    #[track_caller]
    pub fn from_body(body: GenerationRequestBody) -> Result<Self, InputError> {
        let platform = Platform::from_str(body.platform.trim())
            .map_err(|_| InputError::new(InputErrorKind::UnknownPlatform(body.platform.clone())))?;
        let variant = Variant::try_from(body.variant)?;
        let news = NewsFields::new(
            &body.news_title,
            &body.news_summary,
            &body.news_url,
            &body.news_source,
            body.topics,
        )?;
        Ok(Self::new(news, platform, variant))
    }

    /// Decode and validate a JSON body.
    #[track_caller]
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let body: GenerationRequestBody = serde_json::from_str(json)
            .map_err(|e| InputError::new(InputErrorKind::MalformedBody(e.to_string())))?;
        Self::from_body(body)
    }
}

/// Unchecked parts collected by [`GenerationRequestBuilder`].
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(
    name = "GenerationRequestBuilder",
    public,
    setter(into),
    build_fn(private, name = "build_internal")
)]
struct RequestParts {
    /// Headline
    #[builder(default)]
    news_title: String,
    /// Summary
    #[builder(default)]
    news_summary: String,
    /// Article URL
    #[builder(default)]
    news_url: String,
    /// Outlet name
    #[builder(default)]
    news_source: String,
    /// Related topics
    #[builder(default)]
    topics: Vec<String>,
    /// Target platform
    platform: Platform,
    /// Tone preset
    #[builder(default)]
    variant: Variant,
}

impl GenerationRequestBuilder {
    /// Sanitize, validate and build the request.
    #[track_caller]
    pub fn build(&self) -> Result<GenerationRequest, InputError> {
        let parts = self
            .build_internal()
            .map_err(|e| InputError::new(InputErrorKind::Other(e.to_string())))?;
        let news = NewsFields::new(
            &parts.news_title,
            &parts.news_summary,
            &parts.news_url,
            &parts.news_source,
            parts.topics,
        )?;
        Ok(GenerationRequest::new(news, parts.platform, parts.variant))
    }
}

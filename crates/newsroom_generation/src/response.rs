//! Inbound response envelope.

use newsroom_core::{GenerationReport, GenerationRequest, Platform, SuitabilityVerdict, Variant};
use newsroom_error::{ErrorCode, NewsroomError, NewsroomErrorKind};
use serde::{Deserialize, Serialize};

/// Diagnostics returned with a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Outlet name
    pub source: String,
    /// Headline of the news item
    pub source_title: String,
    /// Article URL
    pub url: String,
    /// Characters in the draft
    pub char_count: usize,
    /// Hashtags in the draft
    pub hashtag_count: usize,
    /// Whether the draft passed validation
    pub is_valid: bool,
    /// Blocking issues
    pub errors: Vec<String>,
    /// Advisory issues
    pub warnings: Vec<String>,
    /// Provider calls made
    pub attempts_needed: u32,
}

/// A generated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePostResponse {
    /// Post text
    pub content: String,
    /// Target platform
    pub platform: Platform,
    /// Tone preset
    pub variant: Variant,
    /// Validation diagnostics
    pub metadata: PostMetadata,
    /// Identifier of the stored draft, when persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<String>,
}

impl GeneratePostResponse {
    /// Build the response for a finished loop.
    pub fn new(request: &GenerationRequest, report: &GenerationReport) -> Self {
        let news = request.news();
        let validation = report.validation();
        Self {
            content: report.content().clone(),
            platform: *request.platform(),
            variant: *request.variant(),
            metadata: PostMetadata {
                source: news.source().clone(),
                source_title: news.title().clone(),
                url: news.url().clone(),
                char_count: *validation.char_count(),
                hashtag_count: *validation.hashtag_count(),
                is_valid: validation.is_valid(),
                errors: validation.error_messages(),
                warnings: validation.warning_messages(),
                attempts_needed: *report.attempts(),
            },
            draft_id: None,
        }
    }

    /// Attach the stored draft identifier.
    pub fn with_draft_id(mut self, id: impl Into<String>) -> Self {
        self.draft_id = Some(id.into());
        self
    }
}

/// A news item refused by the suitability gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotSuitableResponse {
    /// Why the item was refused
    pub reason: String,
    /// What would make it publishable
    pub suggestion: String,
    /// Always `true`
    pub is_not_suitable: bool,
}

impl From<&SuitabilityVerdict> for NotSuitableResponse {
    fn from(verdict: &SuitabilityVerdict) -> Self {
        Self {
            reason: verdict.reason().clone().unwrap_or_default(),
            suggestion: verdict.suggestion().clone().unwrap_or_default(),
            is_not_suitable: true,
        }
    }
}

/// An error, with a message fit for the newsroom UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Caller-facing message (Spanish)
    pub error: String,
    /// Stable error code
    pub code: ErrorCode,
}

impl ErrorResponse {
    /// Map an error to its caller-facing message.
    ///
    /// Input errors keep their detail; the others get a fixed message per code.
    pub fn from_error(err: &NewsroomError) -> Self {
        let code = err.code();
        let error = match (code, err.kind()) {
            (_, NewsroomErrorKind::Input(e)) => format!("Datos no válidos: {}", e.kind),
            (ErrorCode::Unauthenticated, _) => "No autorizado".to_string(),
            (ErrorCode::RateLimited, _) => {
                "Demasiadas solicitudes. Por favor, espera un momento antes de generar más posts."
                    .to_string()
            }
            (ErrorCode::QuotaExhausted, _) => {
                "Créditos agotados. Añade créditos a tu workspace.".to_string()
            }
            (ErrorCode::ProviderTimeout, _) => {
                "El generador tardó demasiado en responder. Inténtalo de nuevo.".to_string()
            }
            (ErrorCode::NotFound, _) => "Registro no encontrado".to_string(),
            (ErrorCode::Conflict, _) => "Transición de estado no permitida".to_string(),
            _ => "Error generando post".to_string(),
        };
        Self { error, code }
    }
}

/// Body of an inbound response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// A draft
    Post(GeneratePostResponse),
    /// A gate refusal
    NotSuitable(NotSuitableResponse),
    /// A failure
    Error(ErrorResponse),
}

/// Status and body of an inbound response.
///
/// Gate refusals are a normal outcome and use status 200 with
/// `isNotSuitable: true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// HTTP-like status
    pub status: u16,
    /// Response body
    pub body: ResponseBody,
}

impl ServiceResponse {
    /// 200 with a draft.
    pub fn post(post: GeneratePostResponse) -> Self {
        Self {
            status: 200,
            body: ResponseBody::Post(post),
        }
    }

    /// 200 with a gate refusal.
    pub fn not_suitable(verdict: &SuitabilityVerdict) -> Self {
        Self {
            status: 200,
            body: ResponseBody::NotSuitable(NotSuitableResponse::from(verdict)),
        }
    }

    /// Error status and message for `err`.
    pub fn error(err: &NewsroomError) -> Self {
        let body = ErrorResponse::from_error(err);
        Self {
            status: body.code.status(),
            body: ResponseBody::Error(body),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as JSON.
    pub fn body_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

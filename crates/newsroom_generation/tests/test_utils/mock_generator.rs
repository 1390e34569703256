//! Scripted text generator.

use async_trait::async_trait;
use newsroom_core::{CompletionRequest, CompletionResponse};
use newsroom_error::{NewsroomResult, ProviderError, ProviderErrorKind};
use newsroom_interface::TextGenerator;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always return the specified error
    Error(ProviderErrorKind),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
    /// Sleep, then return the text
    Delayed(Duration, String),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(ProviderErrorKind),
}

/// Mock generator that counts calls and records requests.
pub struct MockGenerator {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockGenerator {
    /// Create a mock with custom behavior.
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Always succeed with `text`.
    pub fn success(text: impl Into<String>) -> Arc<Self> {
        Self::new(MockBehavior::Success(text.into()))
    }

    /// Always fail with `error`.
    pub fn error(error: ProviderErrorKind) -> Arc<Self> {
        Self::new(MockBehavior::Error(error))
    }

    /// Answer with the texts in order.
    pub fn texts(texts: &[&str]) -> Arc<Self> {
        Self::new(MockBehavior::Sequence(
            texts
                .iter()
                .map(|t| MockResponse::Success(t.to_string()))
                .collect(),
        ))
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self, req: &CompletionRequest) -> Result<String, ProviderErrorKind> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            MockBehavior::Success(text) | MockBehavior::Delayed(_, text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(kind.clone()),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(MockResponse::Success(text)) => Ok(text.clone()),
                Some(MockResponse::Error(kind)) => Err(kind.clone()),
                None => Err(ProviderErrorKind::Http(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                ))),
            },
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &CompletionRequest) -> NewsroomResult<CompletionResponse> {
        let result = self.next_response(req);
        match &self.behavior {
            MockBehavior::Delayed(delay, _) => tokio::time::sleep(*delay).await,
            _ => tokio::time::sleep(Duration::from_millis(1)).await,
        }
        result
            .map(|text| CompletionResponse::new(text, "mock-model", None))
            .map_err(|kind| ProviderError::new(kind).into())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

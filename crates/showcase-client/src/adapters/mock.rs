//! Recording Doubles
//!
//! In-memory implementations of the ports that record every call for test
//! assertions. Thread-safe via `Arc<Mutex<>>`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use showcase::{
    AssetUploader, Credential, DomainError, GraphqlRequest, GraphqlTransport, Operation,
    SessionSource, UploadOutcome,
};

/// One call seen by `MockTransport`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub request: GraphqlRequest,
    pub credential: Credential,
}

#[derive(Debug, Default)]
struct TransportState {
    requests: Vec<RecordedRequest>,
    responses: HashMap<Operation, Value>,
    failure: Option<String>,
}

/// Transport that answers from a per-operation table (default `{}`)
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<TransportState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `operation` with `data`
    pub fn with_response(self, operation: Operation, data: Value) -> Self {
        self.lock().responses.insert(operation, data);
        self
    }

    /// Fail every call with a transport error
    pub fn failing(self, message: impl Into<String>) -> Self {
        self.lock().failure = Some(message.into());
        self
    }

    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn reset(&self) {
        self.lock().requests.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TransportState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GraphqlTransport for MockTransport {
    async fn send(
        &self,
        request: GraphqlRequest,
        credential: &Credential,
    ) -> Result<Value, DomainError> {
        tracing::debug!(operation = request.operation.name(), "Mock transport: recording request");
        let mut state = self.lock();
        let operation = request.operation;
        state.requests.push(RecordedRequest {
            request,
            credential: credential.clone(),
        });

        if let Some(message) = &state.failure {
            return Err(DomainError::Transport(message.clone()));
        }

        Ok(state
            .responses
            .get(&operation)
            .cloned()
            .unwrap_or_else(|| json!({})))
    }
}

#[derive(Debug, Clone)]
enum UploadBehavior {
    Answer(UploadOutcome),
    Fail(String),
}

/// Uploader with a fixed answer
#[derive(Debug, Clone)]
pub struct MockUploader {
    behavior: UploadBehavior,
    references: Arc<Mutex<Vec<String>>>,
}

impl MockUploader {
    /// Every upload succeeds with `url`
    pub fn uploading_to(url: impl Into<String>) -> Self {
        Self::answering(UploadOutcome::Uploaded { url: url.into() })
    }

    /// Every upload is answered with `outcome`
    pub fn answering(outcome: UploadOutcome) -> Self {
        Self {
            behavior: UploadBehavior::Answer(outcome),
            references: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every upload fails with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: UploadBehavior::Fail(message.into()),
            references: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded_references(&self) -> Vec<String> {
        self.references
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl AssetUploader for MockUploader {
    async fn upload(&self, reference: &str) -> Result<UploadOutcome, DomainError> {
        self.references
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(reference.to_string());

        match &self.behavior {
            UploadBehavior::Answer(outcome) => Ok(outcome.clone()),
            UploadBehavior::Fail(message) => Err(DomainError::Transport(message.clone())),
        }
    }
}

/// Session source returning a fixed payload
#[derive(Debug, Clone)]
pub struct MockSession {
    payload: Value,
}

impl MockSession {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl SessionSource for MockSession {
    async fn fetch_token(&self) -> Result<Value, DomainError> {
        Ok(self.payload.clone())
    }
}

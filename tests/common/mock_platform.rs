//! Mock draft service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use notedraft::platform::{ApiReply, DraftService, TransportError};
use notedraft::types::DraftPayload;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Call record for `create_draft`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDraftCall {
    pub api_key: String,
    pub social_set_id: String,
    pub payload: DraftPayload,
}

/// Simple mock draft service for testing
///
/// Features:
/// - Configurable replies per operation
/// - Call tracking for verification
/// - Transport error injection for failure path testing
pub struct MockDraftService {
    social_sets_reply: Mutex<ApiReply>,
    draft_reply: Mutex<ApiReply>,
    // Call tracking
    list_calls: Mutex<Vec<String>>,
    create_calls: Mutex<Vec<CreateDraftCall>>,
    // Error injection
    error_on_list: Mutex<Option<TransportError>>,
    error_on_create: Mutex<Option<TransportError>>,
}

impl Default for MockDraftService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDraftService {
    /// Mock with one social set (id 42) and a successful draft reply
    pub fn new() -> Self {
        Self {
            social_sets_reply: Mutex::new(ApiReply {
                status: 200,
                body: json!({
                    "results": [{ "id": 42, "username": "writer", "name": "Writer" }],
                    "count": 1
                }),
            }),
            draft_reply: Mutex::new(ApiReply {
                status: 201,
                body: json!({
                    "id": 1001,
                    "status": "draft",
                    "platforms": { "x": { "posts": [{ "text": "..." }] } },
                    "scheduled_date": null,
                    "private_url": "https://typefully.com/?d=1001"
                }),
            }),
            list_calls: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_create: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Set the reply to `list_social_sets`
    pub fn set_social_sets_reply(&self, status: u16, body: Value) {
        *self.social_sets_reply.lock().unwrap() = ApiReply { status, body };
    }

    /// Set the reply to `create_draft`
    pub fn set_draft_reply(&self, status: u16, body: Value) {
        *self.draft_reply.lock().unwrap() = ApiReply { status, body };
    }

    // === Error injection methods ===

    /// Make `list_social_sets` fail below HTTP
    pub fn fail_list(&self, error: TransportError) {
        *self.error_on_list.lock().unwrap() = Some(error);
    }

    /// Make `create_draft` fail below HTTP
    pub fn fail_create(&self, error: TransportError) {
        *self.error_on_create.lock().unwrap() = Some(error);
    }

    // === Call verification methods ===

    /// API keys `list_social_sets` was called with
    pub fn get_list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    /// All `create_draft` calls
    pub fn get_create_calls(&self) -> Vec<CreateDraftCall> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Total number of requests made
    pub fn request_count(&self) -> usize {
        self.get_list_calls().len() + self.get_create_calls().len()
    }

    /// Assert that exactly one draft was created under `social_set_id`
    pub fn assert_single_draft_for(&self, social_set_id: &str) {
        let calls = self.get_create_calls();
        assert_eq!(
            calls.len(),
            1,
            "Expected one create_draft call but got: {calls:?}"
        );
        assert_eq!(calls[0].social_set_id, social_set_id);
    }
}

#[async_trait]
impl DraftService for MockDraftService {
    async fn list_social_sets(&self, api_key: &str) -> Result<ApiReply, TransportError> {
        self.list_calls.lock().unwrap().push(api_key.to_string());

        if let Some(error) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(error.clone());
        }

        Ok(self.social_sets_reply.lock().unwrap().clone())
    }

    async fn create_draft(
        &self,
        api_key: &str,
        social_set_id: &str,
        payload: &DraftPayload,
    ) -> Result<ApiReply, TransportError> {
        self.create_calls.lock().unwrap().push(CreateDraftCall {
            api_key: api_key.to_string(),
            social_set_id: social_set_id.to_string(),
            payload: payload.clone(),
        });

        if let Some(error) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(error.clone());
        }

        Ok(self.draft_reply.lock().unwrap().clone())
    }
}

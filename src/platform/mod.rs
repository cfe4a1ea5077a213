//! Remote drafting service
//!
//! [`DraftService`] is the seam between the publish pipeline and the network.
//! It reports raw HTTP replies and transport failures; turning those into a
//! [`SubmissionResult`](crate::types::SubmissionResult) is the job of
//! [`crate::submit`].

mod typefully;

pub use typefully::{api_base_url, TypefullyService, API_URL_ENV, DEFAULT_API_URL};

use crate::types::DraftPayload;
use async_trait::async_trait;
use thiserror::Error;

/// An HTTP reply, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: serde_json::Value,
}

impl ApiReply {
    /// Whether the status is 2xx
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A request that produced no HTTP reply, or failed below the HTTP layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status attached to the failure, if any
    pub status: Option<u16>,
    /// Failure classification (e.g. "timeout", "connect"), if known
    pub kind: Option<String>,
    /// Description of the failure
    pub message: String,
}

impl TransportError {
    /// Failure with neither a status nor a classification
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: None,
            kind: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connect"
        } else if e.is_decode() {
            "decode"
        } else if e.is_body() {
            "body"
        } else if e.is_redirect() {
            "redirect"
        } else if e.is_builder() {
            "builder"
        } else {
            "request"
        };

        Self {
            status: e.status().map(|s| s.as_u16()),
            kind: Some(kind.to_string()),
            message: e.to_string(),
        }
    }
}

/// Drafting service operations
///
/// The API key is passed per call: the pipeline reads it from a settings
/// snapshot and never stores it in the service.
#[async_trait]
pub trait DraftService: Send + Sync {
    /// `GET /social-sets`
    async fn list_social_sets(&self, api_key: &str) -> Result<ApiReply, TransportError>;

    /// `POST /social-sets/{social_set_id}/drafts`
    async fn create_draft(
        &self,
        api_key: &str,
        social_set_id: &str,
        payload: &DraftPayload,
    ) -> Result<ApiReply, TransportError>;
}

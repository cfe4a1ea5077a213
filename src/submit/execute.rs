//! Draft submission
//!
//! Sends one draft request and classifies whatever comes back. Nothing here
//! returns an error: every outcome is a [`SubmissionResult`].

use crate::platform::{ApiReply, DraftService, TransportError};
use crate::types::{DraftDetails, DraftPayload, FailureDetails, SubmissionResult};
use serde_json::Value;
use tracing::{debug, warn};

/// The API key is missing
pub const MSG_API_KEY_CONFIGURATION_REQUIRED: &str =
    "Please configure a valid Typefully API key (notedraft config set api_key <KEY>)";

/// The service answered 500
pub const MSG_SERVICE_UNAVAILABLE: &str =
    "Typefully is currently unavailable. Please try again later.";

/// Fallback for unexplained failures
pub const MSG_FAILED_TO_PUBLISH: &str = "Failed to publish to Typefully";

/// Fallback for 403 transport failures
pub const MSG_FAILED_TO_PUBLISH_POSSIBLE_API_KEY_ISSUE: &str =
    "Failed to publish to Typefully. Is your API key valid?";

/// Submit `payload` under `social_set_id`.
///
/// An empty `api_key` fails with status 400 before any request is made.
/// Otherwise exactly one request is sent; it is never retried.
pub async fn submit_draft(
    service: &dyn DraftService,
    payload: &DraftPayload,
    api_key: &str,
    social_set_id: &str,
) -> SubmissionResult {
    if api_key.is_empty() {
        return SubmissionResult::failed(400, MSG_API_KEY_CONFIGURATION_REQUIRED);
    }

    debug!("Publishing a Typefully draft");
    let result = match service.create_draft(api_key, social_set_id, payload).await {
        Ok(reply) => classify_reply(&reply, payload),
        Err(e) => classify_transport_error(&e),
    };

    match &result {
        SubmissionResult::Success(d) => debug!(id = %d.id_string(), "Typefully draft created"),
        SubmissionResult::Failure(f) => {
            warn!(status = f.status_code, cause = ?f.cause, "Failed to publish Typefully draft");
        }
    }

    result
}

/// Classify an HTTP reply to a draft request
pub fn classify_reply(reply: &ApiReply, payload: &DraftPayload) -> SubmissionResult {
    match reply.status {
        200 | 201 => SubmissionResult::Success(draft_details(&reply.body, payload)),
        500 => SubmissionResult::Failure(FailureDetails {
            status_code: 500,
            message: MSG_SERVICE_UNAVAILABLE.to_string(),
            cause: raw_cause(&reply.body),
        }),
        status => {
            let message = reply
                .body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .or_else(|| reply.body.get("detail").and_then(Value::as_str))
                .unwrap_or(MSG_FAILED_TO_PUBLISH);

            SubmissionResult::Failure(FailureDetails {
                status_code: status,
                message: message.to_string(),
                cause: raw_cause(&reply.body),
            })
        }
    }
}

/// Classify a request that failed without an HTTP reply
pub fn classify_transport_error(error: &TransportError) -> SubmissionResult {
    // Classified or not, a failure without a status is reported as 0.
    let (status_code, message) = match error.status {
        Some(403) => (403, MSG_FAILED_TO_PUBLISH_POSSIBLE_API_KEY_ISSUE),
        Some(status) => (status, MSG_FAILED_TO_PUBLISH),
        None => (0, MSG_FAILED_TO_PUBLISH),
    };

    SubmissionResult::Failure(FailureDetails {
        status_code,
        message: message.to_string(),
        cause: Some(error.message.clone()),
    })
}

fn draft_details(body: &Value, payload: &DraftPayload) -> DraftDetails {
    DraftDetails {
        id: body.get("id").cloned().unwrap_or(Value::Null),
        status: body.get("status").and_then(Value::as_str).map(String::from),
        post_count: post_count(body, payload),
        scheduled_date: body
            .get("scheduled_date")
            .and_then(Value::as_str)
            .map(String::from),
        private_url: body
            .get("private_url")
            .and_then(Value::as_str)
            .map(String::from),
    }
}

/// Posts on the primary network, else on the first network returned, else 1
fn post_count(body: &Value, payload: &DraftPayload) -> usize {
    let Some(platforms) = body.get("platforms").and_then(Value::as_object) else {
        return 1;
    };

    let count_of = |entry: &Value| {
        entry
            .get("posts")
            .and_then(Value::as_array)
            .map(Vec::len)
    };

    payload
        .primary_network()
        .and_then(|n| platforms.get(n.key()))
        .and_then(count_of)
        .or_else(|| platforms.values().find_map(count_of))
        .unwrap_or(1)
}

fn raw_cause(body: &Value) -> Option<String> {
    match body {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

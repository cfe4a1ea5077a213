//! Social set resolution

use crate::error::{Error, Result};
use crate::platform::DraftService;
use crate::types::SocialSetList;
use tracing::{debug, warn};

/// Social sets could not be listed
pub const MSG_SOCIAL_SETS_FETCH_FAILED: &str =
    "Failed to fetch social sets. Please check your API key.";

/// The account has no social sets
pub const MSG_NO_SOCIAL_SETS: &str = "No social sets found. Please check your Typefully account.";

/// List the social sets reachable with `api_key`.
///
/// Any transport failure, non-2xx status or unreadable body is reported as a
/// [`Error::Resolution`] with [`MSG_SOCIAL_SETS_FETCH_FAILED`].
pub async fn fetch_social_sets(service: &dyn DraftService, api_key: &str) -> Result<SocialSetList> {
    let fetch_failed = || Error::Resolution(MSG_SOCIAL_SETS_FETCH_FAILED.to_string());

    let reply = service.list_social_sets(api_key).await.map_err(|e| {
        warn!(kind = ?e.kind, status = ?e.status, "Social set request failed: {e}");
        fetch_failed()
    })?;

    if !reply.is_success() {
        warn!(status = reply.status, "Social set request rejected");
        return Err(fetch_failed());
    }

    serde_json::from_value(reply.body).map_err(|e| {
        warn!("Unexpected social set response: {e}");
        fetch_failed()
    })
}

/// Determine the social set id to publish under.
///
/// A non-empty `preselected` id is returned as is, without any request.
/// Otherwise the first social set listed by the service is used.
pub async fn resolve_social_set(
    service: &dyn DraftService,
    api_key: &str,
    preselected: &str,
) -> Result<String> {
    if !preselected.is_empty() {
        return Ok(preselected.to_string());
    }

    debug!("No social set configured, fetching available sets");
    let sets = fetch_social_sets(service, api_key).await?;

    let first = sets
        .results
        .first()
        .ok_or_else(|| Error::Resolution(MSG_NO_SOCIAL_SETS.to_string()))?;

    debug!(id = first.id, username = %first.username, "Using first social set");
    Ok(first.id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ApiReply, TransportError};
    use crate::types::DraftPayload;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SetsService {
        reply: std::result::Result<ApiReply, TransportError>,
        calls: AtomicUsize,
    }

    impl SetsService {
        fn replying(status: u16, body: serde_json::Value) -> Self {
            Self {
                reply: Ok(ApiReply { status, body }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: TransportError) -> Self {
            Self {
                reply: Err(error),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DraftService for SetsService {
        async fn list_social_sets(
            &self,
            _api_key: &str,
        ) -> std::result::Result<ApiReply, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }

        async fn create_draft(
            &self,
            _api_key: &str,
            _social_set_id: &str,
            _payload: &DraftPayload,
        ) -> std::result::Result<ApiReply, TransportError> {
            unreachable!("resolution never creates drafts")
        }
    }

    #[tokio::test]
    async fn test_preselected_id_skips_the_network() {
        let service = SetsService::replying(200, json!({ "results": [], "count": 0 }));
        let id = resolve_social_set(&service, "key", "777").await.unwrap();
        assert_eq!(id, "777");
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_first_social_set_is_used() {
        let service = SetsService::replying(
            200,
            json!({
                "results": [
                    { "id": 42, "username": "first", "name": "First" },
                    { "id": 7, "username": "second", "name": "Second" }
                ],
                "count": 2
            }),
        );
        let id = resolve_social_set(&service, "key", "").await.unwrap();
        assert_eq!(id, "42");
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_a_resolution_error() {
        let service = SetsService::replying(200, json!({ "results": [], "count": 0 }));
        let err = resolve_social_set(&service, "key", "").await.unwrap_err();
        assert!(matches!(err, Error::Resolution(ref m) if m == MSG_NO_SOCIAL_SETS));
    }

    #[tokio::test]
    async fn test_rejected_request_is_a_fetch_failure() {
        let service = SetsService::replying(401, json!({ "detail": "Unauthorized" }));
        let err = resolve_social_set(&service, "bad", "").await.unwrap_err();
        assert!(matches!(err, Error::Resolution(ref m) if m == MSG_SOCIAL_SETS_FETCH_FAILED));
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_fetch_failure() {
        let service = SetsService::failing(TransportError::unknown("connection refused"));
        let err = resolve_social_set(&service, "key", "").await.unwrap_err();
        assert!(matches!(err, Error::Resolution(ref m) if m == MSG_SOCIAL_SETS_FETCH_FAILED));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_a_fetch_failure() {
        let service = SetsService::replying(200, json!("<html>oops</html>"));
        let err = fetch_social_sets(&service, "key").await.unwrap_err();
        assert!(matches!(err, Error::Resolution(_)));
    }

    #[tokio::test]
    async fn test_fetch_returns_every_set() {
        let service = SetsService::replying(
            200,
            json!({
                "results": [
                    { "id": 1, "username": "user1", "name": "User One", "profile_image_url": "url1" },
                    { "id": 2, "username": "user2", "name": "User Two", "profile_image_url": "url2" }
                ],
                "count": 2
            }),
        );
        let sets = fetch_social_sets(&service, "key").await.unwrap();
        assert_eq!(sets.count, 2);
        assert_eq!(sets.results[1].username, "user2");
    }
}

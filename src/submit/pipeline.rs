//! End-to-end publish
//!
//! Sanitize, compose, resolve the social set, then submit. Local failures
//! (nothing to publish, no target network, unresolvable social set) are
//! returned as errors before any draft is sent; everything after that point
//! is a [`SubmissionResult`].

use crate::config::Settings;
use crate::content;
use crate::error::Result;
use crate::platform::DraftService;
use crate::submit::compose::{compose_draft, ComposeOptions};
use crate::submit::execute::submit_draft;
use crate::submit::resolve::resolve_social_set;
use crate::submit::{Phase, ProgressCallback};
use crate::types::{DraftPayload, SubmissionResult};
use tracing::{debug, info};

/// Sanitize `content` and compose the draft that `publish` would send.
///
/// Makes no network calls; used directly for dry runs.
pub fn prepare_draft(content: &str, tags: &[String], settings: &Settings) -> Result<DraftPayload> {
    let sanitized = content::sanitize(content);
    compose_draft(&sanitized, tags, &ComposeOptions::from(settings))
}

/// Publish `content` as a draft.
///
/// `settings` is a snapshot: it is read, never written back. When no social
/// set is configured the first one on the account is used, but the choice is
/// not persisted.
pub async fn publish(
    content: &str,
    tags: &[String],
    settings: &Settings,
    service: &dyn DraftService,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionResult> {
    progress.on_phase(Phase::Sanitizing).await;
    let sanitized = content::sanitize(content);

    progress.on_phase(Phase::Composing).await;
    let payload = match compose_draft(&sanitized, tags, &ComposeOptions::from(settings)) {
        Ok(payload) => payload,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };
    progress.on_targets(&payload.networks()).await;
    if settings.append_tags && !tags.is_empty() {
        progress
            .on_message(&format!("Appended tags: {}", tags.join(" ")))
            .await;
    }

    // Without a key there is nothing to resolve; submission reports it.
    let social_set_id = if settings.api_key.is_empty() {
        settings.social_set_id.clone()
    } else {
        progress.on_phase(Phase::ResolvingAccount).await;
        match resolve_social_set(service, &settings.api_key, &settings.social_set_id).await {
            Ok(id) => {
                if settings.social_set_id.is_empty() {
                    progress.on_social_set_resolved(&id).await;
                }
                id
            }
            Err(e) => {
                progress.on_error(&e).await;
                return Err(e);
            }
        }
    };

    progress.on_phase(Phase::Submitting).await;
    debug!(social_set_id = %social_set_id, networks = ?payload.networks(), "Submitting draft");
    let result = submit_draft(service, &payload, &settings.api_key, &social_set_id).await;

    if let Some(details) = result.details() {
        info!(id = %details.id_string(), posts = details.post_count, "Draft created");
    }

    progress.on_phase(Phase::Complete).await;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformToggles;
    use crate::error::Error;
    use crate::submit::NoopProgress;
    use crate::types::Network;

    #[test]
    fn test_prepare_draft_sanitizes_before_composing() {
        let payload = prepare_draft(
            "---\nx: 1\n---\n> Hi [[Note]] and [site](http://e.com)",
            &[],
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(payload.networks(), vec![Network::X]);
        assert_eq!(payload.posts().len(), 1);
        assert_eq!(payload.posts()[0].text, "Hi Note and site");
    }

    #[test]
    fn test_prepare_draft_reports_no_targets() {
        let settings = Settings {
            platforms: PlatformToggles::none(),
            ..Settings::default()
        };
        assert!(matches!(
            prepare_draft("text", &[], &settings),
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_front_matter_only_note_is_rejected() {
        struct Unused;

        #[async_trait::async_trait]
        impl DraftService for Unused {
            async fn list_social_sets(
                &self,
                _api_key: &str,
            ) -> std::result::Result<crate::platform::ApiReply, crate::platform::TransportError>
            {
                unreachable!()
            }

            async fn create_draft(
                &self,
                _api_key: &str,
                _social_set_id: &str,
                _payload: &DraftPayload,
            ) -> std::result::Result<crate::platform::ApiReply, crate::platform::TransportError>
            {
                unreachable!()
            }
        }

        let settings = Settings::default().with_api_key("key");
        let err = publish("---\ntags: [a]\n---\n", &[], &settings, &Unused, &NoopProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}

//! Draft composition
//!
//! Turns sanitized text into the payload sent to the drafting service.

use crate::config::{PlatformToggles, Settings};
use crate::content;
use crate::error::{Error, Result};
use crate::types::{DraftPayload, PlatformDraft, Post, PublishAt};
use tracing::debug;

/// Shown when no target network is enabled
pub const MSG_NO_TARGET_PLATFORM: &str = "Please enable at least one target platform in settings";

/// Shown when there is nothing left to publish
pub const MSG_EMPTY_CONTENT: &str = "Nothing to publish: the content is empty";

/// Options that shape a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Append the tags after the content
    pub append_tags: bool,
    /// Split into a thread
    pub threadify: bool,
    /// Ask for the next free slot
    pub auto_schedule: bool,
    /// Target networks
    pub platforms: PlatformToggles,
}

impl From<&Settings> for ComposeOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            append_tags: settings.append_tags,
            threadify: settings.threadify,
            auto_schedule: settings.auto_schedule,
            platforms: settings.platforms,
        }
    }
}

/// `text`, followed by a blank line and the space-separated tags
pub fn append_tags(text: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        return text.to_string();
    }
    format!("{text}\n\n{}", tags.join(" "))
}

/// Build the draft payload for already sanitized text.
///
/// Every enabled network receives the same posts. Fails before anything is
/// sent when no network is enabled or when no non-blank post remains.
pub fn compose_draft(
    sanitized: &str,
    tags: &[String],
    options: &ComposeOptions,
) -> Result<DraftPayload> {
    let networks = options.platforms.selected();
    if networks.is_empty() {
        return Err(Error::Validation(MSG_NO_TARGET_PLATFORM.to_string()));
    }

    let text = if options.append_tags && !tags.is_empty() {
        debug!(?tags, "Tags to append");
        append_tags(sanitized, tags)
    } else {
        sanitized.to_string()
    };

    let posts: Vec<Post> = content::split(&text, options.threadify)
        .into_iter()
        .map(|text| Post { text })
        .collect();

    if posts.is_empty() || posts.iter().any(|p| p.text.trim().is_empty()) {
        return Err(Error::Validation(MSG_EMPTY_CONTENT.to_string()));
    }

    debug!(posts = posts.len(), "Text to publish: {text}");

    let platform = PlatformDraft {
        enabled: true,
        posts,
    };

    Ok(DraftPayload {
        platforms: networks
            .into_iter()
            .map(|n| (n, platform.clone()))
            .collect(),
        publish_at: options.auto_schedule.then_some(PublishAt::NextFreeSlot),
    })
}

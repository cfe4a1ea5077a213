//! Core types for notedraft
//!
//! Wire shapes follow the Typefully v2 drafts API. Only the fields the
//! pipeline reads or writes are modelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Reference to a note in the document store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    /// Path of the note
    pub path: PathBuf,
    /// File name including extension
    pub name: String,
    /// Extension without the leading dot (empty if none)
    pub extension: String,
}

impl Document {
    /// Build a document reference from a path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// A target social network supported by the drafting service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// X (Twitter)
    X,
    /// `LinkedIn`
    Linkedin,
    /// Threads
    Threads,
    /// Bluesky
    Bluesky,
    /// Mastodon
    Mastodon,
}

impl Network {
    /// All networks in canonical order
    pub const ALL: [Self; 5] = [
        Self::X,
        Self::Linkedin,
        Self::Threads,
        Self::Bluesky,
        Self::Mastodon,
    ];

    /// Wire key used in the `platforms` map
    pub const fn key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Linkedin => "linkedin",
            Self::Threads => "threads",
            Self::Bluesky => "bluesky",
            Self::Mastodon => "mastodon",
        }
    }

    /// Human-readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::X => "X (Twitter)",
            Self::Linkedin => "LinkedIn",
            Self::Threads => "Threads",
            Self::Bluesky => "Bluesky",
            Self::Mastodon => "Mastodon",
        }
    }

    /// Parse a wire key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Plain text of the post
    pub text: String,
}

/// Per-network section of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDraft {
    /// Always true for networks present in the payload
    pub enabled: bool,
    /// Ordered posts (more than one makes a thread)
    pub posts: Vec<Post>,
}

/// When the service should publish the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishAt {
    /// Publish immediately
    #[serde(rename = "now")]
    Now,
    /// Queue in the account's next free slot
    #[serde(rename = "next-free-slot")]
    NextFreeSlot,
}

/// Body of `POST /social-sets/{id}/drafts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPayload {
    /// Target networks, keyed by network
    pub platforms: BTreeMap<Network, PlatformDraft>,
    /// Scheduling directive; absent saves an unscheduled draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<PublishAt>,
}

impl DraftPayload {
    /// Networks present in the payload, in canonical order
    pub fn networks(&self) -> Vec<Network> {
        self.platforms.keys().copied().collect()
    }

    /// The network whose post count is reported back on success
    pub fn primary_network(&self) -> Option<Network> {
        self.platforms.keys().next().copied()
    }

    /// Posts of the primary network
    pub fn posts(&self) -> &[Post] {
        self.platforms
            .values()
            .next()
            .map_or(&[], |p| p.posts.as_slice())
    }
}

/// A remote account ("social set")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSet {
    /// Numeric identifier
    pub id: u64,
    /// Account handle
    #[serde(default)]
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Avatar URL
    #[serde(default)]
    pub profile_image_url: String,
}

/// Response of `GET /social-sets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSetList {
    /// Accounts in service order
    #[serde(default)]
    pub results: Vec<SocialSet>,
    /// Total number of accounts
    #[serde(default)]
    pub count: u64,
}

/// Details of a created draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDetails {
    /// Remote draft id
    pub id: serde_json::Value,
    /// Lifecycle status reported by the service (e.g. "draft", "scheduled")
    pub status: Option<String>,
    /// Number of posts on the primary network
    pub post_count: usize,
    /// Raw scheduled timestamp, when the draft was scheduled
    pub scheduled_date: Option<String>,
    /// Shareable draft URL
    pub private_url: Option<String>,
}

impl DraftDetails {
    /// Scheduled timestamp parsed as RFC 3339
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
    }

    /// Remote id rendered without JSON quoting
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Details of a failed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetails {
    /// HTTP status code, or 0 when no HTTP status is known
    pub status_code: u16,
    /// Human-readable message
    pub message: String,
    /// Underlying cause, when one was reported
    pub cause: Option<String>,
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Draft created
    Success(DraftDetails),
    /// Draft not created
    Failure(FailureDetails),
}

impl SubmissionResult {
    /// Whether a draft was created
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Success details, if any
    pub const fn details(&self) -> Option<&DraftDetails> {
        match self {
            Self::Success(d) => Some(d),
            Self::Failure(_) => None,
        }
    }

    /// Failure details, if any
    pub const fn failure(&self) -> Option<&FailureDetails> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f),
        }
    }

    pub(crate) fn failed(status_code: u16, message: impl Into<String>) -> Self {
        Self::Failure(FailureDetails {
            status_code,
            message: message.into(),
            cause: None,
        })
    }
}

//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different front ends (CLI, editor integration, ...) to
//! receive progress updates while a note is being published.

use crate::error::Error;
use crate::types::Network;
use async_trait::async_trait;
use std::fmt;

/// Publish phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cleaning up the markdown
    Sanitizing,
    /// Building the draft payload
    Composing,
    /// Looking up the social set to publish under
    ResolvingAccount,
    /// Sending the draft
    Submitting,
    /// Publish attempt finished
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sanitizing => "Cleaning up content",
            Self::Composing => "Composing draft",
            Self::ResolvingAccount => "Resolving social set",
            Self::Submitting => "Submitting draft",
            Self::Complete => "Done",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a publish.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the target networks are known
    async fn on_targets(&self, networks: &[Network]);

    /// Called when the social set was looked up remotely
    async fn on_social_set_resolved(&self, social_set_id: &str);

    /// Called when the attempt stops on an error
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_targets(&self, _networks: &[Network]) {}
    async fn on_social_set_resolved(&self, _social_set_id: &str) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

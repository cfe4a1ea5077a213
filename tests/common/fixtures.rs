//! Test data factories for notedraft types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use notedraft::config::{PlatformToggles, Settings};
use notedraft::error::Error;
use notedraft::submit::{Phase, ProgressCallback};
use notedraft::types::{Network, SocialSet};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Settings with an API key and a preselected social set
pub fn make_settings() -> Settings {
    Settings::default()
        .with_api_key("test-api-key")
        .with_social_set_id("123")
}

/// Settings that resolve the social set remotely
pub fn make_settings_unresolved() -> Settings {
    Settings::default().with_api_key("test-api-key")
}

/// Settings targeting exactly `networks`
pub fn make_settings_for(networks: &[Network]) -> Settings {
    let platforms = Network::ALL
        .into_iter()
        .fold(PlatformToggles::none(), |toggles, n| {
            toggles.with(n, networks.contains(&n))
        });
    Settings {
        platforms,
        ..make_settings()
    }
}

/// A social set with derived names
pub fn make_social_set(id: u64) -> SocialSet {
    SocialSet {
        id,
        username: format!("user{id}"),
        name: format!("User {id}"),
        profile_image_url: format!("https://example.com/{id}.png"),
    }
}

/// `GET /social-sets` body for the given ids
pub fn social_sets_body(ids: &[u64]) -> Value {
    let results: Vec<SocialSet> = ids.iter().copied().map(make_social_set).collect();
    json!({ "results": results, "count": ids.len() })
}

/// Draft creation body with `posts` posts on `network`
pub fn draft_body(id: u64, network: Network, posts: usize) -> Value {
    let posts: Vec<Value> = (0..posts).map(|i| json!({ "text": format!("post {i}") })).collect();
    let mut platforms = serde_json::Map::new();
    platforms.insert(network.key().to_string(), json!({ "posts": posts }));

    json!({
        "id": id,
        "status": "draft",
        "platforms": platforms,
        "scheduled_date": null,
        "private_url": format!("https://typefully.com/?d={id}")
    })
}

/// Event seen by [`RecordingProgress`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Phase(Phase),
    Targets(Vec<Network>),
    Resolved(String),
    Error(String),
    Message(String),
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Phase(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.push(ProgressEvent::Phase(phase));
    }

    async fn on_targets(&self, networks: &[Network]) {
        self.push(ProgressEvent::Targets(networks.to_vec()));
    }

    async fn on_social_set_resolved(&self, social_set_id: &str) {
        self.push(ProgressEvent::Resolved(social_set_id.to_string()));
    }

    async fn on_error(&self, error: &Error) {
        self.push(ProgressEvent::Error(error.to_string()));
    }

    async fn on_message(&self, message: &str) {
        self.push(ProgressEvent::Message(message.to_string()));
    }
}

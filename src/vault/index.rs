//! Tag index built from note contents
//!
//! Tags come from two places, in this order: the `tags` (or `tag`) key of the
//! front matter, then inline `#tags` in the body. Every tag is reported with a
//! leading `#`.

use crate::content::{remove_front_matter, MetadataIndex};
use crate::error::Result;
use crate::types::Document;
use crate::vault::DocumentStore;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

fn front_matter_body_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ms)\A---\r?\n(.*?)^---\r?$").expect("hardcoded front matter pattern is valid")
    })
}

/// `#tag` at the start of a line or after whitespace. Nested tags use `/`.
fn inline_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)(?:^|\s)#([\p{L}\p{N}_/-]+)").expect("hardcoded inline tag pattern is valid")
    })
}

/// In-memory [`MetadataIndex`] keyed by document path
#[derive(Debug, Clone, Default)]
pub struct FrontMatterIndex {
    entries: HashMap<PathBuf, Vec<String>>,
}

impl FrontMatterIndex {
    /// Empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `documents`, reading each one from `store`
    pub async fn scan(store: &dyn DocumentStore, documents: &[Document]) -> Result<Self> {
        let mut index = Self::new();
        for document in documents {
            let content = store.read(document).await?;
            index.record(document, &content);
        }
        Ok(index)
    }

    /// Index `document` with the given content, replacing any previous entry
    pub fn record(&mut self, document: &Document, content: &str) {
        let tags = extract_tags(content);
        debug!(path = %document.path.display(), ?tags, "Indexed document");
        self.entries.insert(document.path.clone(), tags);
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no document is indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataIndex for FrontMatterIndex {
    fn tags_for(&self, document: &Document) -> Option<Vec<String>> {
        self.entries.get(&document.path).cloned()
    }
}

/// All tags of a note, front matter first, duplicates kept
pub fn extract_tags(content: &str) -> Vec<String> {
    let mut tags = front_matter_tags(content);

    let body = remove_front_matter(content);
    tags.extend(
        inline_tag_regex()
            .captures_iter(&body)
            .map(|c| c[1].trim_end_matches('/').to_string())
            .filter(|t| !t.is_empty() && !t.chars().all(|c| c.is_ascii_digit()))
            .map(|t| format!("#{t}")),
    );

    tags
}

fn front_matter_tags(content: &str) -> Vec<String> {
    let Some(raw) = front_matter_body_regex()
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    else {
        return Vec::new();
    };

    let yaml: serde_yaml::Value = match serde_yaml::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring unreadable front matter: {e}");
            return Vec::new();
        }
    };

    let Some(value) = yaml.get("tags").or_else(|| yaml.get("tag")) else {
        return Vec::new();
    };

    let names: Vec<String> = match value {
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .filter_map(|item| match item {
                serde_yaml::Value::String(s) => Some(s.clone()),
                serde_yaml::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        serde_yaml::Value::String(s) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    };

    names
        .iter()
        .map(|name| name.trim().trim_start_matches('#'))
        .filter(|name| !name.is_empty())
        .map(|name| format!("#{name}"))
        .collect()
}

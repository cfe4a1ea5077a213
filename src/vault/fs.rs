//! Filesystem document store

use crate::error::Result;
use crate::types::Document;
use crate::vault::DocumentStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads notes from disk, optionally relative to a vault root
#[derive(Debug, Clone, Default)]
pub struct FsDocumentStore {
    root: Option<PathBuf>,
}

impl FsDocumentStore {
    /// Store resolving paths as given
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Store resolving relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn read(&self, document: &Document) -> Result<String> {
        let path = self.resolve(&document.path);
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

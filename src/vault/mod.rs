//! Note vault adapter
//!
//! Connects stored notes to the publish pipeline: reading documents,
//! deciding whether they can be published and looking up their tags.

mod eligibility;
mod fs;
mod index;

pub use eligibility::{
    check_content, check_document, check_publishable, is_publishable, ExcalidrawDetector,
    NoSpecialFiles, SpecialFileDetector, DEFAULT_CANVAS_FILE_NAME, MARKDOWN_FILE_EXTENSION,
    MSG_CANNOT_BE_PUBLISHED,
};
pub use fs::FsDocumentStore;
pub use index::{extract_tags, FrontMatterIndex};

use crate::config::Settings;
use crate::content::{collect_tags, EmptyIndex, MetadataIndex};
use crate::error::Result;
use crate::platform::DraftService;
use crate::submit::{self, ProgressCallback};
use crate::types::{Document, DraftPayload, SubmissionResult};
use async_trait::async_trait;
use tracing::debug;

/// Source of note contents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Full text of `document`
    async fn read(&self, document: &Document) -> Result<String>;
}

/// A document store together with its tag index and special-file detector
pub struct Vault {
    store: Box<dyn DocumentStore>,
    index: Box<dyn MetadataIndex>,
    detector: Box<dyn SpecialFileDetector>,
}

impl Vault {
    /// Vault without tags or special files
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            index: Box::new(EmptyIndex),
            detector: Box::new(NoSpecialFiles),
        }
    }

    /// Use `index` for tag lookups
    #[must_use]
    pub fn with_index(mut self, index: impl MetadataIndex + 'static) -> Self {
        self.index = Box::new(index);
        self
    }

    /// Use `detector` to exclude special files
    #[must_use]
    pub fn with_detector(mut self, detector: impl SpecialFileDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Deduplicated tags of `document`
    pub fn tags(&self, document: Option<&Document>) -> Vec<String> {
        collect_tags(document, self.index.as_ref())
    }

    /// Read `document`, failing with [`crate::error::Error::NotEligible`]
    /// when it cannot be published.
    ///
    /// Files that are not notes are rejected before they are read.
    pub async fn read_publishable(&self, document: &Document) -> Result<String> {
        check_document(document)?;
        let content = self.store.read(document).await?;
        check_content(document, &content, self.detector.as_ref())?;
        Ok(content)
    }

    /// Draft that publishing `document` would send, without sending it
    pub async fn prepare_document(
        &self,
        document: &Document,
        settings: &Settings,
    ) -> Result<DraftPayload> {
        let content = self.read_publishable(document).await?;
        submit::prepare_draft(&content, &self.tags(Some(document)), settings)
    }

    /// Publish a whole note
    pub async fn publish_document(
        &self,
        document: &Document,
        settings: &Settings,
        service: &dyn DraftService,
        progress: &dyn ProgressCallback,
    ) -> Result<SubmissionResult> {
        let content = self.read_publishable(document).await?;
        let tags = self.tags(Some(document));
        debug!(path = %document.path.display(), tags = tags.len(), "Publishing note");

        submit::publish(&content, &tags, settings, service, progress).await
    }

    /// Publish an excerpt, tagged with the tags of the note it came from.
    ///
    /// The excerpt is not checked for eligibility; an empty one fails to
    /// compose.
    pub async fn publish_selection(
        &self,
        selection: &str,
        source: Option<&Document>,
        settings: &Settings,
        service: &dyn DraftService,
        progress: &dyn ProgressCallback,
    ) -> Result<SubmissionResult> {
        let tags = self.tags(source);
        submit::publish(selection, &tags, settings, service, progress).await
    }
}

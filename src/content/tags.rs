//! Tag collection

use crate::types::Document;
use std::collections::HashSet;

/// Source of tags for documents
///
/// Implementations return the tags exactly as the metadata system stores them
/// (including any `#` prefix). `None` means the document is not indexed.
pub trait MetadataIndex: Send + Sync {
    /// Tags of `document`, if it is indexed
    fn tags_for(&self, document: &Document) -> Option<Vec<String>>;
}

/// Index that knows no documents
pub struct EmptyIndex;

impl MetadataIndex for EmptyIndex {
    fn tags_for(&self, _document: &Document) -> Option<Vec<String>> {
        None
    }
}

/// Collect the deduplicated tags of `document`.
///
/// Never fails: an absent document, an unindexed document or a document
/// without tags all give an empty list. First occurrence order is kept.
pub fn collect_tags(document: Option<&Document>, index: &dyn MetadataIndex) -> Vec<String> {
    let Some(document) = document else {
        return Vec::new();
    };

    let Some(tags) = index.tags_for(document) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIndex(Option<Vec<String>>);

    impl MetadataIndex for FixedIndex {
        fn tags_for(&self, _document: &Document) -> Option<Vec<String>> {
            self.0.clone()
        }
    }

    fn tags(list: &[&str]) -> Option<Vec<String>> {
        Some(list.iter().map(ToString::to_string).collect())
    }

    fn doc() -> Document {
        Document::from_path("test.md")
    }

    #[test]
    fn test_absent_document_gives_no_tags() {
        let index = FixedIndex(tags(&["#a"]));
        assert!(collect_tags(None, &index).is_empty());
    }

    #[test]
    fn test_unindexed_document_gives_no_tags() {
        assert!(collect_tags(Some(&doc()), &EmptyIndex).is_empty());
    }

    #[test]
    fn test_empty_tag_list() {
        let index = FixedIndex(Some(vec![]));
        assert!(collect_tags(Some(&doc()), &index).is_empty());
    }

    #[test]
    fn test_duplicates_removed_in_first_seen_order() {
        let index = FixedIndex(tags(&["#tag1", "#tag2", "#tag1", "#tag2", "#tag3"]));
        assert_eq!(
            collect_tags(Some(&doc()), &index),
            vec!["#tag1", "#tag2", "#tag3"]
        );
    }

    #[test]
    fn test_prefix_preserved() {
        let index = FixedIndex(tags(&["#javascript", "typescript"]));
        assert_eq!(
            collect_tags(Some(&doc()), &index),
            vec!["#javascript", "typescript"]
        );
    }
}

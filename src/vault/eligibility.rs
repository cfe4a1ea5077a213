//! Which notes can be published

use crate::error::{Error, Result};
use crate::types::Document;

/// Only markdown notes are published
pub const MARKDOWN_FILE_EXTENSION: &str = "md";

/// Name of the default canvas file
pub const DEFAULT_CANVAS_FILE_NAME: &str = "Canvas.md";

/// Shown when a note is not eligible
pub const MSG_CANNOT_BE_PUBLISHED: &str = "The file cannot be published to Typefully";

/// Recognizes markdown files that hold something other than prose
pub trait SpecialFileDetector: Send + Sync {
    /// Whether `document` is a special file that must not be published
    fn is_special_file(&self, document: &Document, content: &str) -> bool;
}

/// Treats no file as special
pub struct NoSpecialFiles;

impl SpecialFileDetector for NoSpecialFiles {
    fn is_special_file(&self, _document: &Document, _content: &str) -> bool {
        false
    }
}

/// Detects Excalidraw drawings stored as markdown
pub struct ExcalidrawDetector;

impl SpecialFileDetector for ExcalidrawDetector {
    fn is_special_file(&self, document: &Document, content: &str) -> bool {
        document.name.ends_with(".excalidraw.md")
            || front_matter_lines(content)
                .any(|line| line.trim_start().starts_with("excalidraw-plugin:"))
    }
}

/// Lines between the opening and closing `---` of a leading front-matter
/// block. Empty when the note has no front matter.
fn front_matter_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut lines = content.lines();
    let opened = lines.next().is_some_and(|first| first.trim_end() == "---");
    lines.take_while(move |line| opened && line.trim_end() != "---")
}

fn not_eligible(reason: &str) -> Error {
    Error::NotEligible(format!("{MSG_CANNOT_BE_PUBLISHED}: {reason}"))
}

/// Check what can be known about `document` without reading it: path,
/// extension and file name.
pub fn check_document(document: &Document) -> Result<()> {
    let reason = if document.path.as_os_str().is_empty() {
        "no file path"
    } else if document.extension != MARKDOWN_FILE_EXTENSION {
        "not a markdown file"
    } else if document.name == DEFAULT_CANVAS_FILE_NAME {
        "canvas files are not notes"
    } else {
        return Ok(());
    };

    Err(not_eligible(reason))
}

/// Check the contents of a document that passed [`check_document`]
pub fn check_content(
    document: &Document,
    content: &str,
    detector: &dyn SpecialFileDetector,
) -> Result<()> {
    if content.trim().is_empty() {
        Err(not_eligible("the note is empty"))
    } else if detector.is_special_file(document, content) {
        Err(not_eligible("drawings are not notes"))
    } else {
        Ok(())
    }
}

/// Check that `document`, with the given content, can be published.
///
/// The reason is returned in an [`Error::NotEligible`].
pub fn check_publishable(
    document: &Document,
    content: &str,
    detector: &dyn SpecialFileDetector,
) -> Result<()> {
    check_document(document)?;
    check_content(document, content, detector)
}

/// Whether `document` can be published
pub fn is_publishable(
    document: &Document,
    content: &str,
    detector: &dyn SpecialFileDetector,
) -> bool {
    check_publishable(document, content, detector).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_note_is_publishable() {
        let doc = Document::from_path("notes/idea.md");
        assert!(is_publishable(&doc, "Some idea", &NoSpecialFiles));
    }

    #[test]
    fn test_other_extensions_are_rejected() {
        let doc = Document::from_path("notes/board.canvas");
        assert!(!is_publishable(&doc, "{}", &NoSpecialFiles));
    }

    #[test]
    fn test_default_canvas_is_rejected() {
        let doc = Document::from_path("Canvas.md");
        assert!(!is_publishable(&doc, "content", &NoSpecialFiles));
    }

    #[test]
    fn test_blank_note_is_rejected() {
        let doc = Document::from_path("empty.md");
        let err = check_publishable(&doc, " \n\t", &NoSpecialFiles).unwrap_err();
        assert!(matches!(err, Error::NotEligible(ref m) if m.starts_with(MSG_CANNOT_BE_PUBLISHED)));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let doc = Document::from_path("");
        assert!(!is_publishable(&doc, "content", &NoSpecialFiles));
    }

    #[test]
    fn test_excalidraw_drawings_are_rejected() {
        let by_name = Document::from_path("drawing.excalidraw.md");
        assert!(!is_publishable(&by_name, "content", &ExcalidrawDetector));

        let by_front_matter = Document::from_path("sketch.md");
        let content = "---\nexcalidraw-plugin: parsed\n---\n# Drawing";
        assert!(!is_publishable(&by_front_matter, content, &ExcalidrawDetector));

        let note = Document::from_path("note.md");
        assert!(is_publishable(&note, "Just text", &ExcalidrawDetector));
    }

    #[test]
    fn test_excalidraw_key_outside_front_matter_is_prose() {
        let doc = Document::from_path("notes.md");
        let content = "How to set it up:
excalidraw-plugin: parsed

That's all.";
        assert!(is_publishable(&doc, content, &ExcalidrawDetector));

        let after_front_matter = "---
title: Setup
---
excalidraw-plugin: parsed";
        assert!(is_publishable(&doc, after_front_matter, &ExcalidrawDetector));
    }

    #[test]
    fn test_document_check_needs_no_content() {
        assert!(check_document(&Document::from_path("idea.md")).is_ok());

        let err = check_document(&Document::from_path("photo.png")).unwrap_err();
        assert!(matches!(err, Error::NotEligible(ref m) if m.contains("not a markdown file")));
    }
}

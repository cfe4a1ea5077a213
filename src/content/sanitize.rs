//! Markdown cleanup for plain-text posts

use regex::Regex;
use std::sync::OnceLock;

/// Leading YAML block: `---` on the first line up to the next `---` line.
fn front_matter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ms)\A---\r?\n.*?^---\r?\n").expect("hardcoded front matter pattern is valid")
    })
}

/// `[text](url)`, non-greedy on both parts, single line.
fn markdown_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[(.*?)\]\(.*?\)").expect("hardcoded markdown link pattern is valid")
    })
}

/// Remove the front matter block at the start of `text`, if any.
///
/// Only the first block is removed; later `---` regions are left alone.
pub fn remove_front_matter(text: &str) -> String {
    front_matter_regex().replace(text, "").into_owned()
}

/// Replace every `[text](url)` with `text`.
pub fn remove_markdown_links(text: &str) -> String {
    markdown_link_regex().replace_all(text, "${1}").into_owned()
}

/// Turn a note into plain post text.
///
/// Steps, each applied to the previous output:
/// 1. strip the leading front matter block
/// 2. trim surrounding whitespace
/// 3. drop every `[[` and `]]` (the link target and any `|alias` stay)
/// 4. drop every `"> "`, wherever it appears
/// 5. reduce `[text](url)` to `text`
pub fn sanitize(text: &str) -> String {
    let without_front_matter = remove_front_matter(text);

    let cleaned = without_front_matter
        .trim()
        .replace("[[", "")
        .replace("]]", "")
        .replace("> ", "");

    remove_markdown_links(&cleaned)
}

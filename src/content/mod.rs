//! Content transformation
//!
//! Pure text processing between a raw note and post bodies:
//! sanitizing markdown, collecting tags and splitting threads.

mod sanitize;
mod tags;
mod thread;

pub use sanitize::{remove_front_matter, remove_markdown_links, sanitize};
pub use tags::{collect_tags, EmptyIndex, MetadataIndex};
pub use thread::{split, THREAD_DELIMITER};

//! notedraft - publish markdown notes as Typefully drafts
//!
//! A note goes through a small pipeline before it reaches Typefully:
//! front matter and markdown syntax are stripped, tags are optionally
//! appended, the text is optionally split into a thread, and the resulting
//! draft is posted to every enabled network of a social set.
//!
//! The pipeline itself is pure and transport-agnostic; the network sits
//! behind [`platform::DraftService`] and notes behind
//! [`vault::DocumentStore`].

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod platform;
pub mod submit;
pub mod types;
pub mod vault;

pub use error::{Error, Result};

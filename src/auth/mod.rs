//! Authentication for the Typefully API
//!
//! Supports environment variables and the stored settings.

mod typefully;

pub use typefully::{get_api_key, test_api_key, ApiKeyConfig, API_KEY_ENV};

/// Source of the API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Key from environment variable
    EnvVar,
    /// Key from the settings file
    Config,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar => write!(f, "environment ({API_KEY_ENV})"),
            Self::Config => f.write_str("settings file"),
        }
    }
}

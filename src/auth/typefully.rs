//! Typefully API key discovery

use crate::auth::AuthSource;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::platform::DraftService;
use crate::submit::{fetch_social_sets, MSG_API_KEY_CONFIGURATION_REQUIRED};
use crate::types::SocialSetList;
use std::env;

/// Environment variable holding an API key
pub const API_KEY_ENV: &str = "TYPEFULLY_API_KEY";

/// Typefully authentication configuration
#[derive(Clone)]
pub struct ApiKeyConfig {
    /// API key
    pub api_key: String,
    /// Where the key was obtained from
    pub source: AuthSource,
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("api_key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Get the Typefully API key
///
/// Priority:
/// 1. `TYPEFULLY_API_KEY` environment variable
/// 2. `api_key` in the settings
pub fn get_api_key(settings: &Settings) -> Result<ApiKeyConfig> {
    select_api_key(env::var(API_KEY_ENV).ok(), settings)
}

fn select_api_key(from_env: Option<String>, settings: &Settings) -> Result<ApiKeyConfig> {
    if let Some(api_key) = from_env.map(|k| k.trim().to_string()) {
        if !api_key.is_empty() {
            return Ok(ApiKeyConfig {
                api_key,
                source: AuthSource::EnvVar,
            });
        }
    }

    if !settings.api_key.is_empty() {
        return Ok(ApiKeyConfig {
            api_key: settings.api_key.clone(),
            source: AuthSource::Config,
        });
    }

    Err(Error::Auth(MSG_API_KEY_CONFIGURATION_REQUIRED.to_string()))
}

/// Test an API key by listing the social sets it can reach
pub async fn test_api_key(service: &dyn DraftService, config: &ApiKeyConfig) -> Result<SocialSetList> {
    fetch_social_sets(service, &config.api_key)
        .await
        .map_err(|e| Error::Auth(format!("Invalid API key: {e}")))
}

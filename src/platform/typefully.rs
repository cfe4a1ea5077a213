//! Typefully v2 service implementation

use crate::error::{Error, Result};
use crate::platform::{ApiReply, DraftService, TransportError};
use crate::types::DraftPayload;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::env;
use tracing::debug;

/// Production API root
pub const DEFAULT_API_URL: &str = "https://api.typefully.com/v2";

/// Environment variable overriding the API root
pub const API_URL_ENV: &str = "TYPEFULLY_API_URL";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API root from `TYPEFULLY_API_URL`, or the production URL
pub fn api_base_url() -> String {
    env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Typefully service using reqwest
pub struct TypefullyService {
    client: Client,
    base_url: String,
}

impl TypefullyService {
    /// Create a service for the given API root
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid API URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "invalid API URL '{base_url}': expected http or https"
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a service for [`api_base_url`]
    pub fn from_env() -> Result<Self> {
        Self::new(&api_base_url())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read a reply body as JSON, keeping the status whatever the content
async fn into_reply(response: Response) -> std::result::Result<ApiReply, TransportError> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    let body = if text.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
    };

    Ok(ApiReply { status, body })
}

#[async_trait]
impl DraftService for TypefullyService {
    async fn list_social_sets(&self, api_key: &str) -> std::result::Result<ApiReply, TransportError> {
        let url = self.api_url("/social-sets");
        debug!("Fetching social sets");

        let response = self.client.get(&url).bearer_auth(api_key).send().await?;

        into_reply(response).await
    }

    async fn create_draft(
        &self,
        api_key: &str,
        social_set_id: &str,
        payload: &DraftPayload,
    ) -> std::result::Result<ApiReply, TransportError> {
        let url = self.api_url(&format!(
            "/social-sets/{}/drafts",
            urlencoding::encode(social_set_id)
        ));
        debug!(social_set_id, "Publishing a Typefully draft");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await?;

        into_reply(response).await
    }
}

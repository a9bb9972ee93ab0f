//! Transport seam for GraphQL queries

use crate::config::{FarmlyConfig, SpaceConfig};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::ContentMode;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

/// Something that can answer a GraphQL query
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Execute one query document against the given branch and return the
    /// response body
    async fn execute(&self, query: &str, mode: ContentMode) -> Result<Value>;
}

/// [`ContentSource`] backed by the remote GraphQL endpoint
///
/// Construction never fails on missing credentials; each request resolves
/// the token for its mode and reports what is missing.
#[derive(Debug)]
pub struct GraphQlSource {
    client: HttpClient,
    space: SpaceConfig,
}

impl GraphQlSource {
    /// Build a source from configuration
    pub fn new(config: &FarmlyConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http.to_client_config())?;
        Ok(Self::with_client(client, config.space.clone()))
    }

    /// Build a source around an existing client
    pub fn with_client(client: HttpClient, space: SpaceConfig) -> Self {
        Self { client, space }
    }

    /// Space settings in use
    pub fn space(&self) -> &SpaceConfig {
        &self.space
    }
}

#[async_trait]
impl ContentSource for GraphQlSource {
    async fn execute(&self, query: &str, mode: ContentMode) -> Result<Value> {
        let token = self.space.token(mode)?;
        let url = self.space.endpoint_url()?;

        debug!(%mode, endpoint = %url, "Executing GraphQL query");

        let request = RequestConfig::new()
            .bearer(token)
            .json(json!({ "query": query }));

        self.client.post_json(url.as_str(), request).await
    }
}

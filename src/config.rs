//! Configuration for the content gateway
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables. Nothing here fails on missing credentials: an
//! absent space id or token is reported by the fetch that needs it.

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, ContentMode, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default GraphQL endpoint; the space id is appended as the last segment
pub const DEFAULT_ENDPOINT: &str = "https://graphql.contentful.com/content/v1/spaces";

/// Default collection queried for articles
pub const DEFAULT_COLLECTION: &str = "bookReaderCollection";

/// Environment variable holding the space identifier
pub const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";
/// Environment variable holding the preview (draft) token
pub const ENV_PREVIEW_TOKEN: &str = "CONTENTFUL_PREVIEW_ACCESS_TOKEN";
/// Environment variable holding the production (published) token
pub const ENV_PRODUCTION_TOKEN: &str = "CONTENTFUL_ACCESS_TOKEN";
/// Environment variable overriding the GraphQL endpoint
pub const ENV_ENDPOINT: &str = "FARMLY_GRAPHQL_ENDPOINT";

/// Prefix of the variable names the browser build used
const LEGACY_PREFIX: &str = "NEXT_PUBLIC_";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmlyConfig {
    /// Content space and credentials
    #[serde(default)]
    pub space: SpaceConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Query sizes
    #[serde(default)]
    pub content: ContentConfig,

    /// Pager defaults
    #[serde(default)]
    pub pagination: PaginationDefaults,
}

impl FarmlyConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Load the file (if any), then apply the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env())
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Each value is read from its primary name first, then from the
    /// `NEXT_PUBLIC_` prefixed name. Empty values are ignored.
    #[must_use]
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .none_if_empty()
                .or_else(|| lookup(&format!("{LEGACY_PREFIX}{key}")).none_if_empty())
        };

        if let Some(space_id) = read(ENV_SPACE_ID) {
            self.space.space_id = Some(space_id);
        }
        if let Some(token) = read(ENV_PREVIEW_TOKEN) {
            self.space.preview_token = Some(token);
        }
        if let Some(token) = read(ENV_PRODUCTION_TOKEN) {
            self.space.production_token = Some(token);
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).none_if_empty() {
            self.space.endpoint = endpoint;
        }
        self
    }

    /// Check values that can be checked without credentials
    pub fn validate(&self) -> Result<()> {
        if self.space.collection.trim().is_empty() {
            return Err(Error::invalid_value(
                "space.collection",
                "collection name cannot be empty",
            ));
        }
        Url::parse(&self.space.endpoint)
            .map_err(|e| Error::invalid_value("space.endpoint", e.to_string()))?;
        if self.pagination.page_size == 0 {
            return Err(Error::invalid_value(
                "pagination.page_size",
                "page size must be at least 1",
            ));
        }
        if self.pagination.sidebar_page_size == 0 {
            return Err(Error::invalid_value(
                "pagination.sidebar_page_size",
                "page size must be at least 1",
            ));
        }
        if self.pagination.page_size_options.is_empty() {
            return Err(Error::invalid_value(
                "pagination.page_size_options",
                "at least one page size option is required",
            ));
        }
        if self.pagination.page_size_options.contains(&0) {
            return Err(Error::invalid_value(
                "pagination.page_size_options",
                "page size options must be at least 1",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Space Config
// ============================================================================

/// Content space selection and credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Space identifier
    #[serde(default)]
    pub space_id: Option<String>,

    /// Token for the draft branch
    #[serde(default)]
    pub preview_token: Option<String>,

    /// Token for the published branch
    #[serde(default)]
    pub production_token: Option<String>,

    /// GraphQL endpoint without the space segment
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Collection holding the articles
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            preview_token: None,
            production_token: None,
            endpoint: default_endpoint(),
            collection: default_collection(),
        }
    }
}

impl SpaceConfig {
    /// Token for the given mode
    pub fn token(&self, mode: ContentMode) -> Result<&str> {
        let (token, field) = match mode {
            ContentMode::Preview => (&self.preview_token, "space.preview_token"),
            ContentMode::Published => (&self.production_token, "space.production_token"),
        };
        token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::missing_field(field))
    }

    /// Full endpoint URL for the configured space
    pub fn endpoint_url(&self) -> Result<Url> {
        let space_id = self
            .space_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::missing_field("space.space_id"))?;

        let mut url = Url::parse(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|()| Error::invalid_value("space.endpoint", "URL cannot have a path"))?
            .pop_if_empty()
            .push(space_id);
        Ok(url)
    }
}

impl std::fmt::Debug for SpaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |token: &Option<String>| token.as_ref().map(|_| "<redacted>");
        f.debug_struct("SpaceConfig")
            .field("space_id", &self.space_id)
            .field("preview_token", &redact(&self.preview_token))
            .field("production_token", &redact(&self.production_token))
            .field("endpoint", &self.endpoint)
            .field("collection", &self.collection)
            .finish()
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Retries for reads
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy
    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff in milliseconds
    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,

    /// Backoff ceiling in milliseconds
    #[serde(default = "default_max_backoff")]
    pub max_backoff_ms: u64,

    /// Client-side rate limit; `None` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}

fn default_initial_backoff() -> u64 {
    100
}

fn default_max_backoff() -> u64 {
    30_000
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff(),
            max_backoff_ms: default_max_backoff(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl HttpConfig {
    /// Build the client configuration
    pub fn to_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            );
        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        builder.build()
    }
}

// ============================================================================
// Content Config
// ============================================================================

/// Sizes of the article queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Items requested for the homepage list
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,

    /// Related articles shown under an article
    #[serde(default = "default_related_limit")]
    pub related_limit: u32,
}

fn default_recent_limit() -> u32 {
    10
}

fn default_related_limit() -> u32 {
    4
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            related_limit: default_related_limit(),
        }
    }
}

// ============================================================================
// Pagination Defaults
// ============================================================================

/// Pager defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    /// Items per page in the main feed
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Items per page in the sidebar "popular articles" list
    #[serde(default = "default_sidebar_page_size")]
    pub sidebar_page_size: usize,

    /// Choices offered by a page-size selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    15
}

fn default_sidebar_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    crate::pagination::DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sidebar_page_size: default_sidebar_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FarmlyConfig::default();
        assert_eq!(config.space.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.space.collection, DEFAULT_COLLECTION);
        assert_eq!(config.http.max_retries, 2);
        assert_eq!(config.content.recent_limit, 10);
        assert_eq!(config.content.related_limit, 4);
        assert_eq!(config.pagination.page_size, 15);
        assert_eq!(config.pagination.sidebar_page_size, 10);
        assert_eq!(config.pagination.page_size_options, vec![10, 15, 25, 50]);
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r"
space:
  space_id: farm123
  collection: newsPostCollection
http:
  max_retries: 0
  rate_limit: null
pagination:
  page_size: 20
";
        let config = FarmlyConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.space.space_id.as_deref(), Some("farm123"));
        assert_eq!(config.space.collection, "newsPostCollection");
        assert_eq!(config.space.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.http.max_retries, 0);
        assert!(config.http.rate_limit.is_none());
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.pagination.page_size, 20);
        assert_eq!(config.pagination.sidebar_page_size, 10);
    }

    #[test]
    fn test_from_yaml_rejects_zero_page_size() {
        let err = FarmlyConfig::from_yaml_str("pagination:\n  page_size: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_empty_page_size_options() {
        let err = FarmlyConfig::from_yaml_str("pagination:\n  page_size_options: []\n")
            .unwrap_err();
        assert!(err.to_string().contains("pagination.page_size_options"));
    }

    #[test]
    fn test_from_yaml_rejects_bad_endpoint() {
        let err = FarmlyConfig::from_yaml_str("space:\n  endpoint: not a url\n").unwrap_err();
        assert!(err.to_string().contains("space.endpoint"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "space:\n  space_id: from-file").unwrap();

        let config = FarmlyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.space.space_id.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = FarmlyConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let config = FarmlyConfig::default().with_env_from(lookup(&[
            (ENV_SPACE_ID, "space-env"),
            (ENV_PREVIEW_TOKEN, "preview-env"),
            (ENV_PRODUCTION_TOKEN, "prod-env"),
            (ENV_ENDPOINT, "http://localhost:9999/spaces"),
        ]));

        assert_eq!(config.space.space_id.as_deref(), Some("space-env"));
        assert_eq!(config.space.token(ContentMode::Preview).unwrap(), "preview-env");
        assert_eq!(config.space.token(ContentMode::Published).unwrap(), "prod-env");
        assert_eq!(config.space.endpoint, "http://localhost:9999/spaces");
    }

    #[test]
    fn test_env_legacy_names_are_fallbacks() {
        let config = FarmlyConfig::default().with_env_from(lookup(&[
            ("NEXT_PUBLIC_CONTENTFUL_SPACE_ID", "legacy-space"),
            ("NEXT_PUBLIC_CONTENTFUL_ACCESS_TOKEN", "legacy-prod"),
            (ENV_PRODUCTION_TOKEN, "primary-prod"),
        ]));

        assert_eq!(config.space.space_id.as_deref(), Some("legacy-space"));
        assert_eq!(
            config.space.token(ContentMode::Published).unwrap(),
            "primary-prod"
        );
    }

    #[test]
    fn test_env_empty_values_ignored() {
        let config = FarmlyConfig::default().with_env_from(lookup(&[(ENV_SPACE_ID, "")]));
        assert!(config.space.space_id.is_none());
    }

    #[test]
    fn test_missing_token_is_error_not_panic() {
        let space = SpaceConfig::default();
        let err = space.token(ContentMode::Preview).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required config field: space.preview_token"
        );
    }

    #[test]
    fn test_endpoint_url() {
        let space = SpaceConfig {
            space_id: Some("abc123".to_string()),
            ..SpaceConfig::default()
        };
        assert_eq!(
            space.endpoint_url().unwrap().as_str(),
            "https://graphql.contentful.com/content/v1/spaces/abc123"
        );

        let trailing = SpaceConfig {
            space_id: Some("abc123".to_string()),
            endpoint: "http://localhost:8080/spaces/".to_string(),
            ..SpaceConfig::default()
        };
        assert_eq!(
            trailing.endpoint_url().unwrap().as_str(),
            "http://localhost:8080/spaces/abc123"
        );
    }

    #[test]
    fn test_endpoint_url_requires_space_id() {
        let err = SpaceConfig::default().endpoint_url().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let space = SpaceConfig {
            preview_token: Some("very-secret".to_string()),
            ..SpaceConfig::default()
        };
        let debug_str = format!("{space:?}");
        assert!(!debug_str.contains("very-secret"));
        assert!(debug_str.contains("<redacted>"));
    }

    #[test]
    fn test_http_config_to_client_config() {
        let http = HttpConfig {
            timeout_seconds: 5,
            rate_limit: None,
            ..HttpConfig::default()
        };
        let client_config = http.to_client_config();
        assert_eq!(client_config.timeout, Duration::from_secs(5));
        assert_eq!(client_config.max_retries, 2);
        assert!(client_config.rate_limit.is_none());
    }
}

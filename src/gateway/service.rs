//! Gateway operations

use super::source::ContentSource;
use crate::article::{normalize_all, Article};
use crate::config::{ContentConfig, DEFAULT_COLLECTION};
use crate::decode::EnvelopeDecoder;
use crate::error::Result;
use crate::query::CollectionQuery;
use crate::types::ContentMode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ============================================================================
// Results
// ============================================================================

/// An article and its related list, fetched independently
///
/// A failure of one half never fails the other.
#[derive(Debug)]
pub struct ArticleWithRelated {
    /// `Ok(None)` when no article has the requested id
    pub article: Result<Option<Article>>,
    pub related: Result<Vec<Article>>,
}

impl ArticleWithRelated {
    /// Collapse errors into an absent article and an empty related list
    pub fn into_lenient(self) -> ArticleDetail {
        let article = self.article.unwrap_or_else(|e| {
            warn!(error = %e, "Article fetch failed, treating as missing");
            None
        });
        let related = self.related.unwrap_or_else(|e| {
            warn!(error = %e, "Related fetch failed, treating as empty");
            Vec::new()
        });
        ArticleDetail { article, related }
    }
}

/// What a detail page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    pub article: Option<Article>,
    pub related: Vec<Article>,
}

/// Result of a connection check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check succeeded
    pub success: bool,

    /// Error message if failed
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a successful check result
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Create a failed check result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// Issues article queries against a [`ContentSource`]
#[derive(Debug)]
pub struct ContentGateway<S> {
    source: S,
    collection: String,
    related_limit: u32,
}

impl<S: ContentSource> ContentGateway<S> {
    /// Gateway over the default collection with the default related limit
    pub fn new(source: S) -> Self {
        Self::with_settings(source, DEFAULT_COLLECTION, &ContentConfig::default())
    }

    /// Gateway with an explicit collection and query sizes
    pub fn with_settings(
        source: S,
        collection: impl Into<String>,
        content: &ContentConfig,
    ) -> Self {
        Self {
            source,
            collection: collection.into(),
            related_limit: content.related_limit,
        }
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Collection queried
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Number of related articles requested
    pub fn related_limit(&self) -> u32 {
        self.related_limit
    }

    /// Up to `limit` articles, newest first
    pub async fn fetch_recent_articles(
        &self,
        limit: u32,
        mode: ContentMode,
    ) -> Result<Vec<Article>> {
        self.run(CollectionQuery::recent(&self.collection, limit, mode))
            .await
    }

    /// [`fetch_recent_articles`](Self::fetch_recent_articles), with any error
    /// logged and turned into an empty list
    pub async fn recent_articles_or_empty(&self, limit: u32, mode: ContentMode) -> Vec<Article> {
        match self.fetch_recent_articles(limit, mode).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(error = %e, %mode, "Failed to fetch recent articles, showing none");
                Vec::new()
            }
        }
    }

    /// The article with this id, `None` when there is none
    pub async fn fetch_article(&self, id: &str, mode: ContentMode) -> Result<Option<Article>> {
        let articles = self
            .run(CollectionQuery::by_id(&self.collection, id, mode))
            .await?;
        Ok(articles.into_iter().next())
    }

    /// The article with this slug, `None` when there is none
    pub async fn fetch_article_by_slug(
        &self,
        slug: &str,
        mode: ContentMode,
    ) -> Result<Option<Article>> {
        let articles = self
            .run(CollectionQuery::by_slug(&self.collection, slug, mode))
            .await?;
        Ok(articles.into_iter().next())
    }

    /// Newest articles other than `id`
    pub async fn fetch_related(&self, id: &str, mode: ContentMode) -> Result<Vec<Article>> {
        self.run(CollectionQuery::related(
            &self.collection,
            id,
            self.related_limit,
            mode,
        ))
        .await
    }

    /// Article and related list, requested concurrently
    ///
    /// The two requests are independent; the related list may reflect a
    /// slightly different moment than the article.
    pub async fn fetch_article_and_related(&self, id: &str, mode: ContentMode) -> ArticleWithRelated {
        let (article, related) =
            futures::join!(self.fetch_article(id, mode), self.fetch_related(id, mode));
        ArticleWithRelated { article, related }
    }

    /// Verify that the source answers a minimal query in this mode
    pub async fn check(&self, mode: ContentMode) -> CheckResult {
        match self.fetch_recent_articles(1, mode).await {
            Ok(_) => CheckResult::success(),
            Err(e) => CheckResult::failure(e.to_string()),
        }
    }

    async fn run(&self, query: CollectionQuery) -> Result<Vec<Article>> {
        let decoder = EnvelopeDecoder::new(query.alias);
        let document = query.render()?;
        let body = self.source.execute(&document, query.mode).await?;
        let articles = normalize_all(decoder.decode_value(body)?)?;
        debug!(
            alias = %query.alias,
            mode = %query.mode,
            count = articles.len(),
            "Fetched articles"
        );
        Ok(articles)
    }
}

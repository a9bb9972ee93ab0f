//! CLI runner - executes commands

use crate::article::{Article, DateStyle};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{FarmlyConfig, PaginationDefaults};
use crate::error::{Error, Result};
use crate::gateway::{ContentGateway, GraphQlSource};
use crate::pagination::{Page, Pager, PagerConfig};
use crate::share::{article_url, share_links, share_url, SharePlatform};
use crate::state::{ListView, RequestTracker};
use crate::types::ContentMode;
use serde_json::{json, Value};
use std::num::NonZeroUsize;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = FarmlyConfig::load(self.cli.config.as_deref())?;
        let mode = ContentMode::from_preview(self.cli.command.preview());
        let gateway = Self::build_gateway(&config)?;

        match &self.cli.command {
            Commands::Recent {
                limit,
                page,
                page_size,
                ..
            } => {
                let limit = limit.unwrap_or(config.content.recent_limit);
                self.recent(&gateway, &config, mode, limit, *page, *page_size)
                    .await
            }
            Commands::Article { id, .. } => self.article(&gateway, id, mode).await,
            Commands::Slug { slug, .. } => self.slug(&gateway, slug, mode).await,
            Commands::Share { id, site, platform, .. } => {
                self.share(&gateway, id, site, *platform, mode).await
            }
            Commands::Check { .. } => self.check(&gateway, mode).await,
        }
    }

    /// Build the gateway for a configuration
    pub fn build_gateway(config: &FarmlyConfig) -> Result<ContentGateway<GraphQlSource>> {
        let source = GraphQlSource::new(config)?;
        Ok(ContentGateway::with_settings(
            source,
            config.space.collection.clone(),
            &config.content,
        ))
    }

    /// Newest articles, one page
    async fn recent(
        &self,
        gateway: &ContentGateway<GraphQlSource>,
        config: &FarmlyConfig,
        mode: ContentMode,
        limit: u32,
        page: usize,
        page_size: Option<usize>,
    ) -> Result<()> {
        let mut pager = feed_pager(&config.pagination, page, page_size)?;

        let tracker: RequestTracker<Vec<Article>> = RequestTracker::new();
        let ticket = tracker.begin().await;
        let outcome = gateway.fetch_recent_articles(limit, mode).await;
        tracker.complete(ticket, outcome).await;

        let state = tracker.state().await;
        match state.list_view() {
            ListView::Loading => Ok(()),
            ListView::Failed(message) => {
                self.output_log("ERROR", &format!("Failed to load articles: {message}"));
                Err(Error::Other(message.to_string()))
            }
            ListView::Empty => {
                self.output_log("INFO", "No articles published yet");
                self.output_message(&page_message(&pager.page::<Article>(&[])));
                Ok(())
            }
            ListView::Items(articles) => {
                self.output_message(&page_message(&pager.page(articles)));
                Ok(())
            }
        }
    }

    /// Article with related list
    async fn article(
        &self,
        gateway: &ContentGateway<GraphQlSource>,
        id: &str,
        mode: ContentMode,
    ) -> Result<()> {
        let detail = gateway.fetch_article_and_related(id, mode).await.into_lenient();
        if detail.article.is_none() {
            self.output_log("WARN", &format!("No article with id '{id}'"));
        }

        self.output_message(&json!({
            "type": "ARTICLE",
            "article": detail.article.as_ref().map(article_json),
            "related": detail.related.iter().map(article_json).collect::<Vec<_>>(),
        }));
        Ok(())
    }

    /// Article by slug
    async fn slug(
        &self,
        gateway: &ContentGateway<GraphQlSource>,
        slug: &str,
        mode: ContentMode,
    ) -> Result<()> {
        let article = gateway.fetch_article_by_slug(slug, mode).await?;
        if article.is_none() {
            self.output_log("WARN", &format!("No article with slug '{slug}'"));
        }

        self.output_message(&json!({
            "type": "ARTICLE",
            "article": article.as_ref().map(article_json),
        }));
        Ok(())
    }

    /// Share links
    async fn share(
        &self,
        gateway: &ContentGateway<GraphQlSource>,
        id: &str,
        site: &str,
        platform: Option<SharePlatform>,
        mode: ContentMode,
    ) -> Result<()> {
        let site = Url::parse(site)?;
        let article = gateway
            .fetch_article(id, mode)
            .await?
            .ok_or_else(|| Error::Other(format!("No article with id '{id}'")))?;

        let links = match platform {
            Some(platform) => {
                let page = article_url(&site, &article)?;
                vec![json!({
                    "platform": platform,
                    "url": share_url(platform, &page, &article.title)?.as_str(),
                })]
            }
            None => share_links(&site, &article)?
                .into_iter()
                .map(|link| json!(link))
                .collect(),
        };

        self.output_message(&json!({
            "type": "SHARE",
            "article": article.id,
            "links": links,
        }));
        Ok(())
    }

    /// Connection check
    async fn check(&self, gateway: &ContentGateway<GraphQlSource>, mode: ContentMode) -> Result<()> {
        self.output_log(
            "INFO",
            &format!(
                "Checking {mode} access to collection '{}'",
                gateway.collection()
            ),
        );

        let result = gateway.check(mode).await;
        let (status, message) = if result.success {
            ("SUCCEEDED", "Connection successful".to_string())
        } else {
            (
                "FAILED",
                format!(
                    "Connection failed: {}",
                    result.message.unwrap_or_default()
                ),
            )
        };

        self.output_message(&json!({
            "type": "CONNECTION_STATUS",
            "connectionStatus": {
                "status": status,
                "message": message
            }
        }));
        Ok(())
    }

    fn output_log(&self, level: &str, message: &str) {
        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": level,
                "message": message
            }
        }));
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Article as emitted by the CLI: the record plus its display date and path
fn article_json(article: &Article) -> Value {
    let mut value = json!(article);
    if let Value::Object(map) = &mut value {
        map.insert("path".to_string(), json!(article.route_path()));
        if let Some(date) = article.display_date(DateStyle::Us) {
            map.insert("displayDate".to_string(), json!(date));
        }
    }
    value
}

/// Main-feed pager positioned by the `recent` flags
fn feed_pager(
    defaults: &PaginationDefaults,
    page: usize,
    page_size: Option<usize>,
) -> Result<Pager> {
    let mut pager = Pager::with_config(PagerConfig::main_feed(defaults)?);
    if let Some(size) = page_size {
        let size = NonZeroUsize::new(size)
            .ok_or_else(|| Error::invalid_value("page_size", "must be at least 1"))?;
        pager.set_page_size(size)?;
    }
    pager.set_page(page);
    Ok(pager)
}

fn page_message(page: &Page<'_, Article>) -> Value {
    json!({
        "type": "ARTICLES",
        "articles": page.page_items.iter().map(article_json).collect::<Vec<_>>(),
        "pagination": {
            "page": page.page,
            "pageSize": page.page_size,
            "totalItems": page.total_items,
            "totalPages": page.total_pages,
            "startIndex": page.start_index,
            "endIndex": page.end_index,
            "shouldShowPagination": page.should_show_pagination,
            "summary": page.summary(),
        }
    })
}

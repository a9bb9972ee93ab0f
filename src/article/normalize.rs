//! Raw record to [`Article`] normalization
//!
//! Order is never changed. Missing free-text fields become empty strings,
//! missing optional fields stay absent.

use super::raw::{RawArticle, RawAuthor, RawRichText};
use super::types::{Article, LinkedAsset, RichBody};
use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::warn;

/// Lowercase kebab-case slug
static URL_SAFE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Normalize one raw record
///
/// Fails only when the record has no usable id.
pub fn normalize(raw: RawArticle) -> Result<Article> {
    let id = raw
        .sys
        .and_then(|sys| sys.id)
        .none_if_empty()
        .ok_or_else(|| Error::decode("record has no sys.id"))?;

    let slug = raw.slug.unwrap_or_default();
    if !slug.is_empty() && !is_url_safe_slug(&slug) {
        warn!(article = %id, slug = %slug, "Slug is not URL-safe");
    }

    let date = raw.date.as_deref().and_then(|value| {
        let parsed = parse_date(value);
        if parsed.is_none() {
            warn!(article = %id, date = %value, "Ignoring unparseable date");
        }
        parsed
    });

    let (author, author_avatar_url) = match raw.author {
        Some(RawAuthor::Name(name)) => (name, None),
        Some(RawAuthor::Profile { name, picture }) => (
            name.unwrap_or_default(),
            picture.and_then(|p| p.url).none_if_empty(),
        ),
        None => (String::new(), None),
    };

    Ok(Article {
        id,
        title: raw.title.unwrap_or_default(),
        slug,
        excerpt: raw.excerpt.unwrap_or_default(),
        author,
        category: raw.category.unwrap_or_default(),
        read_time: raw.read_time.unwrap_or_default(),
        cover_image_url: raw.cover_image.and_then(|image| image.url).none_if_empty(),
        author_avatar_url,
        date,
        body: raw.body.or(raw.content).and_then(rich_body),
    })
}

/// Normalize a batch, keeping source order
///
/// Rejects the batch if a record is invalid or an id repeats.
pub fn normalize_all(raws: Vec<RawArticle>) -> Result<Vec<Article>> {
    let mut seen = HashSet::with_capacity(raws.len());
    let mut articles = Vec::with_capacity(raws.len());

    for (index, raw) in raws.into_iter().enumerate() {
        let article = normalize(raw).map_err(|e| Error::invalid_record(index, e.to_string()))?;
        if !seen.insert(article.id.clone()) {
            return Err(Error::DuplicateArticle { id: article.id });
        }
        articles.push(article);
    }

    Ok(articles)
}

/// Whether a slug is lowercase kebab-case
pub fn is_url_safe_slug(slug: &str) -> bool {
    URL_SAFE_SLUG.is_match(slug)
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC)
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn rich_body(raw: RawRichText) -> Option<RichBody> {
    let document = raw.json?;
    let assets = raw
        .links
        .and_then(|links| links.assets)
        .and_then(|assets| assets.block)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(|asset| {
            let id = asset.sys.and_then(|sys| sys.id).none_if_empty()?;
            Some(LinkedAsset {
                id,
                url: asset.url.none_if_empty(),
                description: asset.description.none_if_empty(),
            })
        })
        .collect();

    Some(RichBody { document, assets })
}

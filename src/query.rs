//! GraphQL query construction
//!
//! Builds the handful of collection queries the gateway issues. Every query
//! selects the same article fields and aliases its collection so the
//! response envelope has a known top-level key (see [`crate::decode`]).

use crate::decode::EnvelopeAlias;
use crate::error::{Error, Result};
use crate::types::ContentMode;
use regex::Regex;
use std::sync::LazyLock;

/// GraphQL names: `[_A-Za-z][_0-9A-Za-z]*`
static GRAPHQL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").unwrap());

/// Fields selected for every article item
pub const ARTICLE_FIELDS: &str = "
    sys {
      id
    }
    title
    slug
    excerpt
    coverImage {
      url
    }
    category
    author
    date
    readTime
    body {
      json
      links {
        assets {
          block {
            sys {
              id
            }
            url
            description
          }
        }
      }
    }";

/// Restriction applied to the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Only the entry with this id
    IdEquals(String),
    /// Every entry except this id
    IdNot(String),
    /// Only the entry with this slug
    SlugEquals(String),
}

impl Filter {
    fn render(&self) -> String {
        match self {
            Self::IdEquals(id) => format!("{{ sys: {{ id: {} }} }}", string_literal(id)),
            Self::IdNot(id) => format!("{{ sys: {{ id_not: {} }} }}", string_literal(id)),
            Self::SlugEquals(slug) => format!("{{ slug: {} }}", string_literal(slug)),
        }
    }
}

/// A single aliased collection query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    /// Alias of the collection in the response
    pub alias: EnvelopeAlias,
    /// Collection name, e.g. `bookReaderCollection`
    pub collection: String,
    /// Optional `where` restriction
    pub filter: Option<Filter>,
    /// Order by `date_DESC`
    pub newest_first: bool,
    /// Maximum number of items
    pub limit: u32,
    /// Draft or published branch
    pub mode: ContentMode,
}

impl CollectionQuery {
    /// Newest articles, aliased `news { posts: items }`
    pub fn recent(collection: impl Into<String>, limit: u32, mode: ContentMode) -> Self {
        Self {
            alias: EnvelopeAlias::News,
            collection: collection.into(),
            filter: None,
            newest_first: true,
            limit,
            mode,
        }
    }

    /// One article by id, aliased `post`
    pub fn by_id(collection: impl Into<String>, id: impl Into<String>, mode: ContentMode) -> Self {
        Self {
            alias: EnvelopeAlias::Post,
            collection: collection.into(),
            filter: Some(Filter::IdEquals(id.into())),
            newest_first: false,
            limit: 1,
            mode,
        }
    }

    /// One article by slug, aliased `post`
    pub fn by_slug(
        collection: impl Into<String>,
        slug: impl Into<String>,
        mode: ContentMode,
    ) -> Self {
        Self {
            alias: EnvelopeAlias::Post,
            collection: collection.into(),
            filter: Some(Filter::SlugEquals(slug.into())),
            newest_first: false,
            limit: 1,
            mode,
        }
    }

    /// Newest articles other than `id`, aliased `posts`
    pub fn related(
        collection: impl Into<String>,
        id: impl Into<String>,
        limit: u32,
        mode: ContentMode,
    ) -> Self {
        Self {
            alias: EnvelopeAlias::Posts,
            collection: collection.into(),
            filter: Some(Filter::IdNot(id.into())),
            newest_first: true,
            limit,
            mode,
        }
    }

    /// Render the GraphQL document
    pub fn render(&self) -> Result<String> {
        if !GRAPHQL_NAME.is_match(&self.collection) {
            return Err(Error::query(format!(
                "'{}' is not a valid collection name",
                self.collection
            )));
        }

        let mut args = Vec::with_capacity(4);
        if let Some(filter) = &self.filter {
            args.push(format!("where: {}", filter.render()));
        }
        if self.newest_first {
            args.push("order: date_DESC".to_string());
        }
        args.push(format!("preview: {}", self.mode.as_graphql_literal()));
        args.push(format!("limit: {}", self.limit));

        Ok(format!(
            "query {{\n  {alias}: {collection}({args}) {{\n    {items} {{{fields}\n    }}\n  }}\n}}",
            alias = self.alias.key(),
            collection = self.collection,
            args = args.join(", "),
            items = self.alias.items_selection(),
            fields = ARTICLE_FIELDS,
        ))
    }
}

/// Quote a value as a GraphQL string literal
///
/// GraphQL string escapes are a subset of JSON's, so JSON encoding of a
/// `str` is always a valid literal.
fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_query() {
        let query = CollectionQuery::recent("bookReaderCollection", 10, ContentMode::Published)
            .render()
            .unwrap();

        assert!(query.contains(
            "news: bookReaderCollection(order: date_DESC, preview: false, limit: 10)"
        ));
        assert!(query.contains("posts: items {"));
        assert!(query.contains("readTime"));
        assert!(!query.contains("where:"));
    }

    #[test]
    fn test_by_id_query() {
        let query = CollectionQuery::by_id("bookReaderCollection", "5xYz", ContentMode::Preview)
            .render()
            .unwrap();

        assert!(query.contains(
            r#"post: bookReaderCollection(where: { sys: { id: "5xYz" } }, preview: true, limit: 1)"#
        ));
        assert!(query.contains("    items {"));
        assert!(!query.contains("order:"));
    }

    #[test]
    fn test_related_query() {
        let query =
            CollectionQuery::related("bookReaderCollection", "5xYz", 4, ContentMode::Published)
                .render()
                .unwrap();

        assert!(query.contains(
            r#"posts: bookReaderCollection(where: { sys: { id_not: "5xYz" } }, order: date_DESC, preview: false, limit: 4)"#
        ));
    }

    #[test]
    fn test_by_slug_query() {
        let query =
            CollectionQuery::by_slug("newsPostCollection", "soil-health", ContentMode::Published)
                .render()
                .unwrap();

        assert!(query.contains(r#"where: { slug: "soil-health" }"#));
        assert!(query.starts_with("query {\n  post: newsPostCollection("));
    }

    #[test]
    fn test_values_are_escaped() {
        let query = CollectionQuery::by_id(
            "bookReaderCollection",
            r#"x" } }) { evil"#,
            ContentMode::Published,
        )
        .render()
        .unwrap();

        assert!(query.contains(r#"id: "x\" } }) { evil""#));
    }

    #[test]
    fn test_invalid_collection_rejected() {
        let err = CollectionQuery::recent("book reader", 10, ContentMode::Published)
            .render()
            .unwrap_err();
        assert!(matches!(err, Error::Query { .. }));

        assert!(CollectionQuery::recent("", 10, ContentMode::Published)
            .render()
            .is_err());
    }
}

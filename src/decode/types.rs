//! Envelope types
//!
//! A GraphQL response body is `{ data, errors }`. The `data` object has one
//! key per aliased root field; the gateway only ever issues queries with one
//! of three aliases, so a recognised envelope is one of three shapes.

use crate::article::RawArticle;
use serde::Deserialize;
use serde_json::Value;

/// Root-field alias used by a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeAlias {
    /// `news { posts: items { … } }`
    News,
    /// `post { items { … } }`
    Post,
    /// `posts { items { … } }`
    Posts,
}

impl EnvelopeAlias {
    /// Key of the alias in `data`
    pub fn key(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Post => "post",
            Self::Posts => "posts",
        }
    }

    /// Selection of the item list inside the collection
    pub fn items_selection(self) -> &'static str {
        match self {
            Self::News => "posts: items",
            Self::Post | Self::Posts => "items",
        }
    }

    /// Look up an alias by its `data` key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "news" => Some(Self::News),
            "post" => Some(Self::Post),
            "posts" => Some(Self::Posts),
            _ => None,
        }
    }
}

impl std::fmt::Display for EnvelopeAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A recognised response envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ news: { posts: [...] } }`
    News { posts: Vec<RawArticle> },
    /// `{ post: { items: [...] } }`
    Post { items: Vec<RawArticle> },
    /// `{ posts: { items: [...] } }`
    Posts { items: Vec<RawArticle> },
}

impl Envelope {
    /// Alias this envelope answers
    pub fn alias(&self) -> EnvelopeAlias {
        match self {
            Self::News { .. } => EnvelopeAlias::News,
            Self::Post { .. } => EnvelopeAlias::Post,
            Self::Posts { .. } => EnvelopeAlias::Posts,
        }
    }

    /// Borrow the raw items
    pub fn items(&self) -> &[RawArticle] {
        match self {
            Self::News { posts } => posts,
            Self::Post { items } | Self::Posts { items } => items,
        }
    }

    /// Take the raw items, in source order
    pub fn into_items(self) -> Vec<RawArticle> {
        match self {
            Self::News { posts } => posts,
            Self::Post { items } | Self::Posts { items } => items,
        }
    }
}

/// Collection answered with `posts: items`
///
/// Entries the CMS could not resolve arrive as `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct NewsCollection {
    pub posts: Vec<Option<RawArticle>>,
}

/// Collection answered with plain `items`
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsCollection {
    pub items: Vec<Option<RawArticle>>,
}

/// Top-level GraphQL response body
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of the `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

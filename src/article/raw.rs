//! Raw CMS record shapes
//!
//! These mirror what the content API returns for an article item. Every
//! field is optional because older schema versions omit or rename them.

use serde::Deserialize;
use serde_json::Value;

/// An article item as returned by the content API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// System metadata (`sys { id }`)
    #[serde(default)]
    pub sys: Option<RawSys>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Plain name or a profile object, depending on schema version
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub cover_image: Option<RawImage>,
    /// Rich body under its current name
    #[serde(default)]
    pub body: Option<RawRichText>,
    /// Rich body under the older `content` wrapper
    #[serde(default)]
    pub content: Option<RawRichText>,
}

/// `sys` block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSys {
    #[serde(default)]
    pub id: Option<String>,
}

/// Author as a bare string or as `{ name, picture { url } }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAuthor {
    Name(String),
    Profile {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        picture: Option<RawImage>,
    },
}

/// Image asset reference (`{ url }`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// Rich text field: the document plus linked entities
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRichText {
    #[serde(default)]
    pub json: Option<Value>,
    #[serde(default)]
    pub links: Option<RawLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLinks {
    #[serde(default)]
    pub assets: Option<RawAssetLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAssetLinks {
    #[serde(default)]
    pub block: Option<Vec<Option<RawLinkedAsset>>>,
}

/// Asset embedded in a rich text block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLinkedAsset {
    #[serde(default)]
    pub sys: Option<RawSys>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

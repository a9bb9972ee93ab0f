//! Normalized article types

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A normalized article
///
/// Created fresh from every fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Identifier assigned by the content source
    pub id: String,
    pub title: String,
    /// Routing identifier; may change when the entry is edited
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RichBody>,
}

impl Article {
    /// Path of the detail page
    pub fn route_path(&self) -> String {
        format!("/{}", self.id)
    }

    /// Long-form publication date, `None` when the article has no date
    pub fn display_date(&self, style: DateStyle) -> Option<String> {
        self.date.map(|date| style.format(&date))
    }
}

/// Opaque rich content: the structured document and the assets it references
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichBody {
    /// Structured document, handed to the renderer untouched
    pub document: Value,
    pub assets: Vec<LinkedAsset>,
}

impl RichBody {
    /// Look up an embedded asset by id
    pub fn asset(&self, id: &str) -> Option<&LinkedAsset> {
        self.assets.iter().find(|asset| asset.id == id)
    }
}

/// Asset referenced from the rich body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedAsset {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Long date formats used by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `May 20, 2024`
    #[default]
    Us,
    /// `20 May 2024`
    Uk,
}

impl DateStyle {
    /// Format a timestamp in this style
    pub fn format(self, date: &DateTime<Utc>) -> String {
        match self {
            Self::Us => date.format("%B %-d, %Y").to_string(),
            Self::Uk => date.format("%-d %B %Y").to_string(),
        }
    }
}

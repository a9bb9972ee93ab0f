//! Common types used throughout Farmly content
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Content Mode
// ============================================================================

/// Which branch of the content space a request reads from
///
/// Preview exposes unpublished drafts and uses the preview credential.
/// The two modes are mutually exclusive per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Published content, production credential
    #[default]
    Published,
    /// Draft content, preview credential
    Preview,
}

impl ContentMode {
    /// Map the `preview` flag used by callers onto a mode
    pub fn from_preview(preview: bool) -> Self {
        if preview {
            Self::Preview
        } else {
            Self::Published
        }
    }

    /// Whether this is the draft branch
    pub fn is_preview(self) -> bool {
        matches!(self, Self::Preview)
    }

    /// GraphQL boolean literal for the `preview` argument
    pub fn as_graphql_literal(self) -> &'static str {
        if self.is_preview() {
            "true"
        } else {
            "false"
        }
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Published => f.write_str("published"),
            Self::Preview => f.write_str("preview"),
        }
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.trim().is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

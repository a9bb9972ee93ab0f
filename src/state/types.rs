//! Load state types

use serde::Serialize;

/// Where a request for `T` currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum LoadState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded
    Ready(T),
    /// The latest request failed with this message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Loaded value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// What a list view should render
    ///
    /// Keeps "nothing published" apart from "failed to load".
    pub fn list_view(&self) -> ListView<'_, T> {
        match self {
            Self::Idle | Self::Loading => ListView::Loading,
            Self::Failed(message) => ListView::Failed(message),
            Self::Ready(items) if items.is_empty() => ListView::Empty,
            Self::Ready(items) => ListView::Items(items),
        }
    }
}

/// Render decision for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Items(&'a [T]),
}

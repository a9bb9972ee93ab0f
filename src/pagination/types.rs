//! Pagination types

use crate::config::PaginationDefaults;
use crate::error::{Error, Result};
use serde::Serialize;
use std::num::NonZeroUsize;

/// One page of a list plus navigation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    /// Items on this page, in list order
    pub page_items: &'a [T],
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// `ceil(total_items / page_size)`, `0` for an empty list
    pub total_pages: usize,
    /// 1-based index of the first item on the page
    pub start_index: usize,
    /// 1-based index of the last item on the page
    pub end_index: usize,
    /// Whether the list is long enough to need page controls
    pub should_show_pagination: bool,
}

impl<T> Page<'_, T> {
    /// Whether a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Whether a page follows this one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }

    /// `Showing 1-15 of 37 items`
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return format!("Showing 0 of {} items", self.total_items);
        }
        format!(
            "Showing {}-{} of {} items",
            self.start_index, self.end_index, self.total_items
        )
    }
}

/// What a [`Pager`](super::Pager) does when its active page falls past the
/// end of a shrunken list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Go back to page 1
    #[default]
    ResetToFirst,
    /// Move to the last page that still exists
    ClampToLast,
}

/// Page sizes a reader may pick when none are configured
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 15, 25, 50];

/// Settings of a single pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    pub page_size: NonZeroUsize,
    /// Lists longer than this show page controls; defaults to the page size
    pub threshold: Option<usize>,
    pub overflow: OverflowPolicy,
    /// Sizes [`Pager::set_page_size`](super::Pager::set_page_size) accepts
    pub page_size_options: Vec<NonZeroUsize>,
}

impl PagerConfig {
    /// Config with the given page size and default behaviour
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            threshold: None,
            overflow: OverflowPolicy::default(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS
                .iter()
                .filter_map(|&n| NonZeroUsize::new(n))
                .collect(),
        }
    }

    /// Main article feed
    pub fn main_feed(defaults: &PaginationDefaults) -> Result<Self> {
        let size = page_size("pagination.page_size", defaults.page_size)?;
        Self::new(size).with_options_from(defaults)
    }

    /// Sidebar "popular articles" list
    pub fn sidebar(defaults: &PaginationDefaults) -> Result<Self> {
        let size = page_size("pagination.sidebar_page_size", defaults.sidebar_page_size)?;
        Self::new(size).with_options_from(defaults)
    }

    fn with_options_from(self, defaults: &PaginationDefaults) -> Result<Self> {
        let options = defaults
            .page_size_options
            .iter()
            .map(|&n| page_size("pagination.page_size_options", n))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_page_size_options(options))
    }

    /// Set the threshold above which page controls show
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the overflow policy
    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Replace the selectable page sizes
    #[must_use]
    pub fn with_page_size_options(mut self, options: Vec<NonZeroUsize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Effective threshold
    pub fn threshold(&self) -> usize {
        self.threshold.unwrap_or(self.page_size.get())
    }

    /// Whether `size` is one of the selectable page sizes
    pub fn allows_page_size(&self, size: NonZeroUsize) -> bool {
        self.page_size_options.contains(&size)
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(15).unwrap_or(NonZeroUsize::MIN))
    }
}

fn page_size(field: &str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value)
        .ok_or_else(|| Error::invalid_value(field, "page size must be at least 1"))
}

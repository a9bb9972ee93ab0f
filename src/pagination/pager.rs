//! Page slicing and the stateful pager

use super::types::{OverflowPolicy, Page, PagerConfig};
use crate::error::{Error, Result};
use std::num::NonZeroUsize;
use tracing::debug;

/// Slice one 1-based page out of `items`
///
/// Page `0` is read as page `1`. A page past the end yields no items.
/// Page controls show when the list is longer than one page.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: usize) -> Page<'_, T> {
    slice_page(items, page_size, page, page_size.get())
}

fn slice_page<T>(
    items: &[T],
    page_size: NonZeroUsize,
    page: usize,
    threshold: usize,
) -> Page<'_, T> {
    let size = page_size.get();
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);

    let start = (page - 1).saturating_mul(size);
    let end = page.saturating_mul(size).min(total_items);
    let page_items = items.get(start..end).unwrap_or(&[]);

    Page {
        page_items,
        page,
        page_size: size,
        total_items,
        total_pages,
        start_index: start.saturating_add(1),
        end_index: end,
        should_show_pagination: total_items > threshold,
    }
}

/// Pagination state of one displayed list
///
/// Owned by exactly one caller. The active page is kept within the list's
/// bounds by [`reconcile`](Self::reconcile), which [`page`](Self::page)
/// calls on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    config: PagerConfig,
    active_page: usize,
}

impl Pager {
    /// Pager starting on page 1
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self::with_config(PagerConfig::new(page_size))
    }

    /// Pager with explicit settings
    pub fn with_config(config: PagerConfig) -> Self {
        Self {
            config,
            active_page: 1,
        }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.config.page_size
    }

    /// Navigate to a page; `0` is read as page 1
    pub fn set_page(&mut self, page: usize) {
        self.active_page = page.max(1);
    }

    /// Change the page size and go back to page 1
    ///
    /// Only sizes listed in the config's options are accepted; a rejected
    /// size leaves the pager untouched.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) -> Result<()> {
        if !self.config.allows_page_size(page_size) {
            let options: Vec<String> = self
                .config
                .page_size_options
                .iter()
                .map(|n| n.to_string())
                .collect();
            return Err(Error::invalid_value(
                "page_size",
                format!("{page_size} is not one of [{}]", options.join(", ")),
            ));
        }
        self.config.page_size = page_size;
        self.active_page = 1;
        Ok(())
    }

    /// Bring the active page back within a list of `total_items`
    ///
    /// Only acts when the list is non-empty and the active page is past its
    /// last page. Returns whether the active page changed.
    pub fn reconcile(&mut self, total_items: usize) -> bool {
        let total_pages = total_items.div_ceil(self.config.page_size.get());
        if total_pages == 0 || self.active_page <= total_pages {
            return false;
        }

        let target = match self.config.overflow {
            OverflowPolicy::ResetToFirst => 1,
            OverflowPolicy::ClampToLast => total_pages,
        };
        debug!(
            from = self.active_page,
            to = target,
            total_pages,
            "Active page past the end of the list"
        );
        self.active_page = target;
        true
    }

    /// Reconcile with `items` and return the active page
    pub fn page<'a, T>(&mut self, items: &'a [T]) -> Page<'a, T> {
        self.reconcile(items.len());
        slice_page(
            items,
            self.config.page_size,
            self.active_page,
            self.config.threshold(),
        )
    }
}

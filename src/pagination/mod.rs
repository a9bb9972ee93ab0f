//! Pagination module
//!
//! Supports: fixed-size pages over an in-memory list, one [`Pager`] per
//! displayed list
//!
//! # Overview
//!
//! [`paginate`] is a pure slicing function: the same list, page size and
//! page always give the same [`Page`]. [`Pager`] adds the one piece of
//! state a list view needs, the active page, and keeps it valid when the
//! list or the page size changes.

mod pager;
mod types;

pub use pager::{paginate, Pager};
pub use types::{OverflowPolicy, Page, PagerConfig, DEFAULT_PAGE_SIZE_OPTIONS};

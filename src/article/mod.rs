//! Article module
//!
//! Raw CMS shapes, the normalized [`Article`] record and the normalization
//! between them.
//!
//! # Overview
//!
//! The content API returns loosely shaped items: fields can be missing,
//! `author` can be a string or a profile, and the rich body can sit under
//! `body` or the older `content` key. [`normalize_all`] turns a batch of
//! such items into flat articles without reordering them.

mod normalize;
mod raw;
mod types;

pub use normalize::{is_url_safe_slug, normalize, normalize_all, parse_date};
pub use raw::{
    RawArticle, RawAssetLinks, RawAuthor, RawImage, RawLinkedAsset, RawLinks, RawRichText, RawSys,
};
pub use types::{Article, DateStyle, LinkedAsset, RichBody};

#[cfg(test)]
mod tests;

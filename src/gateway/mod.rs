//! Content gateway
//!
//! Translates intents ("the newest articles", "this article and a few
//! others") into GraphQL requests and shapes the answers into [`Article`]
//! values.
//!
//! # Overview
//!
//! ```text
//! ContentGateway ── CollectionQuery::render ──▶ ContentSource::execute
//!        ▲                                             │
//!        └── normalize_all ◀── EnvelopeDecoder ◀───────┘
//! ```
//!
//! [`ContentSource`] is the transport seam. [`GraphQlSource`] talks HTTP;
//! tests plug in an in-memory source.
//!
//! [`Article`]: crate::article::Article

mod service;
mod source;

pub use service::{ArticleDetail, ArticleWithRelated, CheckResult, ContentGateway};
pub use source::{ContentSource, GraphQlSource};

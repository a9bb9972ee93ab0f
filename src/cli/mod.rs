//! CLI module
//!
//! Command-line interface for the content gateway.
//!
//! # Commands
//!
//! - `recent` - Newest articles, paginated
//! - `article` - One article with related articles
//! - `slug` - One article by slug
//! - `share` - Social share links for an article
//! - `check` - Test the connection and credentials

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

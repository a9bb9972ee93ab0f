//! CLI commands and argument parsing

use crate::share::SharePlatform;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Farmly content CLI
#[derive(Parser, Debug)]
#[command(name = "farmly")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the newest articles, one page at a time
    Recent {
        /// Number of articles to fetch (defaults to content.recent_limit)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Read draft content with the preview token
        #[arg(long)]
        preview: bool,

        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Items per page, one of pagination.page_size_options (defaults to pagination.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show one article and its related articles
    Article {
        /// Article identifier
        id: String,

        #[arg(long)]
        preview: bool,
    },

    /// Look an article up by slug
    Slug {
        slug: String,

        #[arg(long)]
        preview: bool,
    },

    /// Print share links for an article
    Share {
        /// Article identifier
        id: String,

        /// Public site URL the article pages live under
        #[arg(long)]
        site: String,

        /// Only this platform (all when omitted)
        #[arg(long, value_enum)]
        platform: Option<SharePlatform>,

        #[arg(long)]
        preview: bool,
    },

    /// Test the connection and credentials
    Check {
        #[arg(long)]
        preview: bool,
    },
}

impl Commands {
    /// Whether the command reads draft content
    pub fn preview(&self) -> bool {
        match self {
            Self::Recent { preview, .. }
            | Self::Article { preview, .. }
            | Self::Slug { preview, .. }
            | Self::Share { preview, .. }
            | Self::Check { preview } => *preview,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use folio::config::SettingsOverrides;

/// Terminal reader for a personal technical blog.
#[derive(Debug, Parser)]
#[command(
    name = "folio-cli",
    version,
    about = "Browse a blog's posts, categories and tags from the terminal"
)]
pub struct Cli {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "FOLIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SettingsOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the home view: the most recent articles.
    Home,
    /// List posts, optionally searched or paginated.
    Posts(PostsCmd),
    /// List all categories.
    Categories,
    /// Show the posts filed under a category slug.
    Category {
        /// Category slug, e.g. `cloud-development`.
        slug: String,
    },
    /// List all tags.
    Tags,
    /// Show a single post with its full content.
    Show {
        /// Post identifier.
        id: String,
    },
}

#[derive(Debug, Args, Default)]
pub struct PostsCmd {
    /// Page number (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Full-text search query, served by the API rather than the local cache.
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

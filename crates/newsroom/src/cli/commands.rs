//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Newsroom: validate, generate and schedule social posts from news items
#[derive(Parser)]
#[command(name = "newsroom")]
#[command(about = "Generate, validate and schedule newsroom social posts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (replaces the layered lookup)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check post text against a platform policy
    Validate {
        /// Target platform (linkedin, twitter/x, instagram, facebook)
        #[arg(short, long)]
        platform: String,

        /// Post text; reads stdin when neither text nor --file is given
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the post text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Run the suitability gate on a news item
    Check {
        #[command(flatten)]
        news: NewsArgs,
    },

    /// Generate one post through the gateway
    Generate {
        #[command(flatten)]
        news: NewsArgs,

        /// Target platform
        #[arg(short, long)]
        platform: String,

        /// Tone variant (1 standard, 2 informative, 3 narrative)
        #[arg(long, default_value_t = 1)]
        variant: i64,
    },

    /// Generate every platform and variant combination for one news item
    Batch {
        #[command(flatten)]
        news: NewsArgs,

        /// Target platforms, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        platforms: Vec<String>,

        /// Tone variants, comma separated
        #[arg(long, value_delimiter = ',', default_value = "1")]
        variants: Vec<i64>,
    },

    /// Handle a raw generation request the way the HTTP boundary does
    Request {
        /// JSON request body; `-` reads stdin
        #[arg(short, long)]
        body: PathBuf,

        /// Authorization header value, e.g. "Bearer <key>"
        #[arg(short, long)]
        authorization: Option<String>,
    },

    /// Suggest publication slots for one topic
    Schedule {
        /// Topic the slots are for
        #[arg(short, long)]
        topic: String,

        /// Target platforms, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        platforms: Vec<String>,

        /// Reference time (RFC 3339 or YYYY-MM-DD); defaults to now
        #[arg(long)]
        from: Option<String>,
    },

    /// Lay out a weekly calendar for several themes
    Calendar {
        /// Theme as `id=title`; repeat for more themes
        #[arg(short, long = "theme", required = true)]
        themes: Vec<String>,

        /// Reference time (RFC 3339 or YYYY-MM-DD); defaults to now
        #[arg(long)]
        from: Option<String>,
    },

    /// Describe the tone variants for a platform
    Variants {
        /// Target platform
        #[arg(short, long)]
        platform: String,

        /// Seed picking the alternative closing questions
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

/// News item fields shared by several commands.
#[derive(Args, Debug, Clone)]
pub struct NewsArgs {
    /// Headline
    #[arg(long)]
    pub title: String,

    /// Summary
    #[arg(long, default_value = "")]
    pub summary: String,

    /// Article URL
    #[arg(long, default_value = "")]
    pub url: String,

    /// Outlet name
    #[arg(long, default_value = "")]
    pub source: String,

    /// Related topic; repeat for more
    #[arg(long = "topic")]
    pub topics: Vec<String>,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

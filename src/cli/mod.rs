//! CLI module for Sikt.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Sikt - Tutorial Video Curation
///
/// A CLI tool for curating bilingual tutorial video collections for static websites.
/// The name "Sikt" comes from the Norwegian word for "sift."
#[derive(Parser, Debug)]
#[command(name = "sikt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Sikt: write the default config and create the store
    Init,

    /// Check API keys, configuration, and data paths
    Doctor,

    /// Search, score, and merge new videos into the collection
    Curate {
        /// Domain to curate (defaults to the configured domain)
        #[arg(short, long)]
        domain: Option<String>,

        /// Maximum videos to add
        #[arg(short, long)]
        max_videos: Option<usize>,

        /// Don't write anything, just show what would be added
        #[arg(long)]
        dry_run: bool,

        /// Skip LLM descriptions and use YouTube data only
        #[arg(long)]
        skip_descriptions: bool,
    },

    /// Add one specific video to the collection by ID
    Add {
        /// YouTube video ID
        video_id: String,

        /// Domain to add to (defaults to the configured domain)
        #[arg(short, long)]
        domain: Option<String>,

        /// Don't write anything, just show the scored result
        #[arg(long)]
        dry_run: bool,
    },

    /// List the curated collection
    List {
        /// Domain to list (defaults to the configured domain)
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// List configured domains
    Domains,

    /// Re-render the site script from the stored collection
    Render {
        /// Domain to render (defaults to the configured domain)
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

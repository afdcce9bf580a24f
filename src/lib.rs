//! Sikt - Tutorial Video Curation
//!
//! A CLI tool for curating bilingual tutorial video collections for static websites.
//!
//! The name "Sikt" comes from the Norwegian word for "sift."
//!
//! # Overview
//!
//! Sikt allows you to:
//! - Search YouTube for tutorial videos in a configured topic domain
//! - Rate candidates with a trust score (channel, views, duration, clickbait)
//! - Categorize videos against a domain-defined taxonomy
//! - Generate bilingual (DE/EN) descriptions with a single batched LLM call
//! - Merge new finds with the previously curated collection
//! - Render the collection into a static site's embedded data array
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management and the domain registry
//! - `youtube` - YouTube Data API client and duration parsing
//! - `curation` - Trust scoring, categorization, and collection merging
//! - `describe` - Bilingual description generation
//! - `store` - Persisted collection storage
//! - `site` - Static site data rendering and splicing
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use sikt::config::Settings;
//! use sikt::orchestrator::{CurateOptions, Curator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let curator = Curator::new(settings, "trockenbau")?;
//!
//!     let report = curator.run(CurateOptions::default()).await?;
//!     println!("Curated {} videos", report.total_after_merge);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod curation;
pub mod describe;
pub mod error;
pub mod orchestrator;
pub mod site;
pub mod store;
pub mod youtube;

pub use error::{Result, SiktError};

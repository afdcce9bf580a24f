//! YouTube Data API integration.

mod client;
mod duration;

pub use client::YoutubeClient;
pub use duration::parse_duration_minutes;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video candidate as fetched from the YouTube search collaborator.
///
/// Immutable once fetched; scoring and categorization produce a separate
/// [`crate::store::CuratedVideo`] record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateVideo {
    /// YouTube video ID.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Video description, truncated to 500 characters.
    pub description: String,
    /// Channel name.
    pub channel: String,
    /// Publish timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// View count.
    pub views: u64,
    /// Like count.
    pub likes: u64,
    /// Raw ISO 8601 duration code (e.g. "PT12M30S").
    pub duration: String,
    /// High-resolution thumbnail URL.
    pub thumbnail_url: Option<String>,
}

impl CandidateVideo {
    /// Video duration in whole minutes.
    pub fn duration_minutes(&self) -> u32 {
        parse_duration_minutes(&self.duration)
    }
}

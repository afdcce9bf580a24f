//! Persisted collection storage.
//!
//! The SQLite store is the source of truth for the curated collection; the
//! site script is only a rendering of it.

mod sqlite;

pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated video: a candidate annotated with its trust score, category,
/// and bilingual presentation fields.
///
/// The rating is clamped to [4.0, 5.0] by the scorer and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedVideo {
    /// YouTube video ID, unique within the collection.
    pub id: String,
    /// German title (the original upload title).
    pub title: String,
    /// English title. Defaults to the original title.
    pub title_en: String,
    /// German description.
    pub description_de: String,
    /// English description.
    pub description_en: String,
    /// Channel name.
    pub channel: String,
    /// View count at curation time.
    pub views: u64,
    /// Like count at curation time.
    pub likes: u64,
    /// Duration in whole minutes.
    pub duration_minutes: u32,
    /// Trust score in [4.0, 5.0].
    pub rating: f64,
    /// Category key from the domain taxonomy.
    pub category: String,
    /// Publish timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// When this video entered the collection.
    pub curated_at: DateTime<Utc>,
}

//! SQLite-backed collection store.

use super::CuratedVideo;
use crate::error::{Result, SiktError};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, instrument};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS videos (
    domain TEXT NOT NULL,
    video_id TEXT NOT NULL,
    title TEXT NOT NULL,
    title_en TEXT NOT NULL,
    description_de TEXT NOT NULL,
    description_en TEXT NOT NULL,
    channel TEXT NOT NULL,
    views INTEGER NOT NULL,
    likes INTEGER NOT NULL,
    duration_minutes INTEGER NOT NULL,
    rating REAL NOT NULL,
    category TEXT NOT NULL,
    published_at TEXT,
    curated_at TEXT NOT NULL,
    PRIMARY KEY (domain, video_id)
);

CREATE INDEX IF NOT EXISTS idx_videos_domain_rating ON videos(domain, rating DESC);
"#;

/// SQLite-backed store for the curated collection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store at the given path.
    #[instrument(skip_all)]
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA)?;

        info!("Opened collection store at {:?}", path);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Load a domain's collection, best rated first.
    pub fn load(&self, domain: &str) -> Result<Vec<CuratedVideo>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT video_id, title, title_en, description_de, description_en,
                   channel, views, likes, duration_minutes, rating, category,
                   published_at, curated_at
            FROM videos
            WHERE domain = ?1
            ORDER BY rating DESC, views DESC
            "#,
        )?;

        let videos = stmt
            .query_map(params![domain], row_to_video)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Loaded {} videos for domain {}", videos.len(), domain);
        Ok(videos)
    }

    /// Replace a domain's collection wholesale.
    ///
    /// The merge engine produces the full post-merge collection, so the
    /// previous rows are dropped in the same transaction.
    #[instrument(skip(self, videos), fields(count = videos.len()))]
    pub fn replace(&self, domain: &str, videos: &[CuratedVideo]) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM videos WHERE domain = ?1", params![domain])?;

        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO videos
                (domain, video_id, title, title_en, description_de, description_en,
                 channel, views, likes, duration_minutes, rating, category,
                 published_at, curated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
                "#,
            )?;

            for video in videos {
                stmt.execute(params![
                    domain,
                    video.id,
                    video.title,
                    video.title_en,
                    video.description_de,
                    video.description_en,
                    video.channel,
                    video.views as i64,
                    video.likes as i64,
                    video.duration_minutes,
                    video.rating,
                    video.category,
                    video.published_at.map(|dt| dt.to_rfc3339()),
                    video.curated_at.to_rfc3339(),
                ])?;
            }
        }

        tx.commit()?;
        Ok(videos.len())
    }

    /// Number of stored videos for a domain.
    pub fn count(&self, domain: &str) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM videos WHERE domain = ?1",
            params![domain],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| SiktError::Store(format!("Failed to acquire lock: {}", e)))
    }
}

fn row_to_video(row: &Row<'_>) -> rusqlite::Result<CuratedVideo> {
    let published_at: Option<String> = row.get(11)?;
    let curated_at: String = row.get(12)?;

    Ok(CuratedVideo {
        id: row.get(0)?,
        title: row.get(1)?,
        title_en: row.get(2)?,
        description_de: row.get(3)?,
        description_en: row.get(4)?,
        channel: row.get(5)?,
        views: row.get::<_, i64>(6)? as u64,
        likes: row.get::<_, i64>(7)? as u64,
        duration_minutes: row.get(8)?,
        rating: row.get(9)?,
        category: row.get(10)?,
        published_at: published_at
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc)),
        curated_at: DateTime::parse_from_rfc3339(&curated_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default(),
    })
}

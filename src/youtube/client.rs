//! YouTube Data API v3 client.

use super::CandidateVideo;
use crate::error::{Result, SiktError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Maximum description length carried on a candidate.
const MAX_DESCRIPTION_CHARS: usize = 500;

/// Client for the YouTube Data API.
pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: String,
    relevance_language: String,
}

impl YoutubeClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: &str, relevance_language: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SiktError::YouTube(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            relevance_language: relevance_language.to_string(),
        })
    }

    /// Search for videos and fetch their details.
    ///
    /// Runs a `search.list` call for IDs, then one `videos.list` call for
    /// snippet, statistics, and duration. Returns an empty list when the
    /// search yields nothing.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<CandidateVideo>> {
        let video_ids = self.search_ids(query, max_results).await?;
        if video_ids.is_empty() {
            debug!("No results for query");
            return Ok(Vec::new());
        }

        self.fetch_details(&video_ids).await
    }

    /// Fetch a single video by ID.
    #[instrument(skip(self))]
    pub async fn video(&self, video_id: &str) -> Result<CandidateVideo> {
        let mut videos = self.fetch_details(&[video_id.to_string()]).await?;
        videos
            .pop()
            .ok_or_else(|| SiktError::YouTube(format!("Video {} not found", video_id)))
    }

    /// Run `search.list` and collect the matching video IDs.
    async fn search_ids(&self, query: &str, max_results: u32) -> Result<Vec<String>> {
        let max_results = max_results.to_string();
        let response = self
            .http
            .get(format!("{}/search", API_BASE))
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("part", "id"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("order", "relevance"),
                ("relevanceLanguage", self.relevance_language.as_str()),
                ("videoDuration", "medium"),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: SearchResponse = response.json().await?;

        Ok(body
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    /// Run `videos.list` for full details on the given IDs.
    async fn fetch_details(&self, video_ids: &[String]) -> Result<Vec<CandidateVideo>> {
        let ids = video_ids.join(",");
        let response = self
            .http
            .get(format!("{}/videos", API_BASE))
            .query(&[
                ("key", self.api_key.as_str()),
                ("part", "snippet,statistics,contentDetails"),
                ("id", ids.as_str()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: VideosResponse = response.json().await?;

        let videos = body
            .items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet.unwrap_or_default();
                let stats = item.statistics.unwrap_or_default();
                let content = item.content_details.unwrap_or_default();

                CandidateVideo {
                    id: item.id,
                    title: snippet.title,
                    description: truncate_chars(&snippet.description, MAX_DESCRIPTION_CHARS),
                    channel: snippet.channel_title,
                    published_at: snippet
                        .published_at
                        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                        .map(|dt| dt.with_timezone(&Utc)),
                    views: parse_count(stats.view_count.as_deref()),
                    likes: parse_count(stats.like_count.as_deref()),
                    duration: content.duration.unwrap_or_default(),
                    thumbnail_url: snippet.thumbnails.and_then(|t| t.high).map(|h| h.url),
                }
            })
            .collect::<Vec<_>>();

        debug!("Fetched details for {} videos", videos.len());
        Ok(videos)
    }

    /// Map a non-success response into a YouTube error with the body text.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(SiktError::YouTube(format!(
            "API returned {}: {}",
            status,
            truncate_chars(&body, 300)
        )))
    }
}

/// The API returns counts as decimal strings.
fn parse_count(count: Option<&str>) -> u64 {
    count.and_then(|c| c.parse().ok()).unwrap_or(0)
}

/// Truncate a string to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    snippet: Option<Snippet>,
    statistics: Option<Statistics>,
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    published_at: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ContentDetails {
    duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("1234567")), 1_234_567);
        assert_eq!(parse_count(Some("not-a-number")), 0);
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte characters count as one
        assert_eq!(truncate_chars("Türzarge", 3), "Tür");
    }

    #[test]
    fn test_video_item_deserialization() {
        let json = r#"{
            "id": "jcvno6SMrBM",
            "snippet": {
                "title": "Rigips Decke montieren",
                "description": "Anleitung",
                "channelTitle": "SAINT-GOBAIN RIGIPS",
                "publishedAt": "2023-04-12T09:00:00Z",
                "thumbnails": {"high": {"url": "https://example.com/hq.jpg"}}
            },
            "statistics": {"viewCount": "1200000", "likeCount": "8000"},
            "contentDetails": {"duration": "PT12M30S"}
        }"#;

        let item: VideoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "jcvno6SMrBM");
        let snippet = item.snippet.unwrap();
        assert_eq!(snippet.channel_title, "SAINT-GOBAIN RIGIPS");
        assert_eq!(
            item.statistics.unwrap().view_count.as_deref(),
            Some("1200000")
        );
    }
}

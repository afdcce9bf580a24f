//! Pipeline orchestrator for Sikt.
//!
//! Coordinates a curation run from search to the rewritten site script.

use crate::config::{DomainConfig, DomainRegistry, Settings};
use crate::curation::{annotate, merge_collections};
use crate::describe::{Describer, OpenAiDescriber, PassthroughDescriber, VideoBrief};
use crate::error::{Result, SiktError};
use crate::site;
use crate::store::{CuratedVideo, SqliteStore};
use crate::youtube::{CandidateVideo, YoutubeClient};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// The main orchestrator for a curation run.
pub struct Curator {
    settings: Settings,
    domain_key: String,
    domain: DomainConfig,
    youtube: YoutubeClient,
    store: SqliteStore,
}

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct CurateOptions {
    /// Maximum videos to add; defaults to the configured value.
    pub max_videos: Option<usize>,
    /// Skip all writes, only report what would happen.
    pub dry_run: bool,
    /// Skip the LLM call and copy source descriptions.
    pub skip_descriptions: bool,
}

/// Result of a curation run.
#[derive(Debug)]
pub struct CurationReport {
    /// Domain that was curated.
    pub domain: String,
    /// New candidates discovered across all queries.
    pub discovered: usize,
    /// The videos selected after scoring, best first.
    pub selected: Vec<CuratedVideo>,
    /// Collection size after merging.
    pub total_after_merge: usize,
    /// Whether writes were skipped.
    pub dry_run: bool,
}

impl Curator {
    /// Create a curator for the given domain.
    ///
    /// Fails before any network call if the YouTube API key is missing.
    pub fn new(settings: Settings, domain_key: &str) -> Result<Self> {
        let registry = DomainRegistry::load(&Settings::domains_path())?;
        let domain = registry.get(domain_key)?.clone();
        domain.validate()?;

        let api_key = settings.youtube.resolved_api_key().ok_or_else(|| {
            SiktError::Config(
                "YOUTUBE_API_KEY not set. Export it or add it to the config file.".to_string(),
            )
        })?;

        let youtube = YoutubeClient::new(&api_key, &settings.youtube.relevance_language)?;
        let store = SqliteStore::new(&settings.sqlite_path())?;

        Ok(Self {
            settings,
            domain_key: domain_key.to_string(),
            domain,
            youtube,
            store,
        })
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the curation pipeline: search, score, describe, merge, write.
    #[instrument(skip(self, opts), fields(domain = %self.domain_key))]
    pub async fn run(&self, opts: CurateOptions) -> Result<CurationReport> {
        let max_videos = opts.max_videos.unwrap_or(self.settings.curation.max_videos);

        // Previously persisted collection and the set of known IDs
        let existing = self.store.load(&self.domain_key)?;
        let mut seen: HashSet<String> = existing.iter().map(|v| v.id.clone()).collect();

        // First run against a site that predates the store: its entries are
        // known IDs even though they are not in the collection yet.
        let script_path = self.settings.script_path();
        if existing.is_empty() && script_path.exists() {
            let content = std::fs::read_to_string(&script_path)?;
            seen.extend(site::extract_video_ids(&content));
        }
        info!("Existing videos: {}", seen.len());

        // Discover new candidates, over-fetching so weak results can go
        let target = max_videos * self.settings.curation.overfetch_factor;
        let candidates = self.discover(&mut seen, target).await;
        info!("Found {} new candidates", candidates.len());

        if candidates.is_empty() {
            return Ok(CurationReport {
                domain: self.domain_key.clone(),
                discovered: 0,
                selected: Vec::new(),
                total_after_merge: existing.len(),
                dry_run: opts.dry_run,
            });
        }

        // Score and categorize, then keep the best
        let discovered = candidates.len();
        let mut scored: Vec<CuratedVideo> = candidates
            .iter()
            .map(|c| annotate(c, &self.domain))
            .collect();
        scored.sort_by(by_rating_then_views);
        scored.truncate(max_videos);

        // One batched description call, degrading to source text
        let mut selected = scored;
        self.describe(&mut selected, opts.skip_descriptions).await;

        let merged = merge_collections(
            existing,
            selected.clone(),
            self.settings.curation.per_category_cap,
            &self.domain.fallback_category,
        );

        if opts.dry_run {
            info!("Dry run, skipping writes");
        } else {
            self.store.replace(&self.domain_key, &merged)?;
            site::write_site(&script_path, &merged)?;
        }

        Ok(CurationReport {
            domain: self.domain_key.clone(),
            discovered,
            selected,
            total_after_merge: merged.len(),
            dry_run: opts.dry_run,
        })
    }

    /// Add one specific video to the collection by ID.
    ///
    /// Fetches, annotates, and merges the video like a regular run, but
    /// without searching or the LLM call. The normal merge rules apply, so
    /// a full category can still push the video out again.
    #[instrument(skip(self), fields(domain = %self.domain_key))]
    pub async fn add(&self, video_id: &str, dry_run: bool) -> Result<CuratedVideo> {
        if !is_video_id(video_id) {
            return Err(SiktError::InvalidInput(format!(
                "Not a YouTube video ID: {}",
                video_id
            )));
        }

        let candidate = self.youtube.video(video_id).await?;
        let video = annotate(&candidate, &self.domain);

        let existing = self.store.load(&self.domain_key)?;
        let merged = merge_collections(
            existing,
            vec![video.clone()],
            self.settings.curation.per_category_cap,
            &self.domain.fallback_category,
        );

        if dry_run {
            info!("Dry run, skipping writes");
        } else {
            self.store.replace(&self.domain_key, &merged)?;
            site::write_site(&self.settings.script_path(), &merged)?;
        }

        Ok(video)
    }

    /// Run the domain's queries, collecting unseen candidates.
    ///
    /// A failed query is logged and skipped; the run degrades rather than
    /// aborts (quota exhaustion should still produce a result from earlier
    /// queries).
    async fn discover(&self, seen: &mut HashSet<String>, target: usize) -> Vec<CandidateVideo> {
        let mut candidates = Vec::new();

        for query in &self.domain.queries {
            if candidates.len() >= target {
                break;
            }

            info!("Searching: {}", query);
            let results = match self
                .youtube
                .search(query, self.settings.youtube.results_per_query)
                .await
            {
                Ok(results) => results,
                Err(e) => {
                    warn!("Search failed for {:?}: {}", query, e);
                    continue;
                }
            };

            for video in results {
                if seen.insert(video.id.clone()) {
                    candidates.push(video);
                }
            }
        }

        candidates
    }

    /// Fill in bilingual descriptions for the selection.
    ///
    /// Uses the configured LLM unless disabled; any failure falls back to
    /// copying the source description into both language slots.
    async fn describe(&self, selection: &mut [CuratedVideo], skip: bool) {
        let max_chars = self.settings.descriptions.max_chars;

        let briefs: Vec<VideoBrief> = selection
            .iter()
            .map(|v| VideoBrief {
                title: v.title.clone(),
                channel: v.channel.clone(),
                views: v.views,
                description: v.description_de.clone(),
            })
            .collect();

        let use_llm = !skip
            && self.settings.descriptions.enabled
            && std::env::var("OPENAI_API_KEY").map(|k| !k.is_empty()).unwrap_or(false);

        let descriptions = if use_llm {
            let describer = OpenAiDescriber::new(&self.settings.descriptions.model, max_chars);
            match describer.describe_batch(&briefs).await {
                Ok(descriptions) => descriptions,
                Err(e) => {
                    warn!("Description generation failed, using source text: {}", e);
                    passthrough(&briefs, max_chars).await
                }
            }
        } else {
            if !skip && self.settings.descriptions.enabled {
                warn!("OPENAI_API_KEY not set, using source descriptions");
            }
            passthrough(&briefs, max_chars).await
        };

        for (video, text) in selection.iter_mut().zip(descriptions) {
            video.description_de = text.de;
            video.description_en = text.en;
        }
    }
}

async fn passthrough(
    briefs: &[VideoBrief],
    max_chars: usize,
) -> Vec<crate::describe::BilingualText> {
    PassthroughDescriber::new(max_chars)
        .describe_batch(briefs)
        .await
        .unwrap_or_default()
}

/// Best rating first, view count as tie breaker.
fn by_rating_then_views(a: &CuratedVideo, b: &CuratedVideo) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then(b.views.cmp(&a.views))
}

/// YouTube video IDs are 11 characters from [A-Za-z0-9_-].
fn is_video_id(input: &str) -> bool {
    input.len() == 11
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::test_support::curated;

    #[test]
    fn test_is_video_id() {
        assert!(is_video_id("dQw4w9WgXcQ"));
        assert!(is_video_id("Q0DrHFNzLiQ"));
        assert!(!is_video_id("too-short"));
        assert!(!is_video_id("https://youtu.be/dQw4w9WgXcQ"));
        assert!(!is_video_id("dQw4w9WgXc!"));
    }

    #[test]
    fn test_sort_by_rating_then_views() {
        let mut a = curated("a", 4.5, "decken");
        a.views = 100;
        let mut b = curated("b", 4.5, "decken");
        b.views = 10_000;
        let c = curated("c", 4.9, "decken");

        let mut videos = vec![a, b, c];
        videos.sort_by(by_rating_then_views);

        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}

//! Trust scoring, categorization, and collection merging.
//!
//! All functions in this module are pure: they take the domain configuration
//! explicitly and hold no state of their own.

mod categorize;
mod merge;
mod score;

pub use categorize::categorize;
pub use merge::merge_collections;
pub use score::trust_score;

use crate::config::DomainConfig;
use crate::store::CuratedVideo;
use crate::youtube::CandidateVideo;
use chrono::Utc;

/// Annotate a candidate with its trust score and category, producing a
/// curated record.
///
/// The English title and both description slots start from the source
/// material; the describe step may replace the descriptions later.
pub fn annotate(candidate: &CandidateVideo, domain: &DomainConfig) -> CuratedVideo {
    let rating = trust_score(candidate, domain);
    let category = categorize(&candidate.title, &candidate.description, domain);

    CuratedVideo {
        id: candidate.id.clone(),
        title: candidate.title.clone(),
        title_en: candidate.title.clone(),
        description_de: candidate.description.clone(),
        description_en: candidate.description.clone(),
        channel: candidate.channel.clone(),
        views: candidate.views,
        likes: candidate.likes,
        duration_minutes: candidate.duration_minutes(),
        rating,
        category,
        published_at: candidate.published_at,
        curated_at: Utc::now(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::DomainRegistry;

    pub fn trockenbau() -> DomainConfig {
        DomainRegistry::builtin().get("trockenbau").unwrap().clone()
    }

    pub fn candidate(id: &str, title: &str, channel: &str, views: u64, duration: &str) -> CandidateVideo {
        CandidateVideo {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            channel: channel.to_string(),
            published_at: None,
            views,
            likes: 0,
            duration: duration.to_string(),
            thumbnail_url: None,
        }
    }

    pub fn curated(id: &str, rating: f64, category: &str) -> CuratedVideo {
        CuratedVideo {
            id: id.to_string(),
            title: format!("Video {}", id),
            title_en: format!("Video {}", id),
            description_de: String::new(),
            description_en: String::new(),
            channel: "Kanal".to_string(),
            views: 1_000,
            likes: 10,
            duration_minutes: 10,
            rating,
            category: category.to_string(),
            published_at: None,
            curated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_annotate_sets_rating_and_category() {
        let domain = trockenbau();
        let c = candidate("x1", "Decke abhängen Anleitung", "Knauf DIY", 250_000, "PT12M");

        let video = annotate(&c, &domain);
        assert_eq!(video.id, "x1");
        assert_eq!(video.category, "decken");
        assert!((4.0..=5.0).contains(&video.rating));
        assert_eq!(video.title_en, video.title);
        assert_eq!(video.duration_minutes, 12);
    }
}

//! Deduplication and merging of curated collections.

use crate::store::CuratedVideo;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Merge newly curated videos into the persisted collection.
///
/// Deduplicates by video ID with last-write-wins semantics: a new video that
/// shares an ID with a persisted one replaces it in place, regardless of
/// score. Each category then keeps only its `per_category_cap` best-rated
/// videos, and the surviving set is returned sorted by rating descending.
/// Both sorts are stable, so equal ratings keep their relative order.
///
/// Videos without an ID cannot be deduplicated and are dropped; videos
/// without a category are assigned `fallback_category` before partitioning.
pub fn merge_collections(
    persisted: Vec<CuratedVideo>,
    incoming: Vec<CuratedVideo>,
    per_category_cap: usize,
    fallback_category: &str,
) -> Vec<CuratedVideo> {
    // Identifier-keyed map; overwriting keeps the original position so the
    // later stable sorts are well-defined.
    let mut ordered: Vec<CuratedVideo> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for mut video in persisted.into_iter().chain(incoming) {
        if video.id.is_empty() {
            continue;
        }
        if video.category.is_empty() {
            video.category = fallback_category.to_string();
        }

        match index_by_id.get(&video.id) {
            Some(&at) => ordered[at] = video,
            None => {
                index_by_id.insert(video.id.clone(), ordered.len());
                ordered.push(video);
            }
        }
    }

    // Partition by category, preserving first-seen category order
    let mut buckets: Vec<(String, Vec<CuratedVideo>)> = Vec::new();
    for video in ordered {
        match buckets.iter_mut().find(|(cat, _)| *cat == video.category) {
            Some((_, bucket)) => bucket.push(video),
            None => buckets.push((video.category.clone(), vec![video])),
        }
    }

    // Cap each category at its best-rated entries
    let mut merged: Vec<CuratedVideo> = Vec::new();
    for (_, mut bucket) in buckets {
        bucket.sort_by(by_rating_desc);
        bucket.truncate(per_category_cap);
        merged.extend(bucket);
    }

    merged.sort_by(by_rating_desc);
    merged
}

fn by_rating_desc(a: &CuratedVideo, b: &CuratedVideo) -> Ordering {
    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::test_support::curated;

    #[test]
    fn test_disjoint_merge_keeps_everything_under_cap() {
        let persisted = vec![curated("a", 4.5, "decken"), curated("b", 4.2, "waende")];
        let incoming = vec![curated("c", 4.8, "decken"), curated("d", 4.1, "spachteln")];

        let merged = merge_collections(persisted, incoming, 5, "grundlagen");
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_last_write_wins_by_id() {
        let persisted = vec![curated("a", 4.9, "decken")];
        let mut update = curated("a", 4.1, "decken");
        update.title = "Updated".to_string();

        let merged = merge_collections(persisted, vec![update], 5, "grundlagen");
        assert_eq!(merged.len(), 1);
        // The new entry replaces the old one even though it scores lower
        assert_eq!(merged[0].rating, 4.1);
        assert_eq!(merged[0].title, "Updated");
    }

    #[test]
    fn test_per_category_cap_keeps_best() {
        // Two "basics" videos, cap 1: only the better one survives
        let incoming = vec![curated("A", 4.9, "basics"), curated("B", 4.2, "basics")];

        let merged = merge_collections(Vec::new(), incoming, 1, "basics");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "A");
    }

    #[test]
    fn test_cap_applies_per_category() {
        let incoming = vec![
            curated("a", 4.9, "decken"),
            curated("b", 4.8, "decken"),
            curated("c", 4.7, "decken"),
            curated("d", 4.1, "waende"),
        ];

        let merged = merge_collections(Vec::new(), incoming, 2, "grundlagen");
        assert_eq!(merged.len(), 3);
        assert!(merged.iter().all(|v| v.id != "c"));
    }

    #[test]
    fn test_result_sorted_by_rating_descending() {
        let incoming = vec![
            curated("low", 4.1, "decken"),
            curated("high", 4.9, "waende"),
            curated("mid", 4.5, "spachteln"),
        ];

        let merged = merge_collections(Vec::new(), incoming, 5, "grundlagen");
        let ids: Vec<&str> = merged.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_equal_ratings_keep_original_order() {
        let incoming = vec![
            curated("first", 4.5, "decken"),
            curated("second", 4.5, "waende"),
            curated("third", 4.5, "decken"),
        ];

        let merged = merge_collections(Vec::new(), incoming, 5, "grundlagen");
        let ids: Vec<&str> = merged.iter().map(|v| v.id.as_str()).collect();
        // Stable sorts: category partitioning groups decken first, then waende
        assert_eq!(ids, vec!["first", "third", "second"]);
    }

    #[test]
    fn test_blank_id_is_dropped() {
        let incoming = vec![curated("", 4.9, "decken"), curated("a", 4.2, "decken")];

        let merged = merge_collections(Vec::new(), incoming, 5, "grundlagen");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "a");
    }

    #[test]
    fn test_blank_category_gets_fallback() {
        let incoming = vec![curated("a", 4.2, "")];

        let merged = merge_collections(Vec::new(), incoming, 5, "grundlagen");
        assert_eq!(merged[0].category, "grundlagen");
    }

    #[test]
    fn test_resubmission_then_resort() {
        // Re-submitting a persisted video with a new score re-ranks it
        let persisted = vec![curated("a", 4.9, "decken"), curated("b", 4.5, "decken")];
        let incoming = vec![curated("a", 4.1, "decken")];

        let merged = merge_collections(persisted, incoming, 5, "grundlagen");
        let ids: Vec<&str> = merged.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

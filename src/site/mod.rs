//! Static site data rendering.
//!
//! Renders the curated collection as the JavaScript array literal embedded
//! in the site's `script.js`, and splices it into an existing script by
//! marker match. The persisted store stays the source of truth; this module
//! only produces the presentation format.

mod render;
mod splice;

pub use render::{format_views, render_data_array};
pub use splice::{extract_video_ids, splice_data_array, splice_date_comment};

use crate::error::Result;
use crate::store::CuratedVideo;
use std::path::Path;
use tracing::info;

/// Render the collection and write it into the site script.
///
/// An existing script keeps everything around the embedded array; a missing
/// script is created fresh with just the date comment and the array.
pub fn write_site(path: &Path, videos: &[CuratedVideo]) -> Result<()> {
    let array_js = render_data_array(videos);
    let date = chrono::Local::now().format("%d. %B %Y").to_string();

    let content = if path.exists() {
        let existing = std::fs::read_to_string(path)?;
        splice_date_comment(&splice_data_array(&existing, &array_js), &date)
    } else {
        format!("// KURATIERTE Videos ({})\nconst videos = {};\n", date, array_js)
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    info!("Wrote {} videos to {:?}", videos.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::test_support::curated;
    use std::fs;

    #[test]
    fn test_write_site_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.js");

        write_site(&path, &[curated("newvideo001", 4.5, "decken")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// KURATIERTE Videos ("));
        assert_eq!(extract_video_ids(&content), vec!["newvideo001"]);
    }

    #[test]
    fn test_write_site_updates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.js");

        fs::write(
            &path,
            "// KURATIERTE Videos (01. January 2026)\nconst videos = [\n  {youtubeId:\"oldvideo001\"}\n];\nconst CATEGORIES = [];\n",
        )
        .unwrap();

        write_site(&path, &[curated("newvideo001", 4.5, "decken")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(extract_video_ids(&content), vec!["newvideo001"]);
        assert!(content.contains("const CATEGORIES = [];"));
        assert!(!content.contains("01. January 2026"));
    }
}

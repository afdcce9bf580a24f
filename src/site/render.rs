//! Rendering curated videos as embedded JavaScript data.

use crate::store::CuratedVideo;

/// Render the collection as a JavaScript array literal.
///
/// One flat record per video: bilingual title and description, rating with
/// one decimal place, formatted view string, category key, video ID, and
/// channel name.
pub fn render_data_array(videos: &[CuratedVideo]) -> String {
    let entries = videos
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join(",\n");

    format!("[\n{}\n]", entries)
}

fn render_entry(video: &CuratedVideo) -> String {
    format!(
        "  {{title:{{de:\"{}\",en:\"{}\"}},description:{{de:\"{}\",en:\"{}\"}},rating:{:.1},views:\"{}\",category:\"{}\",youtubeId:\"{}\",channel:\"{}\"}}",
        escape_js(&video.title),
        escape_js(&video.title_en),
        escape_js(&video.description_de),
        escape_js(&video.description_en),
        video.rating,
        format_views(video.views),
        escape_js(&video.category),
        escape_js(&video.id),
        escape_js(&video.channel),
    )
}

/// Escape a string for embedding in a double-quoted JS literal.
fn escape_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a view count for display: 1234567 -> "1.2M", 15000 -> "15K".
///
/// Rounds half away from zero, so 1,250,000 renders as "1.3M".
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        let millions = (views as f64 / 100_000.0).round() / 10.0;
        format!("{:.1}M", millions)
    } else if views >= 1_000 {
        let thousands = (views as f64 / 1_000.0).round();
        format!("{:.0}K", thousands)
    } else {
        views.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::test_support::curated;
    use crate::site::extract_video_ids;

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(1_250_000), "1.3M");
        assert_eq!(format_views(2_000_000), "2.0M");
        assert_eq!(format_views(950), "950");
        assert_eq!(format_views(15_000), "15K");
        assert_eq!(format_views(369_400), "369K");
        assert_eq!(format_views(0), "0");
    }

    #[test]
    fn test_render_entry_shape() {
        let mut video = curated("jcvno6SMrBM", 4.9, "dachausbau");
        video.title = "Dämmung verlegen".to_string();
        video.views = 1_200_000;

        let rendered = render_data_array(&[video]);
        assert!(rendered.starts_with("[\n"));
        assert!(rendered.ends_with("\n]"));
        assert!(rendered.contains("rating:4.9"));
        assert!(rendered.contains("views:\"1.2M\""));
        assert!(rendered.contains("youtubeId:\"jcvno6SMrBM\""));
        assert!(rendered.contains("category:\"dachausbau\""));
    }

    #[test]
    fn test_escape_js() {
        assert_eq!(escape_js(r#"Sagt "Hallo""#), r#"Sagt \"Hallo\""#);
        assert_eq!(escape_js("a\\b"), "a\\\\b");
        assert_eq!(escape_js("zwei\nZeilen"), "zwei\\nZeilen");
    }

    #[test]
    fn test_render_extract_round_trip() {
        let videos = vec![
            curated("jcvno6SMrBM", 5.0, "dachausbau"),
            curated("ICHh-_6RJNA", 4.7, "waende"),
            curated("QMZr-YODjHs", 4.3, "decken"),
        ];

        let rendered = render_data_array(&videos);
        let ids = extract_video_ids(&rendered);

        let expected: Vec<String> = videos.iter().map(|v| v.id.clone()).collect();
        assert_eq!(ids, expected);
    }
}

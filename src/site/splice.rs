//! Splicing rendered data into the site script.

use regex::{NoExpand, Regex};
use std::sync::OnceLock;

fn array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy: the video array is the first array statement in the
    // script and must not swallow later arrays.
    RE.get_or_init(|| Regex::new(r"const videos = \[[\s\S]*?\];").expect("Invalid regex"))
}

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"// KURATIERTE Videos.*").expect("Invalid regex"))
}

fn id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"youtubeId:"([^"]+)""#).expect("Invalid regex"))
}

/// Replace the embedded video array in the script content.
///
/// The region from `const videos = [` to the next `];` is replaced with the
/// rendered array. When no marker exists, the array statement is prepended
/// instead, never an error.
pub fn splice_data_array(content: &str, array_js: &str) -> String {
    let statement = format!("const videos = {};", array_js);

    if array_regex().is_match(content) {
        array_regex()
            .replace(content, NoExpand(&statement))
            .into_owned()
    } else {
        format!("{}\n\n{}", statement, content)
    }
}

/// Rewrite the curation date comment line.
///
/// A missing comment is a silent no-op; the comment is informational only.
pub fn splice_date_comment(content: &str, date: &str) -> String {
    let comment = format!("// KURATIERTE Videos ({})", date);

    if comment_regex().is_match(content) {
        comment_regex()
            .replace(content, NoExpand(&comment))
            .into_owned()
    } else {
        content.to_string()
    }
}

/// Extract the video IDs embedded in rendered script content, in order.
pub fn extract_video_ids(content: &str) -> Vec<String> {
    id_regex()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', () => {
    // KURATIERTE Videos (01. January 2026)
    const videos = [
  {title:{de:"Alt",en:"Old"},rating:4.2,youtubeId:"oldvideo001",channel:"Knauf"}
];

    const CATEGORIES = ['grundlagen', 'decken'];
});
"#;

    #[test]
    fn test_splice_replaces_existing_array() {
        let spliced = splice_data_array(SCRIPT, "[\n  {youtubeId:\"newvideo001\"}\n]");

        assert!(spliced.contains("newvideo001"));
        assert!(!spliced.contains("oldvideo001"));
        // Later arrays stay untouched
        assert!(spliced.contains("const CATEGORIES = ['grundlagen', 'decken'];"));
    }

    #[test]
    fn test_splice_prepends_when_marker_missing() {
        let content = "console.log('empty site');\n";
        let spliced = splice_data_array(content, "[\n]");

        assert!(spliced.starts_with("const videos = [\n];"));
        assert!(spliced.contains("console.log('empty site');"));
    }

    #[test]
    fn test_splice_handles_dollar_signs() {
        let spliced = splice_data_array(SCRIPT, "[\n  {title:{de:\"$100 sparen\"}}\n]");
        assert!(spliced.contains("$100 sparen"));
    }

    #[test]
    fn test_date_comment_replaced() {
        let spliced = splice_date_comment(SCRIPT, "06. August 2026");
        assert!(spliced.contains("// KURATIERTE Videos (06. August 2026)"));
        assert!(!spliced.contains("01. January 2026"));
    }

    #[test]
    fn test_date_comment_absent_is_noop() {
        let content = "const videos = [];\n";
        let spliced = splice_date_comment(content, "06. August 2026");
        assert_eq!(spliced, content);
    }

    #[test]
    fn test_extract_video_ids_in_order() {
        let content = r#"a youtubeId:"first01" b youtubeId:"second02" c"#;
        assert_eq!(extract_video_ids(content), vec!["first01", "second02"]);
    }

    #[test]
    fn test_extract_from_empty_content() {
        assert!(extract_video_ids("").is_empty());
    }
}

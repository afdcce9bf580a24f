//! ISO 8601 duration parsing.

use regex::Regex;
use std::sync::OnceLock;

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("Invalid regex")
    })
}

/// Parse an ISO 8601 duration code (e.g. "PT1H5M30S") into whole minutes.
///
/// Seconds round up to a full minute above 30. Malformed or non-matching
/// input yields 0 rather than an error.
pub fn parse_duration_minutes(duration: &str) -> u32 {
    let Some(caps) = duration_regex().captures(duration) else {
        return 0;
    };

    let component = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };

    let hours = component(1);
    let minutes = component(2);
    let seconds = component(3);

    hours * 60 + minutes + if seconds > 30 { 1 } else { 0 }
}

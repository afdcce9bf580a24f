//! Pre-flight checks before expensive operations.
//!
//! Validates that credentials are present before starting a run that would
//! otherwise fail midway.

use crate::config::Settings;
use crate::error::{Result, SiktError};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Curation requires a YouTube API key.
    Curate,
    /// Rendering and listing only need the local store.
    Render,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Curate => {
            check_youtube_key(settings)?;
        }
        Operation::Render => {
            // No credentials needed for local operations
        }
    }
    Ok(())
}

/// Check that a YouTube API key is configured.
fn check_youtube_key(settings: &Settings) -> Result<()> {
    match settings.youtube.resolved_api_key() {
        Some(_) => Ok(()),
        None => Err(SiktError::Config(
            "YOUTUBE_API_KEY not set. Export it with: export YOUTUBE_API_KEY='...' \
             or add it to the [youtube] section of the config file."
                .to_string(),
        )),
    }
}

/// Whether an OpenAI key is available for description generation.
///
/// Not a hard requirement: the pipeline degrades to source descriptions.
pub fn has_openai_key() -> bool {
    std::env::var("OPENAI_API_KEY")
        .map(|k| !k.is_empty())
        .unwrap_or(false)
}

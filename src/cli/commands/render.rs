//! Render command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::site;
use crate::store::SqliteStore;
use anyhow::Result;

/// Run the render command: rewrite the site script from the store.
pub fn run_render(domain: Option<String>, settings: Settings) -> Result<()> {
    preflight::check(Operation::Render, &settings)?;

    let domain_key = domain.unwrap_or_else(|| settings.general.default_domain.clone());

    let store = SqliteStore::new(&settings.sqlite_path())?;
    let videos = store.load(&domain_key)?;

    if videos.is_empty() {
        Output::warning(&format!(
            "No curated videos for '{}'; the site script would be emptied. Nothing written.",
            domain_key
        ));
        return Ok(());
    }

    let script_path = settings.script_path();
    site::write_site(&script_path, &videos)?;

    Output::success(&format!(
        "Rendered {} videos to {}",
        videos.len(),
        script_path.display()
    ));

    Ok(())
}

//! Init command implementation.

use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use crate::store::SqliteStore;
use anyhow::Result;

/// Run the init command: write the default config and create the store.
pub fn run_init(settings: &Settings) -> Result<()> {
    Output::header("Initializing Sikt");

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config exists at {}", config_path.display()));
    } else {
        settings.save()?;
        Output::success(&format!("Wrote default config to {}", config_path.display()));
    }

    std::fs::create_dir_all(settings.data_dir())?;
    Output::success(&format!("Data directory: {}", settings.data_dir().display()));

    SqliteStore::new(&settings.sqlite_path())?;
    Output::success(&format!("Collection store: {}", settings.sqlite_path().display()));

    println!();
    if settings.youtube.resolved_api_key().is_none() {
        Output::warning("YOUTUBE_API_KEY not set; 'sikt curate' needs it.");
    }
    if !preflight::has_openai_key() {
        Output::info("OPENAI_API_KEY not set; descriptions will use YouTube text.");
    }
    Output::info("Run 'sikt doctor' to verify the setup.");

    Ok(())
}

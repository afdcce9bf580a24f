//! Add command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Curator;
use crate::site::format_views;
use anyhow::Result;

/// Run the add command: fetch one video by ID and merge it in.
pub async fn run_add(
    video_id: &str,
    domain: Option<String>,
    dry_run: bool,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Curate, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'sikt doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let domain_key = domain.unwrap_or_else(|| settings.general.default_domain.clone());
    let curator = Curator::new(settings, &domain_key)?;

    let spinner = Output::spinner(&format!("Fetching {}...", video_id));
    let result = curator.add(video_id, dry_run).await;
    spinner.finish_and_clear();

    match result {
        Ok(video) => {
            Output::video_row(
                video.rating,
                &format_views(video.views),
                &video.channel,
                &video.title,
            );
            if dry_run {
                Output::warning("Dry run: nothing written.");
            } else {
                Output::success(&format!("Added '{}' to {}", video.title, domain_key));
            }
        }
        Err(e) => {
            Output::error(&format!("Failed to add video: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

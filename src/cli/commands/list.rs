//! List command implementation.

use crate::cli::Output;
use crate::config::{DomainRegistry, Settings};
use crate::site::format_views;
use crate::store::SqliteStore;
use anyhow::Result;

/// Run the list command.
pub async fn run_list(domain: Option<String>, settings: Settings) -> Result<()> {
    let domain_key = domain.unwrap_or_else(|| settings.general.default_domain.clone());

    let registry = DomainRegistry::load(&Settings::domains_path())?;
    let domain_config = registry.get(&domain_key)?;

    let store = SqliteStore::new(&settings.sqlite_path())?;
    let videos = store.load(&domain_key)?;

    if videos.is_empty() {
        Output::info(&format!(
            "No curated videos for '{}' yet. Use 'sikt curate' to add some.",
            domain_key
        ));
        return Ok(());
    }

    Output::header(&format!(
        "{} ({} videos)",
        domain_config.name.de,
        videos.len()
    ));
    println!();

    for video in &videos {
        Output::video_row(
            video.rating,
            &format_views(video.views),
            &video.channel,
            &video.title,
        );
        let category = domain_config
            .category_name(&video.category)
            .map(|name| name.de.clone())
            .unwrap_or_else(|| video.category.clone());
        Output::kv("category", &category);
    }

    Ok(())
}

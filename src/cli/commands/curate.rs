//! Curate command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::{CurateOptions, Curator};
use crate::site::format_views;
use anyhow::Result;

/// Run the curate command.
pub async fn run_curate(
    domain: Option<String>,
    max_videos: Option<usize>,
    dry_run: bool,
    skip_descriptions: bool,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Curate, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'sikt doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let domain_key = domain.unwrap_or_else(|| settings.general.default_domain.clone());

    Output::header(&format!("Curating: {}", domain_key));
    Output::kv("Max videos", &max_videos.unwrap_or(settings.curation.max_videos).to_string());
    Output::kv("Mode", if dry_run { "dry-run" } else { "live" });
    Output::kv(
        "Descriptions",
        if skip_descriptions || !settings.descriptions.enabled {
            "disabled"
        } else if preflight::has_openai_key() {
            "enabled (1 batch call)"
        } else {
            "no OPENAI_API_KEY, using source text"
        },
    );
    println!();

    let curator = Curator::new(settings, &domain_key)?;

    let spinner = Output::spinner("Searching and scoring...");
    let result = curator
        .run(CurateOptions {
            max_videos,
            dry_run,
            skip_descriptions,
        })
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(report) => {
            if report.discovered == 0 {
                Output::warning("No new videos found.");
                return Ok(());
            }

            Output::success(&format!(
                "Discovered {} candidates, selected {}:",
                report.discovered,
                report.selected.len()
            ));
            println!();

            for video in &report.selected {
                Output::video_row(
                    video.rating,
                    &format_views(video.views),
                    &video.channel,
                    &video.title,
                );
            }

            println!();
            if report.dry_run {
                Output::warning(&format!(
                    "Dry run: collection would hold {} videos. Nothing written.",
                    report.total_after_merge
                ));
            } else {
                Output::success(&format!(
                    "Collection now holds {} videos.",
                    report.total_after_merge
                ));
            }
        }
        Err(e) => {
            Output::error(&format!("Curation failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

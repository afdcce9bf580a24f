//! Sikt CLI entry point.

use anyhow::Result;
use clap::Parser;
use sikt::cli::{commands, Cli, Commands};
use sikt::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("sikt={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Init => {
            commands::run_init(&settings)?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Curate {
            domain,
            max_videos,
            dry_run,
            skip_descriptions,
        } => {
            commands::run_curate(
                domain.clone(),
                *max_videos,
                *dry_run,
                *skip_descriptions,
                settings,
            )
            .await?;
        }

        Commands::Add {
            video_id,
            domain,
            dry_run,
        } => {
            commands::run_add(video_id, domain.clone(), *dry_run, settings).await?;
        }

        Commands::List { domain } => {
            commands::run_list(domain.clone(), settings).await?;
        }

        Commands::Domains => {
            commands::run_domains(settings)?;
        }

        Commands::Render { domain } => {
            commands::run_render(domain.clone(), settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}

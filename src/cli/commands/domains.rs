//! Domains command implementation.

use crate::cli::Output;
use crate::config::{DomainRegistry, Settings};
use anyhow::Result;

/// Run the domains command.
pub fn run_domains(settings: Settings) -> Result<()> {
    let registry = DomainRegistry::load(&Settings::domains_path())?;

    Output::header(&format!("Configured domains ({})", registry.len()));
    println!();

    for (key, domain) in registry.iter() {
        let marker = if *key == settings.general.default_domain {
            " (default)"
        } else {
            ""
        };
        Output::list_item(&format!(
            "{}{} - {} / {}",
            key, marker, domain.name.de, domain.name.en
        ));
        Output::kv("queries", &domain.queries.len().to_string());
        Output::kv("categories", &domain.categories.len().to_string());
        Output::kv("trusted channels", &domain.trust_channels.len().to_string());
    }

    println!();
    Output::info(&format!(
        "Add custom domains in {}",
        Settings::domains_path().display()
    ));

    Ok(())
}

//! Doctor command - verify credentials, configuration, and data paths.

use crate::cli::preflight;
use crate::cli::Output;
use crate::config::{DomainRegistry, Settings};
use crate::store::SqliteStore;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    hint: Option<String>,
}

#[derive(Debug, PartialEq)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Run the doctor command.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Sikt Doctor");
    println!();

    let checks = vec![
        check_youtube_key(settings),
        check_openai_key(),
        check_config(),
        check_domains(settings),
        check_store(settings),
        check_site(settings),
    ];

    let mut errors = 0;
    for check in &checks {
        let badge = match check.status {
            CheckStatus::Ok => style("ok").green().bold(),
            CheckStatus::Warning => style("warn").yellow().bold(),
            CheckStatus::Error => {
                errors += 1;
                style("fail").red().bold()
            }
        };
        println!("  [{:>4}] {}: {}", badge, style(&check.name).bold(), check.message);
        if let Some(hint) = &check.hint {
            println!("         {}", style(hint).dim());
        }
    }

    println!();
    if errors > 0 {
        Output::error(&format!("{} check(s) failed.", errors));
        anyhow::bail!("doctor found problems");
    }

    Output::success("All checks passed.");
    Ok(())
}

fn check_youtube_key(settings: &Settings) -> CheckResult {
    match settings.youtube.resolved_api_key() {
        Some(_) => CheckResult::ok("YouTube API key", "configured"),
        None => CheckResult::error(
            "YouTube API key",
            "not set",
            "export YOUTUBE_API_KEY='...' or add it to [youtube] in the config",
        ),
    }
}

fn check_openai_key() -> CheckResult {
    if preflight::has_openai_key() {
        CheckResult::ok("OpenAI API key", "configured")
    } else {
        CheckResult::warning(
            "OpenAI API key",
            "not set",
            "descriptions will fall back to YouTube text",
        )
    }
}

fn check_config() -> CheckResult {
    let path = Settings::default_config_path();
    if path.exists() {
        CheckResult::ok("Config file", &path.display().to_string())
    } else {
        CheckResult::warning(
            "Config file",
            "not found, using defaults",
            "run 'sikt init' to write it",
        )
    }
}

fn check_domains(settings: &Settings) -> CheckResult {
    let registry = match DomainRegistry::load(&Settings::domains_path()) {
        Ok(registry) => registry,
        Err(e) => {
            return CheckResult::error(
                "Domain registry",
                &format!("failed to load: {}", e),
                "check domains.toml for syntax errors",
            )
        }
    };

    for (key, domain) in registry.iter() {
        if let Err(e) = domain.validate() {
            return CheckResult::error(
                "Domain registry",
                &format!("domain '{}' is invalid: {}", key, e),
                "fix the domain definition",
            );
        }
    }

    match registry.get(&settings.general.default_domain) {
        Ok(_) => CheckResult::ok(
            "Domain registry",
            &format!("{} domain(s), all valid", registry.len()),
        ),
        Err(_) => CheckResult::error(
            "Domain registry",
            &format!("default domain '{}' not found", settings.general.default_domain),
            "set general.default_domain to a configured domain",
        ),
    }
}

fn check_store(settings: &Settings) -> CheckResult {
    match SqliteStore::new(&settings.sqlite_path()) {
        Ok(store) => {
            let count = store.count(&settings.general.default_domain).unwrap_or(0);
            CheckResult::ok(
                "Collection store",
                &format!("{} ({} videos)", settings.sqlite_path().display(), count),
            )
        }
        Err(e) => CheckResult::error(
            "Collection store",
            &format!("cannot open: {}", e),
            "check store.sqlite_path and permissions",
        ),
    }
}

fn check_site(settings: &Settings) -> CheckResult {
    let path = settings.script_path();
    if path.exists() {
        CheckResult::ok("Site script", &path.display().to_string())
    } else {
        CheckResult::warning(
            "Site script",
            &format!("{} does not exist yet", path.display()),
            "it will be created on the first live run",
        )
    }
}

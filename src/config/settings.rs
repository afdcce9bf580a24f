//! Configuration settings for Sikt.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub curation: CurationSettings,
    pub descriptions: DescriptionSettings,
    pub store: StoreSettings,
    pub site: SiteSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Domain curated when no --domain flag is given.
    pub default_domain: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.sikt".to_string(),
            default_domain: "trockenbau".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// YouTube Data API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// API key. The YOUTUBE_API_KEY environment variable takes precedence.
    pub api_key: Option<String>,
    /// Results requested per search query.
    pub results_per_query: u32,
    /// Relevance language hint passed to the search call.
    pub relevance_language: String,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            results_per_query: 10,
            relevance_language: "de".to_string(),
        }
    }
}

impl YoutubeSettings {
    /// Resolve the API key from the environment or the config file.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
    }
}

/// Curation pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationSettings {
    /// Maximum videos kept per category after merging.
    pub per_category_cap: usize,
    /// Default maximum number of videos to add per run.
    pub max_videos: usize,
    /// Search collects up to max_videos * overfetch_factor candidates
    /// before scoring, so weak results can be discarded.
    pub overfetch_factor: usize,
}

impl Default for CurationSettings {
    fn default() -> Self {
        Self {
            per_category_cap: 5,
            max_videos: 10,
            overfetch_factor: 2,
        }
    }
}

/// Bilingual description generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionSettings {
    /// Enable LLM-generated descriptions.
    pub enabled: bool,
    /// Chat model used for the single batched call.
    pub model: String,
    /// Maximum characters per generated description.
    pub max_chars: usize,
}

impl Default for DescriptionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gpt-4o-mini".to_string(),
            max_chars: 150,
        }
    }
}

/// Persisted collection store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Path to the SQLite database.
    pub sqlite_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            sqlite_path: "~/.sikt/videos.db".to_string(),
        }
    }
}

/// Static site output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Path to the site script carrying the embedded video array.
    pub script_path: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            script_path: "output/script.js".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SiktError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sikt")
            .join("config.toml")
    }

    /// Path to the optional user domain definitions, next to the config file.
    pub fn domains_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sikt")
            .join("domains.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded SQLite database path.
    pub fn sqlite_path(&self) -> PathBuf {
        Self::expand_path(&self.store.sqlite_path)
    }

    /// Get the expanded site script path.
    pub fn script_path(&self) -> PathBuf {
        Self::expand_path(&self.site.script_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.default_domain, "trockenbau");
        assert_eq!(settings.curation.per_category_cap, 5);
        assert_eq!(settings.curation.max_videos, 10);
        assert_eq!(settings.youtube.results_per_query, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml = r#"
            [curation]
            max_videos = 4
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.curation.max_videos, 4);
        assert_eq!(settings.curation.per_category_cap, 5);
        assert_eq!(settings.descriptions.model, "gpt-4o-mini");
    }
}

//! Domain registry: the topic domains Sikt can curate.
//!
//! A domain bundles everything the pipeline needs to know about a topic:
//! search queries, trusted channels, the category taxonomy, and clickbait
//! patterns. The registry ships with built-in domains and can be extended
//! with a `domains.toml` next to the configuration file. It is read-only
//! after loading and passed explicitly to the curation functions.

use crate::error::{Result, SiktError};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Display names for a bilingual label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilingualName {
    pub de: String,
    pub en: String,
}

/// One category of the domain taxonomy.
///
/// Categories are kept as an ordered list; the categorizer breaks ties in
/// favor of the earliest entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Stable category key used in the persisted collection and site data.
    pub key: String,
    /// Display name.
    pub name: BilingualName,
    /// Keywords matched as substrings against title + description.
    pub keywords: Vec<String>,
}

/// Configuration for one curated topic domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Display name.
    pub name: BilingualName,
    /// Search queries run against YouTube, in order.
    pub queries: Vec<String>,
    /// Channel names granted the trust bonus (substring match).
    pub trust_channels: Vec<String>,
    /// Category assigned when no keywords match.
    pub fallback_category: String,
    /// Ordered category taxonomy.
    pub categories: Vec<CategoryConfig>,
    /// Title patterns that incur the clickbait penalty.
    pub clickbait_patterns: Vec<String>,
}

impl DomainConfig {
    /// Whether a title matches any clickbait pattern, case-insensitively.
    ///
    /// Invalid patterns are skipped with a warning; a bad pattern must not
    /// take down a run.
    pub fn is_clickbait(&self, title: &str) -> bool {
        for pattern in &self.clickbait_patterns {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => {
                    if re.is_match(title) {
                        return true;
                    }
                }
                Err(e) => warn!("Skipping invalid clickbait pattern {:?}: {}", pattern, e),
            }
        }
        false
    }

    /// Look up a category's display name by key.
    pub fn category_name(&self, key: &str) -> Option<&BilingualName> {
        self.categories.iter().find(|c| c.key == key).map(|c| &c.name)
    }

    /// Validate the domain: non-empty queries and categories, a known
    /// fallback category, compilable clickbait patterns.
    pub fn validate(&self) -> Result<()> {
        if self.queries.is_empty() {
            return Err(SiktError::Config("Domain has no search queries".to_string()));
        }
        if self.categories.is_empty() {
            return Err(SiktError::Config("Domain has no categories".to_string()));
        }
        if !self.categories.iter().any(|c| c.key == self.fallback_category) {
            return Err(SiktError::Config(format!(
                "Fallback category {:?} is not in the taxonomy",
                self.fallback_category
            )));
        }
        for pattern in &self.clickbait_patterns {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    SiktError::Config(format!("Invalid clickbait pattern {:?}: {}", pattern, e))
                })?;
        }
        Ok(())
    }
}

/// The set of known domains, keyed by domain key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainRegistry {
    domains: BTreeMap<String, DomainConfig>,
}

impl DomainRegistry {
    /// Registry with only the built-in domains.
    pub fn builtin() -> Self {
        let mut domains = BTreeMap::new();
        domains.insert("trockenbau".to_string(), trockenbau());
        Self { domains }
    }

    /// Built-in domains overlaid with user definitions from a TOML file.
    ///
    /// User entries win over built-ins with the same key. A missing file is
    /// not an error.
    pub fn load(user_path: &Path) -> Result<Self> {
        let mut registry = Self::builtin();

        if user_path.exists() {
            let content = std::fs::read_to_string(user_path)?;
            let user: BTreeMap<String, DomainConfig> = toml::from_str(&content)?;
            for (key, domain) in user {
                registry.domains.insert(key, domain);
            }
        }

        Ok(registry)
    }

    /// Look up a domain by key.
    pub fn get(&self, key: &str) -> Result<&DomainConfig> {
        self.domains
            .get(key)
            .ok_or_else(|| SiktError::UnknownDomain(key.to_string()))
    }

    /// Iterate over (key, domain) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DomainConfig)> {
        self.domains.iter()
    }

    /// Number of registered domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Built-in drywall construction domain.
fn trockenbau() -> DomainConfig {
    let cat = |key: &str, de: &str, en: &str, keywords: &[&str]| CategoryConfig {
        key: key.to_string(),
        name: BilingualName {
            de: de.to_string(),
            en: en.to_string(),
        },
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    };

    DomainConfig {
        name: BilingualName {
            de: "Trockenbau".to_string(),
            en: "Drywall".to_string(),
        },
        queries: vec![
            "Trockenbau Anleitung Profi".to_string(),
            "Rigips Decke montieren Tutorial".to_string(),
            "Trockenbau Wand bauen Schritt für Schritt".to_string(),
            "Gipskarton spachteln Anleitung".to_string(),
            "Dachausbau Trockenbau Dämmung".to_string(),
            "Trockenbauwand selber bauen".to_string(),
            "Rigips schneiden und befestigen".to_string(),
        ],
        trust_channels: vec![
            "SAINT-GOBAIN RIGIPS".to_string(),
            "RIGIPS".to_string(),
            "Knauf".to_string(),
            "Knauf GmbH".to_string(),
            "Knauf DIY".to_string(),
            "HORNBACH".to_string(),
            "OBI".to_string(),
            "OBI Baumarkt".to_string(),
            "BAUHAUS".to_string(),
            "toom".to_string(),
            "toom Baumarkt".to_string(),
            "HELLWEG".to_string(),
            "Siniat".to_string(),
            "Fermacell".to_string(),
        ],
        fallback_category: "grundlagen".to_string(),
        categories: vec![
            cat(
                "grundlagen",
                "📚 Grundlagen",
                "📚 Basics",
                &["grundlagen", "basics", "einführung", "anfänger", "erste schritte"],
            ),
            cat(
                "waende",
                "🧱 Wände",
                "🧱 Walls",
                &["wand", "ständerwand", "trennwand", "vorwand", "wall"],
            ),
            cat(
                "decken",
                "⬆️ Decken",
                "⬆️ Ceilings",
                &["decke", "abhängen", "ceiling", "deckenmontage"],
            ),
            cat(
                "spachteln",
                "✨ Spachteln",
                "✨ Finishing",
                &["spachteln", "verspachteln", "fugen", "finish", "schleifen"],
            ),
            cat(
                "dachausbau",
                "🏠 Dachausbau",
                "🏠 Attic",
                &["dach", "dachausbau", "dachschräge", "dämmung", "attic"],
            ),
            cat(
                "tueren",
                "🚪 Türen",
                "🚪 Doors",
                &["tür", "türzarge", "door", "öffnung"],
            ),
            cat(
                "werkzeuge",
                "🛠️ Werkzeuge",
                "🛠️ Tools",
                &["werkzeug", "tool", "schrauben", "profile", "material"],
            ),
        ],
        clickbait_patterns: vec![
            r"krass".to_string(),
            r"dieser trick".to_string(),
            r"unfassbar".to_string(),
            r"niemand kennt".to_string(),
            r"geheim".to_string(),
            r"schockierend".to_string(),
            r"\d+\s*(euro|€).*gespart".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = DomainRegistry::builtin();
        assert!(!registry.is_empty());
        for (_, domain) in registry.iter() {
            domain.validate().unwrap();
        }
    }

    #[test]
    fn test_clickbait_matching_is_case_insensitive() {
        let registry = DomainRegistry::builtin();
        let domain = registry.get("trockenbau").unwrap();

        assert!(domain.is_clickbait("KRASSER Trockenbau Hack"));
        assert!(domain.is_clickbait("500 Euro gespart beim Dachausbau"));
        assert!(!domain.is_clickbait("Rigips Decke montieren"));
    }

    #[test]
    fn test_unknown_domain() {
        let registry = DomainRegistry::builtin();
        assert!(matches!(
            registry.get("fliesen"),
            Err(SiktError::UnknownDomain(_))
        ));
    }

    #[test]
    fn test_user_domain_toml() {
        let toml = r#"
            [fliesen]
            fallback_category = "grundlagen"
            queries = ["Fliesen verlegen Anleitung"]
            trust_channels = ["HORNBACH"]
            clickbait_patterns = []

            [fliesen.name]
            de = "Fliesen"
            en = "Tiles"

            [[fliesen.categories]]
            key = "grundlagen"
            keywords = ["grundlagen", "basics"]

            [fliesen.categories.name]
            de = "Grundlagen"
            en = "Basics"
        "#;

        let user: BTreeMap<String, DomainConfig> = toml::from_str(toml).unwrap();
        let domain = &user["fliesen"];
        domain.validate().unwrap();
        assert_eq!(domain.categories[0].key, "grundlagen");
    }
}

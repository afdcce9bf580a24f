//! Keyword-based categorization.

use crate::config::DomainConfig;

/// Assign a category key from the domain taxonomy.
///
/// Counts keyword substring hits in the case-folded title + description and
/// picks the category with the strictly greatest count. Ties keep the
/// earlier category in configuration order; zero hits fall back to the
/// domain's fallback category.
pub fn categorize(title: &str, description: &str, domain: &DomainConfig) -> String {
    let text = format!("{} {}", title, description).to_lowercase();

    let mut best_category = domain.fallback_category.as_str();
    let mut best_matches = 0;

    for category in &domain.categories {
        let matches = category
            .keywords
            .iter()
            .filter(|keyword| text.contains(&keyword.to_lowercase()))
            .count();

        if matches > best_matches {
            best_matches = matches;
            best_category = &category.key;
        }
    }

    best_category.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BilingualName, CategoryConfig, DomainConfig};
    use crate::curation::test_support::trockenbau;

    fn domain_with_categories(categories: Vec<(&str, Vec<&str>)>) -> DomainConfig {
        DomainConfig {
            name: BilingualName {
                de: "Test".to_string(),
                en: "Test".to_string(),
            },
            queries: vec!["test".to_string()],
            trust_channels: vec![],
            fallback_category: categories[0].0.to_string(),
            categories: categories
                .into_iter()
                .map(|(key, keywords)| CategoryConfig {
                    key: key.to_string(),
                    name: BilingualName {
                        de: key.to_string(),
                        en: key.to_string(),
                    },
                    keywords: keywords.into_iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            clickbait_patterns: vec![],
        }
    }

    #[test]
    fn test_most_hits_wins() {
        let domain = trockenbau();

        let category = categorize(
            "Decke abhängen mit Deckenmontage",
            "So hängen Sie eine Decke ab.",
            &domain,
        );
        assert_eq!(category, "decken");
    }

    #[test]
    fn test_zero_hits_falls_back() {
        let domain = trockenbau();
        assert_eq!(categorize("Unrelated video", "nothing here", &domain), "grundlagen");
    }

    #[test]
    fn test_tie_keeps_configuration_order() {
        let domain = domain_with_categories(vec![
            ("first", vec!["alpha"]),
            ("second", vec!["beta"]),
        ]);

        // One hit each: the earlier category wins the tie
        assert_eq!(categorize("alpha beta", "", &domain), "first");
    }

    #[test]
    fn test_deterministic() {
        let domain = trockenbau();
        let a = categorize("Gipskarton spachteln und schleifen", "Fugen Finish", &domain);
        let b = categorize("Gipskarton spachteln und schleifen", "Fugen Finish", &domain);
        assert_eq!(a, b);
        assert_eq!(a, "spachteln");
    }

    #[test]
    fn test_case_folding() {
        let domain = trockenbau();
        assert_eq!(categorize("DECKE ABHÄNGEN", "", &domain), "decken");
    }
}

//! Bilingual description generation.
//!
//! The describe step is a pluggable capability: one method taking a batch of
//! video briefs and returning a same-length batch of DE/EN text pairs. The
//! default implementation copies the source description; the OpenAI
//! implementation makes a single batched chat call.

mod openai;

pub use openai::OpenAiDescriber;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The facts about a video the describer may use.
#[derive(Debug, Clone)]
pub struct VideoBrief {
    pub title: String,
    pub channel: String,
    pub views: u64,
    /// Raw source description, used as fallback text.
    pub description: String,
}

/// A DE/EN text pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BilingualText {
    #[serde(default)]
    pub de: String,
    #[serde(default)]
    pub en: String,
}

/// Trait for bilingual description generation.
#[async_trait]
pub trait Describer: Send + Sync {
    /// Generate one DE/EN description pair per brief, in order.
    ///
    /// Implementations must return exactly `briefs.len()` entries.
    async fn describe_batch(&self, briefs: &[VideoBrief]) -> Result<Vec<BilingualText>>;
}

/// Default describer: copies the truncated source description into both
/// language slots.
pub struct PassthroughDescriber {
    max_chars: usize,
}

impl PassthroughDescriber {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Fallback text for a single brief.
    pub fn fallback_text(brief: &VideoBrief, max_chars: usize) -> BilingualText {
        let text: String = brief.description.chars().take(max_chars).collect();
        BilingualText {
            de: text.clone(),
            en: text,
        }
    }
}

impl Default for PassthroughDescriber {
    fn default() -> Self {
        Self::new(150)
    }
}

#[async_trait]
impl Describer for PassthroughDescriber {
    async fn describe_batch(&self, briefs: &[VideoBrief]) -> Result<Vec<BilingualText>> {
        Ok(briefs
            .iter()
            .map(|brief| Self::fallback_text(brief, self.max_chars))
            .collect())
    }
}

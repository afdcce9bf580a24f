//! OpenAI-backed description generation.

use super::{BilingualText, Describer, PassthroughDescriber, VideoBrief};
use crate::error::{Result, SiktError};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;
use tracing::{debug, instrument};

/// Timeout for the single batched chat call.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// OpenAI-based describer: one chat call per batch.
pub struct OpenAiDescriber {
    client: Client<OpenAIConfig>,
    model: String,
    max_chars: usize,
}

impl OpenAiDescriber {
    /// Create a describer using the given chat model.
    pub fn new(model: &str, max_chars: usize) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client: Client::with_config(OpenAIConfig::default()).with_http_client(http_client),
            model: model.to_string(),
            max_chars,
        }
    }

    fn build_prompt(&self, briefs: &[VideoBrief]) -> String {
        let video_list = briefs
            .iter()
            .enumerate()
            .map(|(i, b)| format!("{}. \"{}\" von {} ({} Views)", i + 1, b.title, b.channel, b.views))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Erstelle kurze, informative Beschreibungen für diese YouTube-Tutorials.\n\n\
             VIDEOS:\n{}\n\n\
             Antworte NUR mit einem JSON Array. Für jedes Video:\n\
             {{\"de\": \"Deutsche Beschreibung (max {} Zeichen)\", \"en\": \"English description (max {} chars)\"}}\n\n\
             JSON Array (exakt {} Einträge):",
            video_list,
            self.max_chars,
            self.max_chars,
            briefs.len()
        )
    }
}

/// Pull the first JSON array out of a model reply.
///
/// Replies often arrive wrapped in prose or code fences, so the array is
/// located by bracket match rather than parsing the whole reply.
fn parse_response(text: &str) -> Result<Vec<BilingualText>> {
    let re = Regex::new(r"(?s)\[.*\]").expect("Invalid regex");
    let json = re
        .find(text)
        .ok_or_else(|| SiktError::Describe("No JSON array in model reply".to_string()))?
        .as_str();

    let entries: Vec<BilingualText> = serde_json::from_str(json)?;
    Ok(entries)
}

#[async_trait]
impl Describer for OpenAiDescriber {
    #[instrument(skip(self, briefs), fields(count = briefs.len()))]
    async fn describe_batch(&self, briefs: &[VideoBrief]) -> Result<Vec<BilingualText>> {
        if briefs.is_empty() {
            return Ok(Vec::new());
        }

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(
                    "Du erstellst kurze, informative Video-Beschreibungen für Tutorials. \
                     Antworte NUR mit JSON.",
                )
                .build()
                .map_err(|e| SiktError::Describe(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(self.build_prompt(briefs))
                .build()
                .map_err(|e| SiktError::Describe(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(0.3)
            .build()
            .map_err(|e| SiktError::Describe(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            SiktError::OpenAI(format!("Description call failed: {}", e))
        })?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| SiktError::Describe("Empty response from model".to_string()))?;

        let entries = parse_response(text)?;
        debug!("Model returned {} of {} descriptions", entries.len(), briefs.len());

        // Pad a short reply with per-video fallback text; a longer reply is
        // simply cut to length.
        let descriptions = briefs
            .iter()
            .enumerate()
            .map(|(i, brief)| match entries.get(i) {
                Some(entry) if !entry.de.is_empty() || !entry.en.is_empty() => entry.clone(),
                _ => PassthroughDescriber::fallback_text(brief, self.max_chars),
            })
            .collect();

        Ok(descriptions)
    }
}

//! The lore adapter: prompt construction, one provider call, parse, validate.
//!
//! `LoreClient` is stateless between invocations. Each `fetch` sends exactly
//! one completion request; any failure is terminal for that request and comes
//! back classified as one of the three `LoreError` kinds.

use std::sync::Arc;

use tracing::debug;

use planeslore_core::chat::ChatMessage;
use planeslore_core::error::LoreError;
use planeslore_core::lore::LoreRecord;
use planeslore_core::provider::{ChatProvider, ChatRequest};

/// The fixed system instruction. It pins the exact record shape so the model
/// replies with machine-checkable JSON rather than prose.
const SYSTEM_PROMPT: &str = r#"You are an expert on Magic: The Gathering lore. When asked about a character, you must respond with ONLY valid JSON matching this exact schema:

{
  "name": "string",
  "plane": "string",
  "affiliations": ["strings"],
  "summary": "2-3 sentence summary of their lore and story arc",
  "nahiri_relationship": "attack_on_sight | enemies | neutral | friends | loved_ones",
  "aurelia_relationship": "attack_on_sight | enemies | neutral | friends | loved_ones"
}

Rules:
- No extra fields.
- No markdown.
- No commentary.
- Output valid JSON only.
- Relationship fields must contain exactly one of the allowed values: attack_on_sight, enemies, neutral, friends, or loved_ones.
- Use snake_case for relationship enum values.
- Avoid using emojis or special characters in the response."#;

/// Fetches character lore through a [`ChatProvider`].
pub struct LoreClient {
    provider: Arc<dyn ChatProvider>,
    model: String,
    temperature: f32,
}

impl LoreClient {
    pub fn new(provider: Arc<dyn ChatProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    /// Build the user instruction, embedding the character name verbatim.
    fn user_prompt(name: &str) -> String {
        format!("Provide the lore for the Magic: The Gathering character: {name}")
    }

    /// Fetch the lore record for a character.
    ///
    /// The caller passes an already-validated (non-empty, trimmed) name.
    /// Pipeline: prompt → one completion call → JSON parse → shape validate.
    pub async fn fetch(&self, name: &str) -> Result<LoreRecord, LoreError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(Self::user_prompt(name)),
            ],
            temperature: self.temperature,
            json_output: true,
        };

        let response = self.provider.complete(request).await?;

        debug!(
            provider = %self.provider.name(),
            reply_len = response.content.len(),
            "Received lore reply"
        );

        let value: serde_json::Value = serde_json::from_str(&response.content)
            .map_err(|e| LoreError::ParseFailure(e.to_string()))?;

        LoreRecord::from_value(value)
    }

    /// Reachability check against the underlying provider.
    pub async fn health_check(&self) -> Result<bool, planeslore_core::ProviderError> {
        self.provider.health_check().await
    }
}

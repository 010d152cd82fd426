//! ChatProvider trait — the abstraction over the generative-text backend.
//!
//! A ChatProvider knows how to send a fixed message exchange to a
//! chat-completions service and return the completion text. The lore adapter
//! calls `complete()` without knowing which backend is behind it, which is
//! also the seam the gateway tests use to inject stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::error::ProviderError;

/// Configuration for one completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// The messages of the exchange, in order
    pub messages: Vec<ChatMessage>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Ask the service to constrain its output to a JSON object
    #[serde(default)]
    pub json_output: bool,
}

fn default_temperature() -> f32 {
    0.3
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The completion text
    pub content: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,
}

/// The provider trait.
///
/// One outbound call per `complete()`; a failure is terminal for that call —
/// implementations must not retry internally.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a request and get the complete response.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;

    #[test]
    fn chat_request_defaults() {
        let json = r#"{"model":"gpt-4o-mini","messages":[]}"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert!((req.temperature - 0.3).abs() < f32::EPSILON);
        assert!(!req.json_output);
    }

    #[tokio::test]
    async fn default_health_check_is_ok() {
        struct Stub;

        #[async_trait]
        impl ChatProvider for Stub {
            fn name(&self) -> &str {
                "stub"
            }

            async fn complete(
                &self,
                request: ChatRequest,
            ) -> Result<ChatResponse, ProviderError> {
                assert_eq!(request.messages[0].role, Role::System);
                Ok(ChatResponse {
                    content: "{}".into(),
                    model: request.model,
                })
            }
        }

        assert!(Stub.health_check().await.unwrap());
    }
}

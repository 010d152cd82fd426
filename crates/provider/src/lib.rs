//! Provider implementations for Planeslore.
//!
//! - [`OpenAiCompatProvider`] — the wire client for any OpenAI-compatible
//!   `/v1/chat/completions` endpoint.
//! - [`LoreClient`] — the lore adapter: fixed prompt, one call, parse,
//!   shape-validate.

pub mod lore;
pub mod openai;

pub use lore::LoreClient;
pub use openai::OpenAiCompatProvider;

use std::sync::Arc;

use planeslore_config::AppConfig;
use planeslore_core::ProviderError;

/// Build the lore client from application configuration.
///
/// Fails with [`ProviderError::NotConfigured`] when no API key is present;
/// callers that want to report misconfiguration per-request (the gateway)
/// construct the client lazily instead.
pub fn build_from_config(config: &AppConfig) -> Result<LoreClient, ProviderError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| ProviderError::NotConfigured("no API key configured".into()))?;

    let provider = OpenAiCompatProvider::new(
        "openai",
        &config.api_url,
        api_key,
        std::time::Duration::from_secs(config.request_timeout_secs),
    )?;

    Ok(LoreClient::new(
        Arc::new(provider),
        &config.model,
        config.temperature,
    ))
}

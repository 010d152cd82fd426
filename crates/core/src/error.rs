//! Error types for the Planeslore domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Every failure of a lore
//! lookup is classified into exactly one [`LoreError`] variant; the gateway
//! maps each variant to a distinct HTTP outcome.

use thiserror::Error;

/// A classified failure of one lore lookup.
///
/// The classification is final: a failure is never reclassified or retried
/// on its way up to the gateway.
#[derive(Debug, Error)]
pub enum LoreError {
    /// The upstream call itself failed (network, auth, quota, non-200).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider replied, but the reply was not valid JSON.
    #[error("Failed to parse provider reply as JSON: {0}")]
    ParseFailure(String),

    /// The reply parsed as JSON but does not satisfy the required record
    /// shape (missing or empty required field, out-of-enum relationship).
    #[error("Provider reply has invalid shape: {0}")]
    ShapeInvalid(String),
}

/// Result type alias for lore lookups.
pub type Result<T> = std::result::Result<T, LoreError>;

/// Errors from the upstream chat-completions transport.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_status() {
        let err = LoreError::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn parse_and_shape_failures_are_distinct() {
        let parse = LoreError::ParseFailure("expected value at line 1".into());
        let shape = LoreError::ShapeInvalid("missing field `summary`".into());
        assert!(parse.to_string().contains("parse"));
        assert!(shape.to_string().contains("shape"));
        assert_ne!(parse.to_string(), shape.to_string());
    }
}

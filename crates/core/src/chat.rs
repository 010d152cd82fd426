//! Chat message value objects.
//!
//! A lore lookup is one fixed two-message exchange: a system instruction
//! describing the required record shape, and a user instruction carrying the
//! character name. These are the value objects that cross the provider seam.

use serde::{Deserialize, Serialize};

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (schema, output constraints)
    System,
    /// The end user's request
    User,
    /// The model's reply
    Assistant,
}

/// A single message in the exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,
}

impl ChatMessage {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = ChatMessage::user("Tell me about Nahiri");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Tell me about Nahiri");
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::system("rules")).unwrap();
        assert!(json.contains(r#""role":"system""#));
    }
}

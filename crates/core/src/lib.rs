//! # Planeslore Core
//!
//! Domain types, traits, and error definitions for the Planeslore lore
//! gateway. This crate has **zero framework dependencies** — it defines the
//! domain model that the config, provider, and gateway crates implement
//! against.
//!
//! The one trait seam is [`ChatProvider`]: the gateway and the lore adapter
//! only ever see `Arc<dyn ChatProvider>`, which keeps the HTTP wire client
//! swappable and makes the request pipeline testable with stubs.

pub mod chat;
pub mod error;
pub mod lore;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use chat::{ChatMessage, Role};
pub use error::{LoreError, ProviderError};
pub use lore::{LoreRecord, Relationship};
pub use provider::{ChatProvider, ChatRequest, ChatResponse};

//! # zenvia-api — Zenvia v2 REST API Integration
//!
//! Thin client for the Zenvia messaging platform. Every operation builds a
//! JSON body, sends one request carrying the `X-API-TOKEN` header, and
//! returns the decoded response.
//!
//! ## Capabilities
//!
//! - **Subscriptions** – create, list, retrieve, and delete webhooks for
//!   `MESSAGE` and `MESSAGE_STATUS` events.
//! - **Messaging** – send WhatsApp free-text and template messages.
//! - **Templates** – list templates (filtered by channel, sender, status)
//!   and retrieve a single template.

pub mod types;
pub mod error;
pub mod api_client;
pub mod subscriptions;
pub mod messaging;
pub mod templates;
pub mod service;

// Re-exports
pub use api_client::ZenviaApiClient;
pub use error::{ZenviaError, ZenviaErrorKind, ZenviaResult};
pub use service::ZenviaApi;
pub use types::*;

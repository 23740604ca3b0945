//! High-level Zenvia API facade.
//!
//! `ZenviaApi` owns one [`ZenviaApiClient`] and exposes one method per
//! endpoint. Each instance is bound to the token it was built with.

use crate::zenvia::api_client::ZenviaApiClient;
use crate::zenvia::error::ZenviaResult;
use crate::zenvia::messaging::ZvMessaging;
use crate::zenvia::subscriptions::ZvSubscriptions;
use crate::zenvia::templates::ZvTemplates;
use crate::zenvia::types::*;
use std::collections::HashMap;

/// Client for the Zenvia v2 API.
#[derive(Debug, Clone)]
pub struct ZenviaApi {
    subscriptions: ZvSubscriptions,
    messaging: ZvMessaging,
    templates: ZvTemplates,
}

impl ZenviaApi {
    /// Client for the production endpoint.
    pub fn new(token: impl Into<String>) -> ZenviaResult<Self> {
        Self::from_config(&ZenviaConfig::new(token))
    }

    /// Client for a custom base URL (sandbox, proxy, or test server).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> ZenviaResult<Self> {
        Self::from_config(&ZenviaConfig::new(token).with_base_url(base_url))
    }

    pub fn from_config(config: &ZenviaConfig) -> ZenviaResult<Self> {
        let client = ZenviaApiClient::new(config)?;
        Ok(Self {
            subscriptions: ZvSubscriptions::new(client.clone()),
            messaging: ZvMessaging::new(client.clone()),
            templates: ZvTemplates::new(client),
        })
    }

    /// Client configured from `ZENVIA_*` environment variables.
    pub fn from_env() -> ZenviaResult<Self> {
        Self::from_config(&ZenviaConfig::from_env()?)
    }

    // ─── Webhooks ────────────────────────────────────────────────────

    /// Register a webhook for `event_type` events on `criteria_channel`.
    ///
    /// `criteria_direction` is normally set for `MESSAGE` events (`IN` for
    /// received, `OUT` for sent) and left out for `MESSAGE_STATUS`.
    pub async fn webhook_create(
        &self,
        event_type: ZvEventType,
        webhook_url: &str,
        webhook_headers: HashMap<String, String>,
        criteria_channel: &str,
        criteria_direction: Option<ZvDirection>,
    ) -> ZenviaResult<ZvSubscription> {
        let request = ZvSubscriptions::build_request(
            event_type,
            webhook_url,
            webhook_headers,
            criteria_channel,
            criteria_direction,
        )?;
        self.subscriptions.create(&request).await
    }

    pub async fn webhook_list(&self) -> ZenviaResult<Vec<ZvSubscription>> {
        self.subscriptions.list().await
    }

    pub async fn webhook_retrieve(&self, id: &str) -> ZenviaResult<ZvSubscription> {
        self.subscriptions.retrieve(id).await
    }

    pub async fn webhook_delete(&self, id: &str) -> ZenviaResult<()> {
        self.subscriptions.delete(id).await
    }

    // ─── WhatsApp ────────────────────────────────────────────────────

    /// Send free text. Only delivered inside a conversation the recipient
    /// opened by answering a template message.
    pub async fn whatsapp_send_text(
        &self,
        msg_from: &str,
        msg_to: &str,
        text: &str,
    ) -> ZenviaResult<ZvMessageResponse> {
        self.messaging.whatsapp_send_text(msg_from, msg_to, text).await
    }

    /// Send a pre-approved template, filling its placeholders from `fields`.
    pub async fn whatsapp_send_templated(
        &self,
        msg_from: &str,
        msg_to: &str,
        template_id: &str,
        fields: HashMap<String, String>,
    ) -> ZenviaResult<ZvMessageResponse> {
        self.messaging
            .whatsapp_send_templated(msg_from, msg_to, template_id, fields)
            .await
    }

    // ─── Templates ───────────────────────────────────────────────────

    pub async fn template_list(&self, filter: &ZvTemplateFilter) -> ZenviaResult<Vec<ZvTemplate>> {
        self.templates.list(filter).await
    }

    pub async fn template_retrieve(&self, id: &str) -> ZenviaResult<ZvTemplate> {
        self.templates.retrieve(id).await
    }
}

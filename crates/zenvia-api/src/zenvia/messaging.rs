//! Send WhatsApp messages via the Zenvia channels API.
//!
//! Free text can only be delivered inside an open conversation window; a
//! template message is needed to start one.

use crate::zenvia::api_client::ZenviaApiClient;
use crate::zenvia::error::ZenviaResult;
use crate::zenvia::types::*;
use log::{debug, info};
use std::collections::HashMap;

/// Channel path segment for WhatsApp.
pub const WHATSAPP_CHANNEL: &str = "whatsapp";

/// Message sender backed by the Zenvia HTTP client.
#[derive(Debug, Clone)]
pub struct ZvMessaging {
    client: ZenviaApiClient,
}

impl ZvMessaging {
    pub fn new(client: ZenviaApiClient) -> Self {
        Self { client }
    }

    /// Envelope for a single free-text content.
    pub fn text_request(from: &str, to: &str, text: &str) -> ZvSendMessageRequest {
        ZvSendMessageRequest {
            from: from.to_string(),
            to: to.to_string(),
            contents: vec![ZvMessageContent::Text {
                text: text.to_string(),
            }],
        }
    }

    /// Envelope for a single template content.
    pub fn template_request(
        from: &str,
        to: &str,
        template_id: &str,
        fields: HashMap<String, String>,
    ) -> ZvSendMessageRequest {
        ZvSendMessageRequest {
            from: from.to_string(),
            to: to.to_string(),
            contents: vec![ZvMessageContent::Template {
                template_id: template_id.to_string(),
                fields,
            }],
        }
    }

    /// POST the envelope to `/channels/{channel}/messages`.
    pub async fn send(
        &self,
        channel: &str,
        request: &ZvSendMessageRequest,
    ) -> ZenviaResult<ZvMessageResponse> {
        let url = self.client.url(&["channels", channel, "messages"]);
        debug!("Sending {} content(s) to {} via {}", request.contents.len(), request.to, channel);
        let resp: ZvMessageResponse = self.client.post_json(url, request).await?;
        info!("Message {} accepted for {}", resp.id, request.to);
        Ok(resp)
    }

    /// Send a WhatsApp free-text message.
    pub async fn whatsapp_send_text(
        &self,
        msg_from: &str,
        msg_to: &str,
        text: &str,
    ) -> ZenviaResult<ZvMessageResponse> {
        let request = Self::text_request(msg_from, msg_to, text);
        self.send(WHATSAPP_CHANNEL, &request).await
    }

    /// Send a WhatsApp template message. Placeholder coverage is checked
    /// by the vendor, not here.
    pub async fn whatsapp_send_templated(
        &self,
        msg_from: &str,
        msg_to: &str,
        template_id: &str,
        fields: HashMap<String, String>,
    ) -> ZenviaResult<ZvMessageResponse> {
        let request = Self::template_request(msg_from, msg_to, template_id, fields);
        self.send(WHATSAPP_CHANNEL, &request).await
    }
}

//! Webhook subscription management via the Zenvia API.
//!
//! A subscription tells Zenvia to POST events (incoming messages or
//! message status changes) for a channel to a caller-owned URL.

use crate::zenvia::api_client::ZenviaApiClient;
use crate::zenvia::error::{ZenviaError, ZenviaResult};
use crate::zenvia::types::*;
use log::{debug, info};
use std::collections::HashMap;

/// Subscription operations.
#[derive(Debug, Clone)]
pub struct ZvSubscriptions {
    client: ZenviaApiClient,
}

impl ZvSubscriptions {
    pub fn new(client: ZenviaApiClient) -> Self {
        Self { client }
    }

    /// Build the request body after the local checks on event type and URL.
    pub fn build_request(
        event_type: ZvEventType,
        webhook_url: &str,
        webhook_headers: HashMap<String, String>,
        criteria_channel: &str,
        criteria_direction: Option<ZvDirection>,
    ) -> ZenviaResult<ZvCreateSubscriptionRequest> {
        if event_type == ZvEventType::Unknown {
            return Err(ZenviaError::validation(
                "event_type must be MESSAGE or MESSAGE_STATUS",
            ));
        }
        if criteria_direction == Some(ZvDirection::Unknown) {
            return Err(ZenviaError::validation(
                "criteria_direction must be IN or OUT",
            ));
        }
        validate_webhook_url(webhook_url)?;

        Ok(ZvCreateSubscriptionRequest {
            event_type,
            url: webhook_url.to_string(),
            headers: webhook_headers,
            criteria: ZvCriteria {
                channel: criteria_channel.to_string(),
                direction: criteria_direction,
            },
        })
    }

    /// Register a webhook. Zenvia will call `webhook_url` with
    /// `webhook_headers` whenever an event matching the criteria occurs.
    pub async fn create(&self, request: &ZvCreateSubscriptionRequest) -> ZenviaResult<ZvSubscription> {
        let url = self.client.url(&["subscriptions"]);
        let sub: ZvSubscription = self.client.post_json(url, request).await?;
        info!(
            "Created {:?} subscription on '{}' → {}",
            request.event_type, request.criteria.channel, sub.id
        );
        Ok(sub)
    }

    /// List every registered subscription.
    pub async fn list(&self) -> ZenviaResult<Vec<ZvSubscription>> {
        let url = self.client.url(&["subscriptions"]);
        let subs: Vec<ZvSubscription> = self.client.get(url).await?;
        debug!("Listed {} subscriptions", subs.len());
        Ok(subs)
    }

    /// Fetch one subscription by id.
    pub async fn retrieve(&self, id: &str) -> ZenviaResult<ZvSubscription> {
        let url = self.client.url(&["subscriptions", id]);
        self.client.get(url).await
    }

    /// Delete one subscription by id.
    pub async fn delete(&self, id: &str) -> ZenviaResult<()> {
        let url = self.client.url(&["subscriptions", id]);
        self.client.delete(url).await?;
        info!("Deleted subscription {}", id);
        Ok(())
    }
}

/// The webhook target must be an absolute http(s) URL with a host.
fn validate_webhook_url(raw: &str) -> ZenviaResult<()> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        ZenviaError::validation(format!("webhook_url is not a well formed URL: {}", e))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ZenviaError::validation(format!(
            "webhook_url must be an http(s) URL with a host: {}",
            raw
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zenvia::error::ZenviaErrorKind;
    use serde_json::json;

    #[test]
    fn test_build_message_request() {
        let req = ZvSubscriptions::build_request(
            ZvEventType::Message,
            "https://example.com/hook",
            HashMap::new(),
            "WhatsApp",
            Some(ZvDirection::In),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "type": "MESSAGE",
                "url": "https://example.com/hook",
                "headers": {},
                "criteria": { "channel": "WhatsApp", "direction": "IN" }
            })
        );
    }

    #[test]
    fn test_build_request_forwards_headers() {
        let headers: HashMap<String, String> =
            [("Authorization".to_string(), "Basic abc".to_string())].into_iter().collect();
        let req = ZvSubscriptions::build_request(
            ZvEventType::MessageStatus,
            "http://hooks.internal:8080/zenvia",
            headers,
            "whatsapp",
            None,
        )
        .unwrap();
        assert_eq!(req.headers.get("Authorization").map(String::as_str), Some("Basic abc"));
        assert!(req.criteria.direction.is_none());
    }

    #[test]
    fn test_build_request_rejects_bad_url() {
        for bad in ["not a url", "example.com/hook", "mailto:ops@example.com", "ftp://example.com/x"] {
            let err = ZvSubscriptions::build_request(
                ZvEventType::Message,
                bad,
                HashMap::new(),
                "WhatsApp",
                Some(ZvDirection::Out),
            )
            .unwrap_err();
            assert_eq!(err.kind, ZenviaErrorKind::Validation, "{}", bad);
            assert!(err.http_status.is_none());
        }
    }

    #[test]
    fn test_build_request_rejects_unknown_direction() {
        let err = ZvSubscriptions::build_request(
            ZvEventType::Message,
            "https://example.com/hook",
            HashMap::new(),
            "WhatsApp",
            Some(ZvDirection::Unknown),
        )
        .unwrap_err();
        assert_eq!(err.kind, ZenviaErrorKind::Validation);
        assert!(err.message.contains("criteria_direction"));
    }

    #[test]
    fn test_build_request_rejects_unknown_event_type() {
        let err = ZvSubscriptions::build_request(
            ZvEventType::Unknown,
            "https://example.com/hook",
            HashMap::new(),
            "WhatsApp",
            None,
        )
        .unwrap_err();
        assert_eq!(err.kind, ZenviaErrorKind::Validation);
    }
}

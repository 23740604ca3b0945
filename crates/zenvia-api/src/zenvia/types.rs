//! Shared types for the Zenvia v2 API integration.
//!
//! Models cover client configuration, the outgoing subscription and message
//! envelopes, and the response shapes for subscriptions, messages, and
//! templates. Response models are decoded leniently: a field that is
//! missing, `null`, or of an unexpected shape falls back to its default,
//! and unknown enum values become `Unknown`.

use crate::zenvia::error::{ZenviaError, ZenviaResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════
//  Configuration
// ═══════════════════════════════════════════════════════════════════════

pub const DEFAULT_BASE_URL: &str = "https://api.zenvia.com/v2";

pub const ENV_API_TOKEN: &str = "ZENVIA_API_TOKEN";
pub const ENV_BASE_URL: &str = "ZENVIA_API_BASE_URL";
pub const ENV_TIMEOUT_SEC: &str = "ZENVIA_TIMEOUT_SEC";

/// Connection settings for the Zenvia API.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZenviaConfig {
    /// Token sent as `X-API-TOKEN` on every request.
    pub api_token: String,
    /// Base URL override (default: `https://api.zenvia.com/v2`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout in seconds for a single API call. Must be non-zero.
    #[serde(default = "default_timeout")]
    pub timeout_sec: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u32 {
    30
}

impl fmt::Debug for ZenviaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZenviaConfig")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_sec", &self.timeout_sec)
            .finish()
    }
}

impl ZenviaConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: default_base_url(),
            timeout_sec: default_timeout(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `ZENVIA_API_TOKEN` (required), `ZENVIA_API_BASE_URL` and
    /// `ZENVIA_TIMEOUT_SEC` from the process environment.
    pub fn from_env() -> ZenviaResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> ZenviaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_API_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ZenviaError::configuration(format!("{} is not set", ENV_API_TOKEN))
            })?;

        let mut config = Self::new(token);
        if let Some(base) = lookup(ENV_BASE_URL).filter(|b| !b.trim().is_empty()) {
            config.base_url = base;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SEC) {
            config.timeout_sec = raw
                .trim()
                .parse()
                .ok()
                .filter(|secs: &u32| *secs > 0)
                .ok_or_else(|| {
                    ZenviaError::configuration(format!(
                        "{} must be a positive whole number of seconds, got '{}'",
                        ENV_TIMEOUT_SEC, raw
                    ))
                })?;
        }
        Ok(config)
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Lenient decoding helpers
// ═══════════════════════════════════════════════════════════════════════

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// The value if it has the expected shape, otherwise `None`.
    pub fn option<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let v = Value::deserialize(d)?;
        Ok(serde_json::from_value(v).ok())
    }

    /// The value if it has the expected shape, otherwise `T::default()`.
    pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(option(d)?.unwrap_or_default())
    }

    /// Identifiers arrive as strings, but numbers are accepted too.
    pub fn id<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }
}

/// Parse a vendor timestamp: RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS[.f]`
/// taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

// ═══════════════════════════════════════════════════════════════════════
//  Subscriptions (webhooks)
// ═══════════════════════════════════════════════════════════════════════

/// Event that triggers a webhook call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZvEventType {
    /// A message was received on (or sent through) the channel.
    Message,
    /// A sent message changed status (delivered, read, ...).
    MessageStatus,
    #[serde(other)]
    Unknown,
}

/// Message direction relative to the channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZvDirection {
    In,
    Out,
    #[serde(other)]
    Unknown,
}

/// Filter deciding which events reach the webhook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZvCriteria {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub channel: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    pub direction: Option<ZvDirection>,
}

/// Body of `POST /subscriptions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZvCreateSubscriptionRequest {
    #[serde(rename = "type")]
    pub event_type: ZvEventType,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub criteria: ZvCriteria,
}

/// Lifecycle state reported by the vendor for a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZvSubscriptionStatus {
    Active,
    Degraded,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// Target the vendor calls when an event matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ZvWebhookTarget {
    #[serde(default, deserialize_with = "lenient::option")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub headers: HashMap<String, String>,
}

/// A subscription as returned by the API.
///
/// Both the nested (`eventType` + `webhook{url,headers}`) and the flat
/// (`type` + `url` + `headers`) shapes decode into the same fields.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZvSubscription {
    pub id: String,
    pub event_type: Option<ZvEventType>,
    pub webhook: Option<ZvWebhookTarget>,
    pub status: Option<ZvSubscriptionStatus>,
    pub version: Option<String>,
    pub criteria: Option<ZvCriteria>,
    /// Raw timestamp; see [`ZvSubscription::created_at_utc`].
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Wire form of [`ZvSubscription`], accepting either response shape.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZvSubscriptionWire {
    #[serde(default, deserialize_with = "lenient::id")]
    id: String,
    #[serde(default, deserialize_with = "lenient::option")]
    event_type: Option<ZvEventType>,
    #[serde(default, rename = "type", deserialize_with = "lenient::option")]
    flat_type: Option<ZvEventType>,
    #[serde(default, deserialize_with = "lenient::option")]
    webhook: Option<ZvWebhookTarget>,
    #[serde(default, deserialize_with = "lenient::option")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    headers: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient::option")]
    status: Option<ZvSubscriptionStatus>,
    #[serde(default, deserialize_with = "lenient::option")]
    version: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    criteria: Option<ZvCriteria>,
    #[serde(default, deserialize_with = "lenient::option")]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    updated_at: Option<String>,
}

impl<'de> Deserialize<'de> for ZvSubscription {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let wire = ZvSubscriptionWire::deserialize(d)?;

        let mut webhook = wire.webhook;
        if wire.url.is_some() || wire.headers.is_some() {
            let target = webhook.get_or_insert_with(ZvWebhookTarget::default);
            if target.url.is_none() {
                target.url = wire.url;
            }
            if target.headers.is_empty() {
                target.headers = wire.headers.unwrap_or_default();
            }
        }

        Ok(Self {
            id: wire.id,
            event_type: wire.event_type.or(wire.flat_type),
            webhook,
            status: wire.status,
            version: wire.version,
            criteria: wire.criteria,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

impl ZvSubscription {
    /// Webhook URL regardless of which response shape carried it.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook.as_ref().and_then(|w| w.url.as_deref())
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Messages
// ═══════════════════════════════════════════════════════════════════════

/// One content entry of an outgoing message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ZvMessageContent {
    Text {
        text: String,
    },
    Template {
        #[serde(rename = "templateId")]
        template_id: String,
        fields: HashMap<String, String>,
    },
}

/// Body of `POST /channels/{channel}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZvSendMessageRequest {
    pub from: String,
    pub to: String,
    pub contents: Vec<ZvMessageContent>,
}

/// Delivery state of a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZvMessageStatus {
    Sent,
    Delivered,
    NotDelivered,
    Read,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Message resource returned after a send.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZvMessageResponse {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::option")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub direction: Option<ZvDirection>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub channel: Option<String>,
    /// Echoed contents, kept raw since the vendor may add content types.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub contents: Vec<serde_json::Value>,
    /// Raw timestamp; see [`ZvMessageResponse::timestamp_utc`].
    #[serde(default, deserialize_with = "lenient::option")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub status: Option<ZvMessageStatus>,
}

impl ZvMessageResponse {
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Templates
// ═══════════════════════════════════════════════════════════════════════

/// Channel a template belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZvTemplateChannel {
    Whatsapp,
    Sms,
    Rcs,
    Email,
    #[serde(other)]
    Unknown,
}

impl ZvTemplateChannel {
    /// Query value, or `None` for `Unknown`.
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            Self::Whatsapp => Some("WHATSAPP"),
            Self::Sms => Some("SMS"),
            Self::Rcs => Some("RCS"),
            Self::Email => Some("EMAIL"),
            Self::Unknown => None,
        }
    }
}

/// Review state of a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZvTemplateStatus {
    WaitingReview,
    Rejected,
    WaitingApproval,
    Approved,
    Paused,
    Disabled,
    #[serde(other)]
    Unknown,
}

impl ZvTemplateStatus {
    /// Query value, or `None` for `Unknown`.
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            Self::WaitingReview => Some("WAITING_REVIEW"),
            Self::Rejected => Some("REJECTED"),
            Self::WaitingApproval => Some("WAITING_APPROVAL"),
            Self::Approved => Some("APPROVED"),
            Self::Paused => Some("PAUSED"),
            Self::Disabled => Some("DISABLED"),
            Self::Unknown => None,
        }
    }
}

/// Optional filters for `GET /templates`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZvTemplateFilter {
    pub channel: Option<ZvTemplateChannel>,
    pub sender_id: Option<String>,
    pub status: Option<ZvTemplateStatus>,
}

impl ZvTemplateFilter {
    /// Query pairs for the filters that are set. `Unknown` values are dropped.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(c) = self.channel.as_ref().and_then(ZvTemplateChannel::as_query_value) {
            params.push(("channel", c.to_string()));
        }
        if let Some(ref s) = self.sender_id {
            params.push(("senderId", s.clone()));
        }
        if let Some(s) = self.status.as_ref().and_then(ZvTemplateStatus::as_query_value) {
            params.push(("status", s.to_string()));
        }
        params
    }
}

/// A message template as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZvTemplate {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::option")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub channel: Option<ZvTemplateChannel>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub sender_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub status: Option<ZvTemplateStatus>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub text: Option<String>,
    /// Placeholder names the template expects.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub fields: Vec<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub updated_at: Option<String>,
}

impl ZvTemplate {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zenvia::error::ZenviaErrorKind;
    use serde_json::json;

    #[test]
    fn test_config_defaults_from_json() {
        let cfg: ZenviaConfig = serde_json::from_value(json!({ "apiToken": "tok" })).unwrap();
        assert_eq!(cfg.api_token, "tok");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_sec, 30);
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let cfg = ZenviaConfig::new("very-secret-token");
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("very-secret-token"));
        assert!(dbg.contains("<redacted>"));
        assert!(dbg.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_config_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENV_API_TOKEN, "secret"),
            (ENV_BASE_URL, "http://localhost:9000/v2"),
            (ENV_TIMEOUT_SEC, "5"),
        ]
        .into_iter()
        .collect();
        let cfg = ZenviaConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.api_token, "secret");
        assert_eq!(cfg.base_url, "http://localhost:9000/v2");
        assert_eq!(cfg.timeout_sec, 5);
    }

    #[test]
    fn test_config_from_lookup_missing_token() {
        let err = ZenviaConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.kind, ZenviaErrorKind::Configuration);
        assert!(err.message.contains(ENV_API_TOKEN));
    }

    #[test]
    fn test_config_from_lookup_bad_timeout() {
        for raw in ["soon", "0", "-3"] {
            let err = ZenviaConfig::from_lookup(|k| match k {
                ENV_API_TOKEN => Some("t".into()),
                ENV_TIMEOUT_SEC => Some(raw.into()),
                _ => None,
            })
            .unwrap_err();
            assert_eq!(err.kind, ZenviaErrorKind::Configuration, "{}", raw);
            assert!(err.message.contains(raw), "{}", raw);
        }
    }

    #[test]
    fn test_subscription_request_omits_missing_direction() {
        let req = ZvCreateSubscriptionRequest {
            event_type: ZvEventType::MessageStatus,
            url: "https://example.com/hook".into(),
            headers: HashMap::new(),
            criteria: ZvCriteria {
                channel: "WhatsApp".into(),
                direction: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "type": "MESSAGE_STATUS",
                "url": "https://example.com/hook",
                "headers": {},
                "criteria": { "channel": "WhatsApp" }
            })
        );
    }

    #[test]
    fn test_template_content_shape() {
        let content = ZvMessageContent::Template {
            template_id: "X".into(),
            fields: [("name".to_string(), "Y".to_string())].into_iter().collect(),
        };
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!({ "type": "template", "templateId": "X", "fields": { "name": "Y" } })
        );
    }

    #[test]
    fn test_subscription_decodes_nested_shape() {
        let sub: ZvSubscription = serde_json::from_value(json!({
            "id": "d3c1f2a0-0000-4000-8000-000000000001",
            "eventType": "MESSAGE",
            "webhook": { "url": "https://example.com/hook", "headers": { "X-Auth": "1" } },
            "status": "ACTIVE",
            "version": "v2",
            "createdAt": "2023-01-10T12:00:00.000Z",
            "criteria": { "channel": "whatsapp", "direction": "IN" }
        }))
        .unwrap();
        assert_eq!(sub.event_type, Some(ZvEventType::Message));
        assert_eq!(sub.status, Some(ZvSubscriptionStatus::Active));
        assert_eq!(sub.webhook_url(), Some("https://example.com/hook"));
        assert!(sub.created_at_utc().is_some());
        assert_eq!(
            sub.criteria.and_then(|c| c.direction),
            Some(ZvDirection::In)
        );
    }

    #[test]
    fn test_subscription_decodes_flat_shape_and_unknown_status() {
        let sub: ZvSubscription = serde_json::from_value(json!({
            "id": "abc",
            "type": "MESSAGE_STATUS",
            "url": "https://example.com/status",
            "headers": { "X-Auth": "1" },
            "status": "SUSPENDED"
        }))
        .unwrap();
        assert_eq!(sub.event_type, Some(ZvEventType::MessageStatus));
        assert_eq!(sub.status, Some(ZvSubscriptionStatus::Unknown));
        assert_eq!(sub.webhook_url(), Some("https://example.com/status"));
        assert_eq!(
            sub.webhook.as_ref().and_then(|w| w.headers.get("X-Auth")).map(String::as_str),
            Some("1")
        );
    }

    #[test]
    fn test_subscription_tolerates_unexpected_shapes() {
        let sub: ZvSubscription = serde_json::from_value(json!({
            "id": 123,
            "type": "MESSAGE",
            "eventType": "MESSAGE",
            "webhook": { "url": "https://x", "headers": null },
            "status": 7,
            "criteria": { "channel": "WhatsApp", "direction": "BOTH" },
            "createdAt": "2023-01-10 12:00:00",
            "updatedAt": "yesterday"
        }))
        .unwrap();
        assert_eq!(sub.id, "123");
        assert_eq!(sub.event_type, Some(ZvEventType::Message));
        assert_eq!(sub.webhook_url(), Some("https://x"));
        assert!(sub.webhook.as_ref().unwrap().headers.is_empty());
        assert!(sub.status.is_none());
        assert_eq!(
            sub.criteria.as_ref().and_then(|c| c.direction),
            Some(ZvDirection::Unknown)
        );
        assert!(sub.created_at_utc().is_some());
        assert_eq!(sub.updated_at.as_deref(), Some("yesterday"));
        assert!(sub.updated_at_utc().is_none());
    }

    #[test]
    fn test_message_response_tolerates_nulls() {
        let resp: ZvMessageResponse = serde_json::from_value(json!({
            "id": "m1",
            "from": null,
            "contents": null,
            "timestamp": 1673352000,
            "status": "QUEUED"
        }))
        .unwrap();
        assert_eq!(resp.id, "m1");
        assert!(resp.from.is_none());
        assert!(resp.contents.is_empty());
        assert!(resp.timestamp.is_none());
        assert_eq!(resp.status, Some(ZvMessageStatus::Unknown));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2023-01-10T12:00:00.000Z").is_some());
        assert!(parse_timestamp("2023-01-10T09:00:00-03:00").is_some());
        assert!(parse_timestamp("2023-01-10 12:00:00").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_template_filter_query_params() {
        assert!(ZvTemplateFilter::default().query_params().is_empty());

        let filter = ZvTemplateFilter {
            channel: Some(ZvTemplateChannel::Whatsapp),
            sender_id: Some("soft-harbor".into()),
            status: Some(ZvTemplateStatus::WaitingApproval),
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("channel", "WHATSAPP".to_string()),
                ("senderId", "soft-harbor".to_string()),
                ("status", "WAITING_APPROVAL".to_string()),
            ]
        );
    }

    #[test]
    fn test_template_filter_drops_unknown_values() {
        let filter = ZvTemplateFilter {
            channel: Some(ZvTemplateChannel::Unknown),
            sender_id: None,
            status: Some(ZvTemplateStatus::Unknown),
        };
        assert!(filter.query_params().is_empty());
    }

    #[test]
    fn test_template_decodes() {
        let t: ZvTemplate = serde_json::from_value(json!({
            "id": "c5f3228e-3dd9-49be-9922-9f362ca5e089",
            "name": "delivery",
            "channel": "WHATSAPP",
            "senderId": "soft-harbor",
            "status": "APPROVED",
            "fields": ["name", "productName", "deliveryDate"]
        }))
        .unwrap();
        assert_eq!(t.channel, Some(ZvTemplateChannel::Whatsapp));
        assert_eq!(t.status, Some(ZvTemplateStatus::Approved));
        assert_eq!(t.fields.len(), 3);
        assert_eq!(t.sender_id.as_deref(), Some("soft-harbor"));
    }
}

//! Crate-level error types for the Zenvia client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alias for `Result<T, ZenviaError>`.
pub type ZenviaResult<T> = Result<T, ZenviaError>;

/// Uniform error type returned by every Zenvia operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZenviaError {
    pub kind: ZenviaErrorKind,
    pub message: String,
    /// Flattened vendor detail lines (`path: message`), if any.
    pub details: Option<String>,
    /// HTTP status code if originated from an API call.
    pub http_status: Option<u16>,
    /// Vendor error body, when it was valid JSON.
    pub payload: Option<serde_json::Value>,
}

impl fmt::Display for ZenviaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}]", self.kind)?;
        if let Some(status) = self.http_status {
            write!(f, " HTTP {}:", status)?;
        }
        write!(f, " {}", self.message)?;
        if let Some(ref d) = self.details {
            write!(f, " ({})", d)?;
        }
        Ok(())
    }
}

impl std::error::Error for ZenviaError {}

/// Error categories. Each HTTP status maps to exactly one kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZenviaErrorKind {
    /// 401 / 403: missing, invalid, or under-privileged token.
    Authentication,
    /// 400 and other 4xx, plus local argument checks.
    Validation,
    /// 429.
    RateLimit,
    /// 5xx, transport failures, and undecodable responses.
    RemoteService,
    /// Client could not be built from the supplied settings.
    Configuration,
}

impl ZenviaError {
    fn new(kind: ZenviaErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            message: msg.into(),
            details: None,
            http_status: None,
            payload: None,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::new(ZenviaErrorKind::Configuration, msg)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ZenviaErrorKind::Validation, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ZenviaErrorKind::RemoteService, msg)
    }

    /// A 2xx response whose body could not be decoded.
    pub fn malformed_response(status: u16, msg: impl Into<String>) -> Self {
        Self {
            http_status: Some(status),
            ..Self::new(ZenviaErrorKind::RemoteService, msg)
        }
    }

    /// Build from a non-2xx status and the raw response body.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        // Zenvia returns: { "code": "...", "message": "...", "details": [{ "code", "path", "message" }] }
        let payload = serde_json::from_str::<serde_json::Value>(body).ok();
        let (message, details) = match payload {
            Some(ref v) => Self::parse_zenvia_error(v),
            None if body.trim().is_empty() => (format!("Empty response body (HTTP {})", status), None),
            None => (
                "Unparseable API error".to_string(),
                Some(body.chars().take(500).collect()),
            ),
        };

        Self {
            kind: Self::classify_status(status),
            message,
            details,
            http_status: Some(status),
            payload,
        }
    }

    /// Vendor error code (e.g. `VALIDATION_ERROR`), if the payload carried one.
    pub fn vendor_code(&self) -> Option<&str> {
        self.payload.as_ref()?.get("code")?.as_str()
    }

    fn parse_zenvia_error(v: &serde_json::Value) -> (String, Option<String>) {
        let msg = v["message"]
            .as_str()
            .or_else(|| v["error"].as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        let details = v["details"].as_array().and_then(|arr| {
            let lines: Vec<String> = arr
                .iter()
                .filter_map(|d| {
                    let m = d["message"].as_str()?;
                    Some(match d["path"].as_str() {
                        Some(p) => format!("{}: {}", p, m),
                        None => m.to_string(),
                    })
                })
                .collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("; "))
            }
        });

        (msg, details)
    }

    /// Total mapping from an HTTP error status to an error kind.
    pub fn classify_status(status: u16) -> ZenviaErrorKind {
        match status {
            401 | 403 => ZenviaErrorKind::Authentication,
            429 => ZenviaErrorKind::RateLimit,
            400..=499 => ZenviaErrorKind::Validation,
            _ => ZenviaErrorKind::RemoteService,
        }
    }
}

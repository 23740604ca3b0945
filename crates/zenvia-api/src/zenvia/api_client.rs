//! HTTP client for the Zenvia v2 REST API.
//!
//! Provides the low-level request helpers shared by the subscription,
//! messaging, and template modules. Each helper makes exactly one attempt;
//! failures are mapped to [`ZenviaError`] and returned to the caller.

use crate::zenvia::error::{ZenviaError, ZenviaResult};
use crate::zenvia::types::ZenviaConfig;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Header carrying the API token (`X-API-TOKEN`; header names are case-insensitive).
pub const TOKEN_HEADER: &str = "x-api-token";

/// Low-level HTTP client bound to one token and base URL.
#[derive(Clone)]
pub struct ZenviaApiClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
    /// Token + `Accept` headers, validated once at construction.
    headers: HeaderMap,
}

impl fmt::Debug for ZenviaApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZenviaApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl ZenviaApiClient {
    /// Create a new client from configuration. No network activity.
    pub fn new(config: &ZenviaConfig) -> ZenviaResult<Self> {
        if config.api_token.trim().is_empty() {
            return Err(ZenviaError::configuration("API token must not be empty"));
        }

        if config.timeout_sec == 0 {
            return Err(ZenviaError::configuration("timeout_sec must be greater than zero"));
        }

        let base_url = Self::parse_base_url(&config.base_url)?;
        let headers = Self::auth_headers(&config.api_token)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec as u64))
            .connect_timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| {
                ZenviaError::configuration(format!("HTTP client init failed: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    fn parse_base_url(raw: &str) -> ZenviaResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(raw.trim()).map_err(|e| {
            ZenviaError::configuration(format!("Invalid base URL '{}': {}", raw, e))
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ZenviaError::configuration(format!(
                "Base URL must be an http(s) URL: {}",
                raw
            )));
        }
        // A trailing slash keeps the last path segment (e.g. `/v2`) when joining.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        Ok(url)
    }

    /// Base URL requests are resolved against (always ends in `/`).
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    // ─── URL helpers ─────────────────────────────────────────────────

    /// Build an endpoint URL from path segments, percent-encoding each one:
    /// `{base}/{seg}/{seg}...`.
    pub fn url(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ─── HTTP primitives ─────────────────────────────────────────────

    fn auth_headers(token: &str) -> ZenviaResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(token).map_err(|_| {
            ZenviaError::configuration("API token contains characters not allowed in a header")
        })?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(TOKEN_HEADER), token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// GET and decode the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, url: reqwest::Url) -> ZenviaResult<R> {
        let body = self.request(reqwest::Method::GET, url, None).await?;
        Self::decode(body)
    }

    /// GET with query parameters.
    pub async fn get_with_params<R: DeserializeOwned>(
        &self,
        mut url: reqwest::Url,
        params: &[(&str, String)],
    ) -> ZenviaResult<R> {
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        self.get(url).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B, R>(&self, url: reqwest::Url, body: &B) -> ZenviaResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_value(body).map_err(|e| {
            ZenviaError::validation(format!("Request body could not be serialized: {}", e))
        })?;
        let resp = self.request(reqwest::Method::POST, url, Some(payload)).await?;
        Self::decode(resp)
    }

    /// DELETE. Any 2xx response, empty or not, is success.
    pub async fn delete(&self, url: reqwest::Url) -> ZenviaResult<()> {
        self.request(reqwest::Method::DELETE, url, None).await?;
        Ok(())
    }

    // ─── Core request method ─────────────────────────────────────────

    async fn request(
        &self,
        method: reqwest::Method,
        url: reqwest::Url,
        body: Option<serde_json::Value>,
    ) -> ZenviaResult<ResponseBody> {
        debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .headers(self.headers.clone());

        if let Some(ref b) = body {
            req = req.header(CONTENT_TYPE, "application/json").json(b);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ZenviaError::network(format!("{} {} failed: {}", method, url, e)))?;

        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| {
            ZenviaError::network(format!("Reading response body failed: {}", e))
        })?;

        if (200..300).contains(&status) {
            return Ok(ResponseBody { status, text });
        }

        let err = ZenviaError::from_api_response(status, &text);
        warn!("{} {} rejected: {}", method, url, err);
        Err(err)
    }

    fn decode<R: DeserializeOwned>(body: ResponseBody) -> ZenviaResult<R> {
        let text = if body.text.trim().is_empty() {
            "null"
        } else {
            body.text.as_str()
        };
        serde_json::from_str(text).map_err(|e| {
            ZenviaError::malformed_response(body.status, format!("JSON parse error: {}", e))
        })
    }
}

/// Successful response, undecoded.
struct ResponseBody {
    status: u16,
    text: String,
}

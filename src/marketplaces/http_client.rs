//! HTTP transport for marketplace and enrichment APIs
//!
//! Adapters talk to the network only through the `HttpTransport` trait so the
//! request they would send can be inspected (and answered) without a live
//! marketplace. `ReqwestTransport` is the production implementation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("fyntra-export/", env!("CARGO_PKG_VERSION"));

/// Network-level failure: no HTTP status was received
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err.to_string())
    }
}

/// A JSON POST request
#[derive(Clone)]
pub struct OutboundRequest {
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,
    /// Extra headers (values may be secret and are never printed)
    pub headers: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub body: Value,
}

impl OutboundRequest {
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            bearer_token: None,
            headers: Vec::new(),
            query: Vec::new(),
            body,
        }
    }

    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn query(mut self, key: &'static str, value: &str) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(name, _)| *name).collect();
        f.debug_struct("OutboundRequest")
            .field("url", &self.url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("headers", &header_names)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

/// The HTTP answer to an `OutboundRequest`
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    /// Response body; `None` if it could not be read
    pub body: Option<String>,
}

impl TransportResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: Option<String>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string();

        Self {
            status,
            status_text,
            content_type: content_type.map(str::to_string),
            body,
        }
    }

    /// A JSON response
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, Some("application/json"), Some(body.to_string()))
    }

    /// A plain text response
    pub fn text(status: u16, body: &str) -> Self {
        Self::new(status, Some("text/plain"), Some(body.to_string()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the content type declares a JSON body
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| {
                let essence = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
                essence == "application/json" || essence.ends_with("+json")
            })
            .unwrap_or(false)
    }

    /// Body for error diagnostics: JSON if declared and parseable, else raw text
    pub fn diagnostic_body(&self) -> Option<Value> {
        let text = self.body.as_ref()?;
        if self.is_json() {
            if let Ok(value) = serde_json::from_str(text) {
                return Some(value);
            }
        }
        Some(Value::String(text.clone()))
    }
}

/// Outbound HTTP seam used by every adapter
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `request.body` as JSON; any received status is `Ok`
    async fn post_json(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError>;
}

/// `HttpTransport` backed by a shared reqwest client
///
/// No request timeout is set; calls rely on the transport defaults.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        debug!(url = %request.url, "POST");

        let mut builder = self.client.post(&request.url).json(&request.body);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.ok();

        Ok(TransportResponse::new(status, content_type.as_deref(), body))
    }
}

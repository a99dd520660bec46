//! AI-assisted product enrichment
//!
//! Suggests a description, a category label and a price for a product from
//! its name and, optionally, its photo.

mod gemini;
mod parse;

pub use gemini::{GeminiEnricher, API_KEY_KEY};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use crate::marketplaces::http_client::TransportError;
use crate::marketplaces::validation::parse_price;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Enrichment failures
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Enrichment not configured: {0} is not set")]
    NotConfigured(String),

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error("Enrichment request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Enrichment API returned status {status}")]
    Api { status: u16, body: Option<Value> },

    #[error("Could not parse enrichment answer: {0}")]
    Parse(String),
}

impl EnrichmentError {
    pub fn code(&self) -> &'static str {
        match self {
            EnrichmentError::EmptyName => "empty_name",
            EnrichmentError::NotConfigured(_) => "not_configured",
            EnrichmentError::InvalidImage(_) => "invalid_image",
            EnrichmentError::Transport(_) => "transport_error",
            EnrichmentError::Api { .. } => "api_error",
            EnrichmentError::Parse(_) => "parse_error",
        }
    }
}

/// Raw image sent alongside the prompt
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    /// Decode a `data:<mime>;base64,<data>` URI or bare base64
    pub fn from_encoded(encoded: &str) -> Result<Self, EnrichmentError> {
        let encoded = encoded.trim();

        let (mime_type, data) = match encoded.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest
                    .split_once(',')
                    .ok_or_else(|| EnrichmentError::InvalidImage("data URI has no payload".to_string()))?;
                let mime = header.strip_suffix(";base64").ok_or_else(|| {
                    EnrichmentError::InvalidImage("only base64 data URIs are supported".to_string())
                })?;
                let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
                (mime.to_string(), data)
            }
            None => (DEFAULT_IMAGE_MIME.to_string(), encoded),
        };

        let bytes = STANDARD
            .decode(data)
            .map_err(|e| EnrichmentError::InvalidImage(e.to_string()))?;

        Ok(Self { bytes, mime_type })
    }
}

/// Input for one enrichment call
#[derive(Debug, Clone)]
pub struct EnrichmentRequest {
    pub name: String,
    pub image: Option<ImageInput>,
}

/// Model suggestions for a product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentSuggestion {
    pub description: String,
    pub category: String,
    /// Suggested price in BRL
    #[serde(deserialize_with = "deserialize_price")]
    pub suggested_price: f64,
}

impl EnrichmentSuggestion {
    /// Price formatted for the product form
    pub fn price_text(&self) -> String {
        format!("{:.2}", self.suggested_price)
    }
}

/// Models sometimes quote the number ("129,90"); accept both forms
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Value::deserialize(deserializer)?;
    let amount = match &value {
        Value::Number(n) => n.as_f64().filter(|v| *v >= 0.0),
        Value::String(s) => parse_price(s).ok(),
        _ => None,
    };

    amount.ok_or_else(|| D::Error::custom(format!("invalid suggestedPrice: {}", value)))
}

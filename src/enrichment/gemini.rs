//! Gemini client for product enrichment
//!
//! API Docs: https://ai.google.dev/api/generate-content

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::EnrichmentSettings;
use crate::marketplaces::http_client::{HttpTransport, OutboundRequest};
use crate::marketplaces::validation::require_config;

use super::parse::extract_json_object;
use super::{EnrichmentError, EnrichmentRequest, EnrichmentSuggestion};

/// Name of the credential the enricher requires
pub const API_KEY_KEY: &str = "GEMINI_API_KEY";

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Fills description, category and price suggestions with Gemini
pub struct GeminiEnricher {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl GeminiEnricher {
    pub fn new(transport: Arc<dyn HttpTransport>, settings: &EnrichmentSettings) -> Self {
        Self {
            transport,
            api_key: settings.api_key.clone(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        }
    }

    /// Ask the model for listing suggestions for one product
    #[instrument(skip(self, request), fields(name = %request.name, with_image = request.image.is_some()))]
    pub async fn enrich(&self, request: &EnrichmentRequest) -> Result<EnrichmentSuggestion, EnrichmentError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(EnrichmentError::EmptyName);
        }

        let api_key = require_config(API_KEY_KEY, self.api_key.as_deref())
            .map_err(|_| EnrichmentError::NotConfigured(API_KEY_KEY.to_string()))?;

        let mut parts = vec![json!({ "text": build_prompt(name, request.image.is_some()) })];
        if let Some(image) = &request.image {
            parts.push(json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": STANDARD.encode(&image.bytes),
                }
            }));
        }

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        debug!(url = %url, "Gemini generateContent request");

        let outbound = OutboundRequest::post(url, json!({ "contents": [{ "parts": parts }] }))
            .header("x-goog-api-key", api_key);
        let response = self.transport.post_json(outbound).await?;

        if !response.is_success() {
            warn!(status = response.status, "Gemini request failed");
            return Err(EnrichmentError::Api {
                status: response.status,
                body: response.diagnostic_body(),
            });
        }

        let body = response
            .body
            .ok_or_else(|| EnrichmentError::Parse("response body could not be read".to_string()))?;
        let text = response_text(&body)?;
        let suggestion = parse_suggestion(&text)?;

        info!(category = %suggestion.category, suggested_price = suggestion.suggested_price, "Product enriched");
        Ok(suggestion)
    }
}

fn build_prompt(name: &str, with_image: bool) -> String {
    let image_clause = if with_image { " e na imagem fornecida," } else { "" };
    format!(
        r#"Você é um especialista em e-commerce.
Com base no nome do produto: "{name}"{image_clause}
por favor, forneça:
1. Uma descrição atraente e detalhada para o Mercado Livre.
2. Uma categoria apropriada.
3. Um preço sugerido em Reais (apenas o número).

Retorne APENAS um objeto JSON válido no seguinte formato:
{{
  "description": "...",
  "category": "...",
  "suggestedPrice": 0.00
}}"#
    )
}

/// Concatenated text parts of the first candidate
fn response_text(body: &str) -> Result<String, EnrichmentError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| EnrichmentError::Parse(format!("unexpected response shape: {}", e)))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(EnrichmentError::Parse("model returned no text".to_string()));
    }
    Ok(text)
}

fn parse_suggestion(text: &str) -> Result<EnrichmentSuggestion, EnrichmentError> {
    let object = extract_json_object(text)
        .ok_or_else(|| EnrichmentError::Parse("no JSON object in model answer".to_string()))?;

    let value: Value = serde_json::from_str(object)
        .map_err(|e| EnrichmentError::Parse(format!("invalid JSON: {}", e)))?;

    serde_json::from_value(value)
        .map_err(|e| EnrichmentError::Parse(format!("missing or invalid fields: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::ImageInput;
    use crate::marketplaces::http_client::testing::RecordingTransport;
    use crate::marketplaces::http_client::TransportResponse;
    use tokio_test::assert_err;

    fn settings(api_key: Option<&str>) -> EnrichmentSettings {
        EnrichmentSettings {
            api_key: api_key.map(str::to_string),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            model: "gemini-test".to_string(),
        }
    }

    fn model_answer(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    fn request(name: &str, image: Option<ImageInput>) -> EnrichmentRequest {
        EnrichmentRequest { name: name.to_string(), image }
    }

    #[tokio::test]
    async fn test_enrich_parses_suggestion() {
        let answer = "```json\n{\"description\": \"Câmera profissional\", \"category\": \"Câmeras\", \"suggestedPrice\": 3599.9}\n```";
        let transport = Arc::new(RecordingTransport::always(200, model_answer(answer)));
        let enricher = GeminiEnricher::new(transport.clone(), &settings(Some("AIza-key")));

        let suggestion = enricher.enrich(&request("Câmera DSLR Canon", None)).await.unwrap();

        assert_eq!(suggestion.description, "Câmera profissional");
        assert_eq!(suggestion.category, "Câmeras");
        assert_eq!(suggestion.suggested_price, 3599.9);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-test:generateContent"
        );
        assert_eq!(calls[0].headers, vec![("x-goog-api-key", "AIza-key".to_string())]);

        let parts = calls[0].body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0]["text"].as_str().unwrap().contains("\"Câmera DSLR Canon\""));
    }

    #[tokio::test]
    async fn test_image_sent_inline() {
        let answer = r#"{"description": "d", "category": "c", "suggestedPrice": "49,90"}"#;
        let transport = Arc::new(RecordingTransport::always(200, model_answer(answer)));
        let enricher = GeminiEnricher::new(transport.clone(), &settings(Some("key")));

        let image = ImageInput { bytes: vec![0xff, 0xd8, 0xff], mime_type: "image/jpeg".to_string() };
        let suggestion = enricher.enrich(&request("Caneca", Some(image))).await.unwrap();
        assert_eq!(suggestion.suggested_price, 49.90);

        let parts = transport.calls()[0].body["contents"][0]["parts"].clone();
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[1]["inline_data"]["data"], "/9j/");
        assert!(parts[0]["text"].as_str().unwrap().contains("imagem fornecida"));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let transport = Arc::new(RecordingTransport::always(200, json!({})));
        let enricher = GeminiEnricher::new(transport.clone(), &settings(None));

        let err = assert_err!(enricher.enrich(&request("Caneca", None)).await);
        assert!(matches!(err, EnrichmentError::NotConfigured(ref k) if k == API_KEY_KEY));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_name() {
        let transport = Arc::new(RecordingTransport::always(200, json!({})));
        let enricher = GeminiEnricher::new(transport.clone(), &settings(Some("key")));

        let err = assert_err!(enricher.enrich(&request("  ", None)).await);
        assert!(matches!(err, EnrichmentError::EmptyName));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_error() {
        let transport = Arc::new(RecordingTransport::new(|_| {
            Ok(TransportResponse::json(403, &json!({"error": {"status": "PERMISSION_DENIED"}})))
        }));
        let enricher = GeminiEnricher::new(transport, &settings(Some("bad")));

        let err = assert_err!(enricher.enrich(&request("Caneca", None)).await);
        assert!(matches!(err, EnrichmentError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_unparsable_answer() {
        let transport = Arc::new(RecordingTransport::always(200, model_answer("Desculpe, não posso ajudar.")));
        let enricher = GeminiEnricher::new(transport, &settings(Some("key")));

        let err = assert_err!(enricher.enrich(&request("Caneca", None)).await);
        assert!(matches!(err, EnrichmentError::Parse(_)));
    }

    #[test]
    fn test_parse_suggestion_requires_all_fields() {
        assert!(parse_suggestion(r#"{"description": "d", "category": "c"}"#).is_err());
        assert!(parse_suggestion(r#"{"description": "d", "category": "c", "suggestedPrice": -5}"#).is_err());
    }

    #[test]
    fn test_response_text_without_candidates() {
        assert!(response_text(r#"{"candidates": []}"#).is_err());
        assert!(response_text(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).is_err());
    }
}

//! AI enrichment endpoint

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::enrichment::{EnrichmentError, EnrichmentRequest, EnrichmentSuggestion, ImageInput};
use crate::AppState;

use super::{bad_request, ErrorResponse};

/// Request body for enrichment
#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrichRequest {
    /// Product name
    pub name: String,
    /// Product photo as a data URI or bare base64
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EnrichResponse {
    pub success: bool,
    pub suggestion: EnrichmentSuggestion,
    /// `suggestedPrice` formatted for the price field
    pub price: String,
}

/// POST /api/v1/enrich - Suggest description, category and price
#[utoipa::path(
    post,
    path = "/api/v1/enrich",
    tag = "enrichment",
    request_body = EnrichRequest,
    responses(
        (status = 200, description = "Suggestions generated", body = EnrichResponse),
        (status = 400, description = "Missing name or unreadable image", body = ErrorResponse),
        (status = 502, description = "AI provider failed or answered unparsable content", body = ErrorResponse),
        (status = 503, description = "AI provider not configured", body = ErrorResponse)
    )
)]
pub async fn enrich_product(
    state: web::Data<AppState>,
    body: web::Json<EnrichRequest>,
) -> HttpResponse {
    let body = body.into_inner();

    let image = match body.image.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(encoded) => match ImageInput::from_encoded(encoded) {
            Ok(image) => Some(image),
            Err(e) => return bad_request(e.code(), e.to_string()),
        },
        None => None,
    };

    let request = EnrichmentRequest { name: body.name, image };

    match state.enricher.enrich(&request).await {
        Ok(suggestion) => {
            info!(name = %request.name, "Enrichment succeeded");
            HttpResponse::Ok().json(EnrichResponse {
                success: true,
                price: suggestion.price_text(),
                suggestion,
            })
        }
        Err(e) => {
            error!(error = %e, "Enrichment failed");
            let payload = ErrorResponse::new(e.code(), e.to_string());
            match e {
                EnrichmentError::EmptyName | EnrichmentError::InvalidImage(_) => {
                    HttpResponse::BadRequest().json(payload)
                }
                EnrichmentError::NotConfigured(_) => HttpResponse::ServiceUnavailable().json(payload),
                _ => HttpResponse::BadGateway().json(payload),
            }
        }
    }
}

//! Health check endpoint

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub inventory_items: usize,
    /// Which credentials are present (values are never exposed)
    pub configured: ConfiguredIntegrations,
}

#[derive(Serialize, ToSchema)]
pub struct ConfiguredIntegrations {
    pub mercado_livre: bool,
    pub shopee: bool,
    pub enrichment: bool,
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// GET /health - Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let settings = &state.settings;

    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        inventory_items: state.inventory.len(),
        configured: ConfiguredIntegrations {
            mercado_livre: is_set(&settings.marketplaces.mercado_livre.access_token),
            shopee: is_set(&settings.marketplaces.shopee.partner_id),
            enrichment: is_set(&settings.enrichment.api_key),
        },
    };

    HttpResponse::Ok().json(response)
}

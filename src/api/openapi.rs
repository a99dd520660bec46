//! OpenAPI 3.0 specification definition

use utoipa::OpenApi;

use crate::api::handlers::{
    ErrorResponse, ApiError,
    health::{HealthResponse, ConfiguredIntegrations},
    inventory::InventoryResponse,
    enrich::{EnrichRequest, EnrichResponse},
    export::ExportResponse,
};
use crate::domain::{Product, ProductDraft};
use crate::enrichment::EnrichmentSuggestion;
use crate::export::{ExportOutcome, ExportSummary, SlotError};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fyntra Export API",
        version = "0.1.0",
        description = "Inventory builder with AI enrichment and batch export to Mercado Livre and Shopee",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Current server")
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "inventory", description = "Session inventory management"),
        (name = "enrichment", description = "AI-assisted product enrichment"),
        (name = "export", description = "Batch export to marketplaces")
    ),
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::inventory::list_products,
        crate::api::handlers::inventory::add_product,
        crate::api::handlers::inventory::remove_product,
        crate::api::handlers::enrich::enrich_product,
        crate::api::handlers::export::export_inventory,
    ),
    components(
        schemas(
            HealthResponse,
            ConfiguredIntegrations,
            ErrorResponse,
            ApiError,
            Product,
            ProductDraft,
            InventoryResponse,
            EnrichRequest,
            EnrichResponse,
            EnrichmentSuggestion,
            ExportResponse,
            ExportOutcome,
            ExportSummary,
            SlotError,
        )
    )
)]
pub struct ApiDoc;

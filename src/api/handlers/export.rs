//! Marketplace export endpoint

use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::time::Instant;
use tracing::info;
use utoipa::ToSchema;

use crate::export::{ExportOutcome, ExportSummary};
use crate::AppState;

use super::{bad_request, ErrorResponse};

/// Response for a batch export
#[derive(Serialize, ToSchema)]
pub struct ExportResponse {
    /// True only if every marketplace call succeeded
    pub success: bool,
    pub summary: ExportSummary,
    /// One entry per inventory product, in inventory order
    pub outcomes: Vec<ExportOutcome>,
    pub export_time_ms: u64,
}

/// POST /api/v1/export - Publish the whole inventory to every marketplace
#[utoipa::path(
    post,
    path = "/api/v1/export",
    tag = "export",
    responses(
        (status = 200, description = "Batch finished; check each outcome", body = ExportResponse),
        (status = 400, description = "Inventory is empty", body = ErrorResponse)
    )
)]
pub async fn export_inventory(state: web::Data<AppState>) -> HttpResponse {
    let products = state.inventory.snapshot();
    if products.is_empty() {
        return bad_request("EMPTY_INVENTORY", "Add products to the inventory before exporting");
    }

    let start = Instant::now();
    let outcomes = state.orchestrator.export_all(&products).await;
    let summary = ExportSummary::from_outcomes(&outcomes);
    let elapsed = start.elapsed().as_millis() as u64;

    info!(
        products = summary.total,
        failed_calls = summary.failed_calls,
        export_time_ms = elapsed,
        "Inventory export completed"
    );

    HttpResponse::Ok().json(ExportResponse {
        success: summary.all_succeeded(),
        summary,
        outcomes,
        export_time_ms: elapsed,
    })
}

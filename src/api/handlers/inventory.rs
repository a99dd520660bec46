//! Inventory endpoints

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Product, ProductDraft};
use crate::inventory::InventoryError;
use crate::AppState;

use super::{bad_request, ErrorResponse};

#[derive(Serialize, ToSchema)]
pub struct InventoryResponse {
    pub total: usize,
    pub products: Vec<Product>,
}

/// GET /api/v1/inventory - List products in insertion order
#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    tag = "inventory",
    responses(
        (status = 200, description = "Current inventory", body = InventoryResponse)
    )
)]
pub async fn list_products(state: web::Data<AppState>) -> HttpResponse {
    let products = state.inventory.snapshot();
    HttpResponse::Ok().json(InventoryResponse {
        total: products.len(),
        products,
    })
}

/// POST /api/v1/inventory - Add a product
#[utoipa::path(
    post,
    path = "/api/v1/inventory",
    tag = "inventory",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product added", body = Product),
        (status = 400, description = "Name or description missing", body = ErrorResponse)
    )
)]
pub async fn add_product(
    state: web::Data<AppState>,
    body: web::Json<ProductDraft>,
) -> HttpResponse {
    match state.inventory.add(body.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(e) => bad_request(e.code(), e.to_string()),
    }
}

/// DELETE /api/v1/inventory/{id} - Remove a product
#[utoipa::path(
    delete,
    path = "/api/v1/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product removed"),
        (status = 404, description = "Unknown product id", body = ErrorResponse)
    )
)]
pub async fn remove_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    match state.inventory.remove(&id) {
        Ok(product) => {
            info!(id = %product.id, "Product removed from inventory");
            HttpResponse::NoContent().finish()
        }
        Err(e @ InventoryError::NotFound(_)) => {
            HttpResponse::NotFound().json(ErrorResponse::new(e.code(), e.to_string()))
        }
        Err(e) => bad_request(e.code(), e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::marketplaces::http_client::testing::RecordingTransport;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state() -> web::Data<AppState> {
        let transport = Arc::new(RecordingTransport::always(200, json!({})));
        web::Data::new(AppState::new(Settings::default(), transport))
    }

    #[actix_web::test]
    async fn test_add_list_remove() {
        let state = state();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .route("/inventory", web::get().to(list_products))
                .route("/inventory", web::post().to(add_product))
                .route("/inventory/{id}", web::delete().to(remove_product)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/inventory")
            .set_json(json!({"name": "Caneca", "description": "Cerâmica", "category": "Casa", "price": "39.90"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/inventory").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["total"], 1);
        assert_eq!(listed["products"][0]["name"], "Caneca");

        let req = test::TestRequest::delete().uri(&format!("/inventory/{id}")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&format!("/inventory/{id}")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        assert!(state.inventory.is_empty());
    }

    #[actix_web::test]
    async fn test_add_rejects_missing_description() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .route("/inventory", web::post().to(add_product)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/inventory")
            .set_json(json!({"name": "Caneca"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "missing_description");
    }
}

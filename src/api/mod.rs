//! API module - HTTP routes and handlers

pub mod handlers;
pub mod openapi;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/inventory")
                    .route("", web::get().to(handlers::inventory::list_products))
                    .route("", web::post().to(handlers::inventory::add_product))
                    .route("/{id}", web::delete().to(handlers::inventory::remove_product))
            )
            .route("/enrich", web::post().to(handlers::enrich::enrich_product))
            .route("/export", web::post().to(handlers::export::export_inventory))
    )
    .route("/health", web::get().to(handlers::health::health_check))
    // Swagger UI and OpenAPI spec
    .service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", ApiDoc::openapi())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::marketplaces::http_client::testing::RecordingTransport;
    use crate::AppState;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_routes_wired() {
        let transport = Arc::new(RecordingTransport::always(200, json!({})));
        let state = web::Data::new(AppState::new(Settings::default(), transport));
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/inventory").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post().uri("/api/v1/export").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let doc: Value = test::call_and_read_body_json(&app, req).await;
        assert!(doc["paths"]["/api/v1/export"].is_object());
    }
}

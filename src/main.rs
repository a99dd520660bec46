//! Fyntra Export
//!
//! Builds a seller's product inventory (with optional AI-suggested
//! descriptions, categories and prices) and publishes it to Mercado Livre
//! and Shopee in one batch, reporting a result per product and marketplace.

use actix_web::{web, App, HttpServer, middleware};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;
use std::sync::Arc;

mod api;
mod config;
mod domain;
mod enrichment;
mod export;
mod inventory;
mod marketplaces;

use crate::config::Settings;
use crate::enrichment::GeminiEnricher;
use crate::export::ExportOrchestrator;
use crate::inventory::Inventory;
use crate::marketplaces::{HttpTransport, ReqwestTransport};

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Settings,
    pub inventory: Arc<Inventory>,
    pub orchestrator: Arc<ExportOrchestrator>,
    pub enricher: Arc<GeminiEnricher>,
}

impl AppState {
    /// Wire the inventory, marketplaces and enricher over one transport
    pub fn new(settings: Settings, transport: Arc<dyn HttpTransport>) -> Self {
        let orchestrator = ExportOrchestrator::from_settings(&settings.marketplaces, transport.clone());
        let enricher = GeminiEnricher::new(transport, &settings.enrichment);

        AppState {
            settings,
            inventory: Arc::new(Inventory::new()),
            orchestrator: Arc::new(orchestrator),
            enricher: Arc::new(enricher),
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fyntra_export=info,actix_web=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    let settings = Settings::load().context("Failed to load configuration")?;
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    let workers = settings.server.workers.unwrap_or_else(num_cpus::get);

    info!(
        "Starting Fyntra Export v{} on {}",
        env!("CARGO_PKG_VERSION"),
        bind_addr
    );

    for (integration, configured) in [
        ("mercado_livre", settings.marketplaces.mercado_livre.access_token.is_some()),
        ("shopee", settings.marketplaces.shopee.partner_id.is_some()),
        ("enrichment", settings.enrichment.api_key.is_some()),
    ] {
        if !configured {
            tracing::warn!(integration, "Credential not configured; calls will fail with missing_config");
        }
    }

    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new().context("Failed to create HTTP client")?);

    // One inventory for the whole process, shared by every worker
    let app_state = web::Data::new(AppState::new(settings, transport));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024))
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Service", "fyntra-export"))
                    .add(("X-Version", env!("CARGO_PKG_VERSION")))
            )
            .configure(api::configure_routes)
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

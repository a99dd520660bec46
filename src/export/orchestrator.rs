//! Export orchestrator
//!
//! Fans a batch of products out to every marketplace at once and collects one
//! outcome per product, in input order. A failing call only fills its own
//! slot; the batch as a whole never fails.

use futures::future::join_all;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::MarketplaceSettings;
use crate::domain::Product;
use crate::marketplaces::{HttpTransport, Marketplace, MercadoLivreAdapter, ShopeeAdapter};

use super::outcome::{ExportOutcome, ExportSummary, MarketplaceSlot, SlotError};

/// Publishes inventory snapshots to Mercado Livre and Shopee
pub struct ExportOrchestrator {
    mercado_livre: Arc<dyn Marketplace>,
    shopee: Arc<dyn Marketplace>,
}

impl ExportOrchestrator {
    pub fn new(mercado_livre: Arc<dyn Marketplace>, shopee: Arc<dyn Marketplace>) -> Self {
        Self { mercado_livre, shopee }
    }

    /// Build both adapters over a shared transport
    pub fn from_settings(settings: &MarketplaceSettings, transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(
            Arc::new(MercadoLivreAdapter::new(transport.clone(), &settings.mercado_livre)),
            Arc::new(ShopeeAdapter::new(transport, &settings.shopee)),
        )
    }

    /// Export every product to both marketplaces
    ///
    /// All calls are in flight together. The result has exactly one outcome
    /// per input product, in input order.
    #[instrument(skip(self, products), fields(product_count = products.len()))]
    pub async fn export_all(&self, products: &[Product]) -> Vec<ExportOutcome> {
        let outcomes = join_all(products.iter().map(|product| self.export_one(product))).await;

        let summary = ExportSummary::from_outcomes(&outcomes);
        info!(
            total = summary.total,
            ml_succeeded = summary.ml_succeeded,
            shopee_succeeded = summary.shopee_succeeded,
            failed_calls = summary.failed_calls,
            "Export batch finished"
        );

        outcomes
    }

    async fn export_one(&self, product: &Product) -> ExportOutcome {
        let (ml, shopee) = futures::join!(
            Self::run(self.mercado_livre.as_ref(), product),
            Self::run(self.shopee.as_ref(), product),
        );

        ExportOutcome {
            product: product.name.clone(),
            ml,
            shopee,
        }
    }

    /// Run one adapter call, converting any failure into a slot
    async fn run(marketplace: &dyn Marketplace, product: &Product) -> MarketplaceSlot {
        let result = AssertUnwindSafe(marketplace.export(product))
            .catch_unwind()
            .await;

        match result {
            Ok(Ok(value)) => MarketplaceSlot::Success(value),
            Ok(Err(err)) => {
                warn!(
                    marketplace = marketplace.code(),
                    product = %product.name,
                    code = err.code(),
                    error = %err,
                    "Export failed"
                );
                MarketplaceSlot::Failure(SlotError::from(&err))
            }
            Err(_) => {
                warn!(marketplace = marketplace.code(), product = %product.name, "Export panicked");
                MarketplaceSlot::Failure(SlotError {
                    error: format!("{} export aborted unexpectedly", marketplace.name()),
                    code: "internal_error".to_string(),
                    status: None,
                    details: None,
                })
            }
        }
    }
}

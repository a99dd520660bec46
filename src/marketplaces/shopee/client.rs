//! Shopee Open Platform Client Implementation
//!
//! Creates one item per product through `POST /api/v2/product/add_item`.
//!
//! Only `partner_id` is sent. The platform also expects `timestamp`,
//! `access_token`, `shop_id` and an HMAC `sign` on every call; request signing
//! is not implemented, so live calls are rejected by Shopee until it is.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::ShopeeSettings;
use crate::domain::Product;
use crate::marketplaces::http_client::{HttpTransport, OutboundRequest};
use crate::marketplaces::response::into_export_result;
use crate::marketplaces::traits::{ExportError, ExportResult, Marketplace};
use crate::marketplaces::validation::require_config;
use super::mapper::ShopeeMapper;

/// Name of the identifier this adapter requires
pub const PARTNER_ID_KEY: &str = "SHOPEE_PARTNER_ID";

/// Shopee marketplace adapter
pub struct ShopeeAdapter {
    transport: Arc<dyn HttpTransport>,
    partner_id: Option<String>,
    endpoint: String,
}

impl ShopeeAdapter {
    pub fn new(transport: Arc<dyn HttpTransport>, settings: &ShopeeSettings) -> Self {
        ShopeeAdapter {
            transport,
            partner_id: settings.partner_id.clone(),
            endpoint: settings.endpoint.clone(),
        }
    }
}

#[async_trait]
impl Marketplace for ShopeeAdapter {
    fn code(&self) -> &'static str {
        "shopee"
    }

    fn name(&self) -> &'static str {
        "Shopee"
    }

    async fn export(&self, product: &Product) -> ExportResult<Value> {
        let partner_id = require_config(PARTNER_ID_KEY, self.partner_id.as_deref())?;
        let body = ShopeeMapper::map_product(product)?;
        let body = serde_json::to_value(&body).map_err(|e| ExportError::Decode(e.to_string()))?;

        debug!(endpoint = %self.endpoint, product = %product.name, "Shopee add_item request");

        let request = OutboundRequest::post(&self.endpoint, body).query("partner_id", partner_id);
        let response = self.transport.post_json(request).await?;
        let created = into_export_result(self.name(), response)?;

        info!(product = %product.name, "Published to Shopee");
        Ok(created)
    }
}

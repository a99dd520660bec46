//! Mercado Livre API Client Implementation
//!
//! Publishes one listing per product through `POST /items`.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::MercadoLivreSettings;
use crate::domain::Product;
use crate::marketplaces::http_client::{HttpTransport, OutboundRequest};
use crate::marketplaces::response::into_export_result;
use crate::marketplaces::traits::{ExportError, ExportResult, Marketplace};
use crate::marketplaces::validation::require_config;
use super::mapper::MercadoLivreMapper;

/// Name of the credential this adapter requires
pub const ACCESS_TOKEN_KEY: &str = "MERCADO_LIVRE_ACCESS_TOKEN";

/// Mercado Livre marketplace adapter
pub struct MercadoLivreAdapter {
    transport: Arc<dyn HttpTransport>,

    /// OAuth access token
    access_token: Option<String>,

    /// Item creation endpoint
    endpoint: String,
}

impl MercadoLivreAdapter {
    pub fn new(transport: Arc<dyn HttpTransport>, settings: &MercadoLivreSettings) -> Self {
        MercadoLivreAdapter {
            transport,
            access_token: settings.access_token.clone(),
            endpoint: settings.endpoint.clone(),
        }
    }
}

#[async_trait]
impl Marketplace for MercadoLivreAdapter {
    fn code(&self) -> &'static str {
        "mercado_livre"
    }

    fn name(&self) -> &'static str {
        "Mercado Livre"
    }

    async fn export(&self, product: &Product) -> ExportResult<Value> {
        let token = require_config(ACCESS_TOKEN_KEY, self.access_token.as_deref())?;
        let body = MercadoLivreMapper::map_product(product)?;
        let body = serde_json::to_value(&body).map_err(|e| ExportError::Decode(e.to_string()))?;

        debug!(endpoint = %self.endpoint, product = %product.name, "Mercado Livre item request");

        let request = OutboundRequest::post(&self.endpoint, body).bearer_auth(token);
        let response = self.transport.post_json(request).await?;
        let created = into_export_result(self.name(), response)?;

        info!(product = %product.name, item_id = ?created.get("id"), "Published to Mercado Livre");
        Ok(created)
    }
}

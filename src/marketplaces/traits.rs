//! Marketplace trait definitions
//!
//! Every marketplace integration (Mercado Livre, Shopee) implements the
//! `Marketplace` trait: translate a `Product` into the marketplace's request
//! shape, perform a single HTTP call, and map the outcome to the raw JSON
//! response or an `ExportError`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::Product;
use crate::marketplaces::http_client::TransportError;

// ============================================================================
// Error Types
// ============================================================================

/// Failure of a single marketplace export call
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Missing configuration: {0} is not set")]
    MissingConfig(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid price: {0:?} is not a non-negative number")]
    InvalidPrice(String),

    #[error("{marketplace} rejected the request: {status} {status_text}")]
    Marketplace {
        marketplace: &'static str,
        status: u16,
        status_text: String,
        /// Best-effort diagnostic body (JSON, raw text, or nothing)
        body: Option<Value>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ExportError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::MissingConfig(_) => "missing_config",
            ExportError::InvalidImage(_) => "invalid_image",
            ExportError::InvalidPrice(_) => "invalid_price",
            ExportError::Marketplace { .. } => "marketplace_error",
            ExportError::Transport(_) => "transport_error",
            ExportError::Decode(_) => "decode_error",
        }
    }

    /// HTTP status returned by the marketplace, if it answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ExportError::Marketplace { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for marketplace operations
pub type ExportResult<T> = Result<T, ExportError>;

// ============================================================================
// Marketplace Trait
// ============================================================================

/// A marketplace that products can be published to
#[async_trait]
pub trait Marketplace: Send + Sync {
    /// Marketplace code (e.g., "mercado_livre", "shopee")
    fn code(&self) -> &'static str;

    /// Display name (e.g., "Mercado Livre")
    fn name(&self) -> &'static str;

    /// Publish one product, returning the marketplace's response body verbatim
    ///
    /// Validation and configuration failures are reported before any
    /// network call. Exactly one attempt is made.
    async fn export(&self, product: &Product) -> ExportResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ExportError::MissingConfig("X".into()).code(), "missing_config");
        assert_eq!(ExportError::InvalidImage("bad".into()).code(), "invalid_image");
        assert_eq!(ExportError::InvalidPrice("abc".into()).code(), "invalid_price");
    }

    #[test]
    fn test_marketplace_error_carries_status() {
        let err = ExportError::Marketplace {
            marketplace: "Mercado Livre",
            status: 400,
            status_text: "Bad Request".to_string(),
            body: None,
        };

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Mercado Livre rejected the request: 400 Bad Request");
        assert_eq!(ExportError::Decode("x".into()).status(), None);
    }

    #[test]
    fn test_missing_config_message_names_variable() {
        let err = ExportError::MissingConfig("MERCADO_LIVRE_ACCESS_TOKEN".into());
        assert!(err.to_string().contains("MERCADO_LIVRE_ACCESS_TOKEN"));
    }
}

//! Per-product export outcomes

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::marketplaces::ExportError;

/// Failure recorded in place of a marketplace response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SlotError {
    /// Human-readable message
    pub error: String,
    /// Machine-readable code (e.g. "missing_config", "marketplace_error")
    pub code: String,
    /// HTTP status when the marketplace answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Diagnostic body returned with an error status
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<Value>,
}

impl From<&ExportError> for SlotError {
    fn from(err: &ExportError) -> Self {
        let details = match err {
            ExportError::Marketplace { body, .. } => body.clone(),
            _ => None,
        };

        SlotError {
            error: err.to_string(),
            code: err.code().to_string(),
            status: err.status(),
            details,
        }
    }
}

/// Result of one marketplace call for one product
///
/// Serialized untagged: a success is the marketplace's raw JSON body, a
/// failure is `{ "error": ..., "code": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarketplaceSlot {
    Success(Value),
    Failure(SlotError),
}

impl MarketplaceSlot {
    pub fn is_success(&self) -> bool {
        matches!(self, MarketplaceSlot::Success(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            MarketplaceSlot::Success(value) => Some(value),
            MarketplaceSlot::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SlotError> {
        match self {
            MarketplaceSlot::Success(_) => None,
            MarketplaceSlot::Failure(err) => Some(err),
        }
    }
}

impl From<Result<Value, ExportError>> for MarketplaceSlot {
    fn from(result: Result<Value, ExportError>) -> Self {
        match result {
            Ok(value) => MarketplaceSlot::Success(value),
            Err(err) => MarketplaceSlot::Failure(SlotError::from(&err)),
        }
    }
}

/// Export result for a single product, one slot per marketplace
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExportOutcome {
    /// Product name
    pub product: String,
    /// Mercado Livre response or error
    #[schema(value_type = Object)]
    pub ml: MarketplaceSlot,
    /// Shopee response or error
    #[schema(value_type = Object)]
    pub shopee: MarketplaceSlot,
}

/// Counts over a batch of outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ExportSummary {
    pub total: usize,
    pub ml_succeeded: usize,
    pub shopee_succeeded: usize,
    pub failed_calls: usize,
}

impl ExportSummary {
    pub fn from_outcomes(outcomes: &[ExportOutcome]) -> Self {
        let mut summary = ExportSummary {
            total: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            if outcome.ml.is_success() {
                summary.ml_succeeded += 1;
            } else {
                summary.failed_calls += 1;
            }
            if outcome.shopee.is_success() {
                summary.shopee_succeeded += 1;
            } else {
                summary.failed_calls += 1;
            }
        }

        summary
    }

    /// Whether every call in the batch succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed_calls == 0
    }
}

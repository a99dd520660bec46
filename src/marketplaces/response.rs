//! Mapping of marketplace HTTP answers to export results

use serde_json::Value;
use tracing::warn;

use super::http_client::TransportResponse;
use super::traits::{ExportError, ExportResult};

/// Success bodies are returned verbatim; any other status becomes
/// `ExportError::Marketplace` carrying the best-effort diagnostic body.
pub fn into_export_result(marketplace: &'static str, response: TransportResponse) -> ExportResult<Value> {
    if !response.is_success() {
        let body = response.diagnostic_body();
        warn!(
            marketplace,
            status = response.status,
            status_text = %response.status_text,
            "Marketplace returned an error status"
        );
        return Err(ExportError::Marketplace {
            marketplace,
            status: response.status,
            status_text: response.status_text,
            body,
        });
    }

    let text = response.body.ok_or_else(|| {
        ExportError::Decode(format!("{} response body could not be read", marketplace))
    })?;

    serde_json::from_str(&text).map_err(|e| {
        ExportError::Decode(format!(
            "{} returned non-JSON body: {} - Body: {}",
            marketplace,
            e,
            text.chars().take(500).collect::<String>()
        ))
    })
}

//! Payload checks shared by the marketplace adapters
//!
//! All helpers are synchronous and side-effect free; they run before any
//! network call so an invalid product never reaches a marketplace.

use url::Url;

use super::traits::{ExportError, ExportResult};

const TRUNCATION_MARKER: &str = "...";

/// Accept only a public http(s) image URL, returning it trimmed
pub fn ensure_public_image_url(image: &str) -> ExportResult<&str> {
    let trimmed = image.trim();

    if trimmed
        .get(..5)
        .map(|prefix| prefix.eq_ignore_ascii_case("data:"))
        .unwrap_or(false)
    {
        return Err(ExportError::InvalidImage(
            "embedded image data must be hosted and referenced by URL".to_string(),
        ));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| ExportError::InvalidImage(format!("{:?} is not a valid URL ({})", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed),
        other => Err(ExportError::InvalidImage(format!(
            "unsupported URL scheme {:?}, expected http or https",
            other
        ))),
    }
}

/// Trim `text` and cut it to at most `max_length` characters
///
/// A cut text ends with `...`. Lengths count characters, not bytes.
pub fn clamp_text(text: &str, max_length: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_length {
        return trimmed.to_string();
    }

    let marker_len = TRUNCATION_MARKER.len();
    if max_length <= marker_len {
        return TRUNCATION_MARKER[..max_length].to_string();
    }

    let mut clamped: String = trimmed.chars().take(max_length - marker_len).collect();
    clamped.push_str(TRUNCATION_MARKER);
    clamped
}

/// Resolve a required configuration value
///
/// Fails with `MissingConfig(name)` when absent or blank. The value itself is
/// never logged or embedded in the error.
pub fn require_config<'a>(name: &str, value: Option<&'a str>) -> ExportResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ExportError::MissingConfig(name.to_string()))
}

/// Parse a price entered as text into a non-negative amount
///
/// Accepts `.` or a single `,` as decimal separator ("129.90", "129,90").
pub fn parse_price(price: &str) -> ExportResult<f64> {
    let trimmed = price.trim();
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| ExportError::InvalidPrice(price.to_string()))
}

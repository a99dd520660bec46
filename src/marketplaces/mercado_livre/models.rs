//! Mercado Livre API Request Models
//!
//! Body of `POST /items`. See
//! https://developers.mercadolibre.com.ar/es_ar/publica-productos

use serde::Serialize;

/// Listing creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MlItemRequest {
    pub title: String,
    pub category_id: &'static str,
    pub price: f64,
    pub currency_id: &'static str,
    pub available_quantity: u32,
    pub condition: &'static str,
    pub listing_type_id: &'static str,
    pub description: MlDescription,
    pub pictures: Vec<MlPicture>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MlDescription {
    pub plain_text: String,
}

/// Picture referenced by a public URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MlPicture {
    pub source: String,
}

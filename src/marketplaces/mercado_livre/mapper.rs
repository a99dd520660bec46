//! Product to Mercado Livre request mapper

use crate::domain::Product;
use crate::marketplaces::traits::ExportResult;
use crate::marketplaces::validation::{clamp_text, ensure_public_image_url, parse_price};
use super::models::*;

/// Maximum length of `description.plain_text`
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

const CURRENCY_ID: &str = "BRL";
const AVAILABLE_QUANTITY: u32 = 1;
const CONDITION: &str = "new";
const LISTING_TYPE_ID: &str = "gold_special";
const PLACEHOLDER_CATEGORY_ID: &str = "MLB1234";

/// Mapper for Mercado Livre listing requests
pub struct MercadoLivreMapper;

impl MercadoLivreMapper {
    /// Build the listing body, rejecting invalid prices and images
    pub fn map_product(product: &Product) -> ExportResult<MlItemRequest> {
        let price = parse_price(&product.price)?;

        let pictures = match product.image_ref() {
            Some(image) => vec![MlPicture {
                source: ensure_public_image_url(image)?.to_string(),
            }],
            None => Vec::new(),
        };

        Ok(MlItemRequest {
            title: product.name.clone(),
            category_id: Self::category_id(&product.category),
            price,
            currency_id: CURRENCY_ID,
            available_quantity: AVAILABLE_QUANTITY,
            condition: CONDITION,
            listing_type_id: LISTING_TYPE_ID,
            description: MlDescription {
                plain_text: clamp_text(&product.description, DESCRIPTION_MAX_LENGTH),
            },
            pictures,
        })
    }

    /// Marketplace category for a free-text label
    ///
    /// No taxonomy mapping exists yet; every label maps to the placeholder id.
    pub fn category_id(_label: &str) -> &'static str {
        PLACEHOLDER_CATEGORY_ID
    }
}

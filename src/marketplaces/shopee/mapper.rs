//! Product to Shopee request mapper

use crate::domain::Product;
use crate::marketplaces::traits::ExportResult;
use crate::marketplaces::validation::{clamp_text, ensure_public_image_url, parse_price};
use super::models::*;

/// Maximum length of `description`
pub const DESCRIPTION_MAX_LENGTH: usize = 3000;

const PLACEHOLDER_CATEGORY_ID: u64 = 100001;
const NO_BRAND_ID: u64 = 0;
const AVAILABLE_STOCK: u32 = 1;

/// Mapper for Shopee add_item requests
pub struct ShopeeMapper;

impl ShopeeMapper {
    /// Build the add_item body
    ///
    /// The image is validated like any other adapter's, but `image_id_list`
    /// stays empty: Shopee needs the image uploaded through its media API
    /// first, and that upload step is not implemented.
    pub fn map_product(product: &Product) -> ExportResult<ShopeeAddItemRequest> {
        let original_price = parse_price(&product.price)?;

        if let Some(image) = product.image_ref() {
            ensure_public_image_url(image)?;
        }

        Ok(ShopeeAddItemRequest {
            item_name: product.name.clone(),
            description: clamp_text(&product.description, DESCRIPTION_MAX_LENGTH),
            category_id: Self::category_id(&product.category),
            brand: ShopeeBrand { brand_id: NO_BRAND_ID },
            original_price,
            stock_info_v2: ShopeeStockInfo {
                summary_info: ShopeeStockSummary {
                    total_reserved_stock: 0,
                    total_available_stock: AVAILABLE_STOCK,
                },
            },
            image: ShopeeImage { image_id_list: Vec::new() },
        })
    }

    /// Marketplace category for a free-text label (placeholder, no mapping yet)
    pub fn category_id(_label: &str) -> u64 {
        PLACEHOLDER_CATEGORY_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplaces::traits::ExportError;

    fn product() -> Product {
        Product {
            id: "p2".to_string(),
            name: "Tênis de corrida".to_string(),
            image: Some("https://cdn.example.com/t.png".to_string()),
            description: "Leve e confortável".to_string(),
            category: "Esportes".to_string(),
            price: "199,00".to_string(),
        }
    }

    #[test]
    fn test_map_product() {
        let request = ShopeeMapper::map_product(&product()).unwrap();

        assert_eq!(request.item_name, "Tênis de corrida");
        assert_eq!(request.description, "Leve e confortável");
        assert_eq!(request.category_id, 100001);
        assert_eq!(request.brand.brand_id, 0);
        assert_eq!(request.original_price, 199.0);
        assert_eq!(request.stock_info_v2.summary_info.total_available_stock, 1);
        assert_eq!(request.stock_info_v2.summary_info.total_reserved_stock, 0);
        assert!(request.image.image_id_list.is_empty());
    }

    #[test]
    fn test_description_limit_is_3000() {
        let mut p = product();
        p.description = "y".repeat(3500);

        let request = ShopeeMapper::map_product(&p).unwrap();
        assert_eq!(request.description.chars().count(), 3000);
        assert!(request.description.ends_with("..."));
    }

    #[test]
    fn test_embedded_image_rejected() {
        let mut p = product();
        p.image = Some("data:image/png;base64,iVBORw0KGgo=".to_string());

        let err = ShopeeMapper::map_product(&p).unwrap_err();
        assert!(matches!(err, ExportError::InvalidImage(_)));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(ShopeeMapper::map_product(&product()).unwrap()).unwrap();

        assert_eq!(value["brand"], serde_json::json!({"brand_id": 0}));
        assert_eq!(value["image"], serde_json::json!({"image_id_list": []}));
        assert_eq!(
            value["stock_info_v2"]["summary_info"]["total_available_stock"],
            1
        );
    }
}

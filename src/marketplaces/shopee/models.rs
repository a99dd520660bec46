//! Shopee API Request Models
//!
//! Body of `POST /api/v2/product/add_item`. See
//! https://open.shopee.com/documents/v2/v2.product.add_item

use serde::Serialize;

/// Item creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopeeAddItemRequest {
    pub item_name: String,
    pub description: String,
    pub category_id: u64,
    pub brand: ShopeeBrand,
    pub original_price: f64,
    pub stock_info_v2: ShopeeStockInfo,
    pub image: ShopeeImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopeeBrand {
    pub brand_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopeeStockInfo {
    pub summary_info: ShopeeStockSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopeeStockSummary {
    pub total_reserved_stock: u32,
    pub total_available_stock: u32,
}

/// Images already uploaded to Shopee's media space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopeeImage {
    pub image_id_list: Vec<String>,
}

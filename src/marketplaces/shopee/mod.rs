//! Shopee Marketplace Module
//!
//! API Documentation: https://open.shopee.com/documents/v2/v2.product.add_item

mod client;
mod models;
mod mapper;

pub use client::{ShopeeAdapter, PARTNER_ID_KEY};

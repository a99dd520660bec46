//! Mercado Livre Marketplace Module
//!
//! API Documentation: https://developers.mercadolibre.com.ar/es_ar/publica-productos

mod client;
mod models;
mod mapper;

pub use client::{MercadoLivreAdapter, ACCESS_TOKEN_KEY};

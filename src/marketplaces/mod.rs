//! Marketplace Integration Module
//!
//! A unified interface for publishing inventory products to marketplaces.
//!
//! # Architecture
//!
//! ```text
//!              ┌────────────────────┐
//!              │  Marketplace Trait │
//!              └─────────┬──────────┘
//!                        │
//!           ┌────────────┴───────────┐
//!           │                        │
//!   ┌───────┴───────┐        ┌───────┴──────┐
//!   │ Mercado Livre │        │    Shopee    │
//!   └───────┬───────┘        └───────┬──────┘
//!           └───────────┬────────────┘
//!                ┌──────┴────────┐
//!                │ HttpTransport │
//!                └───────────────┘
//! ```

pub mod traits;
pub mod http_client;
pub mod validation;
pub mod response;
pub mod mercado_livre;
pub mod shopee;

// Re-export commonly used types
pub use traits::{ExportError, ExportResult, Marketplace};
pub use http_client::{HttpTransport, ReqwestTransport, TransportError};
pub use mercado_livre::MercadoLivreAdapter;
pub use shopee::ShopeeAdapter;

//! Domain types and models

mod product;

pub use product::{Product, ProductDraft};

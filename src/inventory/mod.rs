//! Session inventory
//!
//! The seller's working list of products, kept in memory in insertion order
//! for the lifetime of the process. Exports read a snapshot and never mutate
//! the list.

use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use crate::domain::{Product, ProductDraft};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Product name is required")]
    MissingName,

    #[error("Product description is required")]
    MissingDescription,

    #[error("Product not found: {0}")]
    NotFound(String),
}

impl InventoryError {
    pub fn code(&self) -> &'static str {
        match self {
            InventoryError::MissingName => "missing_name",
            InventoryError::MissingDescription => "missing_description",
            InventoryError::NotFound(_) => "not_found",
        }
    }
}

/// In-memory, insertion-ordered product list
#[derive(Debug, Default)]
pub struct Inventory {
    products: RwLock<Vec<Product>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it as a new product
    pub fn add(&self, draft: ProductDraft) -> Result<Product, InventoryError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(InventoryError::MissingName);
        }
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(InventoryError::MissingDescription);
        }

        let image = draft
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty());

        let product = Product::new(
            name,
            image,
            description,
            draft.category.trim(),
            draft.price.trim(),
        );

        self.products.write().push(product.clone());
        info!(id = %product.id, name = %product.name, "Product added to inventory");

        Ok(product)
    }

    /// Remove a product by id
    pub fn remove(&self, id: &str) -> Result<Product, InventoryError> {
        let mut products = self.products.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;

        Ok(products.remove(index))
    }

    /// Copy of the current list, in insertion order
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

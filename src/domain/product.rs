//! Product records handled by the inventory and the marketplace adapters

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A product in the seller's working inventory
///
/// Immutable once added; the inventory only ever removes it by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Opaque identifier used for listing and removal
    pub id: String,
    /// Display title
    pub name: String,
    /// Public image URL, or embedded `data:` image data (rejected by adapters)
    #[serde(default)]
    pub image: Option<String>,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Human category label, never a marketplace category id
    #[serde(default)]
    pub category: String,
    /// Decimal price as entered (e.g. "129.90")
    #[serde(default)]
    pub price: String,
}

impl Product {
    /// Build a product with a freshly generated id
    pub fn new(
        name: impl Into<String>,
        image: Option<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            image,
            description: description.into(),
            category: category.into(),
            price: price.into(),
        }
    }

    /// Image reference, if one is set and not blank
    pub fn image_ref(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Form input for adding a product to the inventory
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Product::new("Camera", None, "desc", "Electronics", "10");
        let b = Product::new("Camera", None, "desc", "Electronics", "10");
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_image_ref_ignores_blank() {
        let mut product = Product::new("Camera", Some("   ".to_string()), "", "", "1");
        assert_eq!(product.image_ref(), None);

        product.image = Some(" https://cdn.example.com/a.png ".to_string());
        assert_eq!(product.image_ref(), Some("https://cdn.example.com/a.png"));
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let product: Product = serde_json::from_str(r#"{"id":"x1","name":"Mug"}"#).unwrap();
        assert_eq!(product.name, "Mug");
        assert!(product.image.is_none());
        assert!(product.price.is_empty());
    }
}

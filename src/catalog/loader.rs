// catalog/loader.rs - Loading and validating the static catalog
//
// A catalog document is plain JSON:
//
//   { "categories": [ { "id", "name", "emoji"?, "count" } ],
//     "products":   [ { "id", "name", "description", "category", "price",
//                       "rating", "reviews", "features"?, ... } ] }
//
// The "all" tab may appear in "categories" (it carries the display count
// for the unfiltered grid) but no product may belong to it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::engine::derive_view;
use super::error::CatalogError;
use super::model::{Category, Product, QueryDescriptor, ALL_CATEGORIES};

/// Raw catalog document, before validation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Validated, immutable catalog
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Validate in-memory collections
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        validate(&categories, &products)?;
        Ok(Self { categories, products })
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::new(document.categories, document.products)?;

        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Read a JSON catalog document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("reading catalog from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Derived view of this catalog for `descriptor`
    pub fn view(&self, descriptor: &QueryDescriptor) -> Vec<&Product> {
        derive_view(&self.products, descriptor)
    }
}

fn validate(categories: &[Category], products: &[Product]) -> Result<(), CatalogError> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.id.clone()));
        }
    }

    let mut product_ids = HashSet::new();
    for product in products {
        if !product_ids.insert(product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        if !(0.0..=5.0).contains(&product.rating) {
            return Err(CatalogError::InvalidRating {
                id: product.id,
                rating: product.rating,
            });
        }

        if product.category == ALL_CATEGORIES {
            return Err(CatalogError::ReservedCategory { id: product.id });
        }

        if !category_ids.contains(product.category.as_str()) {
            return Err(CatalogError::UnknownCategory {
                id: product.id,
                category: product.category.clone(),
            });
        }
    }

    Ok(())
}

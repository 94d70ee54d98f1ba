// catalog/error.rs - Errors raised while loading a catalog
//
// Only loading can fail. Deriving views from a loaded catalog never does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateProduct(u32),

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("product {id} has rating {rating}, expected 0.0 to 5.0")]
    InvalidRating { id: u32, rating: f64 },

    #[error("product {id} references unknown category '{category}'")]
    UnknownCategory { id: u32, category: String },

    #[error("product {id} uses the reserved category id 'all'")]
    ReservedCategory { id: u32 },
}

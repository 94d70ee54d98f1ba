// fixtures/mod.rs - Catalog data sets shipped with the crate
//
// A fixture is a complete catalog document that can be loaded without
// touching the filesystem. The CLI falls back to the curated robot catalog
// when no catalog file is configured, and the tests use it as realistic
// input for the query engine.

pub mod catalogs;

pub use catalogs::CuratedRobots;

use crate::catalog::{Catalog, CatalogError};

/// A simple trait that every embedded catalog implements
pub trait CatalogFixture {
    /// The JSON catalog document
    fn document_json() -> &'static str;

    /// Parse and validate the document
    fn load() -> Result<Catalog, CatalogError> {
        Catalog::from_json(Self::document_json())
    }
}

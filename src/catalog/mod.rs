// catalog/mod.rs - Root module for the catalog browser
//
// Architecture:
// - model/: Product, Category and the QueryDescriptor
// - price.rs: numeric price extraction from display strings
// - engine.rs: category filter -> text filter -> sort pipeline
// - loader.rs: JSON catalog loading and validation
// - session.rs: caller-owned descriptor with a memoized view
// - summary.rs: result count line and empty-view message

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod price;
pub mod session;
pub mod summary;

pub use engine::derive_view;
pub use error::CatalogError;
pub use loader::{Catalog, CatalogDocument};
pub use model::{Category, CategoryFilter, Product, QueryDescriptor, SortKey, ALL_CATEGORIES};
pub use price::extract_min_price;
pub use session::BrowseSession;
pub use summary::{results_summary, EMPTY_VIEW_MESSAGE};

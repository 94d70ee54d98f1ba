// lib.rs - Root module for the robot_finder library
//
// The catalog module holds the query engine and everything around it.
// The fixtures module carries the embedded curated catalog.
// The config module (cli feature) reads runtime settings for the binary.

pub mod catalog;

/// Embedded catalog data sets
pub mod fixtures;

#[cfg(feature = "cli")]
pub mod config;

pub use catalog::{
    derive_view, extract_min_price, BrowseSession, Catalog, CatalogError, Category,
    CategoryFilter, Product, QueryDescriptor, SortKey,
};

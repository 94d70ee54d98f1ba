// fixtures/catalogs/mod.rs
//
// Each embedded catalog is a unit struct implementing CatalogFixture.

pub mod robots;

pub use robots::CuratedRobots;

// fixtures/catalogs/robots.rs
//
// The curated AI robot collection: programmable robots, Zaku model kits,
// ChatGPT gadgets and smart home devices. The document lives in
// data/catalog.json and is compiled into the binary.

use crate::fixtures::CatalogFixture;

pub struct CuratedRobots;

impl CatalogFixture for CuratedRobots {
    fn document_json() -> &'static str {
        include_str!("../../../data/catalog.json")
    }
}

// common/mod.rs - Shared builders for the integration tests
//
// Gives every suite the same way to build small hand-made catalogs, plus
// access to the embedded curated catalog for realistic scenarios.

#![allow(dead_code)]

use robot_finder::catalog::{Catalog, Category, Product};
use robot_finder::fixtures::{CatalogFixture, CuratedRobots};

/// Product with only the fields the query engine reads filled in
pub fn product(id: u32, name: &str, category: &str, price: &str, rating: f64, reviews: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        category: category.to_string(),
        price: price.to_string(),
        rating,
        reviews,
        features: vec![],
        badge: None,
        badge_color: None,
        image: None,
        link: None,
        search_hint: None,
    }
}

pub fn with_features(mut product: Product, features: &[&str]) -> Product {
    product.features = features.iter().map(|f| f.to_string()).collect();
    product
}

pub fn with_description(mut product: Product, description: &str) -> Product {
    product.description = description.to_string();
    product
}

pub fn category(id: &str, name: &str, count: u32) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        emoji: None,
        count,
    }
}

/// Small mixed catalog used by most engine tests
///
///   id  category  price        rating  reviews
///   1   robots    $20          3.5     120
///   2   zaku      $5           4.8     40
///   3   robots    $15          4.0     900
///   4   chatgpt   $8 - $15     4.0     15
///   5   robots    Free         4.2     300
pub fn sample_products() -> Vec<Product> {
    vec![
        with_features(
            product(1, "Coding Robot", "robots", "$20", 3.5, 120),
            &["Bluetooth", "Block Coding"],
        ),
        with_features(
            product(2, "Zaku Head Speaker", "zaku", "$5", 4.8, 40),
            &["LED Mono-Eye"],
        ),
        with_features(
            product(3, "Robot Dog", "robots", "$15", 4.0, 900),
            &["WiFi Enabled", "Touch Sensors"],
        ),
        with_description(
            product(4, "Loona Petbot", "chatgpt", "$8 - $15", 4.0, 15),
            "Pet robot that talks back",
        ),
        product(5, "Solar Kit", "robots", "Free", 4.2, 300),
    ]
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        category("all", "All Products", 5),
        category("robots", "Programmable Robots", 3),
        category("zaku", "Gundam Zaku", 1),
        category("chatgpt", "ChatGPT Gadgets", 1),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_categories(), sample_products()).expect("sample catalog is valid")
}

pub fn curated_catalog() -> Catalog {
    CuratedRobots::load().expect("embedded catalog is valid")
}

pub fn ids(view: &[&Product]) -> Vec<u32> {
    view.iter().map(|p| p.id).collect()
}

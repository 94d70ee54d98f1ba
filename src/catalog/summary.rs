// catalog/summary.rs - Text shown around the derived view

use super::model::{Category, CategoryFilter};

/// Shown in place of the grid when the view is empty
pub const EMPTY_VIEW_MESSAGE: &str = "No products found. Try a different search or category.";

/// "Showing 3 products in Programmable Robots"
///
/// The category suffix is only added for a specific category that exists in
/// `categories`.
pub fn results_summary(count: usize, category: &CategoryFilter, categories: &[Category]) -> String {
    let noun = if count == 1 { "product" } else { "products" };
    let mut summary = format!("Showing {} {}", count, noun);

    if let CategoryFilter::Only(id) = category {
        if let Some(found) = categories.iter().find(|c| &c.id == id) {
            summary.push_str(" in ");
            summary.push_str(&found.name);
        }
    }

    summary
}

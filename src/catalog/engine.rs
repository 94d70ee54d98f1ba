// catalog/engine.rs - The catalog query engine
//
// Derives the displayed product list from the full catalog and a
// QueryDescriptor. Three stages run in a fixed order:
//
//   category filter -> text search filter -> sort
//
// Philosophy: pure functions over borrowed data. The catalog is never
// mutated and nothing is remembered between calls, so the same descriptor
// over the same products always gives the same view.

use std::cmp::Ordering;

use super::model::{CategoryFilter, Product, QueryDescriptor, SortKey};
use super::price::extract_min_price;

/// Derive the ordered view for `descriptor`
///
/// Never fails: unknown categories give an empty view, blank queries keep
/// everything, and an unrecognized sort mode has already parsed to
/// [`SortKey::Default`].
pub fn derive_view<'a>(products: &'a [Product], descriptor: &QueryDescriptor) -> Vec<&'a Product> {
    let view: Vec<&Product> = products.iter().collect();
    let view = filter_by_category(view, &descriptor.category);
    let view = filter_by_text(view, &descriptor.query);
    let view = sort_view(view, descriptor.sort);

    tracing::debug!(
        category = %descriptor.category,
        query = %descriptor.query,
        sort = descriptor.sort.id(),
        total = products.len(),
        shown = view.len(),
        "derived catalog view"
    );

    view
}

/// Stage 1: keep products in the selected category
pub fn filter_by_category<'a>(view: Vec<&'a Product>, category: &CategoryFilter) -> Vec<&'a Product> {
    match category {
        CategoryFilter::All => view,
        CategoryFilter::Only(_) => view
            .into_iter()
            .filter(|product| category.matches(&product.category))
            .collect(),
    }
}

/// Stage 2: keep products whose name, description or any feature contains
/// the query, ignoring case
///
/// A query that is empty after trimming keeps every product. Otherwise the
/// query is lower-cased as typed, surrounding whitespace included.
pub fn filter_by_text<'a>(view: Vec<&'a Product>, query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return view;
    }

    let needle = query.to_lowercase();
    view.into_iter()
        .filter(|product| matches_query(product, &needle))
        .collect()
}

/// Whether `product` matches an already lower-cased query
pub fn matches_query(product: &Product, needle_lower: &str) -> bool {
    product.name.to_lowercase().contains(needle_lower)
        || product.description.to_lowercase().contains(needle_lower)
        || product
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(needle_lower))
}

/// Stage 3: order the filtered view
///
/// Works on the vector it is handed, never on the catalog. Sorting is
/// stable, so products with equal keys keep their filtered order.
pub fn sort_view(mut view: Vec<&Product>, sort: SortKey) -> Vec<&Product> {
    match sort {
        SortKey::Default => {}
        SortKey::PriceLow => sort_by_price(&mut view, |a, b| compare_numeric(a, b)),
        SortKey::PriceHigh => sort_by_price(&mut view, |a, b| compare_numeric(b, a)),
        SortKey::Rating => view.sort_by(|a, b| compare_numeric(b.rating, a.rating)),
        SortKey::Reviews => view.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
    }
    view
}

/// Total order over floats in which `-0.0` and `0.0` are equal
///
/// Adding `0.0` folds negative zero into positive zero, so equal keys stay
/// equal for the stable sort while NaN still has a fixed place.
pub fn compare_numeric(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

// Prices are parsed once per product rather than once per comparison
fn sort_by_price<F>(view: &mut Vec<&Product>, order: F)
where
    F: Fn(f64, f64) -> Ordering,
{
    let mut keyed: Vec<(f64, &Product)> = view
        .iter()
        .map(|product| (extract_min_price(&product.price), *product))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| order(*a, *b));

    view.clear();
    view.extend(keyed.into_iter().map(|(_, product)| product));
}

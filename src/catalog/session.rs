// catalog/session.rs - Caller-owned browse state with a memoized view
//
// The engine itself is stateless. A BrowseSession is what a presentation
// layer keeps around: the current descriptor plus the view last derived
// from it. The view is only recomputed after the descriptor changes.

use super::loader::Catalog;
use super::model::{CategoryFilter, Product, QueryDescriptor, SortKey};

#[derive(Debug)]
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    descriptor: QueryDescriptor,
    cached: Option<(QueryDescriptor, Vec<&'a Product>)>,
}

impl<'a> BrowseSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_descriptor(catalog, QueryDescriptor::default())
    }

    pub fn with_descriptor(catalog: &'a Catalog, descriptor: QueryDescriptor) -> Self {
        Self {
            catalog,
            descriptor,
            cached: None,
        }
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.descriptor.category = category.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.descriptor.query = query.into();
    }

    pub fn set_sort(&mut self, sort: impl Into<SortKey>) {
        self.descriptor.sort = sort.into();
    }

    /// Back to all categories, empty search, default order
    pub fn reset(&mut self) {
        self.descriptor = QueryDescriptor::default();
    }

    /// Current view, derived again only if the descriptor changed
    pub fn view(&mut self) -> &[&'a Product] {
        let stale = match &self.cached {
            Some((derived_for, _)) => *derived_for != self.descriptor,
            None => true,
        };

        if stale {
            let view = self.catalog.view(&self.descriptor);
            self.cached = Some((self.descriptor.clone(), view));
        } else {
            tracing::trace!("reusing cached catalog view");
        }

        match &self.cached {
            Some((_, view)) => view,
            None => &[],
        }
    }

    /// Whether the next call to `view` will reuse the cached result
    pub fn is_cached(&self) -> bool {
        matches!(&self.cached, Some((derived_for, _)) if *derived_for == self.descriptor)
    }
}

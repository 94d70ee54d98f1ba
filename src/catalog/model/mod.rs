// catalog/model/mod.rs - Shared data models for the catalog browser
//
// These structs describe the static catalog (products and categories) and
// the descriptor a caller passes to the query engine. Nothing here holds
// state between derivations.

use serde::{Deserialize, Serialize};

/// Identifier of the "no category restriction" sentinel
pub const ALL_CATEGORIES: &str = "all";

/// Product from the curated catalog
///
/// Only `name`, `description`, `category`, `price`, `rating`, `reviews` and
/// `features` are read by the query engine. The remaining fields are passed
/// through untouched for whoever renders the view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Display price such as "$19.99" or "$8 - $15"
    pub price: String,
    pub rating: f64,
    pub reviews: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub badge_color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub search_hint: Option<String>,
}

/// Category tab shown above the product grid
///
/// `count` is display metadata shipped with the data set. It is never
/// recomputed from the products, so it may disagree with a live view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub count: u32,
}

/// Category selector of a query
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id,
        }
    }

    /// Exact, case-sensitive identifier match
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(id: &str) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(id: String) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(id) => id,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort modes offered in the sort dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Default,
    PriceLow,
    PriceHigh,
    Rating,
    Reviews,
}

impl SortKey {
    /// Every sort mode, in menu order
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Reviews,
    ];

    /// Identifier used by selectors and on the command line
    pub fn id(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
        }
    }

    /// Strict lookup by identifier
    pub fn from_id(id: &str) -> Option<SortKey> {
        SortKey::ALL.into_iter().find(|key| key.id() == id)
    }

    /// Lenient lookup: unrecognized identifiers mean "no sort"
    pub fn parse(id: &str) -> SortKey {
        SortKey::from_id(id).unwrap_or_default()
    }
}

impl From<&str> for SortKey {
    fn from(id: &str) -> Self {
        SortKey::parse(id)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Default => write!(f, "Default"),
            SortKey::PriceLow => write!(f, "Price: Low → High"),
            SortKey::PriceHigh => write!(f, "Price: High → Low"),
            SortKey::Rating => write!(f, "Top Rated"),
            SortKey::Reviews => write!(f, "Most Reviewed"),
        }
    }
}

/// The (category, search text, sort mode) tuple behind one derived view
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub category: CategoryFilter,
    pub query: String,
    pub sort: SortKey,
}

impl QueryDescriptor {
    pub fn new(
        category: impl Into<CategoryFilter>,
        query: impl Into<String>,
        sort: impl Into<SortKey>,
    ) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
            sort: sort.into(),
        }
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<SortKey>) -> Self {
        self.sort = sort.into();
        self
    }
}

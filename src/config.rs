// config.rs - Runtime settings for the command-line browser
//
// Settings come from the process environment, after an optional .env file
// has been loaded:
//
//   ROBOT_FINDER_CATALOG  path to a catalog JSON file (default: embedded)
//   ROBOT_FINDER_SORT     initial sort mode id (default: "default")
//   RUST_LOG              log filter (default: "info")
//
// Command-line flags override every value read here.

use std::env;
use std::path::PathBuf;

use crate::catalog::SortKey;

pub const CATALOG_VAR: &str = "ROBOT_FINDER_CATALOG";
pub const SORT_VAR: &str = "ROBOT_FINDER_SORT";
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub default_sort: SortKey,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: SortKey::Default,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Load .env (if any) and read settings from the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            catalog_path: read(CATALOG_VAR).map(PathBuf::from),
            default_sort: read(SORT_VAR)
                .map(|id| parse_sort(id.trim()))
                .unwrap_or(defaults.default_sort),
            log_filter: read(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

/// Unknown ids fall back to catalog order with a warning
fn parse_sort(id: &str) -> SortKey {
    SortKey::from_id(id).unwrap_or_else(|| {
        tracing::warn!("Unknown {} value '{}', keeping catalog order", SORT_VAR, id);
        SortKey::Default
    })
}

//! Catalog listing configuration.

use serde::{Deserialize, Serialize};

use crate::types::page::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Page size used when the request omits `limit` or sends garbage.
    pub default_page_size: u32,
    /// Upper bound applied to client-supplied `limit` values.
    pub max_page_size: u32,
    /// Fixed page size of the featured (home page preview) listing.
    pub featured_limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            featured_limit: 3,
        }
    }
}

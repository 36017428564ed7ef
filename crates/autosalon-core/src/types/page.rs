//! Page requests and page results.

use serde::{Deserialize, Serialize};

/// Built-in page size. `CatalogConfig::default_page_size` starts from this
/// and request parsing falls back to the configured value, not this one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A 1-based page request. Construct through [`PageRequest::new`] so the
/// invariants `page >= 1` and `limit >= 1` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Coerce raw values: a page below 1 becomes 1, a limit below 1 becomes
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(page: i64, limit: i64) -> Self {
        Self::with_fallback(page, limit, DEFAULT_PAGE_SIZE)
    }

    /// Like [`PageRequest::new`] but a limit below 1 becomes `fallback_limit`.
    pub fn with_fallback(page: i64, limit: i64, fallback_limit: u32) -> Self {
        let page = page.clamp(1, u32::MAX as i64) as u32;
        let limit = if limit < 1 {
            fallback_limit.max(1)
        } else {
            limit.min(u32::MAX as i64) as u32
        };
        Self { page, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit as i64)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Cap the page size, keeping the page number.
    pub fn capped(self, max_limit: u32) -> Self {
        Self {
            page: self.page,
            limit: self.limit.min(max_limit.max(1)),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE as i64)
    }
}

/// One page of results plus the pre-pagination total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> PageResult<T> {
    /// Number of pages needed to show `total` items.
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_below_one_is_coerced() {
        assert_eq!(PageRequest::new(0, 10).page(), 1);
        assert_eq!(PageRequest::new(-5, 10).page(), 1);
    }

    #[test]
    fn non_positive_limit_uses_default() {
        assert_eq!(PageRequest::new(1, 0).limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(1, -3).limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn fallback_limit_replaces_non_positive_limit() {
        assert_eq!(PageRequest::with_fallback(1, 0, 12).limit(), 12);
        assert_eq!(PageRequest::with_fallback(1, -1, 12).limit(), 12);
        assert_eq!(PageRequest::with_fallback(1, 7, 12).limit(), 7);
        assert_eq!(PageRequest::with_fallback(1, 0, 0).limit(), 1);
    }

    #[test]
    fn capped_limits_page_size_only() {
        let req = PageRequest::new(4, 500).capped(100);
        assert_eq!(req.page(), 4);
        assert_eq!(req.limit(), 100);
    }

    #[test]
    fn page_count_rounds_up() {
        let result: PageResult<()> = PageResult {
            items: vec![],
            total: 5,
            page: 1,
            limit: 2,
        };
        assert_eq!(result.page_count(), 3);
    }
}

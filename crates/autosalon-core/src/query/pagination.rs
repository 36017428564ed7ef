//! Page request → `LIMIT`/`OFFSET` window.

use crate::types::page::PageRequest;

/// Row window for one page. `offset = (page - 1) * limit`, saturating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    pub fn for_request(request: PageRequest) -> Self {
        let limit = request.limit() as u64;
        let offset = (request.page() as u64 - 1).saturating_mul(limit);
        Self { offset, limit }
    }

    /// SQLite binds integers as i64; clamp instead of wrapping.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }

    /// Apply the window to an already ordered slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(items.len());
        let len = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(items.len());
        &items[start..end]
    }
}

impl From<PageRequest> for PageWindow {
    fn from(request: PageRequest) -> Self {
        Self::for_request(request)
    }
}

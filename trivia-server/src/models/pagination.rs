//! Pagination types
//!
//! Pages are 1-indexed and a fixed ten items wide. A page past the end of
//! the result set is empty rather than an error.

use serde::Deserialize;

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed, values below 1 select nothing)
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Index of the first item on this page, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Take this page's window out of an ordered result set.
    ///
    /// Covers indices `[(page-1)*10, page*10)`, clamped to the bounds of
    /// `items`.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(offset) => items.into_iter().skip(offset).take(self.limit()).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for pagination
///
/// `page` is kept as raw text so that a malformed value falls back to the
/// first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}

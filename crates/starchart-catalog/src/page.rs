//! Client-side pagination arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Records per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages for `total` records (0 when empty).
#[must_use]
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page number into `[1, max(page_count, 1)]`.
#[must_use]
pub fn clamp_page(requested: usize, total: usize) -> usize {
    requested.clamp(1, page_count(total).max(1))
}

/// Index range of `page` (clamped) within a view of `total` records.
#[must_use]
pub fn page_bounds(page: usize, total: usize) -> Range<usize> {
    let start = (clamp_page(page, total) - 1) * PAGE_SIZE;
    start.min(total)..(start + PAGE_SIZE).min(total)
}

/// Pagination summary handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current 1-based page
    pub page: usize,
    /// Total pages (0 when the view is empty)
    pub page_count: usize,
    /// Records per page
    pub page_size: usize,
    /// Records in the derived view
    pub total_results: usize,
}

impl PageInfo {
    /// Summary for `page` of a view holding `total` records.
    #[must_use]
    pub fn new(page: usize, total: usize) -> Self {
        Self {
            page: clamp_page(page, total),
            page_count: page_count(total),
            page_size: PAGE_SIZE,
            total_results: total,
        }
    }

    /// Whether a following page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

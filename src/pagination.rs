//! Page windows over ordered collections.
//!
//! ```text
//! items:   [0 1 2 3 4 5 | 6 7 8 9 10 11 | 12]     per_page = 6
//! page:         1       |       2       |  3      total_pages = 3
//!
//! page_numbers(current = 5, total = 10, max_visible = 5) → [3, 4, 5, 6, 7]
//! page_numbers(current = 1, total = 10, max_visible = 5) → [1, 2, 3, 4, 5]
//! ```

use serde::Serialize;

/// Standard page sizes for listing layouts.
pub mod sizes {
    /// Card and grid layouts
    pub const SMALL: usize = 6;
    /// Standard blog listing
    pub const MEDIUM: usize = 10;
    /// Data tables
    pub const LARGE: usize = 20;
    /// Search results
    pub const SEARCH: usize = 15;
}

/// Page numbers shown around the current page by default.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// A sanitized page request: both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    /// Coerce zero values to 1.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn per_page(&self) -> usize {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, sizes::SMALL)
    }
}

/// One page of a collection plus the numbers needed to navigate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub items_per_page: usize,
}

impl<T> PageResult<T> {
    /// Page numbers to display around this page.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        page_numbers(self.current_page, self.total_pages, max_visible)
    }
}

/// Slice out one page (1-indexed).
///
/// A page past the end yields no items rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> PageResult<T> {
    let PageRequest { page, per_page } = PageRequest::new(page, per_page);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(total_items);
    let slice = items.get(start..end).unwrap_or_default();

    PageResult {
        items: slice.to_vec(),
        current_page: page,
        total_pages,
        total_items,
        has_next_page: page < total_pages,
        has_prev_page: page > 1,
        items_per_page: per_page,
    }
}

/// Contiguous page numbers centred on `current`, within `[1, total_pages]`.
///
/// The window holds `min(total_pages, max_visible)` numbers and slides
/// toward whichever edge has room. With an even width the extra slot goes
/// after the current page.
pub fn page_numbers(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let width = max_visible.clamp(1, total_pages);
    let current = current.clamp(1, total_pages);
    let before = (width - 1) / 2;

    let start = current
        .saturating_sub(before)
        .max(1)
        .min(total_pages - width + 1);

    (start..start + width).collect()
}

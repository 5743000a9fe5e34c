//! Pagination - Slicing the Filtered Collection into UI Pages
//!
//! Page numbers are 1-indexed. Out-of-range pages are valid input and yield an
//! empty slice.

use std::num::NonZeroUsize;

/// Number of pages needed for `item_count` items, zero when there are no items
pub fn total_pages(item_count: usize, page_size: NonZeroUsize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// The `[(page-1)*size, page*size)` window of `items`, clamped to its bounds
pub fn page<T>(items: &[T], page_size: NonZeroUsize, page_number: usize) -> &[T] {
    let size = page_size.get();
    let start = page_number.saturating_sub(1).saturating_mul(size);
    if page_number == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Current page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl PageState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Back to the first page; called whenever criteria change
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self, item_count: usize) -> bool {
        self.current_page < total_pages(item_count, self.page_size)
    }

    /// Move one page back; no-op on the first page. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Move one page forward; no-op on the last page. Returns whether it moved.
    pub fn next(&mut self, item_count: usize) -> bool {
        if self.can_go_next(item_count) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Slice of `items` for the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page_size, self.current_page)
    }
}

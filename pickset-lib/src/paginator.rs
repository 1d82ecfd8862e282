//! Page math for paged views.

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PaginatorError;

/// Records per page when none is given.
pub const DEFAULT_PER_PAGE: usize = 15;

/// Page sizes offered when none are given.
pub const DEFAULT_SELECT_OPTIONS: [usize; 7] = [5, 10, 15, 25, 50, 100, 500];

/// A page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    /// Zero-based page before the move.
    pub previous: usize,
    /// Zero-based page after the move.
    pub current: usize,
}

/// Paging state over a record count.
///
/// Pages are zero-based. The current page is kept within the last page
/// whenever the record count or page size changes.
///
/// # Example
///
/// ```
/// use pickset_lib::paginator::Paginator;
///
/// let mut paginator = Paginator::new(42);
/// assert_eq!(paginator.total_pages(), 3);
///
/// paginator.set_per_page(10).unwrap();
/// assert_eq!(paginator.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_records: usize,
    per_page: usize,
    page: usize,
    select_options: Vec<usize>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Paginator {
    /// Paginate `total_records` with the default page size.
    pub fn new(total_records: usize) -> Self {
        Self {
            total_records,
            per_page: DEFAULT_PER_PAGE,
            page: 0,
            select_options: DEFAULT_SELECT_OPTIONS.to_vec(),
        }
    }

    /// Paginate with a given page size.
    pub fn with_per_page(total_records: usize, per_page: usize) -> Result<Self, PaginatorError> {
        let mut paginator = Self::new(total_records);
        paginator.set_per_page(per_page)?;
        Ok(paginator)
    }

    /// Total number of records.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Records per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Current zero-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages. Zero when there are no records.
    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.per_page)
    }

    /// Page sizes to offer, sorted, always including the current page size.
    pub fn select_options(&self) -> &[usize] {
        &self.select_options
    }

    /// Whether the current page is the first.
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the current page is the last (or there are no pages).
    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages()
    }

    /// Indices of the records on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.total_records);
        let end = (start + self.per_page).min(self.total_records);
        start..end
    }

    /// Change the record count, keeping the page in range.
    pub fn set_total_records(&mut self, total_records: usize) {
        self.total_records = total_records;
        self.clamp_page();
    }

    /// Change the page size.
    ///
    /// The page is kept in range and the size is added to the select options.
    pub fn set_per_page(&mut self, per_page: usize) -> Result<(), PaginatorError> {
        if per_page == 0 {
            return Err(PaginatorError::InvalidPageSize(per_page));
        }
        if per_page != self.per_page {
            debug!("per page {} -> {}", self.per_page, per_page);
            self.per_page = per_page;
            self.clamp_page();
        }
        self.normalize_options();
        Ok(())
    }

    /// Replace the page sizes to offer. Zero sizes are dropped.
    pub fn set_select_options(&mut self, options: &[usize]) {
        self.select_options = options.iter().copied().filter(|o| *o > 0).collect();
        self.normalize_options();
    }

    /// Go to a zero-based page.
    ///
    /// Out-of-range pages and the current page are ignored.
    pub fn paginate(&mut self, page: usize) -> Option<PageChange> {
        if page >= self.total_pages() || page == self.page {
            return None;
        }
        let change = PageChange {
            previous: self.page,
            current: page,
        };
        self.page = page;
        Some(change)
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) -> Option<PageChange> {
        self.paginate(self.page + 1)
    }

    /// Go to the previous page, if any.
    pub fn previous_page(&mut self) -> Option<PageChange> {
        self.page.checked_sub(1).and_then(|page| self.paginate(page))
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> Option<PageChange> {
        self.paginate(0)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> Option<PageChange> {
        self.total_pages()
            .checked_sub(1)
            .and_then(|page| self.paginate(page))
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        if self.page > last {
            debug!("page {} out of range, moving to {}", self.page, last);
            self.page = last;
        }
    }

    fn normalize_options(&mut self) {
        self.select_options.push(self.per_page);
        self.select_options.sort_unstable();
        self.select_options.dedup();
    }
}

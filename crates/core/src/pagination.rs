// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clamped pagination state.
//!
//! ## Invariants
//!
//! - `1 <= page <= total_pages()` after every mutation
//! - `MIN_LIMIT <= limit <= MAX_LIMIT` at all times
//! - `total_pages()` is never less than 1, even with zero items
//! - Derived values are computed on read, never stored
//!
//! Every mutator that changes `total` or `limit` reclamps the page, so no
//! caller has to remember to do it.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Smallest allowed page size.
pub const MIN_LIMIT: u32 = 1;
/// Largest allowed page size.
pub const MAX_LIMIT: u32 = 100;
/// Page size used when none is configured.
pub const DEFAULT_LIMIT: u32 = 10;

/// Construction-time values, restored by `Pagination::reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// The page to start on.
    pub initial_page: u32,
    /// The page size to start with; clamped into `[MIN_LIMIT, MAX_LIMIT]`.
    pub initial_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page: 1,
            initial_limit: DEFAULT_LIMIT,
        }
    }
}

/// A plain view of the pagination state and all derived values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSnapshot {
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub limit: u32,
    /// Total number of items.
    pub total: u64,
    /// Number of pages, at least 1.
    pub total_pages: u64,
    /// Index of the first item on the current page.
    pub offset: u64,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
}

/// Page cursor over a result set of known size.
///
/// One instance belongs to one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u32,
    total: u64,
    config: PaginationConfig,
}

impl Pagination {
    /// Creates a pagination state with zero items.
    ///
    /// With zero items there is a single page, so the initial page is
    /// clamped to 1 until a total is set.
    #[must_use]
    pub fn new(config: PaginationConfig) -> Self {
        let mut pagination: Self = Self {
            page: 1,
            limit: clamp_limit(i64::from(config.initial_limit)),
            total: 0,
            config,
        };
        pagination.set_page(i64::from(config.initial_page));
        pagination
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Total number of items.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages; at least 1.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        let pages: u64 = self.total.div_ceil(self.limit as u64);
        if pages == 0 { 1 } else { pages }
    }

    /// Index of the first item on the current page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit as u64)
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Moves to `page`, clamped into `[1, total_pages()]`.
    ///
    /// Any value is accepted, including zero and negatives.
    pub fn set_page(&mut self, page: i64) {
        let requested: u64 = u64::try_from(page).unwrap_or(1);
        self.commit_page(requested);
    }

    /// Changes the page size, clamped into `[MIN_LIMIT, MAX_LIMIT]`.
    ///
    /// The current page is clamped down if it no longer exists.
    pub fn set_limit(&mut self, limit: i64) {
        self.limit = clamp_limit(limit);
        trace!("Pagination limit set to {}", self.limit);
        self.commit_page(self.page);
    }

    /// Replaces the total item count.
    ///
    /// The current page is clamped down if it no longer exists.
    pub fn set_total_items(&mut self, total: u64) {
        self.total = total;
        trace!("Pagination total set to {}", self.total);
        self.commit_page(self.page);
    }

    /// Advances one page; does nothing on the last page.
    pub fn next_page(&mut self) {
        if self.has_next() {
            self.commit_page(self.page + 1);
        }
    }

    /// Goes back one page; does nothing on the first page.
    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.commit_page(self.page - 1);
        }
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.commit_page(1);
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.commit_page(self.total_pages());
    }

    /// Restores the configured page and limit and zeroes the total.
    pub fn reset(&mut self) {
        self.total = 0;
        self.limit = clamp_limit(i64::from(self.config.initial_limit));
        self.set_page(i64::from(self.config.initial_page));
    }

    /// Returns the current state with every derived value.
    #[must_use]
    pub const fn snapshot(&self) -> PaginationSnapshot {
        PaginationSnapshot {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages(),
            offset: self.offset(),
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }

    /// Returns the items of the current page.
    ///
    /// The slice is shorter than `limit` on the last page and empty when
    /// `items` has fewer entries than `offset()`.
    #[must_use]
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start: usize = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let len: usize = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end: usize = start.saturating_add(len).min(items.len());
        &items[start..end]
    }

    fn commit_page(&mut self, page: u64) {
        self.page = page.clamp(1, self.total_pages());
        trace!("Pagination page set to {} of {}", self.page, self.total_pages());
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

fn clamp_limit(limit: i64) -> u32 {
    let clamped: i64 = limit.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT));
    u32::try_from(clamped).unwrap_or(DEFAULT_LIMIT)
}

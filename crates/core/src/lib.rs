// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classifier;
mod pagination;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use classifier::{
    Classification, SkippedRecord, classify, classify_ongoing, classify_upcoming,
    normalize_records,
};
pub use pagination::{
    DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, Pagination, PaginationConfig, PaginationSnapshot,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use safari_core::{DEFAULT_LIMIT, PaginationSnapshot, SkippedRecord};
use safari_domain::{OngoingBooking, UpcomingBooking};
use serde::{Deserialize, Serialize};

/// Query parameters for a paged booking list.
///
/// Values are not validated here; out-of-range values are clamped by the
/// pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Requested page (1-based).
    #[serde(default = "default_page")]
    pub page: i64,
    /// Requested page size.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

const fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    i64::from(DEFAULT_LIMIT)
}

/// A record that was dropped during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecordInfo {
    /// Position of the record in the upstream collection.
    pub index: usize,
    /// The record's identifier, if it had one.
    pub id: Option<String>,
    /// Machine-readable reason code.
    pub code: String,
    /// Human-readable reason.
    pub message: String,
}

impl From<&SkippedRecord> for SkippedRecordInfo {
    fn from(record: &SkippedRecord) -> Self {
        Self {
            index: record.index,
            id: record.id.clone(),
            code: record.reason.code().to_string(),
            message: record.reason.to_string(),
        }
    }
}

/// API response with both booking categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsOverview {
    /// Bookings covering today, in upstream order.
    pub ongoing: Vec<OngoingBooking>,
    /// Bookings starting after today, soonest first.
    pub upcoming: Vec<UpcomingBooking>,
    /// Records that could not be normalized.
    pub skipped: Vec<SkippedRecordInfo>,
}

/// One page of a booking list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Pagination state after clamping the request.
    pub pagination: PaginationSnapshot,
}

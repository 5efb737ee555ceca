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
    clippy::all
)]

mod error;
mod request_response;
mod source;

#[cfg(test)]
mod tests;

use chrono::{DateTime, FixedOffset};
use safari_core::{Classification, Pagination, PaginationConfig, classify};
use safari_domain::{OngoingBooking, ReferenceTime, UpcomingBooking};
use serde_json::Value;
use tracing::{debug, info, warn};

pub use error::{ApiError, ApiResult, SourceError};
pub use request_response::{BookingsOverview, ListQuery, PagedResponse, SkippedRecordInfo};
pub use source::{BookingSource, JsonFileSource, StaticSource, parse_document};

/// Name reported for documents passed in directly as text.
pub const INLINE_SOURCE_NAME: &str = "inline document";

/// Parses a reference time supplied by a caller.
///
/// # Arguments
///
/// * `value` - An RFC 3339 timestamp; its offset becomes the local offset
///
/// # Errors
///
/// Returns `ApiError::InvalidReferenceTime` if `value` is not RFC 3339.
pub fn parse_reference_time(value: &str) -> ApiResult<ReferenceTime> {
    DateTime::<FixedOffset>::parse_from_rfc3339(value.trim())
        .map(ReferenceTime::new)
        .map_err(|_| ApiError::InvalidReferenceTime {
            value: value.to_string(),
        })
}

/// Loads both booking categories from a source.
///
/// # Arguments
///
/// * `source` - The booking source
/// * `reference` - The single "now" for this request
///
/// # Errors
///
/// Returns `ApiError::Upstream` if the source fails. A document with no
/// qualifying bookings yields an empty overview, not an error.
pub fn load_overview<S: BookingSource + ?Sized>(
    source: &S,
    reference: &ReferenceTime,
) -> ApiResult<BookingsOverview> {
    let document: Value = fetch(source)?;
    Ok(overview_from(classify(&document, reference)))
}

/// Classifies a JSON document passed in as text.
///
/// # Errors
///
/// Returns `ApiError::Upstream` if `body` is not valid JSON.
pub fn classify_document(body: &str, reference: &ReferenceTime) -> ApiResult<BookingsOverview> {
    let document: Value =
        parse_document(body).map_err(|error| upstream(INLINE_SOURCE_NAME, error))?;
    Ok(overview_from(classify(&document, reference)))
}

/// Returns one page of ongoing bookings.
///
/// # Errors
///
/// Returns `ApiError::Upstream` if the source fails.
pub fn list_ongoing<S: BookingSource + ?Sized>(
    source: &S,
    reference: &ReferenceTime,
    query: ListQuery,
) -> ApiResult<PagedResponse<OngoingBooking>> {
    let document: Value = fetch(source)?;
    let classification: Classification = classify(&document, reference);
    Ok(paginate(&classification.ongoing, query))
}

/// Returns one page of upcoming bookings, soonest first.
///
/// # Errors
///
/// Returns `ApiError::Upstream` if the source fails.
pub fn list_upcoming<S: BookingSource + ?Sized>(
    source: &S,
    reference: &ReferenceTime,
    query: ListQuery,
) -> ApiResult<PagedResponse<UpcomingBooking>> {
    let document: Value = fetch(source)?;
    let classification: Classification = classify(&document, reference);
    Ok(paginate(&classification.upcoming, query))
}

fn fetch<S: BookingSource + ?Sized>(source: &S) -> ApiResult<Value> {
    source.fetch_bookings().map_err(|error| {
        warn!("Booking source '{}' failed: {}", source.name(), error);
        upstream(source.name(), error)
    })
}

fn upstream(source_name: &str, error: SourceError) -> ApiError {
    ApiError::Upstream {
        source_name: source_name.to_string(),
        error,
    }
}

fn overview_from(classification: Classification) -> BookingsOverview {
    let Classification {
        ongoing,
        upcoming,
        skipped,
    } = classification;

    info!(
        "Booking overview: {} ongoing, {} upcoming, {} skipped",
        ongoing.len(),
        upcoming.len(),
        skipped.len()
    );

    BookingsOverview {
        ongoing,
        upcoming,
        skipped: skipped.iter().map(SkippedRecordInfo::from).collect(),
    }
}

fn paginate<T: Clone>(items: &[T], query: ListQuery) -> PagedResponse<T> {
    let mut pagination: Pagination = Pagination::new(PaginationConfig::default());
    pagination.set_total_items(items.len() as u64);
    pagination.set_limit(query.limit);
    pagination.set_page(query.page);

    debug!(
        "Serving page {} of {} (requested page {}, limit {})",
        pagination.page(),
        pagination.total_pages(),
        query.page,
        query.limit
    );

    PagedResponse {
        items: pagination.page_slice(items).to_vec(),
        pagination: pagination.snapshot(),
    }
}

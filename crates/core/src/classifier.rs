// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification passes over raw booking documents.
//!
//! A pass unwraps the envelope, normalizes every record, and sorts the
//! survivors into temporal categories. It never fails: records that cannot be
//! normalized are dropped and reported through `Classification::skipped`,
//! which does not affect which records are accepted.

use safari_domain::{
    BookingEnvelope, DomainError, NormalizedBooking, OngoingBooking, ReferenceTime, TemporalState,
    UpcomingBooking, record_id,
};
use serde_json::Value;
use tracing::debug;

/// A record that was dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record within the unwrapped collection.
    pub index: usize,
    /// The record's identifier, if it had one.
    pub id: Option<String>,
    /// Why the record was dropped.
    pub reason: DomainError,
}

/// The result of one classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    /// Bookings covering today, in input order.
    pub ongoing: Vec<OngoingBooking>,
    /// Bookings starting after today, soonest first.
    pub upcoming: Vec<UpcomingBooking>,
    /// Records dropped during normalization, in input order.
    pub skipped: Vec<SkippedRecord>,
}

/// Normalizes every record in a document.
///
/// # Arguments
///
/// * `document` - The raw document in any accepted envelope shape
/// * `reference` - The reference time of the pass
///
/// # Returns
///
/// The normalized bookings in input order, and the records that were dropped.
#[must_use]
pub fn normalize_records(
    document: &Value,
    reference: &ReferenceTime,
) -> (Vec<NormalizedBooking>, Vec<SkippedRecord>) {
    let envelope: BookingEnvelope<'_> = BookingEnvelope::from_json(document);
    if matches!(envelope, BookingEnvelope::Unrecognized) {
        debug!("Unrecognized booking envelope; treating as empty");
    }

    let mut bookings: Vec<NormalizedBooking> = Vec::with_capacity(envelope.records().len());
    let mut skipped: Vec<SkippedRecord> = Vec::new();

    for (index, record) in envelope.records().iter().enumerate() {
        match NormalizedBooking::from_raw(record, reference) {
            Ok(booking) => bookings.push(booking),
            Err(reason) => {
                let id: Option<String> = record_id(record);
                debug!(
                    "Skipping booking record {} ({}): {}",
                    index,
                    id.as_deref().unwrap_or("no id"),
                    reason
                );
                skipped.push(SkippedRecord { index, id, reason });
            }
        }
    }

    (bookings, skipped)
}

/// Classifies a raw booking document into ongoing and upcoming bookings.
///
/// # Arguments
///
/// * `document` - The raw document: a bare array, or an object with a
///   `bookings` or `data` array
/// * `reference` - The single "now" used for every record in the pass
///
/// # Returns
///
/// A `Classification` whose `upcoming` list is stably sorted by days until
/// start. Completed bookings appear in neither list.
#[must_use]
pub fn classify(document: &Value, reference: &ReferenceTime) -> Classification {
    let (bookings, skipped) = normalize_records(document, reference);

    let mut ongoing: Vec<OngoingBooking> = Vec::new();
    let mut upcoming: Vec<UpcomingBooking> = Vec::new();

    for booking in bookings {
        match TemporalState::of(&booking, reference) {
            TemporalState::Ongoing => ongoing.push(OngoingBooking { booking }),
            TemporalState::Upcoming => {
                upcoming.extend(UpcomingBooking::evaluate(booking, reference));
            }
            TemporalState::Completed => {}
        }
    }

    // Stable: equal days keep input order.
    upcoming.sort_by_key(|b| b.days_until_start);

    debug!(
        "Classified bookings: {} ongoing, {} upcoming, {} skipped",
        ongoing.len(),
        upcoming.len(),
        skipped.len()
    );

    Classification {
        ongoing,
        upcoming,
        skipped,
    }
}

/// Returns only the ongoing bookings of a document.
#[must_use]
pub fn classify_ongoing(document: &Value, reference: &ReferenceTime) -> Vec<OngoingBooking> {
    classify(document, reference).ongoing
}

/// Returns only the upcoming bookings of a document, soonest first.
#[must_use]
pub fn classify_upcoming(document: &Value, reference: &ReferenceTime) -> Vec<UpcomingBooking> {
    classify(document, reference).upcoming
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for classification passes over raw booking documents.

use crate::{Classification, classify, classify_ongoing, classify_upcoming, normalize_records};

use chrono::{Duration, NaiveDate};
use safari_domain::{BookingStatus, DomainError, ReferenceTime};
use serde_json::{Value, json};

use super::helpers::{create_booking_record, create_reference, create_test_reference, ids_of};

// ============================================================================
// Category membership
// ============================================================================

#[test]
fn test_booking_covering_today_is_ongoing() {
    let document: Value = json!([create_booking_record("a", "2024-01-01", "2024-01-10")]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(result.ongoing.len(), 1);
    assert_eq!(result.ongoing[0].booking.id, "a");
    assert!(result.upcoming.is_empty());
    assert!(result.skipped.is_empty());
}

#[test]
fn test_upcoming_metrics_for_booking_ten_days_out() {
    let document: Value = json!([create_booking_record("a", "2024-01-15", "2024-01-22")]);

    let result: Classification = classify(&document, &create_test_reference());

    assert!(result.ongoing.is_empty());
    assert_eq!(result.upcoming.len(), 1);
    assert_eq!(result.upcoming[0].days_until_start, 10);
    assert_eq!(result.upcoming[0].duration, 7);
    assert_eq!(result.upcoming[0].status, BookingStatus::Upcoming);
}

#[test]
fn test_booking_forty_five_days_out_is_confirmed() {
    let document: Value = json!([create_booking_record("a", "2024-02-19", "2024-02-26")]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(result.upcoming[0].days_until_start, 45);
    assert_eq!(result.upcoming[0].status, BookingStatus::Confirmed);
}

#[test]
fn test_completed_booking_appears_nowhere() {
    let document: Value = json!([create_booking_record("a", "2023-12-20", "2024-01-04")]);

    let result: Classification = classify(&document, &create_test_reference());

    assert!(result.ongoing.is_empty());
    assert!(result.upcoming.is_empty());
    assert!(result.skipped.is_empty());
}

#[test]
fn test_today_is_both_a_valid_start_and_end() {
    let document: Value = json!([
        create_booking_record("starts", "2024-01-05T23:00:00Z", "2024-01-09"),
        create_booking_record("ends", "2024-01-02", "2024-01-05T00:00:00Z"),
        create_booking_record("single-day", "2024-01-05", "2024-01-05"),
    ]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(
        ids_of(result.ongoing.iter().map(|b| &b.booking.id)),
        vec!["starts", "ends", "single-day"]
    );
    assert!(result.upcoming.is_empty());
}

#[test]
fn test_truncation_uses_reference_offset() {
    // 22:00 on Jan 5 at UTC-5 is already Jan 6 in UTC.
    let reference: ReferenceTime = create_reference("2024-01-05T22:00:00-05:00");
    let document: Value = json!([
        // Jan 5, 20:00 local: ongoing.
        create_booking_record("evening", "2024-01-06T01:00:00Z", "2024-01-07T01:00:00Z"),
        // Wall-clock date with no offset: Jan 6 local, upcoming.
        create_booking_record("tomorrow", "2024-01-06", "2024-01-08"),
    ]);

    let result: Classification = classify(&document, &reference);

    assert_eq!(ids_of(result.ongoing.iter().map(|b| &b.booking.id)), vec!["evening"]);
    assert_eq!(
        ids_of(result.upcoming.iter().map(|b| &b.booking.id)),
        vec!["tomorrow"]
    );
    assert_eq!(result.upcoming[0].days_until_start, 1);
}

#[test]
fn test_membership_holds_across_a_range_of_start_dates() {
    let reference: ReferenceTime = create_reference("2024-03-15T13:45:00Z");
    let today: NaiveDate = reference.today();

    let records: Vec<Value> = (-40_i64..=40)
        .map(|offset| {
            let start: NaiveDate = today + Duration::days(offset);
            let end: NaiveDate = start + Duration::days(3);
            create_booking_record(&offset.to_string(), &start.to_string(), &end.to_string())
        })
        .collect();
    let document: Value = Value::Array(records);

    let result: Classification = classify(&document, &reference);

    for ongoing in &result.ongoing {
        let start: NaiveDate = reference.calendar_date(&ongoing.booking.date_from);
        let end: NaiveDate = reference.calendar_date(&ongoing.booking.date_to);
        assert!(start <= today && end >= today, "{}", ongoing.booking.id);
        assert!(
            !result
                .upcoming
                .iter()
                .any(|u| u.booking.id == ongoing.booking.id)
        );
    }
    for upcoming in &result.upcoming {
        assert!(reference.calendar_date(&upcoming.booking.date_from) > today);
        assert!(upcoming.days_until_start >= 1);
        assert_eq!(
            upcoming.status == BookingStatus::Confirmed,
            upcoming.days_until_start > 30
        );
    }
    // Offsets -3..=0 are ongoing, 1..=40 upcoming.
    assert_eq!(result.ongoing.len(), 4);
    assert_eq!(result.upcoming.len(), 40);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_upcoming_sorted_soonest_first_with_stable_ties() {
    let document: Value = json!([
        create_booking_record("late", "2024-03-01", "2024-03-05"),
        create_booking_record("tie-1", "2024-01-20", "2024-01-25"),
        create_booking_record("soon", "2024-01-07", "2024-01-08"),
        create_booking_record("tie-2", "2024-01-20", "2024-01-22"),
        create_booking_record("tie-3", "2024-01-20T00:00:00", "2024-01-30"),
    ]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(
        ids_of(result.upcoming.iter().map(|b| &b.booking.id)),
        vec!["soon", "tie-1", "tie-2", "tie-3", "late"]
    );
    assert!(
        result
            .upcoming
            .windows(2)
            .all(|w| w[0].days_until_start <= w[1].days_until_start)
    );
}

#[test]
fn test_ongoing_keeps_input_order() {
    let document: Value = json!([
        create_booking_record("c", "2024-01-04", "2024-01-30"),
        create_booking_record("a", "2023-12-01", "2024-01-05"),
        create_booking_record("b", "2024-01-05", "2024-01-06"),
    ]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(
        ids_of(result.ongoing.iter().map(|b| &b.booking.id)),
        vec!["c", "a", "b"]
    );
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_records_with_bad_dates_are_dropped_and_reported() {
    let document: Value = json!([
        create_booking_record("good", "2024-01-01", "2024-01-10"),
        { "id": "no-end", "date_from": "2024-01-01" },
        create_booking_record("garbage", "not a date", "2024-01-10"),
        "just a string",
        { "id": "bad-wrapper", "date_from": { "$date": "nope" }, "date_to": "2024-01-10" },
    ]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(result.ongoing.len(), 1);
    assert!(result.upcoming.is_empty());
    assert_eq!(result.skipped.len(), 4);

    assert_eq!(result.skipped[0].index, 1);
    assert_eq!(result.skipped[0].id.as_deref(), Some("no-end"));
    assert_eq!(
        result.skipped[0].reason,
        DomainError::MissingDate { field: "date_to" }
    );

    assert_eq!(result.skipped[1].id.as_deref(), Some("garbage"));
    assert!(matches!(
        result.skipped[1].reason,
        DomainError::DateParseError {
            field: "date_from",
            ..
        }
    ));

    assert_eq!(result.skipped[2].index, 3);
    assert_eq!(result.skipped[2].id, None);
    assert_eq!(
        result.skipped[2].reason,
        DomainError::NotAnObject { found: "string" }
    );

    assert_eq!(result.skipped[3].id.as_deref(), Some("bad-wrapper"));
}

#[test]
fn test_wrapped_dates_classify_like_plain_dates() {
    let document: Value = json!([
        {
            "id": "wrapped",
            "date_from": { "$date": "2024-01-15T00:00:00.000Z" },
            "date_to": { "$date": "2024-01-22T00:00:00.000Z" }
        },
        create_booking_record("plain", "2024-01-15T00:00:00.000Z", "2024-01-22T00:00:00.000Z"),
    ]);

    let result: Classification = classify(&document, &create_test_reference());

    assert_eq!(result.upcoming.len(), 2);
    assert_eq!(
        result.upcoming[0].days_until_start,
        result.upcoming[1].days_until_start
    );
    assert_eq!(result.upcoming[0].duration, result.upcoming[1].duration);
    assert_eq!(result.upcoming[0].booking.agent_name, "Unknown Agent");
}

// ============================================================================
// Envelopes
// ============================================================================

#[test]
fn test_all_envelope_shapes_classify_identically() {
    let records: Value = json!([
        create_booking_record("a", "2024-01-01", "2024-01-10"),
        create_booking_record("b", "2024-01-15", "2024-01-22"),
    ]);
    let reference: ReferenceTime = create_test_reference();

    let bare: Classification = classify(&records, &reference);
    let bookings: Classification = classify(&json!({ "bookings": records }), &reference);
    let data: Classification = classify(&json!({ "data": records }), &reference);

    assert_eq!(bare, bookings);
    assert_eq!(bare, data);
    assert_eq!(bare.ongoing.len(), 1);
    assert_eq!(bare.upcoming.len(), 1);
}

#[test]
fn test_unrecognized_envelope_is_empty() {
    let reference: ReferenceTime = create_test_reference();
    for document in [
        json!(null),
        json!({ "results": [create_booking_record("a", "2024-01-01", "2024-01-10")] }),
        json!("[]"),
    ] {
        assert_eq!(classify(&document, &reference), Classification::default());
    }
}

// ============================================================================
// Helpers and determinism
// ============================================================================

#[test]
fn test_single_category_helpers_match_full_pass() {
    let document: Value = json!({ "data": [
        create_booking_record("a", "2024-01-01", "2024-01-10"),
        create_booking_record("b", "2024-02-15", "2024-02-22"),
        create_booking_record("c", "2024-01-12", "2024-01-13"),
    ]});
    let reference: ReferenceTime = create_test_reference();
    let full: Classification = classify(&document, &reference);

    assert_eq!(classify_ongoing(&document, &reference), full.ongoing);
    assert_eq!(classify_upcoming(&document, &reference), full.upcoming);
}

#[test]
fn test_same_reference_gives_same_result() {
    let document: Value = json!([
        create_booking_record("a", "2024-01-01", "2024-01-10"),
        create_booking_record("b", "2024-01-15T18:30:00Z", "2024-01-22"),
    ]);
    let reference: ReferenceTime = create_test_reference();

    assert_eq!(classify(&document, &reference), classify(&document, &reference));
}

#[test]
fn test_normalize_records_keeps_completed_bookings() {
    let document: Value = json!([
        create_booking_record("past", "2023-01-01", "2023-01-10"),
        { "id": "broken" },
    ]);

    let (bookings, skipped) = normalize_records(&document, &create_test_reference());

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, "past");
    assert_eq!(skipped.len(), 1);
    assert_eq!(
        skipped[0].reason,
        DomainError::MissingDate { field: "date_from" }
    );
}

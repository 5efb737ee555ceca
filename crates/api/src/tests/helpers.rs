// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use safari_domain::ReferenceTime;
use serde_json::{Value, json};

use crate::{BookingSource, SourceError, StaticSource, parse_reference_time};

/// A source that always fails.
pub struct UnreachableSource;

impl BookingSource for UnreachableSource {
    fn name(&self) -> &str {
        "bookings-api"
    }

    fn fetch_bookings(&self) -> Result<Value, SourceError> {
        Err(SourceError::Unreachable(String::from("connection refused")))
    }
}

/// 2024-01-05 09:00 UTC.
pub fn create_test_reference() -> ReferenceTime {
    parse_reference_time("2024-01-05T09:00:00Z").unwrap()
}

pub fn create_booking_record(id: &str, date_from: &str, date_to: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Booking {id}"),
        "date_from": date_from,
        "date_to": date_to,
        "country": "Botswana",
        "pax": 3,
        "agent_name": "Delta Safaris",
        "agent_country": "Botswana",
        "created_by": "ops"
    })
}

/// Two ongoing, 25 upcoming (one per day from Jan 6), one malformed.
pub fn create_test_document() -> Value {
    let mut records: Vec<Value> = vec![
        create_booking_record("ongoing-1", "2024-01-01", "2024-01-10"),
        create_booking_record("ongoing-2", "2024-01-05", "2024-01-05"),
        json!({ "id": "broken", "date_from": "someday", "date_to": "2024-01-10" }),
    ];
    for day in 6..=30 {
        let start: String = format!("2024-01-{day:02}");
        records.push(create_booking_record(
            &format!("upcoming-{day:02}"),
            &start,
            "2024-02-15",
        ));
    }
    json!({ "bookings": records })
}

pub fn create_test_source() -> StaticSource {
    StaticSource::new("fixture", create_test_document())
}

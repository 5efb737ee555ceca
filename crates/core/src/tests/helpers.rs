// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use safari_domain::ReferenceTime;
use serde_json::{Value, json};

pub fn create_reference(instant: &str) -> ReferenceTime {
    ReferenceTime::new(chrono::DateTime::parse_from_rfc3339(instant).unwrap())
}

/// 2024-01-05 09:00 UTC.
pub fn create_test_reference() -> ReferenceTime {
    create_reference("2024-01-05T09:00:00Z")
}

pub fn create_booking_record(id: &str, date_from: &str, date_to: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Booking {id}"),
        "date_from": date_from,
        "date_to": date_to,
        "country": "Tanzania",
        "pax": 2,
        "agent_name": "Savannah Tours",
        "agent_country": "Kenya",
        "created_by": "admin"
    })
}

pub fn ids_of<'a, I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    ids.into_iter().cloned().collect()
}

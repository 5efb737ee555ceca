// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking record normalization.
//!
//! Upstream records are untrusted JSON objects. Normalization either yields a
//! complete `NormalizedBooking` or an error; a partially-normalized booking is
//! never produced.

use crate::date::{DateValue, ReferenceTime};
use crate::error::DomainError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Agent name used when the record carries none.
pub const UNKNOWN_AGENT: &str = "Unknown Agent";
/// Agent country used when the record carries none.
pub const UNKNOWN_AGENT_COUNTRY: &str = "Unknown";
/// Creator used when the record carries none.
pub const UNKNOWN_USER: &str = "Unknown User";

/// A booking whose fields have been defaulted and whose dates are valid instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBooking {
    /// The upstream identifier, or an empty string if none was present.
    pub id: String,
    /// The booking (guest party) name.
    pub name: String,
    /// Start of the stay.
    pub date_from: DateTime<FixedOffset>,
    /// End of the stay.
    pub date_to: DateTime<FixedOffset>,
    /// Destination country.
    pub country: String,
    /// Number of passengers.
    pub pax: u32,
    /// Name of the booking agent.
    pub agent_name: String,
    /// Country of the booking agent.
    pub agent_country: String,
    /// The user who created the booking.
    pub created_by: String,
}

impl NormalizedBooking {
    /// Normalizes a raw upstream record.
    ///
    /// # Arguments
    ///
    /// * `record` - The raw JSON record
    /// * `reference` - Supplies the local offset for wall-clock date strings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record is not a JSON object
    /// - `date_from` or `date_to` is missing, unparseable, or out of range
    pub fn from_raw(record: &Value, reference: &ReferenceTime) -> Result<Self, DomainError> {
        let Value::Object(map) = record else {
            return Err(DomainError::NotAnObject {
                found: json_kind(record),
            });
        };

        let date_from: DateTime<FixedOffset> =
            DateValue::from_json(map.get("date_from")).resolve("date_from", reference)?;
        let date_to: DateTime<FixedOffset> =
            DateValue::from_json(map.get("date_to")).resolve("date_to", reference)?;

        Ok(Self {
            id: record_id(record).unwrap_or_default(),
            name: text_field(map, "name").unwrap_or_default(),
            date_from,
            date_to,
            country: text_field(map, "country").unwrap_or_default(),
            pax: passenger_count(map.get("pax")),
            agent_name: text_field(map, "agent_name")
                .unwrap_or_else(|| String::from(UNKNOWN_AGENT)),
            agent_country: text_field(map, "agent_country")
                .unwrap_or_else(|| String::from(UNKNOWN_AGENT_COUNTRY)),
            created_by: text_field(map, "created_by")
                .unwrap_or_else(|| String::from(UNKNOWN_USER)),
        })
    }
}

/// Extracts the identifier of a raw record, if it has one.
///
/// Accepts `id` or the legacy `_id`, as a string, a number, or an
/// `{ "$oid": ... }` wrapper.
#[must_use]
pub fn record_id(record: &Value) -> Option<String> {
    let map: &Map<String, Value> = record.as_object()?;
    ["id", "_id"]
        .into_iter()
        .filter_map(|key| map.get(key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(inner) => inner
                .get("$oid")
                .and_then(Value::as_str)
                .map(String::from),
            _ => None,
        })
}

/// Returns a human-readable name for the JSON type of `value`.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a text field; blank strings count as absent.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads the passenger count, falling back to 0 for anything unusable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn passenger_count(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n.as_u64().map_or_else(
            || {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map_or(0, |f| f.min(f64::from(u32::MAX)) as u32)
            },
            |count| u32::try_from(count).unwrap_or(u32::MAX),
        ),
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

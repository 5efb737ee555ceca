// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date normalization for booking records.
//!
//! Upstream booking documents encode dates in several ways:
//! - a plain string (`"2024-01-05"`, `"2024-01-05T10:00:00Z"`, ...)
//! - a legacy wrapper object (`{ "$date": "2024-01-05T00:00:00.000Z" }`)
//! - a wrapper around extended JSON (`{ "$date": { "$numberLong": "1704412800000" } }`)
//! - epoch milliseconds
//!
//! Each encoding is a `DateValue` variant. Resolution happens against a
//! `ReferenceTime`, whose UTC offset is the "local" offset used for wall-clock
//! strings and for calendar-date truncation.
//!
//! ## Invariants
//!
//! - A resolved date is always a valid instant; anything else is an error
//! - Strings without an offset are wall-clock values at the reference offset
//! - No timezone database is consulted

use crate::error::DomainError;
use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use serde_json::Value;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

const WRAPPED_DATE_KEY: &str = "$date";
const NUMBER_LONG_KEY: &str = "$numberLong";

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// The single "now" captured for a classification pass.
///
/// Every record in a pass is evaluated against the same reference so that
/// derived values such as days-until-start are consistent across the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTime {
    instant: DateTime<FixedOffset>,
}

impl ReferenceTime {
    /// Creates a reference from an explicit instant.
    ///
    /// The instant's offset becomes the local offset for the pass.
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Captures the current system time at the system's local offset.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Local::now().fixed_offset())
    }

    /// The untruncated reference instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// The local UTC offset of this reference.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        *self.instant.offset()
    }

    /// Today's calendar date at the reference offset.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// Truncates an instant to its calendar date at the reference offset.
    #[must_use]
    pub fn calendar_date(&self, instant: &DateTime<FixedOffset>) -> NaiveDate {
        instant.with_timezone(&self.offset()).date_naive()
    }

    /// Interprets a wall-clock date-time at the reference offset.
    fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.offset().from_local_datetime(naive).single()
    }
}

/// A date field as found in an upstream record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// The field is absent or null.
    Missing,
    /// A plain date or date-time string.
    Plain(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// A legacy `{ "$date": ... }` wrapper around another encoding.
    Wrapped(Box<Self>),
    /// Any other JSON value; holds a description of what was found.
    Unsupported(String),
}

impl DateValue {
    /// Classifies a JSON value into a date encoding.
    ///
    /// # Arguments
    ///
    /// * `value` - The field value, or `None` if the field is absent
    #[must_use]
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(s)) => Self::Plain(s.clone()),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(truncate_millis))
                .map_or_else(|| Self::Unsupported(n.to_string()), Self::EpochMillis),
            Some(Value::Object(map)) => {
                if let Some(inner) = map.get(WRAPPED_DATE_KEY) {
                    Self::Wrapped(Box::new(Self::from_json(Some(inner))))
                } else if let Some(Value::String(digits)) = map.get(NUMBER_LONG_KEY) {
                    digits.trim().parse::<i64>().map_or_else(
                        |_| Self::Unsupported(format!("$numberLong \"{digits}\"")),
                        Self::EpochMillis,
                    )
                } else {
                    Self::Unsupported(String::from("object without $date"))
                }
            }
            Some(Value::Bool(b)) => Self::Unsupported(format!("boolean {b}")),
            Some(Value::Array(_)) => Self::Unsupported(String::from("array")),
        }
    }

    /// Resolves this encoding to an instant.
    ///
    /// # Arguments
    ///
    /// * `field` - The field name, used for error reporting
    /// * `reference` - Supplies the local offset for wall-clock strings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is missing
    /// - A string cannot be parsed as a date
    /// - The value does not denote a representable instant
    pub fn resolve(
        &self,
        field: &'static str,
        reference: &ReferenceTime,
    ) -> Result<DateTime<FixedOffset>, DomainError> {
        match self {
            Self::Missing => Err(DomainError::MissingDate { field }),
            Self::Plain(s) => {
                parse_date_string(s, reference).ok_or_else(|| DomainError::DateParseError {
                    field,
                    date_string: s.clone(),
                })
            }
            Self::EpochMillis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .map(|utc| utc.with_timezone(&reference.offset()))
                .ok_or_else(|| DomainError::InvalidTimestamp {
                    field,
                    value: format!("{ms} ms out of range"),
                }),
            Self::Wrapped(inner) => inner.resolve(field, reference),
            Self::Unsupported(description) => Err(DomainError::InvalidTimestamp {
                field,
                value: description.clone(),
            }),
        }
    }
}

/// Parses a date string in any of the accepted formats.
///
/// Strings carrying an offset keep it; strings without one are read as
/// wall-clock values at the reference offset. A bare date is midnight.
#[must_use]
pub fn parse_date_string(raw: &str, reference: &ReferenceTime) -> Option<DateTime<FixedOffset>> {
    let s: &str = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return reference.localize(&naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return reference.localize(&date.and_time(NaiveTime::MIN));
    }

    DateTime::parse_from_rfc2822(s).ok()
}

/// Whole days spanned by `delta`, rounded up.
///
/// Negative deltas round toward zero, matching a ceiling on the real value.
#[must_use]
pub fn ceil_days(delta: Duration) -> i64 {
    let millis: i64 = delta.num_milliseconds();
    let days: i64 = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_millis(ms: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; stay well inside the range.
    if ms.is_finite() && ms.abs() < 9.0e15 {
        Some(ms.trunc() as i64)
    } else {
        None
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while normalizing a booking record.
///
/// These never escape a classification pass: a record that produces one of
/// these errors is dropped and, at most, reported as a skipped record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The record is not a JSON object.
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },
    /// A required date field is absent or null.
    MissingDate {
        /// The field name (`date_from` or `date_to`).
        field: &'static str,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The field name.
        field: &'static str,
        /// The invalid date string.
        date_string: String,
    },
    /// A date field holds a value that cannot denote an instant.
    InvalidTimestamp {
        /// The field name.
        field: &'static str,
        /// Description of the offending value.
        value: String,
    },
    /// Booking status string is not recognized.
    InvalidBookingStatus {
        /// The invalid status string.
        status: String,
    },
}

impl DomainError {
    /// Returns a short machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "not_an_object",
            Self::MissingDate { .. } => "missing_date",
            Self::DateParseError { .. } => "date_parse_error",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
            Self::InvalidBookingStatus { .. } => "invalid_booking_status",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject { found } => {
                write!(f, "Booking record must be an object, found {found}")
            }
            Self::MissingDate { field } => write!(f, "Missing date field '{field}'"),
            Self::DateParseError { field, date_string } => {
                write!(f, "Failed to parse date '{date_string}' in field '{field}'")
            }
            Self::InvalidTimestamp { field, value } => {
                write!(f, "Invalid timestamp in field '{field}': {value}")
            }
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: {status}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Top-level shapes of upstream booking documents.

use serde_json::Value;

/// The envelope wrapping a collection of raw booking records.
///
/// An unrecognized shape is not an error: it simply holds no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEnvelope<'a> {
    /// A bare JSON array.
    Bare(&'a [Value]),
    /// An object with a `bookings` array.
    Bookings(&'a [Value]),
    /// An object with a `data` array.
    Data(&'a [Value]),
    /// Anything else.
    Unrecognized,
}

impl<'a> BookingEnvelope<'a> {
    /// Identifies the envelope shape of a document.
    ///
    /// `bookings` takes precedence over `data` when both are arrays.
    #[must_use]
    pub fn from_json(document: &'a Value) -> Self {
        match document {
            Value::Array(records) => Self::Bare(records),
            Value::Object(map) => {
                if let Some(Value::Array(records)) = map.get("bookings") {
                    Self::Bookings(records)
                } else if let Some(Value::Array(records)) = map.get("data") {
                    Self::Data(records)
                } else {
                    Self::Unrecognized
                }
            }
            _ => Self::Unrecognized,
        }
    }

    /// The raw records held by this envelope.
    #[must_use]
    pub const fn records(&self) -> &'a [Value] {
        match *self {
            Self::Bare(records) | Self::Bookings(records) | Self::Data(records) => records,
            Self::Unrecognized => &[],
        }
    }

    /// Returns a short name for the envelope shape.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Bare(_) => "bare",
            Self::Bookings(_) => "bookings",
            Self::Data(_) => "data",
            Self::Unrecognized => "unrecognized",
        }
    }
}

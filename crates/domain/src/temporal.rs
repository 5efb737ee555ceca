// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal classification of normalized bookings.
//!
//! ## Rules
//!
//! - Category membership compares calendar dates at the reference offset
//! - Ongoing is inclusive on both ends: a stay starting or ending today is ongoing
//! - Upcoming requires a start date strictly after today
//! - Days-until-start is measured from the untruncated reference instant,
//!   while membership uses the truncated date; the two are kept as-is for
//!   compatibility with existing dashboards
//! - Status is `confirmed` when the start is more than 30 days away

use crate::booking::NormalizedBooking;
use crate::date::{ReferenceTime, ceil_days};
use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bookings starting more than this many days out are considered confirmed.
pub const CONFIRMATION_THRESHOLD_DAYS: i64 = 30;

/// Where a booking sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalState {
    /// The stay ended before today.
    Completed,
    /// The stay covers today.
    Ongoing,
    /// The stay starts after today.
    Upcoming,
}

impl TemporalState {
    /// Determines the temporal state of a booking.
    #[must_use]
    pub fn of(booking: &NormalizedBooking, reference: &ReferenceTime) -> Self {
        let today: NaiveDate = reference.today();
        let start: NaiveDate = reference.calendar_date(&booking.date_from);
        let end: NaiveDate = reference.calendar_date(&booking.date_to);

        if start > today {
            Self::Upcoming
        } else if end >= today {
            Self::Ongoing
        } else {
            Self::Completed
        }
    }
}

/// Confidence bucket for an upcoming booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Starts within the confirmation threshold.
    Upcoming,
    /// Starts beyond the confirmation threshold.
    Confirmed,
}

impl BookingStatus {
    /// Buckets a booking by how far away its start is.
    #[must_use]
    pub const fn from_days_until_start(days_until_start: i64) -> Self {
        if days_until_start > CONFIRMATION_THRESHOLD_DAYS {
            Self::Confirmed
        } else {
            Self::Upcoming
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Confirmed => "confirmed",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "confirmed" => Ok(Self::Confirmed),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booking whose stay covers today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OngoingBooking {
    /// The underlying booking.
    #[serde(flatten)]
    pub booking: NormalizedBooking,
}

impl OngoingBooking {
    /// Returns the booking as ongoing if its stay covers today.
    #[must_use]
    pub fn evaluate(booking: NormalizedBooking, reference: &ReferenceTime) -> Option<Self> {
        (TemporalState::of(&booking, reference) == TemporalState::Ongoing)
            .then_some(Self { booking })
    }
}

/// A booking that starts after today, with derived scheduling metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBooking {
    /// The underlying booking.
    #[serde(flatten)]
    pub booking: NormalizedBooking,
    /// Whole days from the reference instant to the start, rounded up.
    #[serde(rename = "daysUntilStart")]
    pub days_until_start: i64,
    /// Whole days from start to end, rounded up.
    pub duration: i64,
    /// Confidence bucket derived from `days_until_start`.
    pub status: BookingStatus,
}

impl UpcomingBooking {
    /// Returns the booking with its scheduling metrics if it starts after today.
    ///
    /// # Arguments
    ///
    /// * `booking` - The normalized booking
    /// * `reference` - The reference time of the classification pass
    #[must_use]
    pub fn evaluate(booking: NormalizedBooking, reference: &ReferenceTime) -> Option<Self> {
        if TemporalState::of(&booking, reference) != TemporalState::Upcoming {
            return None;
        }

        let days_until_start: i64 = ceil_days(booking.date_from - reference.instant());
        let duration: i64 = ceil_days(booking.date_to - booking.date_from);

        Some(Self {
            booking,
            days_until_start,
            duration,
            status: BookingStatus::from_days_until_start(days_until_start),
        })
    }
}

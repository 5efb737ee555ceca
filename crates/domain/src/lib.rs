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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod date;
mod envelope;
mod error;
mod temporal;

#[cfg(test)]
mod tests;

pub use booking::{
    NormalizedBooking, UNKNOWN_AGENT, UNKNOWN_AGENT_COUNTRY, UNKNOWN_USER, json_kind, record_id,
};
pub use date::{DateValue, MILLIS_PER_DAY, ReferenceTime, ceil_days, parse_date_string};
pub use envelope::BookingEnvelope;
pub use error::DomainError;
pub use temporal::{
    BookingStatus, CONFIRMATION_THRESHOLD_DAYS, OngoingBooking, TemporalState, UpcomingBooking,
};

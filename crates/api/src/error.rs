// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! An empty booking list is never an error. Errors here describe failures of
//! the booking source or of the request itself.

use thiserror::Error;

/// Failures reported by a booking source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be reached.
    #[error("Booking source unreachable: {0}")]
    Unreachable(String),

    /// The source responded with a body that is not JSON.
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// API-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The booking source failed.
    #[error("Upstream booking source '{source_name}' failed: {error}")]
    Upstream {
        /// Name of the failing source.
        source_name: String,
        /// What went wrong.
        error: SourceError,
    },

    /// A reference time could not be parsed.
    #[error("Invalid reference time '{value}': expected an RFC 3339 timestamp")]
    InvalidReferenceTime {
        /// The rejected input.
        value: String,
    },
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

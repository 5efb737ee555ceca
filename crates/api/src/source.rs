// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking sources.
//!
//! A source hands over the raw upstream document. Transport concerns such as
//! HTTP, sessions, and retries live behind this trait.

use crate::error::SourceError;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Supplies raw booking documents.
pub trait BookingSource {
    /// A short name identifying this source in errors and logs.
    fn name(&self) -> &str;

    /// Fetches the current booking document.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be reached or its response is
    /// not JSON. An empty or oddly-shaped document is not an error.
    fn fetch_bookings(&self) -> Result<Value, SourceError>;
}

/// Parses a JSON response body.
///
/// # Errors
///
/// Returns `SourceError::MalformedBody` if `body` is not valid JSON.
pub fn parse_document(body: &str) -> Result<Value, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::MalformedBody(e.to_string()))
}

/// A source backed by an in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    name: String,
    document: Value,
}

impl StaticSource {
    /// Creates a source that always returns `document`.
    #[must_use]
    pub fn new(name: impl Into<String>, document: Value) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }
}

impl BookingSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_bookings(&self) -> Result<Value, SourceError> {
        Ok(self.document.clone())
    }
}

/// A source that reads a JSON document from a file on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let name: String = path.display().to_string();
        Self { path, name }
    }
}

impl BookingSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_bookings(&self) -> Result<Value, SourceError> {
        debug!("Reading booking document from {}", self.name);
        let body: String = std::fs::read_to_string(&self.path)
            .map_err(|e| SourceError::Unreachable(format!("{}: {e}", self.name)))?;
        parse_document(&body)
    }
}

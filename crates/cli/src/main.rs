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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use safari_admin_api::{
    BookingSource, BookingsOverview, JsonFileSource, ListQuery, PagedResponse, SourceError,
    list_ongoing, list_upcoming, load_overview, parse_document, parse_reference_time,
};
use safari_domain::{OngoingBooking, ReferenceTime, UpcomingBooking};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// Safari Admin - classify bookings into ongoing and upcoming stays
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON booking document. Reads standard input if not provided.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Reference time as an RFC 3339 timestamp. Defaults to the current local time.
    #[arg(long)]
    now: Option<String>,

    /// Which view to print
    #[arg(long, value_enum, default_value_t = View::Overview)]
    view: View,

    /// Page to print for paged views (1-based, clamped to the available range)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Page size for paged views (clamped to 1..=100)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    limit: i64,
}

/// The output views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Both categories plus skipped records.
    Overview,
    /// One page of ongoing bookings.
    Ongoing,
    /// One page of upcoming bookings.
    Upcoming,
}

/// A source that reads the whole booking document from standard input.
struct StdinSource;

impl BookingSource for StdinSource {
    fn name(&self) -> &str {
        "stdin"
    }

    fn fetch_bookings(&self) -> Result<Value, SourceError> {
        let mut body: String = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;
        parse_document(&body)
    }
}

/// Resolves the reference time for this run.
fn reference_time(now: Option<&str>) -> Result<ReferenceTime, Box<dyn std::error::Error>> {
    match now {
        Some(value) => Ok(parse_reference_time(value)?),
        None => Ok(ReferenceTime::now()),
    }
}

/// Renders the requested view as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the source fails or the output cannot be serialized.
fn render(
    source: &dyn BookingSource,
    reference: &ReferenceTime,
    view: View,
    query: ListQuery,
) -> Result<String, Box<dyn std::error::Error>> {
    debug!("Rendering {:?} view from '{}'", view, source.name());

    let rendered: String = match view {
        View::Overview => {
            let overview: BookingsOverview = load_overview(source, reference)?;
            serde_json::to_string_pretty(&overview)?
        }
        View::Ongoing => {
            let page: PagedResponse<OngoingBooking> = list_ongoing(source, reference, query)?;
            serde_json::to_string_pretty(&page)?
        }
        View::Upcoming => {
            let page: PagedResponse<UpcomingBooking> = list_upcoming(source, reference, query)?;
            serde_json::to_string_pretty(&page)?
        }
    };

    Ok(rendered)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let reference: ReferenceTime = reference_time(args.now.as_deref())?;
    info!("Classifying bookings against {}", reference.instant());

    let source: Box<dyn BookingSource> = if let Some(path) = &args.input {
        info!("Reading bookings from: {}", path.display());
        Box::new(JsonFileSource::new(path))
    } else {
        info!("Reading bookings from standard input");
        Box::new(StdinSource)
    };

    let query: ListQuery = ListQuery {
        page: args.page,
        limit: args.limit,
    };
    let output: String = render(source.as_ref(), &reference, args.view, query)?;
    println!("{output}");

    Ok(())
}

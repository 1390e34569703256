//! Command-line interface.

mod commands;
mod editorial;
mod generate;
mod schedule;

pub use commands::{Cli, Commands, NewsArgs, OutputFormat};
pub use editorial::{handle_check, handle_validate, handle_variants};
pub use generate::{handle_batch, handle_generate, handle_request};
pub use schedule::{handle_calendar, handle_schedule};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use newsroom::{InputError, InputErrorKind, NewsFields, Newsroom, Platform};
use serde::Serialize;
use std::str::FromStr;

/// Result type for command handlers.
pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse one platform name.
fn parse_platform(name: &str) -> Result<Platform, InputError> {
    Platform::from_str(name.trim())
        .map_err(|_| InputError::new(InputErrorKind::UnknownPlatform(name.to_string())))
}

/// Parse a list of platform names, keeping order.
fn parse_platforms(names: &[String]) -> Result<Vec<Platform>, InputError> {
    names.iter().map(|name| parse_platform(name)).collect()
}

/// Sanitize and validate news fields from the command line.
fn news_fields(args: &NewsArgs) -> Result<NewsFields, InputError> {
    NewsFields::new(
        &args.title,
        &args.summary,
        &args.url,
        &args.source,
        args.topics.clone(),
    )
}

/// Reference time for scheduling: RFC 3339, a bare date at midnight in the
/// configured offset, or now.
fn reference_time(raw: Option<&str>, newsroom: &Newsroom) -> Result<DateTime<FixedOffset>, InputError> {
    let Some(raw) = raw else {
        return Ok(newsroom.now());
    };
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        InputError::new(InputErrorKind::Other(format!(
            "'{}' is neither RFC 3339 nor YYYY-MM-DD",
            raw
        )))
    })?;
    date.and_time(NaiveTime::default())
        .and_local_timezone(newsroom.offset())
        .single()
        .ok_or_else(|| {
            InputError::new(InputErrorKind::Other(format!(
                "{} has no single local time",
                raw
            )))
        })
}

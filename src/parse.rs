// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Free-text timestamp parsing.
//!
//! Wraps `dtparse` (the Rust port of python-dateutil's fuzzy parser) and
//! classifies the result as date-only or exact-instant. The distinction
//! matters downstream: a bare date is promoted to local midnight only
//! after the zone is known, and parser output that names an offset makes
//! that offset authoritative.

use crate::error::{Error, Result};
use chrono::{FixedOffset, NaiveDateTime, Timelike};

/// Outcome of parsing one timestamp string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedStamp {
    pub datetime: NaiveDateTime,
    /// UTC offset named in the text, if any.
    pub offset: Option<FixedOffset>,
    /// True when the text carried no time-of-day at all.
    pub date_only: bool,
}

/// Parse a free-text timestamp.
///
/// The parser defaults a missing time-of-day to midnight, so "midnight
/// and the text never spells out a time" is the date-only signal; an
/// explicit `00:00` keeps instant semantics.
pub(crate) fn parse_timestamp(input: &str) -> Result<ParsedStamp> {
    let (datetime, offset) =
        dtparse::parse(input).map_err(|_| Error::UnparseableInput(input.to_owned()))?;

    let midnight =
        datetime.time().num_seconds_from_midnight() == 0 && datetime.nanosecond() == 0;
    let date_only = midnight && !input.contains(':');

    Ok(ParsedStamp { datetime, offset, date_only })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn bare_date_is_date_only() {
        let parsed = parse_timestamp("2024-01-11").unwrap();
        assert!(parsed.date_only);
        assert!(parsed.offset.is_none());
        assert_eq!(
            (parsed.datetime.year(), parsed.datetime.month(), parsed.datetime.day()),
            (2024, 1, 11)
        );
    }

    #[test]
    fn explicit_midnight_is_an_instant() {
        let parsed = parse_timestamp("2024-01-11 00:00").unwrap();
        assert!(!parsed.date_only);
    }

    #[test]
    fn offset_in_text_is_captured() {
        let parsed = parse_timestamp("2024-01-11T06:30:00-05:00").unwrap();
        assert!(!parsed.date_only);
        let offset = parsed.offset.expect("offset");
        assert_eq!(offset.local_minus_utc(), -5 * 3600);
        assert_eq!(parsed.datetime.hour(), 6);
    }

    #[test]
    fn verbose_dates_parse() {
        let parsed = parse_timestamp("July 20, 1969").unwrap();
        assert!(parsed.date_only);
        assert_eq!(parsed.datetime.date().month(), 7);
    }

    #[test]
    fn nonsense_is_rejected() {
        assert!(matches!(
            parse_timestamp("the cow jumped over it"),
            Err(Error::UnparseableInput(_))
        ));
    }
}

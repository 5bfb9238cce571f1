// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Resolving "when and where" from partial user input.
//!
//! [`Resolver::resolve`] turns any combination of free text, an explicit
//! zone, and explicit coordinates into a [`Resolved`] moment. The rules,
//! in priority order:
//!
//! 1. an explicit zone always wins, and suppresses coordinate lookup;
//! 2. a UTC offset written in the text is authoritative for the instant
//!    and becomes the display zone (again no coordinate lookup);
//! 3. otherwise the zone comes from coordinates — given ones, or the
//!    device's own, fetched at most once per call.
//!
//! A bare date stays a [`Moment::Date`] all the way through; it is
//! promoted to local midnight only at the instant-demanding boundary, so
//! the calendar date the user named survives any zone gymnastics.

use crate::error::{Error, Result};
use crate::julian::JulianDay;
use crate::locate::{FindZone, GeoCoordinate, Locate};
use crate::parse::parse_timestamp;
use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// A display/interpretation timezone: IANA-named or a bare UTC offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Zone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    pub const UTC: Zone = Zone::Named(chrono_tz::UTC);

    /// Calendar date of `instant` on this zone's wall clock.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Zone::Named(tz) => instant.with_timezone(tz).date_naive(),
            Zone::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    /// Interpret a wall-clock datetime in this zone.
    ///
    /// Ambiguous local times (fall-back) take the earlier mapping;
    /// skipped ones (spring-forward) roll past the gap.
    pub fn from_local(&self, naive: NaiveDateTime) -> Result<DateTime<Utc>> {
        match self {
            Zone::Named(tz) => resolve_local(tz, naive),
            Zone::Fixed(offset) => resolve_local(offset, naive),
        }
    }

    /// UTC instant of this zone's midnight opening `date`.
    pub fn local_midnight(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        self.from_local(date.and_hms_opt(0, 0, 0).ok_or(Error::OutOfRange)?)
    }
}

fn resolve_local<T: TimeZone>(zone: &T, naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            // Inside a spring-forward gap; the hour after the jump is
            // the first representable wall time.
            match zone.from_local_datetime(&(naive + Duration::hours(1))) {
                LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
                    Ok(instant.with_timezone(&Utc))
                }
                LocalResult::None => Err(Error::OutOfRange),
            }
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => write!(f, "UTC{offset}"),
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(Zone::Named(tz));
        }
        s.parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| Error::UnknownLocation(format!("unrecognized zone {s:?}")))
    }
}

/// A moment that remembers whether the user named a date or an instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Moment {
    /// A calendar date with no time-of-day.
    Date(NaiveDate),
    /// An exact instant.
    Instant(DateTime<Utc>),
}

/// A fully resolved query moment with its governing zone.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolved {
    pub moment: Moment,
    pub zone: Zone,
}

impl Resolved {
    #[inline]
    pub const fn is_date_only(&self) -> bool {
        matches!(self.moment, Moment::Date(_))
    }

    /// The calendar date on this zone's wall clock.
    pub fn local_date(&self) -> NaiveDate {
        match self.moment {
            Moment::Date(date) => date,
            Moment::Instant(instant) => self.zone.local_date(instant),
        }
    }

    /// The moment as a UTC instant; a bare date promotes to local
    /// midnight.
    pub fn instant_utc(&self) -> Result<DateTime<Utc>> {
        match self.moment {
            Moment::Date(date) => self.zone.local_midnight(date),
            Moment::Instant(instant) => Ok(instant),
        }
    }

    /// The moment as a TT Julian Day.
    pub fn julian_day(&self) -> Result<JulianDay> {
        Ok(JulianDay::from_utc(self.instant_utc()?))
    }

    /// The same moment shifted by `days`: whole calendar days for a
    /// date, exact 24-hour steps for an instant.
    pub fn offset_days(&self, days: i64) -> Result<Resolved> {
        let moment = match self.moment {
            Moment::Date(date) => Moment::Date(
                date.checked_add_signed(Duration::days(days)).ok_or(Error::OutOfRange)?,
            ),
            Moment::Instant(instant) => Moment::Instant(
                instant.checked_add_signed(Duration::days(days)).ok_or(Error::OutOfRange)?,
            ),
        };
        Ok(Resolved { moment, zone: self.zone })
    }
}

/// Turns partial user input into a [`Resolved`] moment.
pub struct Resolver<L, F> {
    locator: L,
    zone_finder: F,
}

impl<L: Locate, F: FindZone> Resolver<L, F> {
    pub fn new(locator: L, zone_finder: F) -> Self {
        Self { locator, zone_finder }
    }

    /// Resolve `input` (or "now") against an optional explicit zone and
    /// optional explicit coordinates.
    pub fn resolve(
        &self,
        input: Option<&str>,
        zone: Option<Zone>,
        coordinate: Option<GeoCoordinate>,
    ) -> Result<Resolved> {
        let Some(text) = input else {
            let zone = self.zone_or_lookup(zone, coordinate)?;
            return Ok(Resolved { moment: Moment::Instant(Utc::now()), zone });
        };

        let parsed = parse_timestamp(text)?;
        if parsed.date_only {
            let zone = self.zone_or_lookup(zone, coordinate)?;
            return Ok(Resolved { moment: Moment::Date(parsed.datetime.date()), zone });
        }

        // An offset in the text makes coordinate lookup unnecessary: it
        // pins the instant, and doubles as the display zone unless an
        // explicit zone overrides it.
        let zone = match (zone, parsed.offset) {
            (Some(zone), _) => zone,
            (None, Some(offset)) => Zone::Fixed(offset),
            (None, None) => self.zone_or_lookup(None, coordinate)?,
        };
        let instant = zone.from_local(parsed.datetime)?;
        Ok(Resolved { moment: Moment::Instant(instant), zone })
    }

    fn zone_or_lookup(
        &self,
        zone: Option<Zone>,
        coordinate: Option<GeoCoordinate>,
    ) -> Result<Zone> {
        if let Some(zone) = zone {
            return Ok(zone);
        }
        let coordinate = match coordinate {
            Some(coordinate) => coordinate,
            None => self.locator.locate()?,
        };
        Ok(Zone::Named(self.zone_finder.find_zone(coordinate)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingLocator(Cell<u32>);

    impl Locate for CountingLocator {
        fn locate(&self) -> Result<GeoCoordinate> {
            self.0.set(self.0.get() + 1);
            GeoCoordinate::new(40.7128, -74.0060)
        }
    }

    struct FixedFinder(Tz);

    impl FindZone for FixedFinder {
        fn find_zone(&self, _: GeoCoordinate) -> Result<Tz> {
            Ok(self.0)
        }
    }

    fn resolver() -> (Resolver<CountingLocator, FixedFinder>, fn(&Resolver<CountingLocator, FixedFinder>) -> u32) {
        (
            Resolver::new(CountingLocator(Cell::new(0)), FixedFinder(chrono_tz::America::New_York)),
            |r| r.locator.0.get(),
        )
    }

    #[test]
    fn bare_date_stays_date_only() {
        let (resolver, _) = resolver();
        let resolved = resolver
            .resolve(Some("2024-01-11"), Some(Zone::Named(chrono_tz::Asia::Tokyo)), None)
            .unwrap();
        assert!(resolved.is_date_only());
        assert_eq!(resolved.local_date(), NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
        // Tokyo midnight of Jan 11 is 15:00 UTC on Jan 10 …
        let instant = resolved.instant_utc().unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 1, 10, 15, 0, 0).unwrap());
        // … yet the local date survives the promotion.
        assert_eq!(resolved.zone.local_date(instant), resolved.local_date());
    }

    #[test]
    fn explicit_zone_suppresses_lookup() {
        let (resolver, count) = resolver();
        resolver
            .resolve(Some("2024-06-01 12:00"), Some(Zone::Named(chrono_tz::Europe::Paris)), None)
            .unwrap();
        assert_eq!(count(&resolver), 0);
    }

    #[test]
    fn offset_in_text_suppresses_lookup_and_sets_zone() {
        let (resolver, count) = resolver();
        let resolved = resolver.resolve(Some("2024-01-11T06:30:00-05:00"), None, None).unwrap();
        assert_eq!(count(&resolver), 0);
        assert!(matches!(resolved.zone, Zone::Fixed(offset) if offset.local_minus_utc() == -5 * 3600));
        assert_eq!(
            resolved.instant_utc().unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 11, 11, 30, 0).unwrap()
        );
    }

    #[test]
    fn naive_instant_uses_located_zone() {
        let (resolver, count) = resolver();
        let resolved = resolver.resolve(Some("2024-06-01 12:00"), None, None).unwrap();
        assert_eq!(count(&resolver), 1);
        // New York is UTC−4 in June.
        assert_eq!(
            resolved.instant_utc().unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap()
        );
    }

    #[test]
    fn provided_coordinates_skip_the_locator() {
        let (resolver, count) = resolver();
        let coordinate = GeoCoordinate::new(48.85, 2.35).unwrap();
        resolver.resolve(Some("2024-06-01 12:00"), None, Some(coordinate)).unwrap();
        assert_eq!(count(&resolver), 0);
    }

    #[test]
    fn spring_forward_gap_rolls_past_the_jump() {
        // 2024-03-10 02:30 does not exist in New York.
        let zone = Zone::Named(chrono_tz::America::New_York);
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let instant = zone.from_local(naive).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap());
    }

    #[test]
    fn offset_days_steps_dates_and_instants_differently() {
        let zone = Zone::Named(chrono_tz::America::New_York);

        // A date moves on the calendar.
        let date = Resolved {
            moment: Moment::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()),
            zone,
        };
        assert_eq!(
            date.offset_days(1).unwrap().local_date(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );

        // An instant moves by exact 24-hour steps, even across the
        // spring-forward night.
        let instant = Resolved {
            moment: Moment::Instant(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap()),
            zone,
        };
        assert_eq!(
            instant.offset_days(1).unwrap().instant_utc().unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn zone_parses_names_and_offsets() {
        assert!(matches!("Europe/Madrid".parse::<Zone>(), Ok(Zone::Named(_))));
        assert!(matches!("+09:00".parse::<Zone>(), Ok(Zone::Fixed(_))));
        assert!("Atlantis/Underwater".parse::<Zone>().is_err());
    }
}

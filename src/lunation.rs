// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The phase calendar: principal events around a moment, and the
//! eight-phase classification built on top of them.
//!
//! Phase classification is calendar-aware rather than purely angular:
//! the Moon shows a principal phase on the whole *local calendar date*
//! of the event, and an intermediate phase on every date in between.
//! That is how almanacs talk ("Friday's full moon"), and it makes the
//! answer depend on the observer's zone exactly the way almanacs do.

use crate::ephemeris::{Direction, Ephemeris, EventKind};
use crate::error::{Error, Result};
use crate::julian::JulianDay;
use crate::phase::Phase;
use crate::resolve::{Resolved, Zone};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// The four principal phases, as events with an exact instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LunationKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl LunationKind {
    pub const ALL: [LunationKind; 4] = [
        LunationKind::NewMoon,
        LunationKind::FirstQuarter,
        LunationKind::FullMoon,
        LunationKind::LastQuarter,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            LunationKind::NewMoon => "New Moon",
            LunationKind::FirstQuarter => "First Quarter",
            LunationKind::FullMoon => "Full Moon",
            LunationKind::LastQuarter => "Last Quarter",
        }
    }

    /// The phase shown on the event's own local date.
    pub const fn phase(&self) -> Phase {
        match self {
            LunationKind::NewMoon => Phase::New,
            LunationKind::FirstQuarter => Phase::FirstQuarter,
            LunationKind::FullMoon => Phase::Full,
            LunationKind::LastQuarter => Phase::LastQuarter,
        }
    }

    /// The intermediate phase that fills the run-up to this event.
    pub const fn preceding_intermediate(&self) -> Phase {
        match self {
            LunationKind::NewMoon => Phase::WaningCrescent,
            LunationKind::FirstQuarter => Phase::WaxingCrescent,
            LunationKind::FullMoon => Phase::WaxingGibbous,
            LunationKind::LastQuarter => Phase::WaningGibbous,
        }
    }

    const fn event_kind(&self) -> EventKind {
        match self {
            LunationKind::NewMoon => EventKind::NewMoon,
            LunationKind::FirstQuarter => EventKind::FirstQuarter,
            LunationKind::FullMoon => EventKind::FullMoon,
            LunationKind::LastQuarter => EventKind::LastQuarter,
        }
    }
}

/// A principal phase pinned to its UTC instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LunationEvent {
    pub kind: LunationKind,
    pub instant: DateTime<Utc>,
}

/// The four principal events on each side of a moment, each side sorted
/// by instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lunations {
    pub previous: [LunationEvent; 4],
    pub next: [LunationEvent; 4],
}

/// Phase queries against an [`Ephemeris`].
pub struct PhaseCalendar<E> {
    ephemeris: E,
}

impl<E: Ephemeris> PhaseCalendar<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    fn locate(&self, kind: LunationKind, from: JulianDay, direction: Direction) -> Result<LunationEvent> {
        let instant = self
            .ephemeris
            .event(kind.event_kind(), from, direction)
            .to_utc()
            .ok_or(Error::OutOfRange)?;
        Ok(LunationEvent { kind, instant })
    }

    /// The four principal events at or before the moment, and the four
    /// strictly after it.
    pub fn surrounding(&self, at: &Resolved) -> Result<Lunations> {
        let from = at.julian_day()?;
        let mut previous = [
            self.locate(LunationKind::NewMoon, from, Direction::Previous)?,
            self.locate(LunationKind::FirstQuarter, from, Direction::Previous)?,
            self.locate(LunationKind::FullMoon, from, Direction::Previous)?,
            self.locate(LunationKind::LastQuarter, from, Direction::Previous)?,
        ];
        let mut next = [
            self.locate(LunationKind::NewMoon, from, Direction::Next)?,
            self.locate(LunationKind::FirstQuarter, from, Direction::Next)?,
            self.locate(LunationKind::FullMoon, from, Direction::Next)?,
            self.locate(LunationKind::LastQuarter, from, Direction::Next)?,
        ];
        previous.sort_by_key(|event| event.instant);
        next.sort_by_key(|event| event.instant);
        Ok(Lunations { previous, next })
    }

    /// The next principal event strictly after the moment.
    pub fn next_principal(&self, at: &Resolved) -> Result<LunationEvent> {
        let from = at.julian_day()?;
        let mut best: Option<LunationEvent> = None;
        for kind in LunationKind::ALL {
            let event = self.locate(kind, from, Direction::Next)?;
            if best.map_or(true, |b| event.instant < b.instant) {
                best = Some(event);
            }
        }
        best.ok_or(Error::OutOfRange)
    }

    /// The phase shown at the moment.
    ///
    /// Principal name on the local calendar date of the event itself,
    /// the preceding intermediate phase otherwise.
    pub fn phase_at(&self, at: &Resolved) -> Result<Phase> {
        let next = self.next_principal(at)?;
        if at.zone.local_date(next.instant) == at.local_date() {
            Ok(next.kind.phase())
        } else {
            Ok(next.kind.preceding_intermediate())
        }
    }

    /// All full moons falling in a civil month (0, 1, or 2 of them).
    pub fn full_moons_in_month(
        &self,
        year: i32,
        month: u32,
        zone: Zone,
    ) -> Result<Vec<DateTime<Utc>>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::OutOfRange)?;
        let mut cursor = JulianDay::from_utc(zone.local_midnight(first)?);

        let mut full_moons = Vec::with_capacity(2);
        loop {
            let event = self.locate(LunationKind::FullMoon, cursor, Direction::Next)?;
            let local = zone.local_date(event.instant);
            if (local.year(), local.month()) != (year, month) {
                break;
            }
            full_moons.push(event.instant);
            cursor = JulianDay::from_utc(event.instant);
        }
        Ok(full_moons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Meeus;
    use crate::resolve::Moment;
    use chrono::NaiveDate;

    fn on_date(y: i32, m: u32, d: u32, zone: Zone) -> Resolved {
        Resolved { moment: Moment::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap()), zone }
    }

    #[test]
    fn new_moon_date_shows_new() {
        let calendar = PhaseCalendar::new(Meeus);
        assert_eq!(calendar.phase_at(&on_date(2024, 1, 11, Zone::UTC)).unwrap(), Phase::New);
    }

    #[test]
    fn eve_of_new_moon_is_waning_crescent() {
        let calendar = PhaseCalendar::new(Meeus);
        assert_eq!(
            calendar.phase_at(&on_date(2024, 1, 10, Zone::UTC)).unwrap(),
            Phase::WaningCrescent
        );
    }

    #[test]
    fn run_up_to_full_is_waxing_gibbous() {
        let calendar = PhaseCalendar::new(Meeus);
        assert_eq!(
            calendar.phase_at(&on_date(2024, 1, 20, Zone::UTC)).unwrap(),
            Phase::WaxingGibbous
        );
        assert_eq!(calendar.phase_at(&on_date(2024, 1, 25, Zone::UTC)).unwrap(), Phase::Full);
    }

    #[test]
    fn phase_depends_on_local_calendar() {
        // The 2024-01-11 11:57 UTC new moon lands on Jan 12 in UTC+14,
        // so Jan 11 is still waning crescent there.
        let calendar = PhaseCalendar::new(Meeus);
        let kiritimati = Zone::Named(chrono_tz::Pacific::Kiritimati);
        assert_eq!(
            calendar.phase_at(&on_date(2024, 1, 11, kiritimati)).unwrap(),
            Phase::WaningCrescent
        );
        assert_eq!(calendar.phase_at(&on_date(2024, 1, 12, kiritimati)).unwrap(), Phase::New);
    }

    #[test]
    fn surrounding_brackets_the_moment() {
        let calendar = PhaseCalendar::new(Meeus);
        let at = on_date(2024, 6, 1, Zone::UTC);
        let lunations = calendar.surrounding(&at).unwrap();
        let reference = at.instant_utc().unwrap();

        assert!(lunations.previous.windows(2).all(|w| w[0].instant <= w[1].instant));
        assert!(lunations.next.windows(2).all(|w| w[0].instant <= w[1].instant));
        assert!(lunations.previous.iter().all(|e| e.instant <= reference));
        assert!(lunations.next.iter().all(|e| e.instant > reference));

        // Each side holds one event of each kind.
        for kind in LunationKind::ALL {
            assert_eq!(lunations.previous.iter().filter(|e| e.kind == kind).count(), 1);
            assert_eq!(lunations.next.iter().filter(|e| e.kind == kind).count(), 1);
        }
    }

    #[test]
    fn one_full_moon_in_january_2024() {
        let calendar = PhaseCalendar::new(Meeus);
        let moons = calendar.full_moons_in_month(2024, 1, Zone::UTC).unwrap();
        assert_eq!(moons.len(), 1);
        assert_eq!(moons[0].date_naive(), NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());
    }

    #[test]
    fn two_full_moons_in_august_2023() {
        let calendar = PhaseCalendar::new(Meeus);
        let moons = calendar.full_moons_in_month(2023, 8, Zone::UTC).unwrap();
        assert_eq!(moons.len(), 2);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Farmer's Almanac moon names.
//!
//! Each civil month has a traditional name for its full moon, with two
//! layers of adjustment on top:
//!
//! * **Harvest/Hunter's shift** — "Harvest Moon" is the full moon
//!   nearest the September equinox. Roughly one year in three that moon
//!   falls in October; Harvest then moves to October and Hunter's Moon
//!   to November.
//! * **Seasonal Blue Moon** — when an astronomical season (solstice to
//!   equinox) holds four full moons instead of three, the third is a
//!   "Blue Moon" and displaces that month's name.
//!
//! Names attach to *full moons*; [`SeasonalNamer::name_at`] first rolls
//! an arbitrary moment to the full moon of its cycle (forward while
//! waxing, backward while waning) and then names that.

use crate::ephemeris::{Direction, Ephemeris, EventKind};
use crate::error::{Error, Result};
use crate::julian::JulianDay;
use crate::lunation::PhaseCalendar;
use crate::phase::Phase;
use crate::resolve::{Resolved, Zone};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;

/// A Farmer's Almanac moon name (without the trailing "Moon").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoonName {
    Wolf,
    Snow,
    Worm,
    Pink,
    Flower,
    Strawberry,
    Buck,
    Sturgeon,
    Harvest,
    Hunters,
    Beaver,
    Cold,
    Blue,
}

impl MoonName {
    pub const fn name(&self) -> &'static str {
        match self {
            MoonName::Wolf => "Wolf",
            MoonName::Snow => "Snow",
            MoonName::Worm => "Worm",
            MoonName::Pink => "Pink",
            MoonName::Flower => "Flower",
            MoonName::Strawberry => "Strawberry",
            MoonName::Buck => "Buck",
            MoonName::Sturgeon => "Sturgeon",
            MoonName::Harvest => "Harvest",
            MoonName::Hunters => "Hunter's",
            MoonName::Beaver => "Beaver",
            MoonName::Cold => "Cold",
            MoonName::Blue => "Blue",
        }
    }

    pub const fn emoji(&self) -> &'static str {
        match self {
            MoonName::Wolf => "🐺",
            MoonName::Snow => "☃️",
            MoonName::Worm => "🪱",
            MoonName::Pink => "🌸",
            MoonName::Flower => "🌼",
            MoonName::Strawberry => "🍓",
            MoonName::Buck => "🦌",
            MoonName::Sturgeon => "🐟",
            MoonName::Harvest => "🌾",
            MoonName::Hunters => "🏹",
            MoonName::Beaver => "🦫",
            MoonName::Cold => "🥶",
            MoonName::Blue => "🔵",
        }
    }
}

impl fmt::Display for MoonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assigns almanac names to full moons.
pub struct SeasonalNamer<E> {
    ephemeris: E,
}

impl<E: Ephemeris + Copy> SeasonalNamer<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    /// Name the cycle a moment belongs to: forward to the coming full
    /// moon while waxing, back to the last one while waning.
    pub fn name_at(&self, at: &Resolved) -> Result<MoonName> {
        let phase = PhaseCalendar::new(self.ephemeris).phase_at(at)?;
        let full_moon = match phase {
            Phase::Full => {
                // Search from local midnight so the event on this very
                // date is found whether the moment sits before or after
                // it.
                let midnight = JulianDay::from_utc(self.event_origin(at)?);
                self.full_moon(midnight, Direction::Next)?
            }
            _ if phase.is_waxing() => self.full_moon(at.julian_day()?, Direction::Next)?,
            _ => self.full_moon(at.julian_day()?, Direction::Previous)?,
        };
        self.full_moon_name(full_moon, at.zone)
    }

    fn event_origin(&self, at: &Resolved) -> Result<DateTime<Utc>> {
        at.zone.local_midnight(at.local_date())
    }

    fn full_moon(&self, from: JulianDay, direction: Direction) -> Result<DateTime<Utc>> {
        self.ephemeris
            .event(EventKind::FullMoon, from, direction)
            .to_utc()
            .ok_or(Error::OutOfRange)
    }

    /// Name a specific full moon, judged on its local calendar date.
    pub fn full_moon_name(&self, full_moon: DateTime<Utc>, zone: Zone) -> Result<MoonName> {
        let date = zone.local_date(full_moon);
        let year = date.year();

        if self.is_seasonal_blue(full_moon, zone)? {
            return Ok(MoonName::Blue);
        }

        Ok(match date.month() {
            1 => MoonName::Wolf,
            2 => MoonName::Snow,
            3 => MoonName::Worm,
            4 => MoonName::Pink,
            5 => MoonName::Flower,
            6 => MoonName::Strawberry,
            7 => MoonName::Buck,
            8 => MoonName::Sturgeon,
            9 => MoonName::Harvest,
            10 | 11 => self.autumn_name(year, zone, date.month())?,
            _ => MoonName::Cold,
        })
    }

    /// October and November names depend on which full moon sits nearest
    /// the September equinox.
    fn autumn_name(&self, year: i32, zone: Zone, month: u32) -> Result<MoonName> {
        let equinox = self
            .ephemeris
            .event(EventKind::Equinox, month_start(year, 9)?, Direction::Next);
        let before = self.full_moon(equinox, Direction::Previous)?;
        let after = self.full_moon(equinox, Direction::Next)?;

        let equinox_utc = equinox.to_utc().ok_or(Error::OutOfRange)?;
        let nearest =
            if equinox_utc - before < after - equinox_utc { before } else { after };
        let harvest_in_september = zone.local_date(nearest).month() == 9;

        Ok(match (month, harvest_in_september) {
            (10, true) => MoonName::Hunters,
            (10, false) => MoonName::Harvest,
            (11, false) => MoonName::Hunters,
            _ => MoonName::Beaver,
        })
    }

    /// Whether this full moon is the third of four inside its
    /// astronomical season (solstice/equinox to the next).
    ///
    /// The season boundaries are taken around the full moon itself, so a
    /// four-moon winter straddling the civil year boundary is judged
    /// against its own season on either side of New Year.
    fn is_seasonal_blue(&self, full_moon: DateTime<Utc>, zone: Zone) -> Result<bool> {
        let at = JulianDay::from_utc(full_moon);
        let start = later(
            self.ephemeris.event(EventKind::Equinox, at, Direction::Previous),
            self.ephemeris.event(EventKind::Solstice, at, Direction::Previous),
        );
        let end = earlier(
            self.ephemeris.event(EventKind::Equinox, at, Direction::Next),
            self.ephemeris.event(EventKind::Solstice, at, Direction::Next),
        )
        .to_utc()
        .ok_or(Error::OutOfRange)?;

        let target = zone.local_date(full_moon);
        let mut third = None;
        let mut count = 0;
        let mut cursor = start;
        loop {
            let full = self.full_moon(cursor, Direction::Next)?;
            if full >= end {
                break;
            }
            count += 1;
            if count == 3 {
                third = Some(zone.local_date(full));
            }
            cursor = JulianDay::from_utc(full);
        }
        Ok(count == 4 && third == Some(target))
    }
}

fn later(a: JulianDay, b: JulianDay) -> JulianDay {
    if a > b { a } else { b }
}

fn earlier(a: JulianDay, b: JulianDay) -> JulianDay {
    if a < b { a } else { b }
}

fn month_start(year: i32, month: u32) -> Result<JulianDay> {
    let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::OutOfRange)?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or(Error::OutOfRange)?;
    Ok(JulianDay::from_utc(midnight.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Meeus;
    use crate::resolve::Moment;

    fn namer() -> SeasonalNamer<Meeus> {
        SeasonalNamer::new(Meeus)
    }

    fn full_moon_after(y: i32, m: u32) -> DateTime<Utc> {
        Meeus
            .event(EventKind::FullMoon, month_start(y, m).unwrap(), Direction::Next)
            .to_utc()
            .unwrap()
    }

    fn on_date(y: i32, m: u32, d: u32) -> Resolved {
        Resolved {
            moment: Moment::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            zone: Zone::UTC,
        }
    }

    #[test]
    fn january_full_moon_is_wolf() {
        assert_eq!(
            namer().full_moon_name(full_moon_after(2024, 1), Zone::UTC).unwrap(),
            MoonName::Wolf
        );
    }

    #[test]
    fn harvest_and_hunters_in_a_september_year() {
        // 2024: the Sep 18 full moon sits 4 days before the equinox.
        let namer = namer();
        assert_eq!(
            namer.full_moon_name(full_moon_after(2024, 9), Zone::UTC).unwrap(),
            MoonName::Harvest
        );
        assert_eq!(
            namer.full_moon_name(full_moon_after(2024, 10), Zone::UTC).unwrap(),
            MoonName::Hunters
        );
        assert_eq!(
            namer.full_moon_name(full_moon_after(2024, 11), Zone::UTC).unwrap(),
            MoonName::Beaver
        );
    }

    #[test]
    fn harvest_shifts_to_october_in_2020() {
        // 2020: Sep 2 full moon is 20 days before the equinox, Oct 1
        // only 9 after, so October takes Harvest and November Hunter's.
        let namer = namer();
        assert_eq!(
            namer.full_moon_name(full_moon_after(2020, 10), Zone::UTC).unwrap(),
            MoonName::Harvest
        );
        assert_eq!(
            namer.full_moon_name(full_moon_after(2020, 11), Zone::UTC).unwrap(),
            MoonName::Hunters
        );
    }

    #[test]
    fn third_of_four_summer_moons_is_blue() {
        // Summer 2024 holds Jun 22, Jul 21, Aug 19, and Sep 18.
        let namer = namer();
        assert_eq!(
            namer.full_moon_name(full_moon_after(2024, 8), Zone::UTC).unwrap(),
            MoonName::Blue
        );
        // Its neighbours keep their names.
        assert_eq!(
            namer.full_moon_name(full_moon_after(2024, 7), Zone::UTC).unwrap(),
            MoonName::Buck
        );
        assert_eq!(
            namer.full_moon_name(full_moon_after(2024, 9), Zone::UTC).unwrap(),
            MoonName::Harvest
        );
    }

    #[test]
    fn winter_blue_moon_straddles_the_year_boundary() {
        // Winter 1980–81 holds the Dec 21, Jan 20, Feb 18 and Mar 20
        // full moons; only the third, 1981-02-18, is Blue. February and
        // January moons of neighbouring years keep their own names.
        let namer = namer();
        assert_eq!(
            namer.full_moon_name(full_moon_after(1981, 2), Zone::UTC).unwrap(),
            MoonName::Blue
        );
        assert_eq!(
            namer.full_moon_name(full_moon_after(1981, 1), Zone::UTC).unwrap(),
            MoonName::Wolf
        );
        assert_eq!(
            namer.full_moon_name(full_moon_after(1980, 2), Zone::UTC).unwrap(),
            MoonName::Snow
        );
    }

    #[test]
    fn waning_moment_rolls_back_to_previous_cycle() {
        // 2024-01-01 is waning; its cycle's full moon was Dec 27, 2023.
        assert_eq!(namer().name_at(&on_date(2024, 1, 1)).unwrap(), MoonName::Cold);
    }

    #[test]
    fn waxing_moment_rolls_forward() {
        // 2024-01-20 waxes toward the Jan 25 Wolf Moon.
        assert_eq!(namer().name_at(&on_date(2024, 1, 20)).unwrap(), MoonName::Wolf);
    }

    #[test]
    fn full_moon_date_names_itself() {
        assert_eq!(namer().name_at(&on_date(2024, 8, 19)).unwrap(), MoonName::Blue);
    }
}

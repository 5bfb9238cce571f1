// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The multi-line status report.
//!
//! Nine lines, always in the same order:
//!
//! ```text
//! 🌞🏺 Sun in Aquarius
//! 25 January 2024
//! 🐺🌕🦀 Full Wolf Moon leaves Cancer
//! 15 Shevat 5784
//! 🐦‍⬛🐐 Mercury in Capricorn
//! 💖🐐 Venus in Capricorn
//! 🗡️🐐 Mars in Capricorn
//! ⚡️🐂 Jupiter in Taurus
//! ⏳🐟 Saturn in Pisces
//! ```
//!
//! Date-only moments report ingress/egress movement ("enters" /
//! "leaves"); exact instants always say "in", since sub-day movement
//! judgements would be noise. Any failing sub-computation aborts the
//! whole report rather than emitting a partial one.

use crate::body::Body;
use crate::calendar::{hebrew_date_string, roman_date_string};
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::lunation::PhaseCalendar;
use crate::naming::SeasonalNamer;
use crate::resolve::Resolved;
use crate::zodiac::{Movement, ZodiacEngine};
use tracing::debug;

/// Composes status reports from the domain engines.
pub struct StatusComposer<E> {
    zodiac: ZodiacEngine<E>,
    calendar: PhaseCalendar<E>,
    namer: SeasonalNamer<E>,
}

impl<E: Ephemeris + Copy> StatusComposer<E> {
    pub fn new(ephemeris: E) -> Self {
        Self {
            zodiac: ZodiacEngine::new(ephemeris),
            calendar: PhaseCalendar::new(ephemeris),
            namer: SeasonalNamer::new(ephemeris),
        }
    }

    /// The full nine-line report for a resolved moment.
    pub fn report(&self, at: &Resolved) -> Result<String> {
        debug!(date = %at.local_date(), zone = %at.zone, "composing status report");

        let mut lines = Vec::with_capacity(4 + Body::VISIBLE_PLANETS.len());
        lines.push(self.sun_line(at)?);
        lines.push(roman_date_string(at.local_date()));
        lines.push(self.moon_line(at)?);
        lines.push(hebrew_date_string(at.local_date()));
        for planet in Body::VISIBLE_PLANETS {
            lines.push(self.planet_line(planet, at)?);
        }
        Ok(lines.join("\n"))
    }

    /// `🌞{sign} Sun {verb} {sign}`.
    pub fn sun_line(&self, at: &Resolved) -> Result<String> {
        let sign = self.zodiac.sign_of(Body::Sun, at)?;
        Ok(format!(
            "{}{} Sun {} {}",
            Body::Sun.emoji(),
            sign.animal_emoji(),
            self.movement_verb(Body::Sun, at)?,
            sign
        ))
    }

    /// `{name}{phase}{sign} {Phase} {Name} Moon {verb} {sign}`.
    pub fn moon_line(&self, at: &Resolved) -> Result<String> {
        let phase = self.calendar.phase_at(at)?;
        let name = self.namer.name_at(at)?;
        let sign = self.zodiac.sign_of(Body::Moon, at)?;
        Ok(format!(
            "{}{}{} {} {} Moon {} {}",
            name.emoji(),
            phase.emoji(false),
            sign.animal_emoji(),
            phase,
            name,
            self.movement_verb(Body::Moon, at)?,
            sign
        ))
    }

    /// `{planet}{sign} {Planet} [Retrograde ]{verb} {sign}`.
    pub fn planet_line(&self, planet: Body, at: &Resolved) -> Result<String> {
        let sign = self.zodiac.sign_of(planet, at)?;
        let retrograde = if self.zodiac.is_retrograde(planet, at)? { "Retrograde " } else { "" };
        Ok(format!(
            "{}{} {} {}{} {}",
            planet.emoji(),
            sign.animal_emoji(),
            planet,
            retrograde,
            self.movement_verb(planet, at)?,
            sign
        ))
    }

    fn movement_verb(&self, body: Body, at: &Resolved) -> Result<&'static str> {
        if at.is_date_only() {
            Ok(self.zodiac.movement_of(body, at)?.verb())
        } else {
            Ok(Movement::Steady.verb())
        }
    }
}

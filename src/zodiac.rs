// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tropical zodiac signs, ingress/egress movement, and retrograde state.
//!
//! The tropical zodiac divides the ecliptic into twelve equal 30°
//! buckets starting at the March equinox point (λ = 0° ⇒ Aries). Sign
//! assignment is pure floor bucketing of apparent geocentric ecliptic
//! longitude; no house systems, no sidereal offsets.

use crate::body::Body;
use crate::ephemeris::{equatorial_to_ecliptic_longitude, true_obliquity, Ephemeris};
use crate::error::Result;
use crate::julian::JulianDay;
use crate::resolve::Resolved;
use qtty::Days;
use std::fmt;

/// A tropical zodiac sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    const ORDER: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// The sign containing an ecliptic longitude (any real number of
    /// degrees; normalized to [0, 360) first). Boundaries belong to the
    /// sign they open: 30.0° is already Taurus.
    pub fn from_longitude(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        Self::ORDER[(normalized / 30.0) as usize % 12]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// The playful animal/object emoji set.
    pub const fn animal_emoji(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "🐏",
            ZodiacSign::Taurus => "🐂",
            ZodiacSign::Gemini => "👯",
            ZodiacSign::Cancer => "🦀",
            ZodiacSign::Leo => "🦁",
            ZodiacSign::Virgo => "👰",
            ZodiacSign::Libra => "⚖️",
            ZodiacSign::Scorpio => "🦂",
            ZodiacSign::Sagittarius => "🏹",
            ZodiacSign::Capricorn => "🐐",
            ZodiacSign::Aquarius => "🏺",
            ZodiacSign::Pisces => "🐟",
        }
    }

    /// The astrological glyph set.
    pub const fn symbol_emoji(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈️",
            ZodiacSign::Taurus => "♉️",
            ZodiacSign::Gemini => "♊️",
            ZodiacSign::Cancer => "♋️",
            ZodiacSign::Leo => "♌️",
            ZodiacSign::Virgo => "♍️",
            ZodiacSign::Libra => "♎️",
            ZodiacSign::Scorpio => "♏️",
            ZodiacSign::Sagittarius => "♐️",
            ZodiacSign::Capricorn => "♑️",
            ZodiacSign::Aquarius => "♒️",
            ZodiacSign::Pisces => "♓️",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a body is crossing a sign boundary around a moment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Movement {
    /// Changed sign since yesterday.
    Entering,
    /// Will change sign by tomorrow.
    Leaving,
    /// Same sign yesterday, today, and tomorrow.
    Steady,
}

impl Movement {
    /// The verb used in status lines.
    pub const fn verb(&self) -> &'static str {
        match self {
            Movement::Entering => "enters",
            Movement::Leaving => "leaves",
            Movement::Steady => "in",
        }
    }
}

/// Sign and motion queries against an [`Ephemeris`].
pub struct ZodiacEngine<E> {
    ephemeris: E,
}

impl<E: Ephemeris> ZodiacEngine<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    /// Apparent geocentric ecliptic longitude of `body`, in degrees.
    pub fn longitude_of(&self, body: Body, at: JulianDay) -> f64 {
        let position = self.ephemeris.body_position(body, at);
        equatorial_to_ecliptic_longitude(
            position.right_ascension_deg,
            position.declination_deg,
            true_obliquity(at.julian_centuries()),
        )
    }

    /// The sign `body` occupies at the moment.
    pub fn sign_of(&self, body: Body, at: &Resolved) -> Result<ZodiacSign> {
        Ok(ZodiacSign::from_longitude(self.longitude_of(body, at.julian_day()?)))
    }

    /// Apparent retrograde state, judged on the signed daily longitude
    /// rate over the trailing day.
    ///
    /// The rate is the *shortest* signed arc between the two longitudes,
    /// so a prograde body stepping across 360°→0° is not mistaken for a
    /// retrograde one. The luminaries are always direct.
    pub fn is_retrograde(&self, body: Body, at: &Resolved) -> Result<bool> {
        if !body.can_retrograde() {
            return Ok(false);
        }
        let now = at.julian_day()?;
        let today = self.longitude_of(body, now);
        let yesterday = self.longitude_of(body, now - Days::new(1.0));
        let rate = (today - yesterday + 180.0).rem_euclid(360.0) - 180.0;
        Ok(rate < 0.0)
    }

    /// Ingress/egress state across the three local days around the
    /// moment. A body that enters one sign and exits another on the
    /// same day reports [`Movement::Entering`].
    pub fn movement_of(&self, body: Body, at: &Resolved) -> Result<Movement> {
        let sign = self.sign_of(body, at)?;
        if self.sign_of(body, &at.offset_days(-1)?)? != sign {
            Ok(Movement::Entering)
        } else if self.sign_of(body, &at.offset_days(1)?)? != sign {
            Ok(Movement::Leaving)
        } else {
            Ok(Movement::Steady)
        }
    }
}

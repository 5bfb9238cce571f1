// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Positional astronomy backend.
//!
//! The [`Ephemeris`] trait is the crate's single seam to positional
//! astronomy: callers ask for a body's apparent equatorial coordinates
//! or for the instant of a phase/season event, and never see the series
//! expansions behind the answer. The shipped implementation, [`Meeus`],
//! computes everything from closed-form series (Meeus, *Astronomical
//! Algorithms*, 2nd ed., plus Schlyter's Keplerian scheme for the
//! planets) with no external data files:
//!
//! | Quantity | Source | Accuracy |
//! |----------|--------|----------|
//! | lunar phase instants | ch. 49 k-series | < 1 min (modern era) |
//! | solstices/equinoxes | ch. 27 | < 1 min |
//! | Sun longitude | ch. 25 | ~0.01° |
//! | Moon longitude | ch. 47 (truncated) | ~0.01° |
//! | Mercury–Saturn | Keplerian elements | ~0.1° |
//!
//! All instants are [`JulianDay`] values on the TT axis.

mod events;
mod moon;
mod nutation;
mod planets;
mod sun;

pub(crate) use nutation::{equatorial_to_ecliptic_longitude, true_obliquity};

use crate::body::Body;
use crate::julian::JulianDay;

/// Apparent geocentric equatorial coordinates, both in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Equatorial {
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
}

/// A phase or season event the ephemeris can locate in time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
    /// June or December solstice, whichever is nearest in the search
    /// direction.
    Solstice,
    /// March or September equinox, whichever is nearest in the search
    /// direction.
    Equinox,
}

/// Search direction for [`Ephemeris::event`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Latest event at or before the reference instant.
    Previous,
    /// Earliest event strictly after the reference instant.
    Next,
}

/// Positional astronomy provider.
///
/// Implementations must be pure functions of their arguments; the phase
/// calendar and naming layers call them repeatedly while walking event
/// sequences.
pub trait Ephemeris {
    /// Apparent geocentric equatorial position of `body` at `at`.
    fn body_position(&self, body: Body, at: JulianDay) -> Equatorial;

    /// The instant of the previous/next occurrence of `kind` relative
    /// to `from`.
    fn event(&self, kind: EventKind, from: JulianDay, direction: Direction) -> JulianDay;
}

impl<T: Ephemeris + ?Sized> Ephemeris for &T {
    fn body_position(&self, body: Body, at: JulianDay) -> Equatorial {
        (**self).body_position(body, at)
    }

    fn event(&self, kind: EventKind, from: JulianDay, direction: Direction) -> JulianDay {
        (**self).event(kind, from, direction)
    }
}

/// The built-in series-expansion ephemeris.
#[derive(Debug, Default, Copy, Clone)]
pub struct Meeus;

impl Ephemeris for Meeus {
    fn body_position(&self, body: Body, at: JulianDay) -> Equatorial {
        let (longitude, latitude) = match body {
            Body::Sun => (sun::geometric_longitude(at), 0.0),
            Body::Moon => moon::geocentric_position(at),
            planet => planets::geocentric_position(planet, at),
        };
        let obliquity = nutation::true_obliquity(at.julian_centuries());
        let (right_ascension_deg, declination_deg) =
            nutation::ecliptic_to_equatorial(longitude, latitude, obliquity);
        Equatorial { right_ascension_deg, declination_deg }
    }

    fn event(&self, kind: EventKind, from: JulianDay, direction: Direction) -> JulianDay {
        match kind {
            EventKind::NewMoon => events::search_phase(0.0, from, direction),
            EventKind::FirstQuarter => events::search_phase(0.25, from, direction),
            EventKind::FullMoon => events::search_phase(0.5, from, direction),
            EventKind::LastQuarter => events::search_phase(0.75, from, direction),
            EventKind::Solstice => events::search_season(true, from, direction),
            EventKind::Equinox => events::search_season(false, from, direction),
        }
    }
}

// ── degree trigonometry helpers shared by the series modules ──────────────

#[inline]
pub(crate) fn sin_d(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

#[inline]
pub(crate) fn cos_d(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Reduce an angle to [0, 360).
#[inline]
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

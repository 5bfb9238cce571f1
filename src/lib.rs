// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moonwise
//!
//! Lunar phases, Farmer's Almanac moon names, tropical zodiac signs and
//! retrograde state for any instant and place, computed entirely from
//! closed-form series (no ephemeris data files).
//!
//! # Core types
//!
//! - [`Resolver`] — turns free-form timestamps and coordinates into a
//!   [`Resolved`] moment-plus-[`Zone`] pair.
//! - [`Ephemeris`] — seam to positional astronomy; [`Meeus`] is the
//!   shipped implementation.
//! - [`PhaseCalendar`] — the eight-[`Phase`] cycle around a moment.
//! - [`SeasonalNamer`] — almanac [`MoonName`]s, Harvest/Hunter's shift
//!   and seasonal Blue Moon included.
//! - [`ZodiacEngine`] — [`ZodiacSign`] bucketing, sign [`Movement`] and
//!   retrograde detection for every [`Body`].
//! - [`StatusComposer`] — the nine-line status report.
//!
//! # Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | [`Resolver`] | text, coordinates | [`Resolved`] |
//! | [`PhaseCalendar`] | [`Resolved`] | [`Phase`], [`Lunations`] |
//! | [`SeasonalNamer`] | [`Resolved`] | [`MoonName`] |
//! | [`ZodiacEngine`] | [`Body`], [`Resolved`] | [`ZodiacSign`], [`Movement`] |
//! | [`StatusComposer`] | [`Resolved`] | report text |
//!
//! # Quick start
//!
//! ```no_run
//! use moonwise::{Meeus, Resolver, StatusComposer, IpLocator, TzFinder};
//!
//! # fn main() -> moonwise::Result<()> {
//! let resolver = Resolver::new(IpLocator::new(), TzFinder::new());
//! let moment = resolver.resolve(Some("2024-01-25"), None, None)?;
//! println!("{}", StatusComposer::new(Meeus).report(&moment)?);
//! # Ok(())
//! # }
//! ```

mod body;
mod calendar;
mod ephemeris;
mod error;
mod julian;
mod locate;
mod lunation;
mod naming;
mod parse;
mod phase;
mod resolve;
mod status;
mod zodiac;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use body::Body;
pub use calendar::{hebrew_date_string, roman_date_string, HebrewDate};
pub use ephemeris::{Direction, Ephemeris, Equatorial, EventKind, Meeus};
pub use error::{Error, Result};
pub use julian::JulianDay;
pub use locate::{FindZone, GeoCoordinate, IpLocator, Locate, TzFinder};
pub use lunation::{LunationEvent, LunationKind, Lunations, PhaseCalendar};
pub use naming::{MoonName, SeasonalNamer};
pub use phase::Phase;
pub use resolve::{Moment, Resolved, Resolver, Zone};
pub use status::StatusComposer;
pub use zodiac::{Movement, ZodiacEngine, ZodiacSign};

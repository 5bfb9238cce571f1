// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day instants on the TT axis.
//!
//! [`JulianDay`] is the single time currency of the ephemeris layer: a
//! continuous day count on the **Terrestrial Time** axis, stored as a
//! [`Days`] quantity.  Civil timestamps enter and leave through
//! [`JulianDay::from_utc`] / [`JulianDay::to_utc`], which apply and invert
//! the epoch-dependent **ΔT = TT − UT** correction automatically, so the
//! phase/season solvers never see a timezone or a leap-second convention.
//!
//! ΔT follows the piecewise model of *Meeus, Astronomical Algorithms*
//! (2nd ed.), ch. 9: a biennial table for 1620–1992, decade interpolation
//! for 1992–2010, polynomial fits outside, quadratic extrapolation after
//! 2010.  Typical uncertainty is well under a second for modern dates.

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Second, Seconds, Simplify};
use std::ops::{Add, Sub};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// A point in time as a Julian Day number on the TT axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay(Days);

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
    pub const J2000: Self = Self(Days::new(2_451_545.0));

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// The underlying day count.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The underlying day count as a scalar.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Julian centuries since J2000.0 (the `T` of most ephemeris series).
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        ((*self - Self::J2000) / Self::JULIAN_CENTURY).simplify().value()
    }

    /// Approximate calendar year, good enough to seed event searches.
    #[inline]
    pub(crate) fn approximate_year(&self) -> f64 {
        2000.0 + ((*self - Self::J2000) / Self::JULIAN_YEAR).simplify().value()
    }

    /// Build a TT instant from a civil UTC timestamp, applying ΔT.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(
            datetime.timestamp() as f64 + datetime.timestamp_subsec_nanos() as f64 / 1e9,
        );
        let jd_ut = UNIX_EPOCH_JD + seconds.to::<Day>();
        Self(jd_ut + delta_t(jd_ut).to::<Day>())
    }

    /// Convert back to a civil UTC timestamp, inverting ΔT.
    ///
    /// Returns `None` if the instant falls outside chrono's representable
    /// range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        // Solve ut + ΔT(ut)/86400 = tt by fixed point; dΔT/dJD is tiny,
        // so three iterations give sub-microsecond agreement.
        let mut jd_ut = self.0;
        for _ in 0..3 {
            jd_ut = self.0 - delta_t(jd_ut).to::<Day>();
        }
        let seconds_since_epoch = (jd_ut - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }
}

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Days {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD(TT) {}", self.0)
    }
}

// ── ΔT model ──────────────────────────────────────────────────────────────

/// Number of tabulated biennial terms (1620–1992).
const TERMS: usize = 187;

/// Biennial ΔT table from 1620 to 1992 (seconds), compiled by J. Meeus.
#[rustfmt::skip]
const DELTA_T_TABLE: [Seconds; TERMS] = qtty::qtty_vec!(
    Seconds;
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
);

#[inline]
fn ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

/// ΔT = TT − UT in seconds for a Julian Day on the **UT** axis.
pub(crate) fn delta_t(jd_ut: Days) -> Seconds {
    const JD_948: Days = Days::new(2_067_314.5);
    const JD_1600: Days = Days::new(2_305_447.5);
    const JD_1992: Days = Days::new(2_448_622.5);
    const JD_2010: Days = Days::new(2_455_197.5);

    if jd_ut < JD_948 {
        // Stephenson & Houlden (1986), quadratic in centuries from 948 CE.
        let c = ratio(jd_ut - JD_948, JulianDay::JULIAN_CENTURY);
        Seconds::new(1_830.0) + Seconds::new(-405.0) * c + Seconds::new(46.5) * c * c
    } else if jd_ut < JD_1600 {
        // Second Stephenson & Houlden polynomial, centuries from 1850.
        const JD_1850: Days = Days::new(2_396_758.5);
        let c = ratio(jd_ut - JD_1850, JulianDay::JULIAN_CENTURY);
        Seconds::new(22.5) * c * c
    } else if jd_ut < JD_1992 {
        // Bicubic interpolation in the biennial table.
        const TABLE_START_1620: Days = Days::new(2_312_752.5);
        const BIENNIAL_STEP: Days = Days::new(730.5);
        let mut i = ratio(jd_ut - TABLE_START_1620, BIENNIAL_STEP) as usize;
        if i > TERMS - 3 {
            i = TERMS - 3;
        }
        let a = DELTA_T_TABLE[i + 1] - DELTA_T_TABLE[i];
        let b = DELTA_T_TABLE[i + 2] - DELTA_T_TABLE[i + 1];
        let c = a - b;
        let n = ratio(jd_ut - (TABLE_START_1620 + BIENNIAL_STEP * i as f64), BIENNIAL_STEP);
        DELTA_T_TABLE[i + 1] + n / 2.0 * (a + b + n * c)
    } else if jd_ut <= JD_2010 {
        // Interpolation over Meeus's estimates for 1990/2000/2010.
        const DT: [Seconds; 3] = [Seconds::new(56.86), Seconds::new(63.83), Seconds::new(70.0)];
        const JD_2000: Days = Days::new(2_451_544.5);
        const DECADE: Days = Days::new(3_652.5);
        let a = DT[1] - DT[0];
        let b = DT[2] - DT[1];
        let c = b - a;
        let n = ratio(jd_ut - JD_2000, DECADE);
        DT[1] + n / 2.0 * (a + b + n * c)
    } else {
        // Extrapolation via Meeus eq. (9.1).
        const JD_1810: Days = Days::new(2_382_148.0);
        let t = ratio(jd_ut - JD_1810, Days::new(1.0));
        Seconds::new(-15.0) + Seconds::new((t * t) / 41_048_480.0)
    }
}

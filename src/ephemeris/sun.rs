// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar geometric longitude (Meeus ch. 25, low-accuracy series).

use super::{normalize_degrees, sin_d};
use crate::julian::JulianDay;

/// Geometric ecliptic longitude of the Sun in degrees.
///
/// Mean longitude plus the equation of center; ~0.01° accuracy, two
/// orders of magnitude finer than a zodiac sign boundary.
pub(crate) fn geometric_longitude(at: JulianDay) -> f64 {
    let t = at.julian_centuries();

    let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let mean_anomaly = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;

    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * sin_d(mean_anomaly)
        + (0.019_993 - 0.000_101 * t) * sin_d(2.0 * mean_anomaly)
        + 0.000_289 * sin_d(3.0 * mean_anomaly);

    normalize_degrees(mean_longitude + center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn lon(y: i32, mo: u32, d: u32) -> f64 {
        geometric_longitude(JulianDay::from_utc(
            Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn early_april_is_aries() {
        let l = lon(2024, 4, 1);
        assert!((l - 12.26).abs() < 0.1, "λ = {l}");
    }

    #[test]
    fn mid_july_is_cancer() {
        let l = lon(2024, 7, 10);
        assert!((l - 108.73).abs() < 0.1, "λ = {l}");
    }

    #[test]
    fn taurus_ingress_on_april_20() {
        // 2024 Taurus ingress falls on April 19/20; by noon on the 20th
        // the Sun is just past 30°.
        let l = lon(2024, 4, 20);
        assert!((30.0..31.5).contains(&l), "λ = {l}");
        assert!(lon(2024, 4, 19) < 30.0);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants of principal lunar phases and of solstices/equinoxes.
//!
//! Phases come from the Meeus ch. 49 lunation series: integer `k` counts
//! lunations from the 2000-01-06 new moon, and fractional offsets 0.25,
//! 0.5, 0.75 select first quarter, full, and last quarter. Seasons come
//! from the ch. 27 year polynomials plus the 24-term periodic table.
//! Everything is on the TT axis.

use super::{cos_d, sin_d, Direction};
use crate::julian::JulianDay;

/// Mean lunations per Julian year.
const LUNATIONS_PER_YEAR: f64 = 12.368_5;

/// TT instant of lunation `k` (fractional part selects the phase).
pub(crate) fn phase_instant(k: f64) -> JulianDay {
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = 2_451_550.097_66 + 29.530_588_861 * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let sun_anomaly = 2.553_4 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let moon_anomaly = 201.564_3 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let latitude_argument = 160.710_8 + 390.670_502_84 * k - 0.001_611_8 * t2
        - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let node = 124.774_6 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let fraction = k.rem_euclid(1.0);
    let is_syzygy = fraction < 1e-9 || (fraction - 0.5).abs() < 1e-9;

    let mut correction = if is_syzygy {
        syzygy_correction(fraction < 1e-9, e, sun_anomaly, moon_anomaly, latitude_argument, node)
    } else {
        let quarter =
            quarter_correction(e, sun_anomaly, moon_anomaly, latitude_argument, node);
        // W shifts first quarter later and last quarter earlier.
        let w = 0.003_06 - 0.000_38 * e * cos_d(sun_anomaly) + 0.000_26 * cos_d(moon_anomaly)
            - 0.000_02 * cos_d(moon_anomaly - sun_anomaly)
            + 0.000_02 * cos_d(moon_anomaly + sun_anomaly)
            + 0.000_02 * cos_d(2.0 * latitude_argument);
        if (fraction - 0.25).abs() < 1e-9 {
            quarter + w
        } else {
            quarter - w
        }
    };
    correction += planetary_correction(k, t);

    JulianDay::new(mean + correction)
}

/// Periodic corrections for new and full moon (table 49.A).
fn syzygy_correction(new_moon: bool, e: f64, m: f64, mp: f64, f: f64, omega: f64) -> f64 {
    let (c0, c1) = if new_moon { (-0.407_20, 0.172_41) } else { (-0.406_14, 0.173_02) };
    c0 * sin_d(mp)
        + c1 * e * sin_d(m)
        + 0.016_08 * sin_d(2.0 * mp)
        + 0.010_39 * sin_d(2.0 * f)
        + 0.007_39 * e * sin_d(mp - m)
        - 0.005_14 * e * sin_d(mp + m)
        + 0.002_08 * e * e * sin_d(2.0 * m)
        - 0.001_11 * sin_d(mp - 2.0 * f)
        - 0.000_57 * sin_d(mp + 2.0 * f)
        + 0.000_56 * e * sin_d(2.0 * mp + m)
        - 0.000_42 * sin_d(3.0 * mp)
        + 0.000_42 * e * sin_d(m + 2.0 * f)
        + 0.000_38 * e * sin_d(m - 2.0 * f)
        - 0.000_24 * e * sin_d(2.0 * mp - m)
        - 0.000_17 * sin_d(omega)
        - 0.000_07 * sin_d(mp + 2.0 * m)
        + 0.000_04 * sin_d(2.0 * mp - 2.0 * f)
        + 0.000_04 * sin_d(3.0 * m)
        + 0.000_03 * sin_d(mp + m - 2.0 * f)
        + 0.000_03 * sin_d(2.0 * mp + 2.0 * f)
        - 0.000_03 * sin_d(mp + m + 2.0 * f)
        + 0.000_03 * sin_d(mp - m + 2.0 * f)
        - 0.000_02 * sin_d(mp - m - 2.0 * f)
        - 0.000_02 * sin_d(3.0 * mp + m)
        + 0.000_02 * sin_d(4.0 * mp)
}

/// Periodic corrections for the quarters (table 49.B).
fn quarter_correction(e: f64, m: f64, mp: f64, f: f64, omega: f64) -> f64 {
    -0.628_01 * sin_d(mp)
        + 0.171_72 * e * sin_d(m)
        - 0.011_83 * e * sin_d(mp + m)
        + 0.008_62 * sin_d(2.0 * mp)
        + 0.008_04 * sin_d(2.0 * f)
        + 0.004_54 * e * sin_d(mp - m)
        + 0.002_04 * e * e * sin_d(2.0 * m)
        - 0.001_80 * sin_d(mp - 2.0 * f)
        - 0.000_70 * sin_d(mp + 2.0 * f)
        - 0.000_40 * sin_d(3.0 * mp)
        - 0.000_34 * e * sin_d(2.0 * mp - m)
        + 0.000_32 * e * sin_d(m + 2.0 * f)
        + 0.000_32 * e * sin_d(m - 2.0 * f)
        - 0.000_28 * e * e * sin_d(mp + 2.0 * m)
        + 0.000_27 * e * sin_d(2.0 * mp + m)
        - 0.000_17 * sin_d(omega)
        - 0.000_05 * sin_d(mp - m - 2.0 * f)
        + 0.000_04 * sin_d(2.0 * mp + 2.0 * f)
        - 0.000_04 * sin_d(mp + m + 2.0 * f)
        + 0.000_04 * sin_d(mp - 2.0 * m)
        + 0.000_03 * sin_d(mp + m - 2.0 * f)
        + 0.000_03 * sin_d(3.0 * m)
        + 0.000_02 * sin_d(2.0 * mp - 2.0 * f)
        + 0.000_02 * sin_d(mp - m + 2.0 * f)
        - 0.000_02 * sin_d(3.0 * mp + m)
}

/// The fourteen planetary argument terms common to all phases.
fn planetary_correction(k: f64, t: f64) -> f64 {
    #[rustfmt::skip]
    let arguments = [
        (0.000_325, 299.77 + 0.107_408 * k - 0.009_173 * t * t),
        (0.000_165, 251.88 + 0.016_321 * k),
        (0.000_164, 251.83 + 26.651_886 * k),
        (0.000_126, 349.42 + 36.412_478 * k),
        (0.000_110, 84.66 + 18.206_239 * k),
        (0.000_062, 141.74 + 53.303_771 * k),
        (0.000_060, 207.14 + 2.453_732 * k),
        (0.000_056, 154.84 + 7.306_860 * k),
        (0.000_047, 34.52 + 27.261_239 * k),
        (0.000_042, 207.19 + 0.121_824 * k),
        (0.000_040, 291.34 + 1.844_379 * k),
        (0.000_037, 161.72 + 24.198_154 * k),
        (0.000_035, 239.56 + 25.513_099 * k),
        (0.000_023, 331.55 + 3.592_518 * k),
    ];
    arguments.iter().map(|&(amplitude, angle)| amplitude * sin_d(angle)).sum()
}

/// Locate the phase with fractional offset `fraction` relative to `from`.
pub(crate) fn search_phase(fraction: f64, from: JulianDay, direction: Direction) -> JulianDay {
    let estimate = (from.approximate_year() - 2000.0) * LUNATIONS_PER_YEAR;
    let mut k = estimate.floor() + fraction - 3.0;
    while phase_instant(k) > from {
        k -= 1.0;
    }
    // phase_instant(k) ≤ from < phase_instant(k + n) for some n ≥ 1.
    while phase_instant(k + 1.0) <= from {
        k += 1.0;
    }
    match direction {
        Direction::Previous => phase_instant(k),
        Direction::Next => phase_instant(k + 1.0),
    }
}

/// The four cardinal points of the tropical year, in calendar order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SeasonPoint {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

/// Cosine table shared by all four season polynomials (table 27.C).
#[rustfmt::skip]
const SEASON_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1_934.136), (203.0, 337.23, 32_964.467), (199.0, 342.08, 20.186),
    (182.0, 27.85, 445_267.112), (156.0, 73.14, 45_036.886), (136.0, 171.52, 22_518.443),
    (77.0, 222.54, 65_928.934), (74.0, 296.72, 3_034.906), (70.0, 243.58, 9_037.513),
    (58.0, 119.81, 33_718.147), (52.0, 297.17, 150.678), (50.0, 21.02, 2_281.226),
    (45.0, 247.54, 29_929.562), (44.0, 325.15, 31_555.956), (29.0, 60.93, 4_443.417),
    (18.0, 155.12, 67_555.328), (17.0, 288.79, 4_562.452), (16.0, 198.04, 62_894.029),
    (14.0, 199.76, 31_436.921), (12.0, 95.39, 14_577.848), (12.0, 287.11, 31_931.756),
    (12.0, 320.81, 34_777.259), (9.0, 227.73, 1_222.114), (8.0, 15.45, 16_859.074),
];

/// TT instant of a cardinal point in a given year (valid 1000–3000 CE).
fn season_instant(year: i32, point: SeasonPoint) -> JulianDay {
    let y = (year as f64 - 2000.0) / 1000.0;
    let (a0, a1, a2, a3, a4) = match point {
        SeasonPoint::MarchEquinox => (2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57),
        SeasonPoint::JuneSolstice => (2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30),
        SeasonPoint::SeptemberEquinox => (2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78),
        SeasonPoint::DecemberSolstice => (2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32),
    };
    let jde0 = a0 + a1 * y + a2 * y * y + a3 * y * y * y + a4 * y * y * y * y;

    let t = (jde0 - 2_451_545.0) / 36_525.0;
    let w = 35_999.373 * t - 2.47;
    let delta_lambda = 1.0 + 0.033_4 * cos_d(w) + 0.000_7 * cos_d(2.0 * w);
    let periodic: f64 =
        SEASON_TERMS.iter().map(|&(a, b, c)| a * cos_d(b + c * t)).sum();

    JulianDay::new(jde0 + 0.000_01 * periodic / delta_lambda)
}

/// Locate the nearest solstice (`solstices = true`) or equinox relative
/// to `from`.
pub(crate) fn search_season(solstices: bool, from: JulianDay, direction: Direction) -> JulianDay {
    let points = if solstices {
        [SeasonPoint::JuneSolstice, SeasonPoint::DecemberSolstice]
    } else {
        [SeasonPoint::MarchEquinox, SeasonPoint::SeptemberEquinox]
    };

    let year = from.approximate_year().floor() as i32;
    let mut candidates = Vec::with_capacity(6);
    for y in year - 1..=year + 1 {
        for point in points {
            candidates.push(season_instant(y, point));
        }
    }
    candidates.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    match direction {
        // Half a year of margin on each side makes both lookups total.
        Direction::Previous => {
            let mut best = candidates[0];
            for candidate in candidates {
                if candidate <= from {
                    best = candidate;
                }
            }
            best
        }
        Direction::Next => {
            for candidate in &candidates {
                if *candidate > from {
                    return *candidate;
                }
            }
            *candidates.last().unwrap_or(&from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use qtty::Days;

    const TWO_MINUTES: Days = Days::new(2.0 / 1_440.0);

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> JulianDay {
        JulianDay::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn new_moon_of_january_2024() {
        let instant = search_phase(0.0, utc(2024, 1, 1, 0, 0), Direction::Next);
        assert!((instant - utc(2024, 1, 11, 11, 57)).abs() < TWO_MINUTES);
    }

    #[test]
    fn full_moon_of_january_2024() {
        let instant = search_phase(0.5, utc(2024, 1, 1, 0, 0), Direction::Next);
        assert!((instant - utc(2024, 1, 25, 17, 54)).abs() < TWO_MINUTES);
    }

    #[test]
    fn seasons_of_2024() {
        let anchor = utc(2024, 1, 15, 0, 0);
        let march = search_season(false, anchor, Direction::Next);
        assert!((march - utc(2024, 3, 20, 3, 6)).abs() < TWO_MINUTES);
        let june = search_season(true, anchor, Direction::Next);
        assert!((june - utc(2024, 6, 20, 20, 50)).abs() < TWO_MINUTES);
        let september = search_season(false, march + Days::new(1.0), Direction::Next);
        assert!((september - utc(2024, 9, 22, 12, 43)).abs() < TWO_MINUTES);
        let december = search_season(true, june + Days::new(1.0), Direction::Next);
        assert!((december - utc(2024, 12, 21, 9, 20)).abs() < TWO_MINUTES);
    }

    #[test]
    fn season_search_crosses_the_year_boundary() {
        let december = search_season(true, utc(2024, 10, 1, 0, 0), Direction::Next);
        assert!((december - utc(2024, 12, 21, 9, 20)).abs() < TWO_MINUTES);
        let march = search_season(false, december, Direction::Next);
        assert!((march - utc(2025, 3, 20, 9, 1)).abs() < TWO_MINUTES);
    }

    #[test]
    fn summer_2024_has_four_full_moons() {
        let june = search_season(true, utc(2024, 1, 15, 0, 0), Direction::Next);
        let september = search_season(false, utc(2024, 4, 15, 0, 0), Direction::Next);
        let mut count = 0;
        let mut cursor = june;
        loop {
            let full = search_phase(0.5, cursor, Direction::Next);
            if full > september {
                break;
            }
            count += 1;
            cursor = full;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn previous_quarter_search_is_inclusive() {
        let exact = search_phase(0.25, utc(2024, 3, 1, 0, 0), Direction::Next);
        assert_eq!(search_phase(0.25, exact, Direction::Previous), exact);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar geocentric position (Meeus ch. 47, truncated ELP-2000/82).
//!
//! The longitude series keeps the 50 largest periodic terms plus the
//! Venus/Jupiter/flattening additives, good to ~0.01°; the latitude
//! series keeps the 20 largest terms (~0.01°). Sign resolution needs
//! three orders of magnitude less.

use super::{normalize_degrees, sin_d};
use crate::julian::JulianDay;

/// (D, M, M′, F, coefficient ×10⁻⁶ deg) rows of table 47.A.
#[rustfmt::skip]
const LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 50] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618), (0, 1, 0, 0, -185_116), (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793), (2, -1, -1, 0, 57_066), (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758), (0, 1, -1, 0, -40_923), (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383), (2, 0, 0, -2, 15_327), (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980), (4, 0, -1, 0, 10_675), (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548), (2, 1, -1, 0, -7_888), (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163), (1, 1, 0, 0, 4_987), (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994), (4, 0, 0, 0, 3_861), (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689), (2, 0, -1, 2, -2_602), (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348), (2, -2, 0, 0, 2_236), (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069), (2, -2, -1, 0, 2_048), (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595), (4, -1, -1, 0, 1_215), (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892), (2, 1, 1, 0, -810), (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713), (2, 2, -1, 0, -700), (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596), (4, 0, 1, 0, 549), (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520), (1, 0, -2, 0, -487),
];

/// (D, M, M′, F, coefficient ×10⁻⁶ deg) rows of table 47.B.
#[rustfmt::skip]
const LATITUDE_TERMS: [(i8, i8, i8, i8, i32); 20] = [
    (0, 0, 0, 1, 5_128_122), (0, 0, 1, 1, 280_602), (0, 0, 1, -1, 277_693),
    (2, 0, 0, -1, 173_237), (2, 0, -1, 1, 55_413), (2, 0, -1, -1, 46_271),
    (2, 0, 0, 1, 32_573), (0, 0, 2, 1, 17_198), (2, 0, 1, -1, 9_266),
    (0, 0, 2, -1, 8_822), (2, -1, 0, -1, 8_216), (2, 0, -2, -1, 4_324),
    (2, 0, 1, 1, 4_200), (2, 1, 0, -1, -3_359), (2, -1, -1, 1, 2_463),
    (2, -1, 0, 1, 2_211), (2, -1, -1, -1, 2_065), (0, 1, -1, -1, -1_870),
    (4, 0, -1, -1, 1_828), (0, 1, 0, 1, -1_794),
];

/// Fundamental arguments at `t` Julian centuries from J2000.0.
struct Arguments {
    mean_longitude: f64,
    elongation: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    latitude_argument: f64,
    eccentricity: f64,
}

fn arguments(t: f64) -> Arguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    Arguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0,
        elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
            + t3 / 545_868.0
            - t4 / 113_065_000.0,
        sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
            - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
        eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
    }
}

fn sum_series(terms: &[(i8, i8, i8, i8, i32)], args: &Arguments) -> f64 {
    terms
        .iter()
        .map(|&(d, m, mp, f, coefficient)| {
            let angle = d as f64 * args.elongation
                + m as f64 * args.sun_anomaly
                + mp as f64 * args.moon_anomaly
                + f as f64 * args.latitude_argument;
            // Terms involving the Sun's anomaly decay with Earth's
            // eccentricity.
            let scale = args.eccentricity.powi(m.unsigned_abs() as i32);
            coefficient as f64 * scale * sin_d(angle)
        })
        .sum()
}

/// Geocentric ecliptic (longitude, latitude) of the Moon in degrees.
pub(crate) fn geocentric_position(at: JulianDay) -> (f64, f64) {
    let t = at.julian_centuries();
    let args = arguments(t);

    // Additive arguments: Venus (A1), Jupiter (A2), Earth flattening (A3).
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;

    let mut sigma_l = sum_series(&LONGITUDE_TERMS, &args);
    sigma_l += 3_958.0 * sin_d(a1)
        + 1_962.0 * sin_d(args.mean_longitude - args.latitude_argument)
        + 318.0 * sin_d(a2);

    let mut sigma_b = sum_series(&LATITUDE_TERMS, &args);
    sigma_b += -2_235.0 * sin_d(args.mean_longitude)
        + 382.0 * sin_d(a3)
        + 175.0 * sin_d(a1 - args.latitude_argument)
        + 175.0 * sin_d(a1 + args.latitude_argument)
        + 127.0 * sin_d(args.mean_longitude - args.moon_anomaly)
        - 115.0 * sin_d(args.mean_longitude + args.moon_anomaly);

    let longitude = normalize_degrees(args.mean_longitude + sigma_l / 1e6);
    let latitude = sigma_b / 1e6;
    (longitude, latitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: λ = 133.162655°, β = −3.229126°.
        let at = JulianDay::new(2_448_724.5);
        let (lon, lat) = geocentric_position(at);
        assert!((lon - 133.162_655).abs() < 0.01, "λ = {lon}");
        assert!((lat + 3.229_126).abs() < 0.02, "β = {lat}");
    }

    #[test]
    fn sign_flips_between_virgo_neighbours() {
        // 2024-01-01 00:00 UT the Moon sits at ~155.98° (Virgo); a day
        // earlier it was still in Leo.
        let at = JulianDay::from_utc(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let (lon, _) = geocentric_position(at);
        assert!((150.0..180.0).contains(&lon), "λ = {lon}");
        let (day_before, _) = geocentric_position(at - qtty::Days::new(1.0));
        assert!((120.0..150.0).contains(&day_before), "λ = {day_before}");
    }

    #[test]
    fn latitude_stays_within_orbital_bounds() {
        // The Moon never strays past ±5.3° of the ecliptic.
        for i in 0..60 {
            let at = JulianDay::J2000 + qtty::Days::new(i as f64 * 11.0);
            let (_, lat) = geocentric_position(at);
            assert!(lat.abs() < 5.4, "β = {lat} at {at}");
        }
    }
}
